//! Field normalizer: upstream shapes in, fully keyed records out.
//!
//! | field              | default     |
//! |--------------------|-------------|
//! | `title`, `name`    | `"Unknown"` |
//! | lists              | empty       |
//! | counts, `hIndex`   | `0`         |
//! | everything else    | `null`      |

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ToolError, ToolResult};
use crate::models::{
    AuthorRecord, AuthorRef, CitationEdge, CitationEntry, EntryErrorPolicy, Entry, ErrorRecord,
    ExternalAuthor, ExternalAuthorRef, ExternalPaper, PaperRecord,
};

/// Placeholder for a missing title or name.
pub const UNKNOWN: &str = "Unknown";

/// Normalize a paper.
#[must_use]
pub fn normalize_paper(paper: ExternalPaper) -> PaperRecord {
    PaperRecord {
        paper_id: paper.paper_id,
        title: paper.title.unwrap_or_else(|| UNKNOWN.to_string()),
        r#abstract: paper.r#abstract,
        year: paper.year,
        authors: normalize_author_refs(paper.authors),
        url: paper.url,
        venue: paper.venue,
        publication_types: paper.publication_types.unwrap_or_default(),
        citation_count: paper.citation_count.unwrap_or(0),
    }
}

/// Normalize an author.
#[must_use]
pub fn normalize_author(author: ExternalAuthor) -> AuthorRecord {
    AuthorRecord {
        author_id: author.author_id,
        name: author.name.unwrap_or_else(|| UNKNOWN.to_string()),
        url: author.url,
        affiliations: author.affiliations.unwrap_or_default(),
        paper_count: author.paper_count.unwrap_or(0),
        citation_count: author.citation_count.unwrap_or(0),
        h_index: author.h_index.unwrap_or(0),
    }
}

/// Normalize the paper subset kept in citation lists.
#[must_use]
pub fn normalize_citation(paper: ExternalPaper) -> CitationEntry {
    CitationEntry {
        paper_id: paper.paper_id,
        title: paper.title.unwrap_or_else(|| UNKNOWN.to_string()),
        year: paper.year,
        authors: normalize_author_refs(paper.authors),
    }
}

fn normalize_author_refs(authors: Option<Vec<ExternalAuthorRef>>) -> Vec<AuthorRef> {
    authors
        .unwrap_or_default()
        .into_iter()
        .map(|a| AuthorRef {
            name: a.name.unwrap_or_else(|| UNKNOWN.to_string()),
            author_id: a.author_id,
        })
        .collect()
}

/// Decode one raw search result.
pub fn paper_entry(value: Value) -> Result<PaperRecord, String> {
    decode::<ExternalPaper>(value).map(normalize_paper)
}

/// Decode one raw citation edge (`citingPaper` / `citedPaper`).
pub fn citation_entry(value: Value) -> Result<CitationEntry, String> {
    let edge = decode::<CitationEdge>(value)?;
    edge.paper.map(normalize_citation).ok_or_else(|| "citation edge has no paper".to_string())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

/// Normalize every entry of an upstream list, applying `policy` to entries
/// that fail.
///
/// # Errors
///
/// Returns [`ToolError::Normalize`] for the first failing entry under
/// [`EntryErrorPolicy::Abort`]; never errors otherwise.
pub fn normalize_entries<T, F>(
    values: Vec<Value>,
    policy: EntryErrorPolicy,
    mut normalize: F,
) -> ToolResult<Vec<Entry<T>>>
where
    F: FnMut(Value) -> Result<T, String>,
{
    let mut entries = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        match normalize(value) {
            Ok(record) => entries.push(Entry::Record(record)),
            Err(message) => match policy {
                EntryErrorPolicy::Skip => {
                    tracing::debug!(index, error = %message, "Skipping malformed entry");
                }
                EntryErrorPolicy::Collect => {
                    entries.push(Entry::Error(ErrorRecord::new(format!(
                        "entry {index} could not be normalized: {message}"
                    ))));
                }
                EntryErrorPolicy::Abort => {
                    return Err(ToolError::Normalize { index, message });
                }
            },
        }
    }

    Ok(entries)
}
