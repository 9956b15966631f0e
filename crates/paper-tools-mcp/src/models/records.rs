//! Normalized records returned by the tools.
//!
//! Every key is always serialized; optional values come out as `null`.

use serde::{Deserialize, Serialize};

/// Minimal author identity inside a paper record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author name ("Unknown" when upstream has none).
    pub name: String,

    /// Author ID.
    pub author_id: Option<String>,
}

/// A normalized paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    /// Semantic Scholar paper ID.
    pub paper_id: Option<String>,

    /// Title ("Unknown" when upstream has none).
    pub title: String,

    /// Abstract.
    pub r#abstract: Option<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// Authors in byline order.
    pub authors: Vec<AuthorRef>,

    /// Semantic Scholar page URL.
    pub url: Option<String>,

    /// Publication venue.
    pub venue: Option<String>,

    /// Publication types.
    pub publication_types: Vec<String>,

    /// Citation count (0 when unknown).
    pub citation_count: i64,
}

/// A normalized author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    /// Author ID.
    pub author_id: Option<String>,

    /// Name ("Unknown" when upstream has none).
    pub name: String,

    /// Profile URL.
    pub url: Option<String>,

    /// Affiliations.
    pub affiliations: Vec<String>,

    /// Paper count.
    pub paper_count: i64,

    /// Citation count.
    pub citation_count: i64,

    /// h-index.
    pub h_index: i64,
}

/// The subset of a paper kept in citation and reference lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEntry {
    /// Paper ID.
    pub paper_id: Option<String>,

    /// Title ("Unknown" when upstream has none).
    pub title: String,

    /// Publication year.
    pub year: Option<i32>,

    /// Authors.
    pub authors: Vec<AuthorRef>,
}

/// Value-encoded error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable failure.
    pub error: String,
}

impl ErrorRecord {
    /// Create an error record.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// A list element: either a normalized record or, under the collect
/// policy, the error that replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    /// Normalized record.
    Record(T),
    /// Failure in the record's place.
    Error(ErrorRecord),
}

impl<T> Entry<T> {
    /// The record, if this entry holds one.
    #[must_use]
    pub const fn record(&self) -> Option<&T> {
        match self {
            Self::Record(record) => Some(record),
            Self::Error(_) => None,
        }
    }

    /// Whether this entry is an error marker.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Citations and references of one paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationReferenceBundle {
    /// Papers citing the paper.
    pub citations: Vec<Entry<CitationEntry>>,

    /// Papers the paper cites.
    pub references: Vec<Entry<CitationEntry>>,
}

impl CitationReferenceBundle {
    /// The shape returned when the lookup fails outright: the error sits
    /// in `citations` and `references` is empty.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { citations: vec![Entry::Error(ErrorRecord::new(error))], references: Vec::new() }
    }
}
