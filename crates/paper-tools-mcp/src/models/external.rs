//! Shapes of the objects the Semantic Scholar Graph API returns.
//!
//! Any field may be absent or `null` depending on the requested `fields`
//! and on what the upstream knows about the entity, so everything is
//! optional here. Defaults are applied by [`crate::normalize`], never here.

use serde::{Deserialize, Serialize};

/// A paper as returned by `/paper/{id}` or inside search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalPaper {
    /// Semantic Scholar paper ID.
    pub paper_id: Option<String>,

    /// Paper title.
    pub title: Option<String>,

    /// Paper abstract.
    pub r#abstract: Option<String>,

    /// Publication year.
    pub year: Option<i32>,

    /// Authors in byline order.
    pub authors: Option<Vec<ExternalAuthorRef>>,

    /// Semantic Scholar page URL.
    pub url: Option<String>,

    /// Publication venue.
    pub venue: Option<String>,

    /// Publication types (e.g. "JournalArticle", "Review").
    pub publication_types: Option<Vec<String>>,

    /// Number of citations received.
    pub citation_count: Option<i64>,
}

/// Author as embedded in a paper's author list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalAuthorRef {
    /// Author ID.
    pub author_id: Option<String>,

    /// Author name.
    pub name: Option<String>,
}

/// An author as returned by `/author/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalAuthor {
    /// Author ID.
    pub author_id: Option<String>,

    /// Author name.
    pub name: Option<String>,

    /// Semantic Scholar profile URL.
    pub url: Option<String>,

    /// Institutional affiliations.
    pub affiliations: Option<Vec<String>>,

    /// Total papers.
    pub paper_count: Option<i64>,

    /// Total citations.
    pub citation_count: Option<i64>,

    /// h-index.
    pub h_index: Option<i64>,
}

/// One page of `/paper/search`.
///
/// Entries stay as raw JSON so one malformed paper cannot fail the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    /// Total number of matching papers.
    pub total: i64,

    /// Offset of this page.
    pub offset: i64,

    /// Offset of the next page, if any.
    pub next: Option<i64>,

    /// Raw paper objects.
    pub data: Vec<serde_json::Value>,
}

/// One page of `/paper/{id}/citations` or `/paper/{id}/references`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationPage {
    /// Offset of this page.
    pub offset: i64,

    /// Offset of the next page, if any.
    pub next: Option<i64>,

    /// Raw citation edges.
    pub data: Vec<serde_json::Value>,
}

/// A citation edge: the other paper sits under `citingPaper` or `citedPaper`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// The citing (for citations) or cited (for references) paper.
    #[serde(default, alias = "citingPaper", alias = "citedPaper")]
    pub paper: Option<ExternalPaper>,
}
