//! Input models for MCP tool parameters.
//!
//! Argument names follow the tool schemas (snake_case).

use serde::{Deserialize, Serialize};

use crate::config::api;

/// Input for `list_pdfs_in_folder` (no arguments).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPdfsInput {}

/// Input for `extract_pdf_from_folder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractPdfInput {
    /// File name inside the configured folder (e.g. "paper.pdf").
    pub filename: String,
}

/// Input for `search_semantic_scholar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    /// Search query string.
    pub query: String,

    /// Number of results to return.
    #[serde(default = "default_num_results")]
    pub num_results: u32,
}

fn default_num_results() -> u32 {
    api::DEFAULT_SEARCH_RESULTS
}

/// Input for `get_semantic_scholar_paper_details` and
/// `get_semantic_scholar_citations_and_references`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperIdInput {
    /// Semantic Scholar ID, DOI (`DOI:...`) or arXiv ID (`ARXIV:...`).
    pub paper_id: String,
}

/// Input for `get_semantic_scholar_author_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorIdInput {
    /// Semantic Scholar author ID.
    pub author_id: String,
}
