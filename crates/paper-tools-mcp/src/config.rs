//! Configuration for the paper tools MCP server.

use std::path::PathBuf;
use std::time::Duration;

use crate::models::EntryErrorPolicy;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout for every upstream call.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// Default number of tool results for `search_semantic_scholar`.
    pub const DEFAULT_SEARCH_RESULTS: u32 = 5;

    /// Largest `limit` the search endpoint accepts.
    pub const MAX_SEARCH_RESULTS: u32 = 100;

    /// Cap on citations and references fetched per paper (API maximum).
    pub const CITATION_LIMIT: u32 = 1000;

    /// Provider calls allowed to run at once.
    pub const WORKERS: usize = 8;

    /// Provider calls allowed to wait for a worker before being rejected.
    pub const QUEUE_CAPACITY: usize = 64;
}

/// Field sets requested from the Graph API.
pub mod fields {
    /// Fields backing a `PaperRecord`.
    pub const PAPER: &[&str] = &[
        "paperId",
        "title",
        "abstract",
        "year",
        "authors",
        "url",
        "venue",
        "publicationTypes",
        "citationCount",
    ];

    /// Fields backing a citation or reference entry.
    pub const CITATION: &[&str] = &["paperId", "title", "year", "authors"];

    /// Fields backing an `AuthorRecord`.
    pub const AUTHOR: &[&str] =
        &["authorId", "name", "url", "affiliations", "paperCount", "citationCount", "hIndex"];
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folder served by the PDF tools.
    pub pdf_folder: PathBuf,

    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Citations/references fetched per paper.
    pub citation_limit: u32,

    /// Worker pool size.
    pub workers: usize,

    /// Worker pool queue capacity.
    pub queue_capacity: usize,

    /// What to do with list entries that fail to normalize.
    pub entry_policy: EntryErrorPolicy,
}

impl Config {
    /// Create a new configuration for the given PDF folder.
    #[must_use]
    pub fn new(pdf_folder: impl Into<PathBuf>, api_key: Option<String>) -> Self {
        Self {
            pdf_folder: pdf_folder.into(),
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            citation_limit: api::CITATION_LIMIT,
            workers: api::WORKERS,
            queue_capacity: api::QUEUE_CAPACITY,
            entry_policy: EntryErrorPolicy::default(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str, pdf_folder: impl Into<PathBuf>) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            citation_limit: 100,
            workers: 4,
            queue_capacity: 16,
            ..Self::new(pdf_folder, None)
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads a `.env` file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns error if `PDF_FOLDER` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let pdf_folder = std::env::var("PDF_FOLDER")
            .map_err(|_| anyhow::anyhow!("PDF_FOLDER must be set to the folder of PDFs to serve"))?;
        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok();
        Ok(Self::new(pdf_folder, api_key))
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("/tmp/papers", None);
        assert!(!config.has_api_key());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.pdf_folder, PathBuf::from("/tmp/papers"));
        assert_eq!(config.entry_policy, EntryErrorPolicy::Skip);
    }

    #[test]
    fn test_config_for_testing_rewrites_url() {
        let config = Config::for_testing("http://127.0.0.1:9999", "/tmp/papers");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert!(config.workers > 0);
    }

    #[test]
    fn test_fields() {
        assert!(fields::PAPER.contains(&"publicationTypes"));
        assert!(fields::CITATION.contains(&"authors"));
        assert!(!fields::CITATION.contains(&"abstract"));
        assert!(fields::AUTHOR.contains(&"hIndex"));
    }
}
