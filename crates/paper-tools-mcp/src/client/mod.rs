//! Semantic Scholar Graph API client.
//!
//! Thin async wrapper over reqwest with a fixed request timeout and
//! connection pooling. No retries, caching or rate limiting: a failed call
//! surfaces as a [`ClientError`] for the caller to report.

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{CitationPage, ExternalAuthor, ExternalPaper, SearchPage};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<SearchPage> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get a single paper by ID (S2 ID, `DOI:...`, `ARXIV:...`, ...).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<ExternalPaper> {
        let url = format!("{}/paper/{}", self.graph_api_url, encode_id(paper_id));
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get an author by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<ExternalAuthor> {
        let url = format!("{}/author/{}", self.graph_api_url, encode_id(author_id));
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get papers citing a paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_citations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationPage> {
        let url = format!("{}/paper/{}/citations", self.graph_api_url, encode_id(paper_id));

        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get papers a paper cites.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_references(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationPage> {
        let url = format!("{}/paper/{}/references", self.graph_api_url, encode_id(paper_id));

        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, ?params, "GET");

        let response = self.client.get(url).query(params).send().await?;

        let response = Self::handle_response(url, response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        url: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(format!("{url} {}", text.trim())))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

/// Percent-encode an ID for a URL path segment, keeping `/` and `:` so
/// `DOI:10.1145/...` and `ARXIV:...` IDs reach the upstream as written.
fn encode_id(id: &str) -> String {
    urlencoding::encode(id).replace("%2F", "/").replace("%3A", ":")
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug_hides_api_key() {
        let config = Config::new("/tmp", Some("super-secret-key".to_string()));
        let client = SemanticScholarClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret-key"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[test]
    fn test_encode_id_escapes_query_and_fragment() {
        assert_eq!(encode_id("abc?x=1"), "abc%3Fx%3D1");
        assert_eq!(encode_id("a#b"), "a%23b");
        assert_eq!(encode_id("100%"), "100%25");
    }

    #[test]
    fn test_encode_id_keeps_external_id_syntax() {
        assert_eq!(encode_id("DOI:10.1145/3292500.3330701"), "DOI:10.1145/3292500.3330701");
        assert_eq!(encode_id("ARXIV:1706.03762"), "ARXIV:1706.03762");
        assert_eq!(encode_id("649def34f8be52c8b66281af98ae884c09aef38b"), "649def34f8be52c8b66281af98ae884c09aef38b");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = Config {
            graph_api_url: "http://localhost:1/graph/v1/".to_string(),
            ..Config::new("/tmp", None)
        };
        let client = SemanticScholarClient::new(&config).unwrap();
        assert_eq!(client.graph_api_url, "http://localhost:1/graph/v1");
    }
}
