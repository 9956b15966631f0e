//! Academic graph provider: Semantic Scholar search and detail lookups.

use crate::client::SemanticScholarClient;
use crate::config::{api, fields};
use crate::error::{ClientError, ToolError, ToolResult};
use crate::models::{
    AuthorRecord, CitationReferenceBundle, EntryErrorPolicy, Entry, PaperRecord,
};
use crate::normalize::{self, normalize_entries};
use crate::pool::WorkerPool;

/// Search and lookups against the Graph API.
///
/// Each call holds one worker-pool slot for all of its upstream requests.
#[derive(Debug, Clone)]
pub struct ScholarProvider {
    client: SemanticScholarClient,
    pool: WorkerPool,
    policy: EntryErrorPolicy,
    citation_limit: u32,
}

impl ScholarProvider {
    /// Create the provider around a shared client.
    #[must_use]
    pub fn new(
        client: SemanticScholarClient,
        pool: WorkerPool,
        policy: EntryErrorPolicy,
        citation_limit: u32,
    ) -> Self {
        Self { client, pool, policy, citation_limit }
    }

    /// Search papers, returning at most `limit` entries.
    pub async fn search(&self, query: &str, limit: u32) -> ToolResult<Vec<Entry<PaperRecord>>> {
        tracing::info!(query, limit, "Searching for papers");

        if query.trim().is_empty() {
            return Err(ToolError::validation("query", "cannot be empty"));
        }
        if limit == 0 || limit > api::MAX_SEARCH_RESULTS {
            return Err(ToolError::validation(
                "num_results",
                format!("must be between 1 and {}", api::MAX_SEARCH_RESULTS),
            ));
        }

        let page =
            self.pool.run(self.client.search_papers(query, limit, fields::PAPER)).await??;

        let mut entries = normalize_entries(page.data, self.policy, normalize::paper_entry)?;
        entries.truncate(limit as usize);
        Ok(entries)
    }

    /// Details of one paper.
    pub async fn get_paper_details(&self, paper_id: &str) -> ToolResult<PaperRecord> {
        tracing::info!(paper_id, "Fetching paper details");
        require_id("paper_id", paper_id)?;

        let paper = self.pool.run(self.client.get_paper(paper_id, fields::PAPER)).await??;
        Ok(normalize::normalize_paper(paper))
    }

    /// Details of one author.
    pub async fn get_author_details(&self, author_id: &str) -> ToolResult<AuthorRecord> {
        tracing::info!(author_id, "Fetching author details");
        require_id("author_id", author_id)?;

        let author = self.pool.run(self.client.get_author(author_id, fields::AUTHOR)).await??;
        Ok(normalize::normalize_author(author))
    }

    /// Papers citing and cited by one paper.
    ///
    /// The paper itself is fetched first so an unknown ID fails the whole
    /// call rather than yielding two empty lists.
    pub async fn get_citations_and_references(
        &self,
        paper_id: &str,
    ) -> ToolResult<CitationReferenceBundle> {
        tracing::info!(paper_id, "Fetching citations and references");
        require_id("paper_id", paper_id)?;

        let client = &self.client;
        let limit = self.citation_limit;
        let (citations, references) = self
            .pool
            .run(async move {
                client.get_paper(paper_id, &["paperId"]).await?;
                let citations = client.get_citations(paper_id, limit, fields::CITATION).await?;
                let references = client.get_references(paper_id, limit, fields::CITATION).await?;
                Ok::<_, ClientError>((citations, references))
            })
            .await??;

        Ok(CitationReferenceBundle {
            citations: normalize_entries(citations.data, self.policy, normalize::citation_entry)?,
            references: normalize_entries(
                references.data,
                self.policy,
                normalize::citation_entry,
            )?,
        })
    }
}

fn require_id(field: &str, id: &str) -> ToolResult<()> {
    if id.trim().is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(())
}
