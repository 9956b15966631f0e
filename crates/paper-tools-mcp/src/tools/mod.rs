//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses its arguments
//! 2. Calls a provider
//! 3. Renders the result as the text the host receives, flattening
//!    recoverable failures into error values instead of faults

mod pdf;
mod scholar;

pub use pdf::*;
pub use scholar::*;

use crate::client::SemanticScholarClient;
use crate::config::Config;
use crate::error::ToolResult;
use crate::pool::WorkerPool;
use crate::providers::{PdfFolder, PdfFolderProvider, ScholarProvider};

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// PDF folder provider.
    pub pdf: PdfFolderProvider,

    /// Semantic Scholar provider.
    pub scholar: ScholarProvider,
}

impl ToolContext {
    /// Build both providers from configuration, sharing one worker pool.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let pool = WorkerPool::new(config.workers, config.queue_capacity);
        let client = SemanticScholarClient::new(config)?;

        Ok(Self {
            pdf: PdfFolderProvider::new(PdfFolder::new(&config.pdf_folder), pool.clone()),
            scholar: ScholarProvider::new(
                client,
                pool,
                config.entry_policy,
                config.citation_limit,
            ),
        })
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "list_pdfs_in_folder").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // PDF folder tools (2)
        Box::new(pdf::ListPdfsInFolderTool),
        Box::new(pdf::ExtractPdfFromFolderTool),
        // Semantic Scholar tools (4)
        Box::new(scholar::SearchSemanticScholarTool),
        Box::new(scholar::PaperDetailsTool),
        Box::new(scholar::AuthorDetailsTool),
        Box::new(scholar::CitationsAndReferencesTool),
    ]
}
