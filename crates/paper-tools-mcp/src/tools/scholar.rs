//! Semantic Scholar tools: search, paper details, author details,
//! citations and references.
//!
//! Every provider failure is returned as an `{"error": ...}` value so the
//! host sees a normal result; only malformed arguments become faults.

use serde::Serialize;
use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::api;
use crate::error::ToolResult;
use crate::models::{
    AuthorIdInput, CitationReferenceBundle, ErrorRecord, PaperIdInput, SearchInput,
};

fn render<T: Serialize>(value: &T) -> ToolResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Paper search tool.
pub struct SearchSemanticScholarTool;

#[async_trait::async_trait]
impl McpTool for SearchSemanticScholarTool {
    fn name(&self) -> &'static str {
        "search_semantic_scholar"
    }

    fn description(&self) -> &'static str {
        "Search for papers on Semantic Scholar using a query string. Returns a list \
         of papers with title, abstract, year, authors, venue and citation count."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "num_results": {
                    "type": "integer",
                    "default": api::DEFAULT_SEARCH_RESULTS,
                    "minimum": 1,
                    "maximum": api::MAX_SEARCH_RESULTS,
                    "description": "Number of results to return"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchInput = serde_json::from_value(input)?;

        match ctx.scholar.search(&params.query, params.num_results).await {
            Ok(entries) => render(&entries),
            Err(e) => {
                tracing::error!(error = %e, "Search error");
                render(&[ErrorRecord::new(format!(
                    "An error occurred while searching: {}",
                    e.to_user_message()
                ))])
            }
        }
    }
}

/// Paper details tool.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "get_semantic_scholar_paper_details"
    }

    fn description(&self) -> &'static str {
        "Get details of a specific paper on Semantic Scholar. Accepts a Semantic \
         Scholar ID, a DOI (DOI:...) or an arXiv ID (ARXIV:...)."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "ID of the paper (Semantic Scholar ID, DOI, or ArXiv ID)"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;

        match ctx.scholar.get_paper_details(&params.paper_id).await {
            Ok(paper) => render(&paper),
            Err(e) => {
                tracing::error!(paper_id = %params.paper_id, error = %e, "Paper details error");
                render(&ErrorRecord::new(format!(
                    "An error occurred while fetching paper details: {}",
                    e.to_user_message()
                )))
            }
        }
    }
}

/// Author details tool.
pub struct AuthorDetailsTool;

#[async_trait::async_trait]
impl McpTool for AuthorDetailsTool {
    fn name(&self) -> &'static str {
        "get_semantic_scholar_author_details"
    }

    fn description(&self) -> &'static str {
        "Get details of a specific author on Semantic Scholar: name, affiliations, \
         paper count, citation count and h-index."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "author_id": {
                    "type": "string",
                    "description": "Semantic Scholar author ID"
                }
            },
            "required": ["author_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorIdInput = serde_json::from_value(input)?;

        match ctx.scholar.get_author_details(&params.author_id).await {
            Ok(author) => render(&author),
            Err(e) => {
                tracing::error!(author_id = %params.author_id, error = %e, "Author details error");
                render(&ErrorRecord::new(format!(
                    "An error occurred while fetching author details: {}",
                    e.to_user_message()
                )))
            }
        }
    }
}

/// Citations and references tool.
pub struct CitationsAndReferencesTool;

#[async_trait::async_trait]
impl McpTool for CitationsAndReferencesTool {
    fn name(&self) -> &'static str {
        "get_semantic_scholar_citations_and_references"
    }

    fn description(&self) -> &'static str {
        "Get citations and references for a specific paper on Semantic Scholar. \
         Each entry carries paperId, title, year and authors."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "description": "ID of the paper"
                }
            },
            "required": ["paper_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperIdInput = serde_json::from_value(input)?;

        match ctx.scholar.get_citations_and_references(&params.paper_id).await {
            Ok(bundle) => render(&bundle),
            Err(e) => {
                tracing::error!(paper_id = %params.paper_id, error = %e, "Citations/references error");
                render(&CitationReferenceBundle::failed(format!(
                    "An error occurred while fetching citations and references: {}",
                    e.to_user_message()
                )))
            }
        }
    }
}
