//! PDF folder tools: list_pdfs_in_folder, extract_pdf_from_folder.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::models::{ExtractPdfInput, ListPdfsInput};

/// Folder listing tool.
pub struct ListPdfsInFolderTool;

#[async_trait::async_trait]
impl McpTool for ListPdfsInFolderTool {
    fn name(&self) -> &'static str {
        "list_pdfs_in_folder"
    }

    fn description(&self) -> &'static str {
        "List all PDF files in the configured folder. Returns a JSON array of file names."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let _params: ListPdfsInput = if input.is_null() {
            ListPdfsInput::default()
        } else {
            serde_json::from_value(input)?
        };

        let names = ctx.pdf.list_pdfs().await?;
        Ok(serde_json::to_string_pretty(&names)?)
    }
}

/// Text extraction tool.
pub struct ExtractPdfFromFolderTool;

#[async_trait::async_trait]
impl McpTool for ExtractPdfFromFolderTool {
    fn name(&self) -> &'static str {
        "extract_pdf_from_folder"
    }

    fn description(&self) -> &'static str {
        "Extract the text of a PDF in the configured folder. Pages are returned \
         in order, separated by newlines. Use list_pdfs_in_folder to find file names."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "filename": {
                    "type": "string",
                    "description": "PDF file name inside the folder (e.g. \"paper.pdf\")"
                }
            },
            "required": ["filename"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ExtractPdfInput = serde_json::from_value(input)?;

        match ctx.pdf.extract_text(&params.filename).await {
            Ok(text) => Ok(text),
            Err(ToolError::Pdf(err)) if err.is_recoverable() => {
                tracing::warn!(filename = %params.filename, error = %err, "PDF not available");
                Ok(ToolError::Pdf(err).to_user_message())
            }
            Err(err) => Err(err),
        }
    }
}
