//! Paper Tools MCP Server
//!
//! A Model Context Protocol (MCP) server giving LLM agents two sets of
//! research tools: text extraction from a local folder of PDFs, and
//! paper/author lookups against the Semantic Scholar Graph API.
//!
//! # Features
//!
//! - **6 MCP Tools**: folder listing, PDF text extraction, paper search,
//!   paper details, author details, citations and references
//! - **Normalized output**: every record carries every key, with defaults
//!   for whatever the upstream left out
//! - **Errors as values**: recoverable failures come back as `{"error": ...}`
//!   results instead of protocol faults
//! - **Bounded**: all provider calls go through a fixed-size worker pool
//!   that rejects work once its queue is full
//!
//! # Example
//!
//! ```no_run
//! use paper_tools_mcp::{config::Config, server::McpServer, tools::ToolContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(ToolContext::new(&config)?);
//!     server.run_stdio().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pool;
pub mod providers;
pub mod server;
pub mod tools;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, PdfError, PoolError, ToolError};
