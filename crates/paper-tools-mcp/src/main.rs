//! Paper Tools MCP Server - Entry Point
//!
//! Provides both stdio (for desktop hosts) and HTTP transports.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_tools_mcp::{
    config::{Config, api},
    models::EntryErrorPolicy,
    server::McpServer,
    tools::ToolContext,
};

#[derive(Parser, Debug)]
#[command(name = "paper-tools-mcp")]
#[command(about = "MCP server for local PDF extraction and Semantic Scholar lookups")]
#[command(version)]
struct Cli {
    /// Folder whose PDFs the PDF tools serve
    #[arg(long, env = "PDF_FOLDER")]
    pdf_folder: PathBuf,

    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = api::REQUEST_TIMEOUT.as_secs(), env = "REQUEST_TIMEOUT")]
    request_timeout: u64,

    /// Provider calls allowed to run at once
    #[arg(long, default_value_t = api::WORKERS, env = "WORKERS")]
    workers: usize,

    /// Provider calls allowed to wait before new calls are rejected
    #[arg(long, default_value_t = api::QUEUE_CAPACITY, env = "QUEUE_CAPACITY")]
    queue_capacity: usize,

    /// What to do with malformed entries in result lists
    #[arg(long, value_enum, default_value = "skip", env = "ENTRY_ERRORS")]
    entry_errors: EntryErrorPolicy,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// Streamable HTTP
    Http,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            request_timeout: Duration::from_secs(self.request_timeout),
            workers: self.workers,
            queue_capacity: self.queue_capacity,
            entry_policy: self.entry_errors,
            ..Config::new(self.pdf_folder, self.api_key)
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout belongs to the stdio transport
    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let transport = cli.transport;
    let port = cli.port;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?transport,
        "Starting paper tools MCP server"
    );

    let config = cli.into_config();
    if !config.pdf_folder.is_dir() {
        tracing::warn!(
            folder = %config.pdf_folder.display(),
            "PDF folder does not exist; PDF tools will fail until it is created"
        );
    }

    let ctx = ToolContext::new(&config)?;
    let server = McpServer::new(ctx);

    match transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port, "Running in HTTP mode");
            server.run_http(port).await?;
        }
    }

    Ok(())
}
