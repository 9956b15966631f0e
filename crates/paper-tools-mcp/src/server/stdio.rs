//! Stdio transport for MCP protocol.
//!
//! Handles JSON-RPC 2.0 over stdin/stdout, one message per line. Each
//! request runs as its own task, so a slow tool call never holds up the
//! requests read after it; responses are written in completion order by a
//! single writer.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::McpServer;
use super::transport::{JsonRpcRequest, JsonRpcResponse, error_codes};

/// Handle MCP protocol over the process's stdin/stdout.
pub async fn run_stdio(server: Arc<McpServer>) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = tokio::io::stdout();

    tracing::info!("MCP stdio server ready, waiting for requests...");
    serve(server, reader, writer).await
}

/// Serve line-delimited JSON-RPC from `reader` to `writer`.
///
/// Returns once input reaches EOF and every request read before it has
/// been answered.
pub async fn serve<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::try_join!(read_requests(server, reader, tx), write_responses(rx, writer))?;
    Ok(())
}

/// Read lines until EOF, dispatching each request on its own task.
async fn read_requests<R>(
    server: Arc<McpServer>,
    mut reader: R,
    tx: mpsc::UnboundedSender<JsonRpcResponse>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // EOF
            tracing::info!("Input closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => {
                let server = Arc::clone(&server);
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = server.handle_request(request).await {
                        // Receiver only closes when the writer has failed
                        let _ = tx.send(response);
                    }
                });
            }
            Err(e) => {
                let _ = tx.send(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        }
    }

    Ok(())
}

/// Write responses one line at a time until every sender is gone.
async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
    mut writer: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let response_json = serde_json::to_string(&response)?;
        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
