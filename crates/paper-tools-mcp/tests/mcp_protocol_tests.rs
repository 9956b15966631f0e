//! Tests for MCP protocol JSON-RPC handling.
//!
//! These tests drive the dispatcher directly and through the stdio loop.

mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paper_tools_mcp::server::McpServer;
use paper_tools_mcp::server::stdio::serve;
use paper_tools_mcp::server::transport::{JsonRpcRequest, error_codes};

use common::{
    context_for, context_with, offline_context, sample_paper_json, sample_search_result, write_pdf,
};

fn server_with_pdf() -> (TempDir, McpServer) {
    let dir = tempfile::tempdir().unwrap();
    write_pdf(&dir.path().join("a.pdf"), &["Intro", "Body"]);
    let server = McpServer::new(offline_context(dir.path()));
    (dir, server)
}

fn request(value: Value) -> JsonRpcRequest {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Dispatcher
// =============================================================================

#[tokio::test]
async fn test_initialize_echoes_protocol_version() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {"protocolVersion": "2025-03-26", "capabilities": {}}
        })))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2025-03-26");
    assert_eq!(result["serverInfo"]["name"], "paper-tools-mcp");
    assert!(result["capabilities"]["tools"].is_object());
    assert_eq!(response.id, Some(json!(1)));
}

#[tokio::test]
async fn test_initialize_default_protocol_version() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "id": "init", "method": "initialize"})))
        .await
        .unwrap();

    assert_eq!(response.result.unwrap()["protocolVersion"], "2024-11-05");
    assert_eq!(response.id, Some(json!("init")));
}

#[tokio::test]
async fn test_tools_list_names() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})))
        .await
        .unwrap();

    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "list_pdfs_in_folder",
            "extract_pdf_from_folder",
            "search_semantic_scholar",
            "get_semantic_scholar_paper_details",
            "get_semantic_scholar_author_details",
            "get_semantic_scholar_citations_and_references",
        ]
    );
    for tool in tools {
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[tokio::test]
async fn test_ping() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "id": 3, "method": "ping"})))
        .await
        .unwrap();

    assert_eq!(response.result, Some(json!({})));
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_notification_gets_no_response() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})))
        .await;

    assert!(response.is_none());
}

#[tokio::test]
async fn test_unknown_method() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "id": 4, "method": "resources/list"})))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("resources/list"));
}

#[tokio::test]
async fn test_tools_call_returns_text_content() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "extract_pdf_from_folder", "arguments": {"filename": "a.pdf"}}
        })))
        .await
        .unwrap();

    let result = response.result.unwrap();
    assert_eq!(result["content"][0]["type"], "text");
    assert_eq!(result["content"][0]["text"], "Intro\nBody");
}

#[tokio::test]
async fn test_tools_call_without_arguments() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 6,
            "method": "tools/call",
            "params": {"name": "list_pdfs_in_folder"}
        })))
        .await
        .unwrap();

    let text = response.result.unwrap()["content"][0]["text"].as_str().unwrap().to_string();
    let files: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(files, vec!["a.pdf"]);
}

#[tokio::test]
async fn test_tools_call_missing_file_is_not_a_fault() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "extract_pdf_from_folder", "arguments": {"filename": "b.pdf"}}
        })))
        .await
        .unwrap();

    assert!(response.error.is_none());
    let text = response.result.unwrap()["content"][0]["text"].as_str().unwrap().to_string();
    assert!(text.starts_with("Error: b.pdf not found in "));
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 8,
            "method": "tools/call",
            "params": {"name": "no_such_tool", "arguments": {}}
        })))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("no_such_tool"));
}

#[tokio::test]
async fn test_tools_call_missing_name() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": {"arguments": {}}
        })))
        .await
        .unwrap();

    assert_eq!(response.error.unwrap().code, error_codes::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tools_call_bad_arguments_is_tool_error() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({
            "jsonrpc": "2.0",
            "id": 10,
            "method": "tools/call",
            "params": {"name": "extract_pdf_from_folder", "arguments": {"file": "a.pdf"}}
        })))
        .await
        .unwrap();

    let error = response.error.unwrap();
    assert_eq!(error.code, error_codes::TOOL_ERROR);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_null_id_is_answered() {
    let (_dir, server) = server_with_pdf();

    let response = server
        .handle_request(request(json!({"jsonrpc": "2.0", "id": null, "method": "ping"})))
        .await
        .unwrap();

    assert_eq!(response.id, Some(Value::Null));
    assert_eq!(response.result, Some(json!({})));
}

// =============================================================================
// Stdio loop
// =============================================================================

/// Run `input` through the stdio loop, returning responses in output order.
async fn run_lines(server: McpServer, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    serve(Arc::new(server), input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn by_id(responses: &[Value], id: Value) -> &Value {
    responses.iter().find(|r| r["id"] == id).expect("response with id")
}

fn search_line(id: u64) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": "search_semantic_scholar", "arguments": {"query": "slow"}}
    })
    .to_string()
}

async fn slow_search_server(mock_server: &MockServer, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_search_result(vec![sample_paper_json("p1", "Slow", 2020, 1)]))
                .set_delay(delay),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_stdio_session() {
    let (_dir, server) = server_with_pdf();

    let input = [
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"extract_pdf_from_folder","arguments":{"filename":"a.pdf"}}}"#,
    ]
    .join("\n");

    let responses = run_lines(server, &input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(by_id(&responses, json!(1))["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(by_id(&responses, json!(2))["result"]["content"][0]["text"], "Intro\nBody");
}

#[tokio::test]
async fn test_stdio_parse_error_has_null_id() {
    let (_dir, server) = server_with_pdf();

    let responses = run_lines(
        server,
        "{not json}\n{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 2);
    let parse_error = by_id(&responses, Value::Null);
    assert_eq!(parse_error["error"]["code"], -32700);
    assert!(parse_error.get("result").is_none());
    assert_eq!(by_id(&responses, json!(7))["result"], json!({}));
}

#[tokio::test]
async fn test_stdio_ping_not_blocked_by_slow_call() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    slow_search_server(&mock_server, Duration::from_millis(500)).await;
    let server = McpServer::new(context_for(&mock_server, dir.path()));

    let input = format!("{}\n{}\n", search_line(1), r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#);
    let responses = run_lines(server, &input).await;

    let ids: Vec<&Value> = responses.iter().map(|r| &r["id"]).collect();
    assert_eq!(ids, vec![&json!(2), &json!(1)]);

    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(text).unwrap()[0]["title"], "Slow");
}

#[tokio::test]
async fn test_stdio_rejects_calls_beyond_pool_capacity() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    slow_search_server(&mock_server, Duration::from_millis(300)).await;
    let server = McpServer::new(context_with(&mock_server, dir.path(), |c| {
        c.workers = 1;
        c.queue_capacity = 0;
    }));

    let input = format!("{}\n{}\n", search_line(1), search_line(2));
    let responses = run_lines(server, &input).await;

    assert_eq!(responses.len(), 2);

    let first = by_id(&responses, json!(1))["result"]["content"][0]["text"].as_str().unwrap();
    assert_eq!(serde_json::from_str::<Value>(first).unwrap()[0]["paperId"], "p1");

    let second = by_id(&responses, json!(2))["result"]["content"][0]["text"].as_str().unwrap();
    let second: Value = serde_json::from_str(second).unwrap();
    assert!(second[0]["error"].as_str().unwrap().contains("server busy"));
}
