#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_tools_mcp::models::{ExtractPdfInput, SearchInput};
use paper_tools_mcp::server::transport::JsonRpcRequest;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(request) = serde_json::from_slice::<JsonRpcRequest>(data) {
        let arguments = request.params.get("arguments").cloned().unwrap_or_default();
        let _ = serde_json::from_value::<SearchInput>(arguments.clone());
        let _ = serde_json::from_value::<ExtractPdfInput>(arguments);
    }
});
