#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_tools_mcp::models::{EntryErrorPolicy, ExternalAuthor};
use paper_tools_mcp::normalize;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    if let Ok(author) = serde_json::from_value::<ExternalAuthor>(json.clone()) {
        let _ = normalize::normalize_author(author);
    }

    let entries = match json {
        serde_json::Value::Array(values) => values,
        other => vec![other],
    };
    let count = entries.len();
    let collected =
        normalize::normalize_entries(entries, EntryErrorPolicy::Collect, normalize::citation_entry)
            .unwrap();
    assert_eq!(collected.len(), count);
});
