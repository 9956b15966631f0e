#![no_main]

use libfuzzer_sys::fuzz_target;
use paper_tools_mcp::normalize;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // A normalized paper always serializes with every key
    if let Ok(record) = normalize::paper_entry(json) {
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 9);
    }
});
