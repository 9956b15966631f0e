//! Fuzzing library for paper-tools-mcp.
//!
//! Targets cover the field normalizer (arbitrary upstream JSON) and the
//! JSON-RPC request decoder (arbitrary host input).
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_normalize_paper -- -max_total_time=60
//! ```

pub use paper_tools_mcp::{models, normalize};
