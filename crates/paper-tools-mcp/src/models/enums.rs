//! Enumeration types for configuration and tool behavior.

use serde::{Deserialize, Serialize};

/// What to do when a single entry of an upstream list fails to normalize.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EntryErrorPolicy {
    /// Drop the entry silently.
    #[default]
    Skip,
    /// Keep an `{error}` record in the entry's place.
    Collect,
    /// Fail the whole call.
    Abort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default_is_skip() {
        assert_eq!(EntryErrorPolicy::default(), EntryErrorPolicy::Skip);
    }

    #[test]
    fn test_policy_serde_lowercase() {
        let json = serde_json::to_string(&EntryErrorPolicy::Collect).unwrap();
        assert_eq!(json, r#""collect""#);

        let parsed: EntryErrorPolicy = serde_json::from_str(r#""abort""#).unwrap();
        assert_eq!(parsed, EntryErrorPolicy::Abort);
    }
}
