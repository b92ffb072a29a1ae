use serde::{Deserialize, Serialize};

/// The flat, all-text shape a record takes for transport and storage.
///
/// `id` and `note` may be missing from the input; both default to an empty
/// string, which construction treats as "generate an id" and "no note".
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SerializedRecord {
    #[serde(default)]
    pub id: String,
    /// ISO-8601 UTC, e.g. `2024-01-01T00:00:00Z`.
    pub timestamp: String,
    /// Exact decimal text, e.g. `-12.50`.
    pub amount: String,
    /// `income` or `expense`.
    pub kind: String,
    pub category: String,
    #[serde(default)]
    pub note: String
}
