use serde_json::Value;

/// An upstream row left out of the response and why.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRow {
    pub row: Value,
    pub reason: String
}
