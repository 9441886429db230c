use serde::Serialize;

/// The settled result of one aggregation branch.
///
/// A failed branch contributes an empty payload plus a branch-scoped error
/// description; it never fails the whole aggregate request.
#[derive(Debug, Clone, Serialize)]
pub struct BranchOutcome {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl BranchOutcome {
    /// A successful branch carrying its payload.
    pub fn ok(data: serde_json::Value) -> Self {
        BranchOutcome {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed branch carrying only an error description.
    pub fn err(message: impl Into<String>) -> Self {
        BranchOutcome {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
