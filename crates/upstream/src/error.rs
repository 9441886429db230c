/// Error type for downstream service calls.
///
/// For aggregate endpoints these are recovered into a branch-scoped
/// [`BranchOutcome`](crate::BranchOutcome) error; for single-branch
/// passthrough endpoints they surface as a 502 to the caller.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Upstream returned HTTP {0}")]
    HttpStatus(u16),

    /// The remote procedure completed but reported an application error.
    #[error("Remote procedure error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The response body could not be decoded as expected.
    #[error("Malformed upstream response: {0}")]
    Decode(String),
}
