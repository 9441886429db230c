//! JSON-RPC 2.0 envelope types for the business backend.

use serde::{Deserialize, Serialize};

use crate::error::UpstreamError;

/// A JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(id: u64, method: &'a str, params: P) -> Self {
        RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T> RpcResponse<T> {
    /// Unwrap the envelope into the call result.
    ///
    /// A response carrying neither `result` nor `error` violates the
    /// protocol and is reported as a decode failure.
    pub fn into_result(self) -> Result<T, UpstreamError> {
        if let Some(err) = self.error {
            return Err(UpstreamError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| UpstreamError::Decode("response has neither result nor error".into()))
    }
}
