//! Failure kinds for a recognition request.
//!
//! Every variant ends the same way at the call site: logged, batch dropped,
//! session untouched. They are split so the log says which hop broke.

/// A recognition request that produced no usable batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The request never completed (network, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-2xx status.
    #[error("calculate failed: status {status}")]
    Status { status: u16 },

    /// The body was not the expected `{ "data": [...] }` shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}
