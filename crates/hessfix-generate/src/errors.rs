use thiserror::Error;

/// Errors emitted by the fixture engine.
///
/// Every error is fatal to the run: there is no steady state to preserve
/// and nothing to retry, so the caller reports the message and exits.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A run parameter is outside its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The requested variant is not registered.
    #[error(transparent)]
    Variant(#[from] hessfix_core::Error),
    /// The binary codec reported a failure; surfaced verbatim.
    #[error("binary encoding failed: {0}")]
    Codec(#[from] hessfix_codec::CodecError),
    /// JSON encoding of the fixture failed.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// An artifact write failed; no partial-file cleanup is attempted.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
