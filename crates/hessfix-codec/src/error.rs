use thiserror::Error;

/// Errors a binary codec may surface while encoding a fixture.
///
/// Encoding is deterministic, so failures are never retried; the run
/// reports them verbatim and exits.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The codec cannot represent the given value.
    #[error("unsupported fixture value: {0}")]
    Unsupported(String),
}
