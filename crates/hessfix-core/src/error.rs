use thiserror::Error;

/// Core error type shared across hessfix crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested schema variant is not in the registry.
    #[error("unknown schema variant: {0}")]
    UnknownVariant(String),
}

/// Convenience alias for results returned by hessfix crates.
pub type Result<T> = std::result::Result<T, Error>;
