use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::EmitError;

/// Parameters for one emit run. Parsed once, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Number of elements/records to generate (generation attempts for
    /// collapsing containers).
    pub count: u64,
    /// Exclusive upper bound on string length; must be at least 1.
    pub size: u32,
    /// Fixed RNG seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl EmitOptions {
    /// Domain validation, performed before any generation or file write.
    pub fn validate(&self) -> Result<(), EmitError> {
        if self.size < 1 {
            return Err(EmitError::InvalidParameter(
                "size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Artifact locations and sizes for a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitResult {
    pub variant: String,
    pub binary_path: PathBuf,
    pub json_path: PathBuf,
    pub binary_bytes: u64,
    pub json_bytes: u64,
}
