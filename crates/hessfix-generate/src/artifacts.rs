use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use hessfix_codec::BinaryCodec;
use hessfix_core::FixtureValue;

use crate::errors::EmitError;

/// The two encodings of a single fixture instance.
#[derive(Debug, Clone)]
pub struct ArtifactPair {
    pub binary: Vec<u8>,
    pub json: String,
}

/// Encode a fixture through both representations.
///
/// The binary codec is invoked exactly once with the complete top-level
/// fixture, and the JSON text is derived from the same in-memory instance,
/// so the two artifacts are comparable field for field.
pub fn encode_fixture(
    codec: &dyn BinaryCodec,
    fixture: &FixtureValue,
) -> Result<ArtifactPair, EmitError> {
    let binary = codec.encode(fixture)?;
    let json = serde_json::to_string(fixture)?;
    Ok(ArtifactPair { binary, json })
}

/// Write `{stem}.txt` (base64 of the binary buffer) and `{stem}.json`.
///
/// Either both files are written in full or the run fails with an I/O
/// error; truncated files are left behind on failure.
pub fn write_artifacts(stem: &Path, pair: &ArtifactPair) -> Result<(PathBuf, PathBuf), EmitError> {
    let binary_path = artifact_path(stem, "txt");
    let json_path = artifact_path(stem, "json");

    fs::write(&binary_path, STANDARD.encode(&pair.binary))?;
    fs::write(&json_path, &pair.json)?;

    Ok((binary_path, json_path))
}

fn artifact_path(stem: &Path, extension: &str) -> PathBuf {
    let mut path = stem.as_os_str().to_os_string();
    path.push(format!(".{extension}"));
    PathBuf::from(path)
}
