//! Fixture generation and dual-encoding engine for hessfix.
//!
//! This crate turns a registered schema variant plus run parameters into a
//! randomized fixture, encodes it once through the binary codec and once as
//! JSON, and writes the `{stem}.txt` / `{stem}.json` artifact pair.

pub mod artifacts;
pub mod engine;
pub mod errors;
pub mod model;
pub mod sampler;

pub use artifacts::{ArtifactPair, encode_fixture, write_artifacts};
pub use engine::EmitEngine;
pub use errors::EmitError;
pub use model::{EmitOptions, EmitResult};
