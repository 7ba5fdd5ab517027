//! Binary codec boundary for hessfix.
//!
//! The generator hands a complete fixture to a [`BinaryCodec`] exactly once
//! per run; this crate supplies the trait plus the built-in Hessian 2
//! implementation whose wire output the JSON artifact is compared against.

pub mod error;
pub mod hessian2;

pub use error::CodecError;
pub use hessian2::{BinaryCodec, Hessian2Codec};
