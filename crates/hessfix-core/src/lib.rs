//! Core contracts for hessfix.
//!
//! This crate defines the fixed catalog of schema variants, the fixture
//! value model shared by the generator and the codecs, and the shared
//! error type.

pub mod error;
pub mod registry;
pub mod schema;
pub mod value;

pub use error::{Error, Result};
pub use registry::{lookup, variants};
pub use schema::{FieldSpec, MapFieldSpec, RecordShape, ScalarType, SetFieldSpec, Variant, VariantShape};
pub use value::{FixtureValue, RecordValue, ScalarKey};
