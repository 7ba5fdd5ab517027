use serde::{Deserialize, Serialize};

/// Primitive type tag for a generated scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    /// A single unicode character drawn from the CJK test band.
    Char,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// A variable-length string of CJK characters.
    Text,
}

/// One positional field of a record shape.
///
/// Field order is fixed per shape and determines both the binary field
/// order and the JSON key order; it never varies between generation calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub scalar: ScalarType,
}

/// An ordered set of scalar fields plus the wire type name the binary
/// codec emits for instances of this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordShape {
    pub type_name: String,
    pub fields: Vec<FieldSpec>,
}

/// A map-typed field of a composite variant: scalar key, record element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFieldSpec {
    pub name: String,
    pub key: ScalarType,
}

/// A set-typed field of a composite variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFieldSpec {
    pub name: String,
    pub element: ScalarType,
}

/// Top-level shape of a registered variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VariantShape {
    /// An ordered list of `count` records; every generated element is kept.
    ListOfRecords(RecordShape),
    /// A record whose fields are maps from a scalar key to a record
    /// element. Duplicate keys collapse silently.
    RecordOfMaps {
        type_name: String,
        element: RecordShape,
        fields: Vec<MapFieldSpec>,
    },
    /// A record whose fields are sets of scalars. Duplicate elements
    /// collapse silently.
    RecordOfSets {
        type_name: String,
        fields: Vec<SetFieldSpec>,
        /// Fields declared in the wire class but never populated; they are
        /// carried as nulls so the class definition keeps its full width.
        null_fields: Vec<String>,
    },
}

/// A named schema variant, fixed at build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub shape: VariantShape,
}
