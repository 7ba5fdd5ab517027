use std::collections::{BTreeMap, BTreeSet};

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// An instantiated fixture value.
///
/// Created fresh per generation call, immutable once produced, and handed
/// to both encoders as the same instance so the two artifacts stay
/// comparable.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureValue {
    /// A declared but unpopulated record field.
    Null,
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    Record(RecordValue),
    List(Vec<FixtureValue>),
    Map(BTreeMap<ScalarKey, FixtureValue>),
    Set(BTreeSet<ScalarKey>),
}

/// A record instance: wire type name plus `(field name, value)` pairs in
/// declared field order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    pub type_name: String,
    pub fields: Vec<(String, FixtureValue)>,
}

/// Scalar in key position for uniqueness-enforcing containers.
///
/// Floats are held by bit pattern so equality and ordering are total.
/// Duplicate insertions collapse silently, so collapsing containers can
/// end up smaller than the requested element count.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalarKey {
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32Bits(u32),
    F64Bits(u64),
    Text(String),
}

impl ScalarKey {
    pub fn from_f32(value: f32) -> Self {
        ScalarKey::F32Bits(value.to_bits())
    }

    pub fn from_f64(value: f64) -> Self {
        ScalarKey::F64Bits(value.to_bits())
    }

    /// The plain value form, used when a key is encoded as an element.
    pub fn to_value(&self) -> FixtureValue {
        match self {
            ScalarKey::Char(value) => FixtureValue::Char(*value),
            ScalarKey::I8(value) => FixtureValue::I8(*value),
            ScalarKey::I16(value) => FixtureValue::I16(*value),
            ScalarKey::I32(value) => FixtureValue::I32(*value),
            ScalarKey::I64(value) => FixtureValue::I64(*value),
            ScalarKey::F32Bits(bits) => FixtureValue::F32(f32::from_bits(*bits)),
            ScalarKey::F64Bits(bits) => FixtureValue::F64(f64::from_bits(*bits)),
            ScalarKey::Text(value) => FixtureValue::Text(value.clone()),
        }
    }

    /// JSON object key form: numbers and chars stringify the way the
    /// reference JSON artifacts stringify map keys.
    pub fn json_key(&self) -> String {
        match self {
            ScalarKey::Char(value) => value.to_string(),
            ScalarKey::I8(value) => value.to_string(),
            ScalarKey::I16(value) => value.to_string(),
            ScalarKey::I32(value) => value.to_string(),
            ScalarKey::I64(value) => value.to_string(),
            ScalarKey::F32Bits(bits) => f32::from_bits(*bits).to_string(),
            ScalarKey::F64Bits(bits) => f64::from_bits(*bits).to_string(),
            ScalarKey::Text(value) => value.clone(),
        }
    }
}

impl Serialize for FixtureValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FixtureValue::Null => serializer.serialize_unit(),
            FixtureValue::Char(value) => serializer.serialize_char(*value),
            FixtureValue::I8(value) => serializer.serialize_i8(*value),
            FixtureValue::I16(value) => serializer.serialize_i16(*value),
            FixtureValue::I32(value) => serializer.serialize_i32(*value),
            FixtureValue::I64(value) => serializer.serialize_i64(*value),
            FixtureValue::F32(value) => serializer.serialize_f32(*value),
            FixtureValue::F64(value) => serializer.serialize_f64(*value),
            FixtureValue::Text(value) => serializer.serialize_str(value),
            FixtureValue::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.fields.len()))?;
                for (name, value) in &record.fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
            FixtureValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            FixtureValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.json_key(), value)?;
                }
                map.end()
            }
            FixtureValue::Set(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for key in elements {
                    seq.serialize_element(&key.to_value())?;
                }
                seq.end()
            }
        }
    }
}
