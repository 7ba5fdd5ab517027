use rand::Rng;

use hessfix_core::{FixtureValue, RecordShape, RecordValue, ScalarKey, ScalarType};

/// First codepoint of the fixture alphabet, the CJK Unified Ideographs
/// block. The band stresses multi-byte encoding in the binary codec and
/// is fixed by the cross-language fixture contract.
pub const CJK_FIRST: u32 = 0x4e00;
/// One past the last codepoint of the band (exclusive).
pub const CJK_END: u32 = 0x9fa5;

/// Draw one character from the CJK band.
pub fn han_char(rng: &mut impl Rng) -> char {
    char::from_u32(rng.random_range(CJK_FIRST..CJK_END)).unwrap_or('\u{4e00}')
}

/// Draw a string of CJK characters with length uniform in `[1, size)`.
/// A bound of 1 yields a single character.
pub fn han_string(size: u32, rng: &mut impl Rng) -> String {
    let length = if size > 1 { rng.random_range(1..size) } else { 1 };
    (0..length).map(|_| han_char(rng)).collect()
}

/// Draw one scalar value uniformly from the type's domain.
///
/// Integer types cover their full representable range; floats are uniform
/// in `[0, 1)`, matching the fixtures this tool is compared against.
pub fn scalar(tag: ScalarType, size: u32, rng: &mut impl Rng) -> FixtureValue {
    match tag {
        ScalarType::Char => FixtureValue::Char(han_char(rng)),
        ScalarType::I8 => FixtureValue::I8(rng.random()),
        ScalarType::I16 => FixtureValue::I16(rng.random()),
        ScalarType::I32 => FixtureValue::I32(rng.random()),
        ScalarType::I64 => FixtureValue::I64(rng.random()),
        ScalarType::F32 => FixtureValue::F32(rng.random()),
        ScalarType::F64 => FixtureValue::F64(rng.random()),
        ScalarType::Text => FixtureValue::Text(han_string(size, rng)),
    }
}

/// Draw a scalar in key position for a map or set.
pub fn scalar_key(tag: ScalarType, size: u32, rng: &mut impl Rng) -> ScalarKey {
    match tag {
        ScalarType::Char => ScalarKey::Char(han_char(rng)),
        ScalarType::I8 => ScalarKey::I8(rng.random()),
        ScalarType::I16 => ScalarKey::I16(rng.random()),
        ScalarType::I32 => ScalarKey::I32(rng.random()),
        ScalarType::I64 => ScalarKey::I64(rng.random()),
        ScalarType::F32 => ScalarKey::from_f32(rng.random()),
        ScalarType::F64 => ScalarKey::from_f64(rng.random()),
        ScalarType::Text => ScalarKey::Text(han_string(size, rng)),
    }
}

/// Instantiate a record: one value per field spec, in declared order.
pub fn record(shape: &RecordShape, size: u32, rng: &mut impl Rng) -> FixtureValue {
    let fields = shape
        .fields
        .iter()
        .map(|field| (field.name.clone(), scalar(field.scalar, size, rng)))
        .collect();
    FixtureValue::Record(RecordValue {
        type_name: shape.type_name.clone(),
        fields,
    })
}
