use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::schema::{
    FieldSpec, MapFieldSpec, RecordShape, ScalarType, SetFieldSpec, Variant, VariantShape,
};

/// Wire type names follow the catalog of the Java tool these fixtures are
/// compared against; changing them would break cross-implementation runs.
const RECORD_TYPE_PREFIX: &str = "org.apache.dubbo.parser.testcase.TestcaseV";
const MAP_TYPE_NAME: &str = "org.apache.dubbo.parser.testcase.TestcaseMapV1";
const SET_TYPE_NAME: &str = "org.apache.dubbo.parser.testcase.TestcaseSetV1";

/// Scalar progression shared by all record shapes: `RecordVn` takes the
/// first `n` entries.
const RECORD_SCALARS: [ScalarType; 8] = [
    ScalarType::Text,
    ScalarType::I32,
    ScalarType::I16,
    ScalarType::I64,
    ScalarType::F64,
    ScalarType::F32,
    ScalarType::I8,
    ScalarType::Char,
];

static VARIANTS: LazyLock<Vec<Variant>> = LazyLock::new(build_catalog);

/// Look up a variant by identifier.
pub fn lookup(id: &str) -> Result<&'static Variant> {
    VARIANTS
        .iter()
        .find(|variant| variant.id == id)
        .ok_or_else(|| Error::UnknownVariant(id.to_string()))
}

/// The full registered catalog, in registration order.
pub fn variants() -> &'static [Variant] {
    &VARIANTS
}

fn build_catalog() -> Vec<Variant> {
    let mut catalog = Vec::new();

    for version in 1..=RECORD_SCALARS.len() {
        catalog.push(Variant {
            id: format!("ListOfRecord{version}"),
            shape: VariantShape::ListOfRecords(record_shape(version)),
        });
    }

    catalog.push(Variant {
        id: "MapOfRecord8".to_string(),
        shape: VariantShape::RecordOfMaps {
            type_name: MAP_TYPE_NAME.to_string(),
            element: record_shape(8),
            // field5/field6 are deliberately skipped; the gap is part of
            // the wire contract.
            fields: vec![
                map_field("field0", ScalarType::Char),
                map_field("field1", ScalarType::I8),
                map_field("field2", ScalarType::I16),
                map_field("field3", ScalarType::I32),
                map_field("field4", ScalarType::I64),
                map_field("field7", ScalarType::Text),
            ],
        },
    });

    catalog.push(Variant {
        id: "SetOfScalar".to_string(),
        shape: VariantShape::RecordOfSets {
            type_name: SET_TYPE_NAME.to_string(),
            fields: vec![
                set_field("field0", ScalarType::Char),
                set_field("field1", ScalarType::I8),
                set_field("field2", ScalarType::I16),
                set_field("field3", ScalarType::I32),
                set_field("field4", ScalarType::I64),
                set_field("field5", ScalarType::F32),
                set_field("field6", ScalarType::F64),
                set_field("field7", ScalarType::Text),
            ],
            // field8/field9 exist in the wire class but are never filled;
            // they ride along as nulls.
            null_fields: vec!["field8".to_string(), "field9".to_string()],
        },
    });

    catalog
}

fn record_shape(version: usize) -> RecordShape {
    let fields = RECORD_SCALARS[..version]
        .iter()
        .enumerate()
        .map(|(slot, scalar)| FieldSpec {
            name: format!("field{slot}"),
            scalar: *scalar,
        })
        .collect();
    RecordShape {
        type_name: format!("{RECORD_TYPE_PREFIX}{version}"),
        fields,
    }
}

fn map_field(name: &str, key: ScalarType) -> MapFieldSpec {
    MapFieldSpec {
        name: name.to_string(),
        key,
    }
}

fn set_field(name: &str, element: ScalarType) -> SetFieldSpec {
    SetFieldSpec {
        name: name.to_string(),
        element,
    }
}
