use std::fs;
use std::path::Path;

use hessfix_codec::{BinaryCodec, CodecError};
use hessfix_core::FixtureValue;
use hessfix_generate::{EmitEngine, EmitError, EmitOptions};

const SET_FIELDS: [&str; 8] = [
    "field0", "field1", "field2", "field3", "field4", "field5", "field6", "field7",
];

fn engine(count: u64, size: u32, seed: u64) -> EmitEngine {
    EmitEngine::new(EmitOptions {
        count,
        size,
        seed: Some(seed),
    })
}

fn read_json(path: &Path) -> serde_json::Value {
    let contents = fs::read_to_string(path).expect("read json artifact");
    serde_json::from_str(&contents).expect("parse json artifact")
}

fn assert_cjk(text: &str) {
    for ch in text.chars() {
        let code = ch as u32;
        assert!(
            (0x4e00..0x9fa5).contains(&code),
            "codepoint {code:#x} outside CJK band"
        );
    }
}

#[test]
fn every_variant_produces_two_nonempty_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    for variant in hessfix_core::variants() {
        let stem = dir.path().join(&variant.id);
        let result = engine(3, 5, 11).run(&variant.id, &stem).expect("emit run");

        let binary = fs::read_to_string(&result.binary_path).expect("read txt artifact");
        assert!(!binary.is_empty(), "{}: empty txt artifact", variant.id);
        let json = fs::read_to_string(&result.json_path).expect("read json artifact");
        assert!(!json.is_empty(), "{}: empty json artifact", variant.id);
        assert!(result.binary_bytes > 0);
        assert!(result.json_bytes > 0);
    }
}

#[test]
fn list_of_record7_matches_requested_shape() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("fx");
    let result = engine(3, 10, 42).run("ListOfRecord7", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    let items = parsed.as_array().expect("json array");
    assert_eq!(items.len(), 3, "list variants never collapse");

    for item in items {
        let object = item.as_object().expect("record object");
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["field0", "field1", "field2", "field3", "field4", "field5", "field6"]
        );

        let text = object["field0"].as_str().expect("field0 string");
        let length = text.chars().count();
        assert!((1..10).contains(&length), "field0 length {length}");
        assert_cjk(text);

        let field1 = object["field1"].as_i64().expect("field1 integer");
        assert!(i32::try_from(field1).is_ok());
        let field2 = object["field2"].as_i64().expect("field2 integer");
        assert!(i16::try_from(field2).is_ok());
        assert!(object["field3"].is_i64());
        assert!(object["field4"].is_number());
        assert!(object["field5"].is_number());
        let field6 = object["field6"].as_i64().expect("field6 integer");
        assert!(i8::try_from(field6).is_ok());
    }
}

#[test]
fn map_variant_entry_counts_never_exceed_count() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("maps");
    let result = engine(4, 3, 99).run("MapOfRecord8", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    let object = parsed.as_object().expect("record object");
    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["field0", "field1", "field2", "field3", "field4", "field7"]
    );

    for (name, field) in object {
        let entries = field.as_object().expect("map field object");
        assert!(
            entries.len() <= 4,
            "{name}: {} entries exceed count",
            entries.len()
        );
        for element in entries.values() {
            assert_eq!(element.as_object().expect("record element").len(), 8);
        }
    }
}

#[test]
fn set_variant_element_counts_never_exceed_count() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("sets");
    let result = engine(6, 3, 5).run("SetOfScalar", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    let object = parsed.as_object().expect("record object");
    assert_eq!(object.len(), 10);
    for name in SET_FIELDS {
        let elements = object[name].as_array().expect("set field array");
        assert!(
            elements.len() <= 6,
            "{name}: {} elements exceed count",
            elements.len()
        );
    }
}

#[test]
fn set_variant_carries_unpopulated_fields_as_null() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("nulls");
    let result = engine(2, 3, 1).run("SetOfScalar", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    let object = parsed.as_object().expect("record object");
    assert!(object["field8"].is_null());
    assert!(object["field9"].is_null());
}

#[test]
fn zero_count_yields_empty_containers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("empty");
    let result = engine(0, 5, 1).run("ListOfRecord3", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    assert_eq!(parsed.as_array().map(Vec::len), Some(0));

    // The codec still runs on the empty container: one list tag, base64'd.
    let binary = fs::read_to_string(&result.binary_path).expect("read txt artifact");
    assert_eq!(binary, "eA==");
}

#[test]
fn zero_count_composite_fields_are_empty() {
    let dir = tempfile::tempdir().expect("temp dir");

    let maps = engine(0, 3, 2)
        .run("MapOfRecord8", &dir.path().join("maps0"))
        .expect("map run");
    let parsed = read_json(&maps.json_path);
    let object = parsed.as_object().expect("record object");
    for name in ["field0", "field1", "field2", "field3", "field4", "field7"] {
        assert_eq!(object[name].as_object().map(serde_json::Map::len), Some(0));
    }

    let sets = engine(0, 3, 2)
        .run("SetOfScalar", &dir.path().join("sets0"))
        .expect("set run");
    let parsed = read_json(&sets.json_path);
    let object = parsed.as_object().expect("record object");
    for name in SET_FIELDS {
        assert_eq!(object[name].as_array().map(Vec::len), Some(0));
    }
    assert!(object["field8"].is_null());
    assert!(object["field9"].is_null());
}

struct FixedCodec(Vec<u8>);

impl BinaryCodec for FixedCodec {
    fn encode(&self, _fixture: &FixtureValue) -> Result<Vec<u8>, CodecError> {
        Ok(self.0.clone())
    }
}

struct FailingCodec;

impl BinaryCodec for FailingCodec {
    fn encode(&self, _fixture: &FixtureValue) -> Result<Vec<u8>, CodecError> {
        Err(CodecError::Unsupported("record graph".to_string()))
    }
}

#[test]
fn swapped_codec_drives_the_binary_artifact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("swapped");
    let engine = EmitEngine::with_codec(
        EmitOptions {
            count: 1,
            size: 2,
            seed: Some(3),
        },
        Box::new(FixedCodec(vec![0xca, 0xfe])),
    );
    let result = engine.run("ListOfRecord1", &stem).expect("emit run");

    let binary = fs::read_to_string(&result.binary_path).expect("read txt artifact");
    assert_eq!(binary, "yv4=");

    // The JSON side still reflects the generated fixture.
    let parsed = read_json(&result.json_path);
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
}

#[test]
fn codec_failure_aborts_before_any_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("failing");
    let engine = EmitEngine::with_codec(
        EmitOptions {
            count: 1,
            size: 2,
            seed: Some(3),
        },
        Box::new(FailingCodec),
    );
    let err = engine.run("ListOfRecord1", &stem).expect_err("codec failure");

    assert!(matches!(err, EmitError::Codec(_)));
    assert!(!stem.with_extension("txt").exists());
    assert!(!stem.with_extension("json").exists());
}

#[test]
fn fixed_seed_reproduces_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem_a = dir.path().join("run_a");
    let stem_b = dir.path().join("run_b");

    let result_a = engine(5, 8, 1234).run("ListOfRecord8", &stem_a).expect("run A");
    let result_b = engine(5, 8, 1234).run("ListOfRecord8", &stem_b).expect("run B");

    let txt_a = fs::read_to_string(&result_a.binary_path).expect("read A txt");
    let txt_b = fs::read_to_string(&result_b.binary_path).expect("read B txt");
    assert_eq!(txt_a, txt_b);

    let json_a = fs::read_to_string(&result_a.json_path).expect("read A json");
    let json_b = fs::read_to_string(&result_b.json_path).expect("read B json");
    assert_eq!(json_a, json_b);
}

#[test]
fn zero_size_is_rejected_before_any_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("rejected");
    let err = engine(3, 0, 1).run("ListOfRecord1", &stem).expect_err("size 0");

    assert!(matches!(err, EmitError::InvalidParameter(_)));
    assert!(!stem.with_extension("txt").exists());
    assert!(!stem.with_extension("json").exists());
}

#[test]
fn unknown_variant_writes_no_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("unknown");
    let err = engine(3, 5, 1).run("RecordOfNothing", &stem).expect_err("unknown");

    assert!(matches!(err, EmitError::Variant(_)));
    assert!(!stem.with_extension("txt").exists());
    assert!(!stem.with_extension("json").exists());
}

#[test]
fn json_strings_stay_in_cjk_band() {
    let dir = tempfile::tempdir().expect("temp dir");
    let stem = dir.path().join("band");
    let result = engine(8, 6, 77).run("SetOfScalar", &stem).expect("emit run");

    let parsed = read_json(&result.json_path);
    let text_field = parsed
        .as_object()
        .and_then(|object| object.get("field7"))
        .and_then(|field| field.as_array())
        .expect("field7 array");
    assert!(!text_field.is_empty());
    for element in text_field {
        assert_cjk(element.as_str().expect("string element"));
    }
}
