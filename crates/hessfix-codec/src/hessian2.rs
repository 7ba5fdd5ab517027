use hessfix_core::{FixtureValue, RecordValue};

use crate::error::CodecError;

/// A binary serializer consumed through a single write operation.
///
/// The orchestrator calls `encode` exactly once per run with the complete
/// top-level fixture, so codec-internal state (class definitions, back
/// references) is exercised across the whole object graph.
pub trait BinaryCodec {
    fn encode(&self, fixture: &FixtureValue) -> Result<Vec<u8>, CodecError>;
}

/// Hessian 2 wire format writer.
#[derive(Debug, Clone, Default)]
pub struct Hessian2Codec;

impl Hessian2Codec {
    pub fn new() -> Self {
        Self
    }
}

impl BinaryCodec for Hessian2Codec {
    fn encode(&self, fixture: &FixtureValue) -> Result<Vec<u8>, CodecError> {
        let mut writer = Hessian2Writer::new();
        writer.write_value(fixture)?;
        Ok(writer.into_bytes())
    }
}

struct Hessian2Writer {
    buf: Vec<u8>,
    // Wire type names in definition order; index doubles as the class ref.
    class_defs: Vec<String>,
}

impl Hessian2Writer {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            class_defs: Vec::new(),
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write_value(&mut self, value: &FixtureValue) -> Result<(), CodecError> {
        match value {
            FixtureValue::Null => self.buf.push(b'N'),
            // A lone character goes out as a one-character string; the
            // format has no standalone character tag.
            FixtureValue::Char(ch) => {
                let mut utf8 = [0_u8; 4];
                self.write_string(ch.encode_utf8(&mut utf8));
            }
            FixtureValue::I8(v) => self.write_int(i32::from(*v)),
            FixtureValue::I16(v) => self.write_int(i32::from(*v)),
            FixtureValue::I32(v) => self.write_int(*v),
            FixtureValue::I64(v) => self.write_long(*v),
            FixtureValue::F32(v) => self.write_double(f64::from(*v)),
            FixtureValue::F64(v) => self.write_double(*v),
            FixtureValue::Text(text) => self.write_string(text),
            FixtureValue::List(items) => {
                self.write_list_begin(items.len());
                for item in items {
                    self.write_value(item)?;
                }
            }
            FixtureValue::Set(elements) => {
                self.write_list_begin(elements.len());
                for key in elements {
                    self.write_value(&key.to_value())?;
                }
            }
            FixtureValue::Map(entries) => {
                self.buf.push(b'H');
                for (key, entry) in entries {
                    self.write_value(&key.to_value())?;
                    self.write_value(entry)?;
                }
                self.buf.push(b'Z');
            }
            FixtureValue::Record(record) => self.write_record(record)?,
        }
        Ok(())
    }

    fn write_record(&mut self, record: &RecordValue) -> Result<(), CodecError> {
        let class_ref = self.class_ref(record);
        if class_ref < 16 {
            self.buf.push(0x60 + class_ref as u8);
        } else {
            self.buf.push(b'O');
            self.write_int(class_ref as i32);
        }
        for (_, value) in &record.fields {
            self.write_value(value)?;
        }
        Ok(())
    }

    /// Resolve the class ref for a record type, emitting the definition
    /// the first time the type is seen.
    fn class_ref(&mut self, record: &RecordValue) -> usize {
        if let Some(index) = self
            .class_defs
            .iter()
            .position(|name| *name == record.type_name)
        {
            return index;
        }

        self.buf.push(b'C');
        self.write_string(&record.type_name);
        self.write_int(record.fields.len() as i32);
        for (name, _) in &record.fields {
            self.write_string(name);
        }
        self.class_defs.push(record.type_name.clone());
        self.class_defs.len() - 1
    }

    fn write_int(&mut self, value: i32) {
        match value {
            -16..=47 => self.buf.push((value + 0x90) as u8),
            -2048..=2047 => {
                self.buf.push((0xc8 + (value >> 8)) as u8);
                self.buf.push(value as u8);
            }
            -262144..=262143 => {
                self.buf.push((0xd4 + (value >> 16)) as u8);
                self.buf.push((value >> 8) as u8);
                self.buf.push(value as u8);
            }
            _ => {
                self.buf.push(b'I');
                self.buf.extend_from_slice(&value.to_be_bytes());
            }
        }
    }

    fn write_long(&mut self, value: i64) {
        match value {
            -8..=15 => self.buf.push((value + 0xe0) as u8),
            -2048..=2047 => {
                self.buf.push((0xf8 + (value >> 8)) as u8);
                self.buf.push(value as u8);
            }
            -262144..=262143 => {
                self.buf.push((0x3c + (value >> 16)) as u8);
                self.buf.push((value >> 8) as u8);
                self.buf.push(value as u8);
            }
            _ if i32::try_from(value).is_ok() => {
                self.buf.push(0x59);
                self.buf.extend_from_slice(&(value as i32).to_be_bytes());
            }
            _ => {
                self.buf.push(b'L');
                self.buf.extend_from_slice(&value.to_be_bytes());
            }
        }
    }

    fn write_double(&mut self, value: f64) {
        if value == 0.0 {
            self.buf.push(0x5b);
            return;
        }
        if value == 1.0 {
            self.buf.push(0x5c);
            return;
        }

        let int_value = value as i32;
        if f64::from(int_value) == value {
            if (-128..=127).contains(&int_value) {
                self.buf.push(0x5d);
                self.buf.push(int_value as u8);
                return;
            }
            if (-32768..=32767).contains(&int_value) {
                self.buf.push(0x5e);
                self.buf.extend_from_slice(&(int_value as i16).to_be_bytes());
                return;
            }
        }

        let mills = (value * 1000.0) as i64;
        if 0.001 * mills as f64 == value && i32::try_from(mills).is_ok() {
            self.buf.push(0x5f);
            self.buf.extend_from_slice(&(mills as i32).to_be_bytes());
            return;
        }

        self.buf.push(b'D');
        self.buf.extend_from_slice(&value.to_bits().to_be_bytes());
    }

    /// Lengths are counted in characters; the fixture alphabet is BMP-only
    /// so character count and UTF-16 unit count agree.
    fn write_string(&mut self, text: &str) {
        let mut remaining = text;
        let mut count = remaining.chars().count();

        while count > 0xffff {
            let split = remaining
                .char_indices()
                .nth(0x8000)
                .map(|(index, _)| index)
                .unwrap_or(remaining.len());
            let (chunk, rest) = remaining.split_at(split);
            self.buf.push(b'R');
            self.buf.extend_from_slice(&0x8000_u16.to_be_bytes());
            self.buf.extend_from_slice(chunk.as_bytes());
            remaining = rest;
            count -= 0x8000;
        }

        if count <= 31 {
            self.buf.push(count as u8);
        } else if count <= 1023 {
            self.buf.push(0x30 + (count >> 8) as u8);
            self.buf.push(count as u8);
        } else {
            self.buf.push(b'S');
            self.buf.extend_from_slice(&(count as u16).to_be_bytes());
        }
        self.buf.extend_from_slice(remaining.as_bytes());
    }

    fn write_list_begin(&mut self, length: usize) {
        if length < 8 {
            self.buf.push(0x78 + length as u8);
        } else {
            self.buf.push(0x58);
            self.write_int(length as i32);
        }
    }
}
