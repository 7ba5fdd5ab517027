use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use hessfix_codec::{BinaryCodec, Hessian2Codec};
use hessfix_core::{FixtureValue, RecordValue, Variant, VariantShape, registry};

use crate::artifacts;
use crate::errors::EmitError;
use crate::model::{EmitOptions, EmitResult};
use crate::sampler;

/// Entry point for one fixture run: resolve, generate, dual-encode, write.
pub struct EmitEngine {
    options: EmitOptions,
    codec: Box<dyn BinaryCodec>,
}

impl EmitEngine {
    pub fn new(options: EmitOptions) -> Self {
        Self::with_codec(options, Box::new(Hessian2Codec::new()))
    }

    /// Swap the binary writer; the rest of the pipeline is codec-agnostic.
    pub fn with_codec(options: EmitOptions, codec: Box<dyn BinaryCodec>) -> Self {
        Self { options, codec }
    }

    pub fn run(&self, variant_id: &str, stem: &Path) -> Result<EmitResult, EmitError> {
        let start = Instant::now();

        let variant = registry::lookup(variant_id)?;
        self.options.validate()?;

        // The RNG is owned by this run; every generation call threads it
        // explicitly, so a fixed seed reproduces the full artifact pair.
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        info!(
            variant = %variant.id,
            count = self.options.count,
            size = self.options.size,
            seed = ?self.options.seed,
            "emit started"
        );

        let fixture = self.build_fixture(variant, &mut rng);
        let pair = artifacts::encode_fixture(self.codec.as_ref(), &fixture)?;
        let (binary_path, json_path) = artifacts::write_artifacts(stem, &pair)?;

        info!(
            variant = %variant.id,
            binary = %binary_path.display(),
            json = %json_path.display(),
            binary_bytes = pair.binary.len() as u64,
            json_bytes = pair.json.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
            "artifacts written"
        );

        Ok(EmitResult {
            variant: variant.id.clone(),
            binary_bytes: pair.binary.len() as u64,
            json_bytes: pair.json.len() as u64,
            binary_path,
            json_path,
        })
    }

    /// Assemble the top-level fixture for a variant.
    ///
    /// `count` is the number of generation attempts: lists keep every
    /// element, maps and sets collapse duplicate keys silently.
    pub fn build_fixture(&self, variant: &Variant, rng: &mut impl Rng) -> FixtureValue {
        let count = self.options.count;
        let size = self.options.size;

        match &variant.shape {
            VariantShape::ListOfRecords(shape) => FixtureValue::List(
                (0..count)
                    .map(|_| sampler::record(shape, size, rng))
                    .collect(),
            ),
            VariantShape::RecordOfMaps {
                type_name,
                element,
                fields,
            } => {
                let fields = fields
                    .iter()
                    .map(|field| {
                        let mut entries = BTreeMap::new();
                        for _ in 0..count {
                            // Element drawn before key; seeded runs depend
                            // on this draw order.
                            let value = sampler::record(element, size, rng);
                            let key = sampler::scalar_key(field.key, size, rng);
                            entries.insert(key, value);
                        }
                        (field.name.clone(), FixtureValue::Map(entries))
                    })
                    .collect();
                FixtureValue::Record(RecordValue {
                    type_name: type_name.clone(),
                    fields,
                })
            }
            VariantShape::RecordOfSets {
                type_name,
                fields,
                null_fields,
            } => {
                let mut fields: Vec<(String, FixtureValue)> = fields
                    .iter()
                    .map(|field| {
                        let mut elements = BTreeSet::new();
                        for _ in 0..count {
                            elements.insert(sampler::scalar_key(field.element, size, rng));
                        }
                        (field.name.clone(), FixtureValue::Set(elements))
                    })
                    .collect();
                fields.extend(
                    null_fields
                        .iter()
                        .map(|name| (name.clone(), FixtureValue::Null)),
                );
                FixtureValue::Record(RecordValue {
                    type_name: type_name.clone(),
                    fields,
                })
            }
        }
    }
}
