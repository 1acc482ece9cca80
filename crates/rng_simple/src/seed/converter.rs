//! Seed normalisation.
//!
//! Turns any [`SeedMaterial`] into the [`NativeSeed`] an algorithm accepts,
//! with exactly the registered kind and length.
//!
//! ## Rules
//!
//! | Material | Scalar kinds | Array kinds |
//! |----------|--------------|-------------|
//! | `Absent` | entropy draw | entropy draw of exactly the native length |
//! | `Scalar(v)` | `v`, XOR-folded to 32 bits if needed | SplitMix64 stream seeded with `v` |
//! | `Bytes` | first element | little-endian elements, zero-padded or truncated |
//! | `IntArray` / `LongArray` | first element | prefix, or expanded if too short |
//!
//! Arrays of the other width are re-chunked through their little-endian byte
//! image first. A short array keeps its elements as a prefix; the remainder
//! comes from a SplitMix64 stream seeded with a hash of the supplied
//! elements, so the result depends only on the input.
//!
//! Everything except `Absent` is deterministic.

use rng_core::source64::SplitMix64;
use rng_core::UniformRandomProvider;
use tracing::{error, trace, warn};

use super::entropy::{EntropySource, OsEntropy};
use super::{NativeSeed, SeedMaterial};
use crate::config::{FactoryConfig, DEFAULT_ENTROPY_ATTEMPTS};
use crate::error::SourceError;
use crate::registry::{AlgorithmDescriptor, NativeSeedKind};

/// Initial value of the element hash used to expand short arrays.
const HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Converts caller seed material into native seeds.
///
/// # Examples
///
/// ```rust
/// use rng_simple::{describe, NativeSeed, RandomSource, SeedConverter, SeedMaterial};
///
/// let converter = SeedConverter::new();
/// let seed = converter
///     .normalize(SeedMaterial::Bytes(vec![1, 0, 0, 0, 2]), describe(RandomSource::Kiss))
///     .unwrap();
/// assert_eq!(seed, NativeSeed::Array32(vec![1, 2, 0, 0]));
/// ```
#[derive(Clone, Debug)]
pub struct SeedConverter<E = OsEntropy> {
    entropy: E,
    max_attempts: u32,
}

impl SeedConverter<OsEntropy> {
    /// Creates a converter backed by operating-system entropy.
    pub fn new() -> Self {
        Self::with_entropy(OsEntropy, DEFAULT_ENTROPY_ATTEMPTS)
    }

    /// Creates a converter using the entropy retry bound of `config`.
    pub fn from_config(config: &FactoryConfig) -> Self {
        Self::with_entropy(OsEntropy, config.entropy_attempts())
    }
}

impl Default for SeedConverter<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> SeedConverter<E> {
    /// Creates a converter over a custom entropy source.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn with_entropy(entropy: E, max_attempts: u32) -> Self {
        Self {
            entropy,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Maximum number of entropy draws attempted per self-seed.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Normalises `material` into the native seed of `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] if `material` is absent and
    /// every entropy draw fails. Supplied material never fails.
    pub fn normalize(
        &self,
        material: SeedMaterial,
        descriptor: &AlgorithmDescriptor,
    ) -> Result<NativeSeed, SourceError> {
        let kind = descriptor.native_seed_kind();
        let length = descriptor.native_seed_length();
        trace!(
            algorithm = descriptor.name(),
            material = material_label(&material),
            ?kind,
            length,
            "normalising seed material"
        );

        let seed = match material {
            SeedMaterial::Absent => self.self_seed(kind, length)?,
            SeedMaterial::Scalar(v) => convert_scalar(v, kind, length),
            SeedMaterial::Bytes(bytes) => convert_bytes(&bytes, kind, length),
            SeedMaterial::IntArray(words) => convert_int_array(words, kind, length),
            SeedMaterial::LongArray(words) => convert_long_array(words, kind, length),
        };
        Ok(seed)
    }

    /// Draws a native seed of `kind` and `length` from the entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::EntropyUnavailable`] once every attempt failed.
    pub fn self_seed(&self, kind: NativeSeedKind, length: usize) -> Result<NativeSeed, SourceError> {
        let length = if kind.is_array() { length } else { 1 };
        let mut bytes = vec![0u8; kind.element_byte_size() * length];
        self.draw_entropy(&mut bytes)?;
        Ok(convert_bytes(&bytes, kind, length))
    }

    fn draw_entropy(&self, bytes: &mut [u8]) -> Result<(), SourceError> {
        let mut reason = String::new();
        for attempt in 1..=self.max_attempts {
            match self.entropy.fill(bytes) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "entropy draw failed"
                    );
                    reason = e.to_string();
                }
            }
        }
        error!(attempts = self.max_attempts, "entropy source exhausted");
        Err(SourceError::EntropyUnavailable {
            attempts: self.max_attempts,
            reason,
        })
    }
}

fn material_label(material: &SeedMaterial) -> &'static str {
    match material {
        SeedMaterial::Absent => "absent",
        SeedMaterial::Scalar(_) => "scalar",
        SeedMaterial::Bytes(_) => "bytes",
        SeedMaterial::IntArray(_) => "int_array",
        SeedMaterial::LongArray(_) => "long_array",
    }
}

/// Narrows a 64-bit value to 32 bits, keeping entropy from both halves.
#[inline]
fn fold(v: u64) -> u32 {
    (v ^ (v >> 32)) as u32
}

fn convert_scalar(v: u64, kind: NativeSeedKind, length: usize) -> NativeSeed {
    match kind {
        NativeSeedKind::Scalar32 => NativeSeed::Scalar32(fold(v)),
        NativeSeedKind::Scalar64 => NativeSeed::Scalar64(v),
        NativeSeedKind::Array32 => {
            let mut rng = SplitMix64::new(v);
            NativeSeed::Array32((0..length).map(|_| rng.next_int() as u32).collect())
        }
        NativeSeedKind::Array64 => {
            let mut rng = SplitMix64::new(v);
            NativeSeed::Array64((0..length).map(|_| rng.next_u64()).collect())
        }
    }
}

fn convert_bytes(bytes: &[u8], kind: NativeSeedKind, length: usize) -> NativeSeed {
    match kind.element_byte_size() {
        4 => {
            let mut words: Vec<u32> = bytes
                .chunks(4)
                .take(length)
                .map(|chunk| {
                    let mut buf = [0u8; 4];
                    buf[..chunk.len()].copy_from_slice(chunk);
                    u32::from_le_bytes(buf)
                })
                .collect();
            words.resize(length, 0);
            shape32(words, kind)
        }
        _ => {
            let mut words: Vec<u64> = bytes
                .chunks(8)
                .take(length)
                .map(|chunk| {
                    let mut buf = [0u8; 8];
                    buf[..chunk.len()].copy_from_slice(chunk);
                    u64::from_le_bytes(buf)
                })
                .collect();
            words.resize(length, 0);
            shape64(words, kind)
        }
    }
}

fn convert_int_array(words: Vec<u32>, kind: NativeSeedKind, length: usize) -> NativeSeed {
    match kind.element_byte_size() {
        4 => shape32(fit32(words, length), kind),
        _ => {
            let widened = words
                .chunks(2)
                .map(|pair| {
                    let low = u64::from(pair[0]);
                    let high = pair.get(1).copied().map_or(0, u64::from);
                    low | (high << 32)
                })
                .collect();
            shape64(fit64(widened, length), kind)
        }
    }
}

fn convert_long_array(words: Vec<u64>, kind: NativeSeedKind, length: usize) -> NativeSeed {
    match kind.element_byte_size() {
        8 => shape64(fit64(words, length), kind),
        _ => {
            let narrowed = words
                .iter()
                .flat_map(|&w| [w as u32, (w >> 32) as u32])
                .collect();
            shape32(fit32(narrowed, length), kind)
        }
    }
}

fn element_hash(words: impl ExactSizeIterator<Item = u64>) -> u64 {
    let mut h = HASH_SEED ^ words.len() as u64;
    for w in words {
        h = SplitMix64::mix(h ^ w);
    }
    h
}

fn fit32(mut words: Vec<u32>, length: usize) -> Vec<u32> {
    if words.len() >= length {
        words.truncate(length);
        return words;
    }
    let mut rng = SplitMix64::new(element_hash(words.iter().map(|&w| u64::from(w))));
    let missing = length - words.len();
    words.extend((0..missing).map(|_| rng.next_int() as u32));
    words
}

fn fit64(mut words: Vec<u64>, length: usize) -> Vec<u64> {
    if words.len() >= length {
        words.truncate(length);
        return words;
    }
    let mut rng = SplitMix64::new(element_hash(words.iter().copied()));
    let missing = length - words.len();
    words.extend((0..missing).map(|_| rng.next_u64()));
    words
}

fn shape32(words: Vec<u32>, kind: NativeSeedKind) -> NativeSeed {
    if kind.is_array() {
        NativeSeed::Array32(words)
    } else {
        NativeSeed::Scalar32(words.first().copied().unwrap_or_default())
    }
}

fn shape64(words: Vec<u64>, kind: NativeSeedKind) -> NativeSeed {
    if kind.is_array() {
        NativeSeed::Array64(words)
    } else {
        NativeSeed::Scalar64(words.first().copied().unwrap_or_default())
    }
}
