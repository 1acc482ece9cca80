//! Entropy for self-seeding.

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Failure reported by an [`EntropySource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("entropy source failed: {0}")]
pub struct EntropyError(pub String);

/// A source of non-deterministic bytes.
///
/// Used only when a caller supplies no seed. Implementations must be
/// shareable across threads; the factory may be used concurrently.
pub trait EntropySource: Send + Sync {
    /// Fills `bytes` entirely, or reports why it could not.
    fn fill(&self, bytes: &mut [u8]) -> Result<(), EntropyError>;
}

/// Operating-system entropy via [`OsRng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, bytes: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(bytes)
            .map_err(|e| EntropyError(e.to_string()))
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, bytes: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        // 2^-512 chance of a false failure.
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_buffer() {
        let mut empty: [u8; 0] = [];
        assert!(OsEntropy.fill(&mut empty).is_ok());
    }
}
