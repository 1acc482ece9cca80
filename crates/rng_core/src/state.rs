//! State capture and replay.
//!
//! [`RestorableState`] is an optional capability kept separate from
//! [`UniformRandomProvider`]: a generator that cannot meaningfully snapshot
//! itself simply does not implement it.
//!
//! Captured states are [`RandomProviderState`] values: an algorithm tag plus
//! an opaque little-endian payload written with [`StateWriter`] and read back
//! with [`StateReader`]. The layout is private to each generator.

use std::fmt;

use crate::error::RngError;
use crate::provider::UniformRandomProvider;

/// Opaque snapshot of a generator's internal state.
///
/// Immutable once produced. Applying it through
/// [`RestorableState::restore_state`] to an instance of the same algorithm
/// makes that instance continue the captured sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomProviderState {
    algorithm: String,
    payload: Vec<u8>,
}

impl RandomProviderState {
    /// Returns the tag of the algorithm the state was captured from.
    #[inline]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the size of the opaque payload in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns `true` if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Capture and replay of a generator's internal state.
pub trait RestorableState {
    /// Captures the current state. Has no effect on future output.
    fn save_state(&self) -> RandomProviderState;

    /// Overwrites the internal state with a previously captured one.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::IncompatibleState`] if `state` was captured from a
    /// different algorithm or its payload is malformed. The generator is
    /// unchanged on error.
    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError>;
}

/// A uniform provider that also supports state capture.
///
/// This is the type every registered generator is handed out as. It is
/// `Send` so an instance may be moved to another thread, but never shared.
pub trait RestorableUniformRandomProvider:
    UniformRandomProvider + RestorableState + fmt::Debug + Send
{
}

impl<T> RestorableUniformRandomProvider for T where
    T: UniformRandomProvider + RestorableState + fmt::Debug + Send
{
}

impl<R: RestorableState + ?Sized> RestorableState for Box<R> {
    fn save_state(&self) -> RandomProviderState {
        (**self).save_state()
    }

    fn restore_state(&mut self, state: &RandomProviderState) -> Result<(), RngError> {
        (**self).restore_state(state)
    }
}

/// Little-endian writer for a generator state payload.
#[derive(Debug)]
pub struct StateWriter {
    algorithm: &'static str,
    payload: Vec<u8>,
}

impl StateWriter {
    /// Starts a payload for the given algorithm tag.
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            payload: Vec::new(),
        }
    }

    /// Appends one 32-bit value.
    pub fn u32(mut self, value: u32) -> Self {
        self.payload.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends one 64-bit value.
    pub fn u64(mut self, value: u64) -> Self {
        self.payload.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Appends a slice of 32-bit values.
    pub fn u32s(mut self, values: &[u32]) -> Self {
        self.payload.reserve(values.len() * 4);
        for v in values {
            self.payload.extend_from_slice(&v.to_le_bytes());
        }
        self
    }

    /// Appends a slice of 64-bit values.
    pub fn u64s(mut self, values: &[u64]) -> Self {
        self.payload.reserve(values.len() * 8);
        for v in values {
            self.payload.extend_from_slice(&v.to_le_bytes());
        }
        self
    }

    /// Finishes the payload.
    pub fn finish(self) -> RandomProviderState {
        RandomProviderState {
            algorithm: self.algorithm.to_string(),
            payload: self.payload,
        }
    }
}

/// Little-endian reader for a generator state payload.
///
/// Construction checks the algorithm tag and the exact payload size, so the
/// individual reads cannot run past the end.
#[derive(Debug)]
pub struct StateReader<'a> {
    payload: &'a [u8],
    position: usize,
}

impl<'a> StateReader<'a> {
    /// Opens `state` for reading as `algorithm` with `expected_len` payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::IncompatibleState`] on a tag or size mismatch.
    pub fn open(
        state: &'a RandomProviderState,
        algorithm: &'static str,
        expected_len: usize,
    ) -> Result<Self, RngError> {
        if state.algorithm != algorithm {
            return Err(RngError::incompatible(
                algorithm,
                format!("state was captured from {}", state.algorithm),
            ));
        }
        if state.payload.len() != expected_len {
            return Err(RngError::incompatible(
                algorithm,
                format!(
                    "payload has {} bytes, expected {}",
                    state.payload.len(),
                    expected_len
                ),
            ));
        }
        Ok(Self {
            payload: &state.payload,
            position: 0,
        })
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.payload[self.position..self.position + N]);
        self.position += N;
        bytes
    }

    /// Reads one 32-bit value.
    pub fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    /// Reads one 64-bit value.
    pub fn u64(&mut self) -> u64 {
        u64::from_le_bytes(self.take())
    }

    /// Reads `out.len()` 32-bit values.
    pub fn u32s(&mut self, out: &mut [u32]) {
        for v in out.iter_mut() {
            *v = self.u32();
        }
    }

    /// Reads `out.len()` 64-bit values.
    pub fn u64s(&mut self, out: &mut [u64]) {
        for v in out.iter_mut() {
            *v = self.u64();
        }
    }
}
