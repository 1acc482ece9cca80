//! # rng_core: Uniform Random Providers
//!
//! ## Layer 1 (Core) Role
//!
//! rng_core is the bottom layer of the workspace, providing:
//! - The uniform draw capability: [`UniformRandomProvider`] (`provider`)
//! - The state capture capability: [`RestorableState`] (`state`)
//! - 32-bit generators: JDK LCG, WELL family, MT19937, ISAAC, KISS, MWC-256 (`source32`)
//! - 64-bit generators: SplitMix64, XorShift1024*, TwoCmres, MT19937-64 (`source64`)
//! - Error type: [`RngError`] (`error`)
//!
//! Generators take their native seed (a scalar or a slice of the native
//! element width) directly. Normalisation of arbitrary seeds into that shape
//! lives in `rng_simple`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rng_core::source64::SplitMix64;
//! use rng_core::{RestorableState, UniformRandomProvider};
//!
//! let mut rng = SplitMix64::new(42);
//! let state = rng.save_state();
//!
//! let first = rng.next_long();
//! rng.restore_state(&state).unwrap();
//! assert_eq!(rng.next_long(), first);
//!
//! let die = rng.next_int_bounded(6).unwrap();
//! assert!((0..6).contains(&die));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`RandomProviderState`]

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod provider;
pub mod source32;
pub mod source64;
pub mod state;

pub use error::RngError;
pub use provider::UniformRandomProvider;
pub use state::{RandomProviderState, RestorableState, RestorableUniformRandomProvider};
