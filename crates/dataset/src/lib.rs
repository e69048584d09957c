//! Data preparation for the screening engine.
//!
//! This crate turns a raw stock collection into the immutable
//! [`PreparedDataset`] snapshot the strategies score against:
//!
//! 1. drop records with missing or sentinel fields ([`cleaner`]),
//! 2. drop statistical outliers per metric via the IQR rule ([`cleaner`]),
//! 3. compute per-metric min/max normalization factors ([`normalizer`]).
//!
//! `prepare` is a pure function; callers hold the snapshot for as long as the
//! underlying collection is current and build a fresh one when it changes.
//! There is no cache to invalidate.

pub mod cleaner;
pub mod normalizer;
pub mod snapshot;

pub use cleaner::clean;
pub use normalizer::{compute_factors, normalize};
pub use snapshot::{prepare, PreparedDataset};
