//! # Sift Strategy Library
//!
//! This crate contains the scoring and filtering logic of the screening
//! engine. It defines the [`StrategyDefinition`] shape, the
//! [`StrategyCatalog`] registry, and the built-in strategies.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   HTTP, files, or configuration. It depends only on `core-types` and
//!   `dataset`.
//! - **Explicit registry:** The catalog is a plain value constructed at
//!   startup and passed by reference to the selection service. Strategies are
//!   plain function values keyed by id; there is no global state and no
//!   reflection-style method dispatch.
//! - **Extensibility:** Adding a strategy means building a
//!   `StrategyDefinition` (closures welcome) and registering it; duplicate
//!   ids are rejected.
//!
//! Every scoring function is pure over its inputs: given the same snapshot
//! and parameters it returns the same descending-sorted, truncated results.

use std::fmt;
use std::sync::Arc;

use dataset::PreparedDataset;
use serde_json::{Map, Value};

pub mod breakout;
pub mod catalog;
pub mod composite;
pub mod error;
pub mod growth;
pub mod industry;
pub mod params;
pub mod short_term;
pub mod value;

pub use catalog::StrategyCatalog;
pub use error::StrategyError;
pub use params::{ParamField, ParamKind, ParamSchema, ResolvedParams};

use core_types::ScoredStock;

/// The scoring function of one strategy: snapshot in, sorted and truncated
/// results out. `Arc` so custom strategies can be registered as closures.
pub type ScoreFn = Arc<dyn Fn(&PreparedDataset, &ResolvedParams) -> Vec<ScoredStock> + Send + Sync>;

/// A named, registered strategy: identity, defaults, parameter schema and the
/// scoring function. Immutable once registered.
#[derive(Clone)]
pub struct StrategyDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Defaults merged under caller-supplied parameters before validation.
    pub default_params: Map<String, Value>,
    pub schema: ParamSchema,
    pub score: ScoreFn,
}

/// Orders results score-descending and truncates to `limit`. The sort is
/// stable, so ties keep the input order of the snapshot — reruns over the
/// same data produce identical output.
pub(crate) fn rank(mut results: Vec<ScoredStock>, limit: usize) -> Vec<ScoredStock> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);
    results
}

impl fmt::Debug for StrategyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("default_params", &self.default_params)
            .finish_non_exhaustive()
    }
}
