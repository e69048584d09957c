use std::collections::HashMap;

use core_types::{Metric, NormalizationFactor, StockRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{cleaner, normalizer};

/// An immutable snapshot of one raw collection, its cleaned subset and the
/// normalization factors derived from that subset.
///
/// Strategies only ever read from a snapshot, so one instance can be shared
/// across any number of concurrent scoring calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreparedDataset {
    raw: Vec<StockRecord>,
    cleaned: Vec<StockRecord>,
    factors: HashMap<Metric, NormalizationFactor>,
}

/// Builds a snapshot from a raw collection. Pure: same input, same snapshot.
pub fn prepare(raw: Vec<StockRecord>) -> PreparedDataset {
    let cleaned = cleaner::clean(&raw);
    let factors = normalizer::compute_factors(&cleaned);
    tracing::debug!(raw = raw.len(), cleaned = cleaned.len(), "prepared dataset");
    PreparedDataset { raw, cleaned, factors }
}

impl PreparedDataset {
    pub fn raw(&self) -> &[StockRecord] {
        &self.raw
    }

    /// The records that survived cleaning, in input order.
    pub fn cleaned(&self) -> &[StockRecord] {
        &self.cleaned
    }

    pub fn factors(&self) -> &HashMap<Metric, NormalizationFactor> {
        &self.factors
    }

    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty()
    }

    /// Normalizes `value` against this snapshot's factors, clamped to [0, 1].
    pub fn normalize(&self, value: Decimal, metric: Metric) -> Decimal {
        normalizer::normalize(&self.factors, value, metric)
    }
}
