use std::collections::HashMap;

use core_types::{Metric, NormalizationFactor, StockRecord};
use rust_decimal::Decimal;

/// The metrics that get normalization factors.
pub const NORMALIZED_METRICS: [Metric; 7] = [
    Metric::ChangePercent,
    Metric::Pe,
    Metric::Pb,
    Metric::Roe,
    Metric::MarketCap,
    Metric::Volume,
    Metric::TurnoverRate,
];

/// Computes per-metric min/max factors over a cleaned collection. An empty
/// collection yields an empty map, and `normalize` then maps everything to 0.
pub fn compute_factors(records: &[StockRecord]) -> HashMap<Metric, NormalizationFactor> {
    let mut factors = HashMap::new();
    let Some(first) = records.first() else {
        return factors;
    };

    for metric in NORMALIZED_METRICS {
        let mut min = metric.value_of(first);
        let mut max = min;
        for record in &records[1..] {
            let v = metric.value_of(record);
            min = min.min(v);
            max = max.max(v);
        }
        factors.insert(metric, NormalizationFactor::from_bounds(min, max));
    }
    factors
}

/// Maps `value` to [0, 1] using the factor for `metric`.
///
/// The output is clamped even for out-of-range inputs, and a metric without a
/// factor normalizes to 0. Division by zero cannot occur because factor
/// ranges are floored to 1 on construction.
pub fn normalize(
    factors: &HashMap<Metric, NormalizationFactor>,
    value: Decimal,
    metric: Metric,
) -> Decimal {
    match factors.get(&metric) {
        Some(f) => ((value - f.min) / f.range).clamp(Decimal::ZERO, Decimal::ONE),
        None => Decimal::ZERO,
    }
}
