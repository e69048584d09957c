use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stock::StockRecord;

/// The numeric columns of a `StockRecord` that participate in statistics
/// (outlier removal and normalization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    ChangePercent,
    Pe,
    Pb,
    Roe,
    MarketCap,
    Volume,
    TurnoverRate,
}

impl Metric {
    /// Reads this metric's value out of a record.
    pub fn value_of(&self, record: &StockRecord) -> Decimal {
        match self {
            Metric::ChangePercent => record.change_percent,
            Metric::Pe => record.pe,
            Metric::Pb => record.pb,
            Metric::Roe => record.roe,
            Metric::MarketCap => record.market_cap,
            Metric::Volume => record.volume,
            Metric::TurnoverRate => record.turnover_rate,
        }
    }
}

/// Per-metric min/max bounds computed once over a cleaned collection.
///
/// `range` is `max - min`, replaced by 1 whenever the collection is constant
/// in that metric, so normalization never divides by zero. A single-record
/// collection therefore normalizes to 0, not 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationFactor {
    pub min: Decimal,
    pub max: Decimal,
    pub range: Decimal,
}

impl NormalizationFactor {
    pub fn from_bounds(min: Decimal, max: Decimal) -> Self {
        let spread = max - min;
        let range = if spread.is_zero() { Decimal::ONE } else { spread };
        Self { min, max, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn degenerate_range_is_floored_to_one() {
        let f = NormalizationFactor::from_bounds(dec!(7.5), dec!(7.5));
        assert_eq!(f.range, Decimal::ONE);
    }

    #[test]
    fn sub_unit_range_is_kept() {
        // Only a zero spread is replaced; a small one is used as-is.
        let f = NormalizationFactor::from_bounds(dec!(1.0), dec!(1.5));
        assert_eq!(f.range, dec!(0.5));
    }
}
