use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder labels used by upstream data feeds when a field could not be
/// resolved. Records carrying one of these are excluded before any statistics
/// are computed.
pub const UNKNOWN_SENTINELS: &[&str] = &["unknown", "unknown stock", "unknown industry"];

/// One row of market and fundamental data for a single security.
///
/// Field names follow the JSON corpus produced by the data pipeline
/// (camelCase on the wire). Records are consumed read-only by the screening
/// engine; scoring never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub code: String,
    pub name: String,
    pub industry: String,
    /// Latest close price.
    pub price: Decimal,
    /// Daily change in percent. The only numeric field allowed to be negative.
    pub change_percent: Decimal,
    /// Price-to-earnings ratio.
    pub pe: Decimal,
    /// Price-to-book ratio.
    pub pb: Decimal,
    /// Return on equity, in percent.
    pub roe: Decimal,
    pub market_cap: Decimal,
    pub volume: Decimal,
    /// Fraction of outstanding shares traded, in percent.
    pub turnover_rate: Decimal,
    /// Current volume relative to a trailing average baseline. Not every feed
    /// supplies it; strategies that need it skip records without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<Decimal>,
}

impl StockRecord {
    /// Whether this record carries enough information to participate in
    /// screening: identifying strings present and not a feed sentinel, and
    /// every required numeric field strictly positive (`change_percent` may
    /// have any sign).
    pub fn is_valid(&self) -> bool {
        let named = |s: &str| !s.is_empty() && !UNKNOWN_SENTINELS.contains(&s);

        named(&self.name)
            && named(&self.industry)
            && self.price > Decimal::ZERO
            && self.pe > Decimal::ZERO
            && self.pb > Decimal::ZERO
            && self.roe > Decimal::ZERO
            && self.market_cap > Decimal::ZERO
            && self.volume > Decimal::ZERO
            && self.turnover_rate > Decimal::ZERO
    }
}

/// A `StockRecord` annotated with the score a strategy assigned to it.
///
/// Results are ordered score-descending; ties keep the stable-sort order of
/// the input collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredStock {
    #[serde(flatten)]
    pub record: StockRecord,
    /// Strategy-specific score. Composite-style strategies produce 0-100,
    /// ratio-style strategies produce 0-1, filter strategies expose their
    /// sort metric.
    pub score: Decimal,
    /// Id of the strategy that produced this result.
    pub strategy: String,
}
