use std::sync::Arc;

use core_types::{ScoredStock, StockRecord};
use dataset::PreparedDataset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "breakout";

const DEFAULT_COUNT: usize = 5;

/// Short-term breakout screen over single-day data.
///
/// The strict tier simulates the three-factor confirmation (calm base,
/// building volume, confirmed breakout) with single-day proxies; when it
/// yields fewer than `count` candidates the relaxed tier takes over. Records
/// without a volume ratio are ineligible for either tier.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({ "count": DEFAULT_COUNT })
        .as_object()
        .cloned()
        .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Breakout".to_string(),
        description: "Strong stocks breaking out on expanding volume".to_string(),
        default_params,
        schema: ParamSchema::new(vec![ParamField::count("count", 1, 100)]),
        score: Arc::new(score),
    }
}

fn passes_strict(stock: &StockRecord) -> bool {
    let Some(volume_ratio) = stock.volume_ratio else {
        return false;
    };
    // Low turnover stands in for a calm base, the 1.5x ratio for building
    // volume, the positive change for a rising price center of gravity, and
    // the >2% / >2x pair for the breakout itself.
    stock.turnover_rate < dec!(5)
        && volume_ratio > dec!(1.5)
        && stock.change_percent > Decimal::ZERO
        && stock.change_percent > dec!(2)
        && volume_ratio > dec!(2)
}

fn passes_relaxed(stock: &StockRecord) -> bool {
    let Some(volume_ratio) = stock.volume_ratio else {
        return false;
    };
    volume_ratio > dec!(1.2)
        && stock.change_percent > Decimal::ZERO
        && stock.change_percent > dec!(1)
        && volume_ratio > dec!(1.5)
}

/// Breakout strength on a 0-100 scale: volume ratio (30%), daily change
/// (30%), turnover (20%), plus flat fundamentals bonuses for a sane PE and a
/// solid ROE (10% each).
pub fn breakout_score(stock: &StockRecord) -> Decimal {
    let Some(volume_ratio) = stock.volume_ratio else {
        return Decimal::ZERO;
    };

    let volume_score = (volume_ratio / dec!(3)).min(Decimal::ONE) * dec!(30);
    let change_score = (stock.change_percent / dec!(5)).min(Decimal::ONE) * dec!(30);
    let turnover_score = (stock.turnover_rate / dec!(10)).min(Decimal::ONE) * dec!(20);

    let mut score = volume_score + change_score + turnover_score;
    if stock.pe > Decimal::ZERO && stock.pe < dec!(40) {
        score += dec!(10);
    }
    if stock.roe > dec!(10) {
        score += dec!(10);
    }
    score.clamp(Decimal::ZERO, dec!(100))
}

fn score(data: &PreparedDataset, params: &ResolvedParams) -> Vec<ScoredStock> {
    let count = params.count("count").unwrap_or(DEFAULT_COUNT);

    let strict: Vec<&StockRecord> = data.cleaned().iter().filter(|s| passes_strict(s)).collect();
    let candidates = if strict.len() < count {
        tracing::debug!(
            strict = strict.len(),
            count,
            "strict breakout tier under target, relaxing filter"
        );
        data.cleaned().iter().filter(|s| passes_relaxed(s)).collect()
    } else {
        strict
    };

    let scored = candidates
        .into_iter()
        .map(|stock| ScoredStock {
            record: stock.clone(),
            score: breakout_score(stock),
            strategy: ID.to_string(),
        })
        .collect();

    rank(scored, count)
}
