use std::sync::Arc;

use core_types::{Metric, ScoredStock, StockRecord};
use dataset::PreparedDataset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "short_term_growth";

const DEFAULT_COUNT: usize = 1;

/// Short-term upside screen blending technicals (70%) with fundamentals
/// (30%), producing a 0-1 score. The default count of 1 mirrors its original
/// "pick me one stock" role.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({ "count": DEFAULT_COUNT })
        .as_object()
        .cloned()
        .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Short-term growth".to_string(),
        description: "Multi-factor blend of momentum, turnover and valuation for \
                      short-horizon upside"
            .to_string(),
        default_params,
        schema: ParamSchema::new(vec![ParamField::count("count", 1, 100)]),
        score: Arc::new(score),
    }
}

/// 0-1 composite: technical = change(0.4) + turnover(0.3) + volume relative
/// to market cap(0.3); fundamental = inverted PE(0.4) + ROE(0.6); blended
/// 70/30. The relative volume reuses the volume factor bounds, as the
/// original scoring did.
pub fn short_term_score(data: &PreparedDataset, stock: &StockRecord) -> Decimal {
    let change = data.normalize(stock.change_percent, Metric::ChangePercent);
    let turnover = data.normalize(stock.turnover_rate, Metric::TurnoverRate);
    let relative_volume = data.normalize(stock.volume / stock.market_cap, Metric::Volume);
    let technical = change * dec!(0.4) + turnover * dec!(0.3) + relative_volume * dec!(0.3);

    let pe_score = Decimal::ONE - data.normalize(stock.pe, Metric::Pe);
    let roe_score = data.normalize(stock.roe, Metric::Roe);
    let fundamental = pe_score * dec!(0.4) + roe_score * dec!(0.6);

    technical * dec!(0.7) + fundamental * dec!(0.3)
}

fn score(data: &PreparedDataset, params: &ResolvedParams) -> Vec<ScoredStock> {
    let count = params.count("count").unwrap_or(DEFAULT_COUNT);

    let scored = data
        .cleaned()
        .iter()
        .map(|stock| ScoredStock {
            record: stock.clone(),
            score: short_term_score(data, stock),
            strategy: ID.to_string(),
        })
        .collect();

    rank(scored, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::prepare;

    fn record(code: &str, change: Decimal, turnover: Decimal, roe: Decimal) -> StockRecord {
        StockRecord {
            code: code.to_string(),
            name: format!("stock {code}"),
            industry: "pharma".to_string(),
            price: dec!(18),
            change_percent: change,
            pe: dec!(20),
            pb: dec!(2.5),
            roe,
            market_cap: dec!(250),
            volume: dec!(30000000),
            turnover_rate: turnover,
            volume_ratio: None,
        }
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let snapshot = prepare(vec![
            record("1", dec!(5), dec!(8), dec!(25)),
            record("2", dec!(-2), dec!(1), dec!(6)),
            record("3", dec!(1), dec!(4), dec!(14)),
        ]);
        let params = ResolvedParams::new(
            json!({ "count": 3 }).as_object().cloned().unwrap_or_default(),
        );
        for r in score(&snapshot, &params) {
            assert!(r.score >= Decimal::ZERO && r.score <= Decimal::ONE);
        }
    }

    #[test]
    fn default_count_returns_the_single_best() {
        let snapshot = prepare(vec![
            record("hot", dec!(5), dec!(8), dec!(25)),
            record("cold", dec!(-2), dec!(1), dec!(6)),
        ]);
        let results = score(&snapshot, &ResolvedParams::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.code, "hot");
    }
}
