use std::sync::Arc;

use core_types::ScoredStock;
use dataset::PreparedDataset;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "value";

const DEFAULT_TOP_N: usize = 20;

/// Classic value screen: cheap on earnings and book, strongly profitable.
/// The hard filter is `pe < 15 && pb < 2 && roe > 15`; survivors rank by ROE,
/// which is also exposed as the result score.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({ "topN": DEFAULT_TOP_N })
        .as_object()
        .cloned()
        .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Value".to_string(),
        description: "Low-PE, low-PB stocks with high return on equity".to_string(),
        default_params,
        schema: ParamSchema::new(vec![ParamField::count("topN", 1, 500)]),
        score: Arc::new(score),
    }
}

fn score(data: &PreparedDataset, params: &ResolvedParams) -> Vec<ScoredStock> {
    let top_n = params.count("topN").unwrap_or(DEFAULT_TOP_N);

    let picks = data
        .cleaned()
        .iter()
        .filter(|s| s.pe < dec!(15) && s.pb < dec!(2) && s.roe > dec!(15))
        .map(|stock| ScoredStock {
            record: stock.clone(),
            score: stock.roe,
            strategy: ID.to_string(),
        })
        .collect();

    rank(picks, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::StockRecord;
    use dataset::prepare;
    use rust_decimal::Decimal;

    fn record(code: &str, pe: Decimal, pb: Decimal, roe: Decimal) -> StockRecord {
        StockRecord {
            code: code.to_string(),
            name: format!("stock {code}"),
            industry: "banking".to_string(),
            price: dec!(12),
            change_percent: dec!(0.5),
            pe,
            pb,
            roe,
            market_cap: dec!(800),
            volume: dec!(90000000),
            turnover_rate: dec!(1.2),
            volume_ratio: None,
        }
    }

    #[test]
    fn only_records_passing_every_filter_survive() {
        // Record 2 fails pe < 15, record 3 fails pb < 2.
        let snapshot = prepare(vec![
            record("1", dec!(10), dec!(1), dec!(20)),
            record("2", dec!(20), dec!(1), dec!(25)),
            record("3", dec!(12), dec!(3), dec!(30)),
        ]);
        let results = score(&snapshot, &ResolvedParams::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.code, "1");
        assert_eq!(results[0].score, dec!(20));
    }

    #[test]
    fn survivors_rank_by_roe_descending() {
        let snapshot = prepare(vec![
            record("low", dec!(10), dec!(1), dec!(16)),
            record("high", dec!(11), dec!(1.2), dec!(28)),
            record("mid", dec!(9), dec!(1.5), dec!(21)),
        ]);
        let results = score(&snapshot, &ResolvedParams::default());
        let codes: Vec<&str> = results.iter().map(|r| r.record.code.as_str()).collect();
        assert_eq!(codes, vec!["high", "mid", "low"]);
    }

    #[test]
    fn result_length_is_bounded_by_filter_and_top_n() {
        let snapshot = prepare(vec![
            record("1", dec!(10), dec!(1), dec!(20)),
            record("2", dec!(11), dec!(1), dec!(21)),
        ]);
        let params = ResolvedParams::new(
            json!({ "topN": 1 }).as_object().cloned().unwrap_or_default(),
        );
        assert_eq!(score(&snapshot, &params).len(), 1);
    }
}
