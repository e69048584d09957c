use std::sync::Arc;

use core_types::{Metric, ScoredStock};
use dataset::PreparedDataset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "composite";

const WEIGHT_KEYS: &[&str] = &["pe", "pb", "roe", "volume", "change", "industry"];
const DEFAULT_TOP_N: usize = 20;

/// The weighted multi-factor strategy behind the `default` alias.
///
/// Each factor is normalized to [0, 1] against the snapshot (inverted for
/// valuation ratios, where lower is better), combined by weight and scaled to
/// a 0-100 score.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({
        "topN": DEFAULT_TOP_N,
        "weights": {
            "pe": 0.2,
            "pb": 0.15,
            "roe": 0.25,
            "volume": 0.1,
            "change": 0.1,
            "industry": 0.2,
        },
    })
    .as_object()
    .cloned()
    .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Composite score".to_string(),
        description: "Weighted multi-factor ranking across valuation, profitability, \
                      liquidity and momentum"
            .to_string(),
        default_params,
        schema: ParamSchema::new(vec![
            ParamField::count("topN", 1, 500),
            ParamField::weight_table("weights", WEIGHT_KEYS),
        ]),
        score: Arc::new(score),
    }
}

fn score(data: &PreparedDataset, params: &ResolvedParams) -> Vec<ScoredStock> {
    let top_n = params.count("topN").unwrap_or(DEFAULT_TOP_N);
    // A partial weight table falls back per key, like the defaults it shadows.
    let weight = |key: &str, fallback: Decimal| {
        params.nested_decimal("weights", key).unwrap_or(fallback)
    };
    let w_pe = weight("pe", dec!(0.2));
    let w_pb = weight("pb", dec!(0.15));
    let w_roe = weight("roe", dec!(0.25));
    let w_volume = weight("volume", dec!(0.1));
    let w_change = weight("change", dec!(0.1));
    let w_industry = weight("industry", dec!(0.2));

    let scored = data
        .cleaned()
        .iter()
        .map(|stock| {
            // Valuation ratios score inversely: cheap is good.
            let pe_score = Decimal::ONE - data.normalize(stock.pe, Metric::Pe);
            let pb_score = Decimal::ONE - data.normalize(stock.pb, Metric::Pb);
            let roe_score = data.normalize(stock.roe, Metric::Roe);
            let volume_score = data.normalize(stock.volume, Metric::Volume);
            // Momentum maps 10% daily change to a full point; losses score 0.
            let change_score = (stock.change_percent / dec!(10)).max(Decimal::ZERO);
            // Industry diversification was never implemented upstream; the
            // constant keeps the weight table's meaning unchanged.
            let industry_score = Decimal::ONE;

            let weighted = pe_score * w_pe
                + pb_score * w_pb
                + roe_score * w_roe
                + volume_score * w_volume
                + change_score * w_change
                + industry_score * w_industry;

            ScoredStock {
                record: stock.clone(),
                score: (weighted * dec!(100)).clamp(Decimal::ZERO, dec!(100)),
                strategy: ID.to_string(),
            }
        })
        .collect();

    rank(scored, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::StockRecord;
    use dataset::prepare;

    fn record(code: &str, pe: Decimal, roe: Decimal, change: Decimal) -> StockRecord {
        StockRecord {
            code: code.to_string(),
            name: format!("stock {code}"),
            industry: "tech".to_string(),
            price: dec!(30),
            change_percent: change,
            pe,
            pb: dec!(2),
            roe,
            market_cap: dec!(500),
            volume: dec!(50000000),
            turnover_rate: dec!(3),
            volume_ratio: None,
        }
    }

    fn snapshot() -> PreparedDataset {
        prepare(vec![
            record("1", dec!(8), dec!(22), dec!(3)),
            record("2", dec!(35), dec!(9), dec!(-2)),
            record("3", dec!(16), dec!(15), dec!(1)),
        ])
    }

    #[test]
    fn scores_are_bounded_to_0_100() {
        let results = score(&snapshot(), &ResolvedParams::default());
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.score >= Decimal::ZERO && r.score <= dec!(100));
        }
    }

    #[test]
    fn results_are_sorted_descending() {
        let results = score(&snapshot(), &ResolvedParams::default());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn cheap_profitable_riser_outranks_expensive_faller() {
        let results = score(&snapshot(), &ResolvedParams::default());
        assert_eq!(results[0].record.code, "1");
        assert_eq!(results.last().unwrap().record.code, "2");
    }

    #[test]
    fn top_n_truncates() {
        let params = ResolvedParams::new(
            json!({ "topN": 1 }).as_object().cloned().unwrap_or_default(),
        );
        let results = score(&snapshot(), &params);
        assert_eq!(results.len(), 1);
    }
}
