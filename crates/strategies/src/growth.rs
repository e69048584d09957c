use std::sync::Arc;

use core_types::ScoredStock;
use dataset::PreparedDataset;
use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "growth";

const DEFAULT_TOP_N: usize = 20;

/// Growth screen: rising price, liquid trading, and a PE in the band where
/// the market already prices in expansion (`20 < pe < 50`). Survivors rank by
/// daily change, which doubles as the result score.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({ "topN": DEFAULT_TOP_N })
        .as_object()
        .cloned()
        .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Growth".to_string(),
        description: "Rising, actively traded stocks with growth-priced earnings".to_string(),
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
        .filter(|s| {
            s.change_percent > dec!(0)
                && s.volume > dec!(10000000)
                && s.pe > dec!(20)
                && s.pe < dec!(50)
        })
        .map(|stock| ScoredStock {
            record: stock.clone(),
            score: stock.change_percent,
            strategy: ID.to_string(),
        })
        .collect();

    rank(picks, top_n)
}
