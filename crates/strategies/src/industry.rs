use std::sync::Arc;

use core_types::ScoredStock;
use dataset::PreparedDataset;
use serde_json::{json, Map, Value};

use crate::{rank, ParamField, ParamSchema, ResolvedParams, StrategyDefinition};

pub const ID: &str = "industry";

const DEFAULT_STOCKS_PER_INDUSTRY: usize = 5;

/// Industry rotation: the best stocks (by ROE) out of each target industry,
/// or out of every industry present when none are specified. ROE is the
/// result score.
pub fn definition() -> StrategyDefinition {
    let default_params: Map<String, Value> = json!({
        "targetIndustries": [],
        "stocksPerIndustry": DEFAULT_STOCKS_PER_INDUSTRY,
    })
    .as_object()
    .cloned()
    .unwrap_or_default();

    StrategyDefinition {
        id: ID.to_string(),
        name: "Industry rotation".to_string(),
        description: "Top stocks by return on equity within each target industry".to_string(),
        default_params,
        schema: ParamSchema::new(vec![
            ParamField::string_array("targetIndustries"),
            ParamField::count("stocksPerIndustry", 1, 100),
        ]),
        score: Arc::new(score),
    }
}

fn score(data: &PreparedDataset, params: &ResolvedParams) -> Vec<ScoredStock> {
    let per_industry = params
        .count("stocksPerIndustry")
        .unwrap_or(DEFAULT_STOCKS_PER_INDUSTRY);

    let mut industries = params.string_list("targetIndustries");
    if industries.is_empty() {
        // First-seen order of the cleaned snapshot keeps reruns identical.
        for record in data.cleaned() {
            if !industries.contains(&record.industry) {
                industries.push(record.industry.clone());
            }
        }
    }

    let mut portfolio = Vec::new();
    for industry in &industries {
        let members: Vec<ScoredStock> = data
            .cleaned()
            .iter()
            .filter(|s| &s.industry == industry)
            .map(|stock| ScoredStock {
                record: stock.clone(),
                score: stock.roe,
                strategy: ID.to_string(),
            })
            .collect();
        portfolio.extend(rank(members, per_industry));
    }

    let total = portfolio.len();
    rank(portfolio, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::StockRecord;
    use dataset::prepare;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(code: &str, industry: &str, roe: Decimal) -> StockRecord {
        StockRecord {
            code: code.to_string(),
            name: format!("stock {code}"),
            industry: industry.to_string(),
            price: dec!(20),
            change_percent: dec!(1),
            pe: dec!(10),
            pb: dec!(1.5),
            roe,
            market_cap: dec!(600),
            volume: dec!(40000000),
            turnover_rate: dec!(2),
            volume_ratio: None,
        }
    }

    fn params(value: Value) -> ResolvedParams {
        ResolvedParams::new(value.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn picks_the_best_stock_per_target_industry() {
        let snapshot = prepare(vec![
            record("1", "banking", dec!(10)),
            record("2", "banking", dec!(20)),
            record("3", "liquor", dec!(30)),
        ]);
        let results = score(
            &snapshot,
            &params(json!({ "targetIndustries": ["banking"], "stocksPerIndustry": 1 })),
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.code, "2");
        assert_eq!(results[0].score, dec!(20));
    }

    #[test]
    fn no_targets_means_every_industry_present() {
        let snapshot = prepare(vec![
            record("1", "banking", dec!(10)),
            record("2", "liquor", dec!(30)),
            record("3", "banking", dec!(20)),
        ]);
        let results = score(&snapshot, &params(json!({ "stocksPerIndustry": 1 })));
        assert_eq!(results.len(), 2);
        // Concatenated portfolio is re-ranked by score.
        assert_eq!(results[0].record.code, "2");
        assert_eq!(results[1].record.code, "3");
    }

    #[test]
    fn unknown_industry_contributes_nothing() {
        let snapshot = prepare(vec![record("1", "banking", dec!(10))]);
        let results = score(
            &snapshot,
            &params(json!({ "targetIndustries": ["aerospace"] })),
        );
        assert!(results.is_empty());
    }
}
