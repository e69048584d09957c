use core_types::StockRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// The outcome of the additive risk rules for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub score: Decimal,
    /// Human-readable labels of every rule that fired.
    pub factors: Vec<String>,
}

/// Scores a stock against a fixed rule table; each rule that fires adds its
/// weight and its label. A total strictly above 3 is high risk, strictly
/// below 1.5 is low, everything between (both boundaries included) is medium.
pub fn assess_risk(stock: &StockRecord) -> RiskAssessment {
    let rules: [(bool, Decimal, &str); 7] = [
        (stock.pe > dec!(50), dec!(1), "high PE"),
        (
            stock.pe > Decimal::ZERO && stock.pe < dec!(5),
            dec!(0.5),
            "abnormally low PE",
        ),
        (stock.pb > dec!(5), dec!(0.8), "high PB"),
        (
            stock.change_percent.abs() > dec!(10),
            dec!(1.2),
            "high volatility",
        ),
        (stock.turnover_rate > dec!(10), dec!(0.5), "high turnover"),
        // Market cap is in hundred-millions of CNY, so 50 means 5 billion.
        (stock.market_cap < dec!(50), dec!(0.3), "small-cap risk"),
        (stock.roe < dec!(5), dec!(0.5), "weak profitability"),
    ];

    let mut score = Decimal::ZERO;
    let mut factors = Vec::new();
    for (fired, weight, label) in rules {
        if fired {
            score += weight;
            factors.push(label.to_string());
        }
    }

    let level = if score > dec!(3) {
        RiskLevel::High
    } else if score < dec!(1.5) {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    };

    RiskAssessment { level, score, factors }
}
