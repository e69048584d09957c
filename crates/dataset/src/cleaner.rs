use core_types::{Metric, StockRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The metrics screened for outliers, applied in this order. Each pass
/// filters the survivors of the previous one, so the passes are cumulative.
const OUTLIER_METRICS: [Metric; 5] = [
    Metric::ChangePercent,
    Metric::Pe,
    Metric::Roe,
    Metric::TurnoverRate,
    Metric::Volume,
];

/// Filters a raw collection down to the records that may participate in
/// screening: the required-field validity check first, then IQR outlier
/// removal per metric.
pub fn clean(records: &[StockRecord]) -> Vec<StockRecord> {
    let valid: Vec<StockRecord> = records.iter().filter(|r| r.is_valid()).cloned().collect();
    if valid.len() < records.len() {
        tracing::debug!(
            dropped = records.len() - valid.len(),
            "dropped records with missing or sentinel fields"
        );
    }
    remove_outliers(valid)
}

/// Removes records falling outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` for each
/// metric in [`OUTLIER_METRICS`]. Quartiles are taken by sorted-array
/// indexing at `floor(n*0.25)` and `floor(n*0.75)`. An empty survivor set
/// short-circuits the remaining passes instead of erroring.
pub fn remove_outliers(mut survivors: Vec<StockRecord>) -> Vec<StockRecord> {
    for metric in OUTLIER_METRICS {
        if survivors.is_empty() {
            break;
        }

        let mut values: Vec<Decimal> = survivors.iter().map(|r| metric.value_of(r)).collect();
        values.sort_unstable();
        let q1 = values[values.len() / 4];
        let q3 = values[values.len() * 3 / 4];
        let iqr = q3 - q1;
        let lower = q1 - dec!(1.5) * iqr;
        let upper = q3 + dec!(1.5) * iqr;

        let before = survivors.len();
        survivors.retain(|r| {
            let v = metric.value_of(r);
            v >= lower && v <= upper
        });
        if survivors.len() < before {
            tracing::debug!(
                ?metric,
                dropped = before - survivors.len(),
                %lower,
                %upper,
                "removed outliers"
            );
        }
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, change: Decimal) -> StockRecord {
        StockRecord {
            code: code.to_string(),
            name: format!("stock {code}"),
            industry: "manufacturing".to_string(),
            price: dec!(10),
            change_percent: change,
            pe: dec!(12),
            pb: dec!(1.5),
            roe: dec!(15),
            market_cap: dec!(120),
            volume: dec!(20000000),
            turnover_rate: dec!(3),
            volume_ratio: None,
        }
    }

    #[test]
    fn invalid_records_are_dropped_before_statistics() {
        let mut bad = record("000002", dec!(1));
        bad.industry = "unknown".to_string();
        let good = record("000001", dec!(1));

        let cleaned = clean(&[bad, good.clone()]);
        assert_eq!(cleaned, vec![good]);
    }

    #[test]
    fn cleaning_never_grows_the_collection() {
        let records: Vec<StockRecord> = (0..20)
            .map(|i| record(&format!("{i:06}"), Decimal::from(i % 7)))
            .collect();
        assert!(clean(&records).len() <= records.len());
    }

    #[test]
    fn extreme_value_is_removed_by_iqr() {
        // 19 tightly clustered change_percent values and one absurd spike.
        let mut records: Vec<StockRecord> = (0..19)
            .map(|i| record(&format!("{i:06}"), Decimal::from(i % 3)))
            .collect();
        records.push(record("999999", dec!(500)));

        let cleaned = clean(&records);
        assert!(cleaned.iter().all(|r| r.code != "999999"));
        assert_eq!(cleaned.len(), 19);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(clean(&[]).is_empty());
    }

    #[test]
    fn all_invalid_input_short_circuits_outlier_passes() {
        let mut bad = record("000001", dec!(1));
        bad.pe = Decimal::ZERO;
        assert!(clean(&[bad]).is_empty());
    }
}
