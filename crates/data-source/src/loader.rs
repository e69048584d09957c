use std::fs;
use std::path::Path;

use core_types::StockRecord;
use serde_json::Value;

use crate::error::DataSourceError;

/// Reads a stock corpus file from disk.
///
/// Accepts the formats the data pipeline has produced over time: a bare JSON
/// array of records, or an envelope object carrying the array under a `data`
/// or `stocks` key.
pub fn load_records(path: &Path) -> Result<Vec<StockRecord>, DataSourceError> {
    let raw = fs::read_to_string(path).map_err(|source| DataSourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&raw)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded stock data");
    Ok(records)
}

/// Parses corpus JSON in any of the supported shapes.
pub fn parse_records(raw: &str) -> Result<Vec<StockRecord>, DataSourceError> {
    let value: Value = serde_json::from_str(raw)?;
    let array = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope
            .remove("data")
            .or_else(|| envelope.remove("stocks"))
        {
            Some(Value::Array(items)) => items,
            _ => return Err(DataSourceError::UnexpectedShape),
        },
        _ => return Err(DataSourceError::UnexpectedShape),
    };

    array
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(DataSourceError::Parse))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const RECORD: &str = r#"{
        "code": "600036",
        "name": "China Merchants Bank",
        "industry": "banking",
        "price": 34.12,
        "changePercent": 0.8,
        "pe": 6.3,
        "pb": 0.95,
        "roe": 15.7,
        "marketCap": 8600,
        "volume": 52000000,
        "turnoverRate": 0.31
    }"#;

    #[test]
    fn parses_a_bare_array() {
        let records = parse_records(&format!("[{RECORD}]")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price, dec!(34.12));
    }

    #[test]
    fn parses_data_and_stocks_envelopes() {
        for key in ["data", "stocks"] {
            let records =
                parse_records(&format!(r#"{{ "{key}": [{RECORD}], "total": 1 }}"#)).unwrap();
            assert_eq!(records.len(), 1, "envelope key {key}");
        }
    }

    #[test]
    fn rejects_envelopes_without_a_record_array() {
        assert!(matches!(
            parse_records(r#"{ "total": 0 }"#),
            Err(DataSourceError::UnexpectedShape)
        ));
        assert!(matches!(
            parse_records("42"),
            Err(DataSourceError::UnexpectedShape)
        ));
    }

    #[test]
    fn surfaces_malformed_records() {
        assert!(matches!(
            parse_records(r#"[{ "code": "000001" }]"#),
            Err(DataSourceError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_records(Path::new("/nonexistent/stocks.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/stocks.json"));
    }
}
