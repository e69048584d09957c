use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Typed description of one strategy parameter, used to turn bad caller
/// input into human-readable messages before any scoring runs.
#[derive(Debug, Clone)]
pub struct ParamField {
    pub name: &'static str,
    pub kind: ParamKind,
}

#[derive(Debug, Clone)]
pub enum ParamKind {
    /// A result-count style integer with inclusive bounds.
    Count { min: u64, max: u64 },
    /// A number with optional inclusive bounds.
    Number { min: Option<Decimal>, max: Option<Decimal> },
    /// An array whose elements must all be strings.
    StringArray,
    /// An object mapping factor names to weights in [0, 1].
    WeightTable { keys: &'static [&'static str] },
}

impl ParamField {
    pub fn count(name: &'static str, min: u64, max: u64) -> Self {
        Self { name, kind: ParamKind::Count { min, max } }
    }

    pub fn number(name: &'static str, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { name, kind: ParamKind::Number { min, max } }
    }

    pub fn string_array(name: &'static str) -> Self {
        Self { name, kind: ParamKind::StringArray }
    }

    pub fn weight_table(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self { name, kind: ParamKind::WeightTable { keys } }
    }
}

/// The parameter schema of one strategy. Validation checks every declared
/// field of the merged parameter map; keys the schema does not know are
/// ignored, matching the permissive behavior of the upstream API.
#[derive(Debug, Clone, Default)]
pub struct ParamSchema {
    fields: Vec<ParamField>,
}

impl ParamSchema {
    pub fn new(fields: Vec<ParamField>) -> Self {
        Self { fields }
    }

    /// Validates a merged parameter map. An empty result means "go ahead";
    /// anything else is the full list of problems, and execution must abort
    /// without partial results.
    pub fn validate(&self, params: &Map<String, Value>) -> Vec<String> {
        let mut errors = Vec::new();

        for field in &self.fields {
            let Some(value) = params.get(field.name) else {
                errors.push(format!("missing required parameter `{}`", field.name));
                continue;
            };

            match &field.kind {
                ParamKind::Count { min, max } => match value.as_u64() {
                    Some(n) if (*min..=*max).contains(&n) => {}
                    Some(_) => errors.push(format!(
                        "parameter `{}` must be between {min} and {max}",
                        field.name
                    )),
                    None => errors.push(format!(
                        "parameter `{}` must be a non-negative integer",
                        field.name
                    )),
                },
                ParamKind::Number { min, max } => match value_to_decimal(value) {
                    Some(n) => {
                        if let Some(min) = min {
                            if n < *min {
                                errors.push(format!(
                                    "parameter `{}` must be at least {min}",
                                    field.name
                                ));
                            }
                        }
                        if let Some(max) = max {
                            if n > *max {
                                errors.push(format!(
                                    "parameter `{}` must be at most {max}",
                                    field.name
                                ));
                            }
                        }
                    }
                    None => errors.push(format!("parameter `{}` must be a number", field.name)),
                },
                ParamKind::StringArray => match value.as_array() {
                    Some(items) if items.iter().all(Value::is_string) => {}
                    _ => errors.push(format!(
                        "parameter `{}` must be an array of strings",
                        field.name
                    )),
                },
                ParamKind::WeightTable { keys } => match value.as_object() {
                    Some(table) => {
                        for (key, weight) in table {
                            if !keys.contains(&key.as_str()) {
                                errors.push(format!(
                                    "unknown weight `{key}` in `{}`",
                                    field.name
                                ));
                                continue;
                            }
                            match value_to_decimal(weight) {
                                Some(w) if w >= Decimal::ZERO && w <= Decimal::ONE => {}
                                _ => errors.push(format!(
                                    "weight `{}.{key}` must be a number between 0 and 1",
                                    field.name
                                )),
                            }
                        }
                    }
                    None => errors.push(format!(
                        "parameter `{}` must be an object of factor weights",
                        field.name
                    )),
                },
            }
        }

        errors
    }
}

/// Defaults overlaid with caller-supplied values (shallow; caller wins).
pub fn merge(defaults: &Map<String, Value>, overrides: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// A validated parameter map with typed accessors for the scoring functions.
#[derive(Debug, Clone, Default)]
pub struct ResolvedParams(Map<String, Value>);

impl ResolvedParams {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn count(&self, key: &str) -> Option<usize> {
        self.0.get(key)?.as_u64().map(|n| n as usize)
    }

    pub fn decimal(&self, key: &str) -> Option<Decimal> {
        value_to_decimal(self.0.get(key)?)
    }

    /// Reads a decimal out of a nested object, e.g. `weights.pe`.
    pub fn nested_decimal(&self, key: &str, member: &str) -> Option<Decimal> {
        value_to_decimal(self.0.get(key)?.as_object()?.get(member)?)
    }

    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// JSON numbers go through their exact textual form, so `0.1` arrives as the
/// decimal 0.1 rather than the nearest binary double.
fn value_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn valid_params_produce_no_errors() {
        let schema = ParamSchema::new(vec![
            ParamField::count("topN", 1, 500),
            ParamField::string_array("targetIndustries"),
        ]);
        let params = map(json!({ "topN": 20, "targetIndustries": ["banking"] }));
        assert!(schema.validate(&params).is_empty());
    }

    #[test]
    fn each_violation_gets_its_own_message() {
        let schema = ParamSchema::new(vec![
            ParamField::count("topN", 1, 500),
            ParamField::string_array("targetIndustries"),
        ]);
        let params = map(json!({ "topN": "twenty", "targetIndustries": [1, 2] }));
        let errors = schema.validate(&params);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("topN"));
        assert!(errors[1].contains("targetIndustries"));
    }

    #[test]
    fn count_bounds_are_inclusive() {
        let schema = ParamSchema::new(vec![ParamField::count("count", 1, 50)]);
        assert!(schema.validate(&map(json!({ "count": 50 }))).is_empty());
        assert_eq!(schema.validate(&map(json!({ "count": 51 }))).len(), 1);
        assert_eq!(schema.validate(&map(json!({ "count": 0 }))).len(), 1);
    }

    #[test]
    fn weight_table_rejects_unknown_and_out_of_range() {
        let schema = ParamSchema::new(vec![ParamField::weight_table("weights", &["pe", "pb"])]);
        let errors = schema.validate(&map(json!({ "weights": { "pe": 1.5, "ev": 0.1 } })));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn merge_is_shallow_and_caller_wins() {
        let defaults = map(json!({ "topN": 20, "weights": { "pe": 0.2 } }));
        let overrides = map(json!({ "topN": 5 }));
        let merged = merge(&defaults, &overrides);
        assert_eq!(merged.get("topN"), Some(&json!(5)));
        assert_eq!(merged.get("weights"), Some(&json!({ "pe": 0.2 })));
    }

    #[test]
    fn json_numbers_convert_exactly() {
        let params = ResolvedParams::new(map(json!({ "x": 0.1 })));
        assert_eq!(params.decimal("x"), Some(dec!(0.1)));
    }
}
