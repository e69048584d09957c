use core_types::{ScoredStock, StockRecord};
use dataset::{prepare, PreparedDataset};
use serde_json::{Map, Value};
use strategies::{params, ResolvedParams, StrategyCatalog, StrategyDefinition};

use crate::error::SelectionError;

/// Orchestrates data preparation and strategy execution.
///
/// Holds the catalog it was constructed with and the snapshot of the most
/// recently supplied raw collection. All scoring operations take `&self`;
/// only `set_data` and `register_strategy` mutate.
#[derive(Debug, Clone)]
pub struct SelectionService {
    catalog: StrategyCatalog,
    dataset: PreparedDataset,
}

impl SelectionService {
    /// A service over the given catalog with no data loaded yet. Strategies
    /// run against an empty snapshot return empty results, not errors.
    pub fn new(catalog: StrategyCatalog) -> Self {
        Self { catalog, dataset: PreparedDataset::default() }
    }

    /// Convenience constructor preparing `records` immediately.
    pub fn with_data(catalog: StrategyCatalog, records: Vec<StockRecord>) -> Self {
        let mut service = Self::new(catalog);
        service.set_data(records);
        service
    }

    /// Replaces the raw input, rebuilding the cleaned/normalized snapshot.
    pub fn set_data(&mut self, records: Vec<StockRecord>) {
        self.dataset = prepare(records);
    }

    /// The records that survived cleaning, in input order.
    pub fn cleaned_data(&self) -> &[StockRecord] {
        self.dataset.cleaned()
    }

    pub fn dataset(&self) -> &PreparedDataset {
        &self.dataset
    }

    /// Registered strategies in registration order.
    pub fn list_strategies(&self) -> impl Iterator<Item = &StrategyDefinition> {
        self.catalog.iter()
    }

    /// Adds a strategy at runtime. Fails on duplicate ids or definitions
    /// missing identity fields.
    pub fn register_strategy(&mut self, def: StrategyDefinition) -> Result<(), SelectionError> {
        self.catalog.register(def)?;
        Ok(())
    }

    /// Runs one strategy: resolve id, merge caller params over the defaults,
    /// validate, execute. Returns the sorted, truncated results.
    ///
    /// An insufficient dataset is not an error; the caller gets an empty
    /// result set to render as "no matches".
    pub fn run_strategy(
        &self,
        id: &str,
        caller_params: &Map<String, Value>,
    ) -> Result<Vec<ScoredStock>, SelectionError> {
        let def = self
            .catalog
            .get(id)
            .ok_or_else(|| SelectionError::UnknownStrategy(id.to_string()))?;

        let merged = params::merge(&def.default_params, caller_params);
        let errors = def.schema.validate(&merged);
        if !errors.is_empty() {
            tracing::warn!(strategy = %def.id, ?errors, "rejected strategy parameters");
            return Err(SelectionError::InvalidParameters(errors));
        }

        if self.dataset.is_empty() {
            tracing::warn!(strategy = %def.id, "no usable records in dataset");
            return Ok(Vec::new());
        }

        let results = (def.score)(&self.dataset, &ResolvedParams::new(merged));
        tracing::info!(strategy = %def.id, results = results.len(), "strategy executed");
        Ok(results)
    }
}

impl Default for SelectionService {
    /// A service over the built-in catalog with no data.
    fn default() -> Self {
        Self::new(StrategyCatalog::builtins())
    }
}
