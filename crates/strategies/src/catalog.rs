use crate::error::StrategyError;
use crate::{breakout, composite, growth, industry, short_term, value, StrategyDefinition};

/// The id callers may use in place of the composite strategy's own id.
const DEFAULT_ALIAS: &str = "default";

/// An explicit, injectable registry of strategies.
///
/// Built once at startup with the built-in set and handed by reference to the
/// selection service; tests construct empty catalogs with whatever custom
/// strategies they need. Registration order is preserved for listings.
#[derive(Debug, Clone, Default)]
pub struct StrategyCatalog {
    strategies: Vec<StrategyDefinition>,
}

impl StrategyCatalog {
    /// A catalog with no strategies registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A catalog holding the built-in strategy set.
    pub fn builtins() -> Self {
        let mut catalog = Self::empty();
        for def in [
            composite::definition(),
            value::definition(),
            growth::definition(),
            industry::definition(),
            breakout::definition(),
            short_term::definition(),
        ] {
            // Built-in definitions are complete and unique by construction.
            catalog
                .register(def)
                .expect("built-in strategy registration cannot fail");
        }
        catalog
    }

    /// Registers a strategy. Rejects duplicate ids (including the reserved
    /// `default` alias) and definitions missing identity fields.
    pub fn register(&mut self, def: StrategyDefinition) -> Result<(), StrategyError> {
        if def.id.is_empty() {
            return Err(StrategyError::IncompleteDefinition("empty id".to_string()));
        }
        if def.name.is_empty() {
            return Err(StrategyError::IncompleteDefinition(format!(
                "strategy '{}' has an empty name",
                def.id
            )));
        }
        if def.description.is_empty() {
            return Err(StrategyError::IncompleteDefinition(format!(
                "strategy '{}' has an empty description",
                def.id
            )));
        }
        if def.id == DEFAULT_ALIAS || self.strategies.iter().any(|s| s.id == def.id) {
            return Err(StrategyError::DuplicateId(def.id));
        }

        tracing::debug!(id = %def.id, "registered strategy");
        self.strategies.push(def);
        Ok(())
    }

    /// Looks up a strategy by id. `default` resolves to the composite
    /// strategy for compatibility with the original API surface.
    pub fn get(&self, id: &str) -> Option<&StrategyDefinition> {
        let id = if id == DEFAULT_ALIAS { composite::ID } else { id };
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyDefinition> {
        self.strategies.iter()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamSchema;
    use std::sync::Arc;

    fn stub(id: &str) -> StrategyDefinition {
        StrategyDefinition {
            id: id.to_string(),
            name: "stub".to_string(),
            description: "a stub strategy".to_string(),
            default_params: serde_json::Map::new(),
            schema: ParamSchema::default(),
            score: Arc::new(|_, _| Vec::new()),
        }
    }

    #[test]
    fn builtins_are_all_registered() {
        let catalog = StrategyCatalog::builtins();
        for id in ["composite", "value", "growth", "industry", "breakout", "short_term_growth"] {
            assert!(catalog.get(id).is_some(), "missing builtin {id}");
        }
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn default_alias_resolves_to_composite() {
        let catalog = StrategyCatalog::builtins();
        assert_eq!(catalog.get("default").unwrap().id, "composite");
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut catalog = StrategyCatalog::empty();
        catalog.register(stub("custom")).unwrap();
        assert!(matches!(
            catalog.register(stub("custom")),
            Err(StrategyError::DuplicateId(_))
        ));
    }

    #[test]
    fn incomplete_definition_is_rejected() {
        let mut catalog = StrategyCatalog::empty();
        let mut def = stub("nameless");
        def.name = String::new();
        assert!(matches!(
            catalog.register(def),
            Err(StrategyError::IncompleteDefinition(_))
        ));
    }

    #[test]
    fn reserved_alias_cannot_be_registered() {
        let mut catalog = StrategyCatalog::empty();
        assert!(matches!(
            catalog.register(stub("default")),
            Err(StrategyError::DuplicateId(_))
        ));
    }
}
