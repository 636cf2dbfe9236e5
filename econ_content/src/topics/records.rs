//! Record types, one per topic.

use serde::{Deserialize, Serialize};

/// Demand: definition, law, determinants and types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub definition: String,
    pub law: String,
    /// Determinants of demand, in teaching order.
    pub factors: Vec<String>,
    pub types: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyRecord {
    pub definition: String,
    pub law: String,
    /// Determinants of supply, in teaching order.
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumRecord {
    pub definition: String,
    pub concept: String,
    /// What happens when either curve shifts.
    pub changes: String,
}

/// A named band of elasticity values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Lower-case key, e.g. `"elastic"`.
    pub name: String,
    pub description: String,
}

impl Category {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticityRecord {
    pub definition: String,
    pub types: Vec<String>,
    pub formula: String,
    /// Categories in definition order; the order is shown to students as-is.
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerBehaviorRecord {
    pub utility: String,
    pub marginal_utility: String,
    pub law_diminishing: String,
    pub consumer_equilibrium: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub definition: String,
    /// Factors of production.
    pub factors: Vec<String>,
    pub short_run: String,
    pub long_run: String,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostsRecord {
    pub fixed_costs: String,
    pub variable_costs: String,
    pub total_cost: String,
    pub marginal_cost: String,
    pub average_cost: String,
}

/// One market structure and how firms price within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStructure {
    /// snake_case key, e.g. `"perfect_competition"`.
    pub name: String,
    pub characteristics: String,
    pub pricing: String,
}

impl MarketStructure {
    pub fn new(
        name: impl Into<String>,
        characteristics: impl Into<String>,
        pricing: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            characteristics: characteristics.into(),
            pricing: pricing.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStructuresRecord {
    /// Structures in definition order.
    pub structures: Vec<MarketStructure>,
}

impl MarketStructuresRecord {
    /// Find a structure by its snake_case key.
    pub fn structure(&self, name: &str) -> Option<&MarketStructure> {
        self.structures.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_lookup() {
        let record = MarketStructuresRecord {
            structures: vec![
                MarketStructure::new("monopoly", "Single seller", "Price maker"),
                MarketStructure::new("oligopoly", "Few large firms", "Strategic"),
            ],
        };

        assert_eq!(record.structure("oligopoly").unwrap().pricing, "Strategic");
        assert!(record.structure("duopoly").is_none());
    }
}
