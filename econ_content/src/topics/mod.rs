//! Topic definitions for the knowledge base.

mod records;

pub use records::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ContentError;

/// The fixed set of subjects the tutor can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKey {
    Demand,
    Supply,
    Equilibrium,
    Elasticity,
    ConsumerBehavior,
    Production,
    Costs,
    MarketStructures,
}

impl TopicKey {
    /// All topics in declaration order.
    pub const ALL: [TopicKey; 8] = [
        TopicKey::Demand,
        TopicKey::Supply,
        TopicKey::Equilibrium,
        TopicKey::Elasticity,
        TopicKey::ConsumerBehavior,
        TopicKey::Production,
        TopicKey::Costs,
        TopicKey::MarketStructures,
    ];

    /// Stable snake_case name, also used as the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKey::Demand => "demand",
            TopicKey::Supply => "supply",
            TopicKey::Equilibrium => "equilibrium",
            TopicKey::Elasticity => "elasticity",
            TopicKey::ConsumerBehavior => "consumer_behavior",
            TopicKey::Production => "production",
            TopicKey::Costs => "costs",
            TopicKey::MarketStructures => "market_structures",
        }
    }

    /// Human-readable name for listings.
    pub fn title(&self) -> &'static str {
        match self {
            TopicKey::Demand => "Demand",
            TopicKey::Supply => "Supply",
            TopicKey::Equilibrium => "Market Equilibrium",
            TopicKey::Elasticity => "Elasticity",
            TopicKey::ConsumerBehavior => "Consumer Behavior",
            TopicKey::Production => "Production",
            TopicKey::Costs => "Costs",
            TopicKey::MarketStructures => "Market Structures",
        }
    }
}

impl FromStr for TopicKey {
    type Err = ContentError;

    /// Accepts the snake_case name; case and surrounding whitespace are ignored,
    /// and spaces or hyphens stand in for underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        TopicKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ContentError::UnknownTopic(s.to_string()))
    }
}

impl std::fmt::Display for TopicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured fact-set for one subject.
///
/// Each variant carries its own record type so that every field a renderer
/// needs is present by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum TopicRecord {
    Demand(DemandRecord),
    Supply(SupplyRecord),
    Equilibrium(EquilibriumRecord),
    Elasticity(ElasticityRecord),
    ConsumerBehavior(ConsumerBehaviorRecord),
    Production(ProductionRecord),
    Costs(CostsRecord),
    MarketStructures(MarketStructuresRecord),
}

impl TopicRecord {
    /// The key this record is stored under.
    pub fn key(&self) -> TopicKey {
        match self {
            TopicRecord::Demand(_) => TopicKey::Demand,
            TopicRecord::Supply(_) => TopicKey::Supply,
            TopicRecord::Equilibrium(_) => TopicKey::Equilibrium,
            TopicRecord::Elasticity(_) => TopicKey::Elasticity,
            TopicRecord::ConsumerBehavior(_) => TopicKey::ConsumerBehavior,
            TopicRecord::Production(_) => TopicKey::Production,
            TopicRecord::Costs(_) => TopicKey::Costs,
            TopicRecord::MarketStructures(_) => TopicKey::MarketStructures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_key_round_trips_through_name() {
        for key in TopicKey::ALL {
            assert_eq!(key.as_str().parse::<TopicKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_topic_key_parse_is_lenient() {
        assert_eq!(
            "Consumer Behavior".parse::<TopicKey>().unwrap(),
            TopicKey::ConsumerBehavior
        );
        assert_eq!(
            " market-structures ".parse::<TopicKey>().unwrap(),
            TopicKey::MarketStructures
        );
    }

    #[test]
    fn test_unknown_topic() {
        let err = "macroeconomics".parse::<TopicKey>().unwrap_err();
        assert_eq!(err, ContentError::UnknownTopic("macroeconomics".to_string()));
        assert_eq!(err.to_string(), "Unknown topic: macroeconomics");
    }

    #[test]
    fn test_topic_key_serializes_as_snake_case() {
        let json = serde_json::to_string(&TopicKey::ConsumerBehavior).unwrap();
        assert_eq!(json, "\"consumer_behavior\"");
    }
}
