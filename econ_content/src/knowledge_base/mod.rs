//! Knowledge base - the immutable store of topic records.

mod catalog;

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::ContentError;
use crate::topics::{TopicKey, TopicRecord};

static GLOBAL: OnceLock<KnowledgeBase> = OnceLock::new();

/// Canonical facts for every topic, kept in declaration order.
///
/// Records are never mutated after construction. Use [`KnowledgeBase::global`]
/// for the process-wide instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    records: Vec<TopicRecord>,
}

impl KnowledgeBase {
    /// Build the full knowledge base.
    pub fn new() -> Self {
        Self {
            records: catalog::records(),
        }
    }

    /// The shared instance, built on first use.
    pub fn global() -> &'static KnowledgeBase {
        GLOBAL.get_or_init(KnowledgeBase::new)
    }

    /// Build a knowledge base from explicit records.
    ///
    /// A later record replaces an earlier one with the same key.
    pub fn from_records(records: impl IntoIterator<Item = TopicRecord>) -> Self {
        let mut kb = Self {
            records: Vec::new(),
        };
        for record in records {
            match kb.records.iter_mut().find(|r| r.key() == record.key()) {
                Some(existing) => *existing = record,
                None => kb.records.push(record),
            }
        }
        kb
    }

    /// Get the record for a topic.
    pub fn get(&self, key: TopicKey) -> Option<&TopicRecord> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Get the record for a topic by name, e.g. `"consumer_behavior"`.
    pub fn get_by_name(&self, name: &str) -> Result<&TopicRecord, ContentError> {
        let key: TopicKey = name.parse()?;
        self.get(key)
            .ok_or_else(|| ContentError::UnknownTopic(name.to_string()))
    }

    /// Iterate over all records in declaration order.
    pub fn topics(&self) -> impl Iterator<Item = &TopicRecord> {
        self.records.iter()
    }

    /// Number of topics held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::{CostsRecord, TopicRecord};

    #[test]
    fn test_every_topic_is_present() {
        let kb = KnowledgeBase::new();

        assert_eq!(kb.len(), TopicKey::ALL.len());
        for key in TopicKey::ALL {
            let record = kb.get(key);
            assert!(record.is_some(), "missing record for {}", key);
            assert_eq!(record.unwrap().key(), key);
        }
    }

    #[test]
    fn test_declaration_order() {
        let kb = KnowledgeBase::new();
        let keys: Vec<_> = kb.topics().map(|r| r.key()).collect();
        assert_eq!(keys, TopicKey::ALL.to_vec());
    }

    #[test]
    fn test_demand_record_contents() {
        let kb = KnowledgeBase::new();
        let Some(TopicRecord::Demand(demand)) = kb.get(TopicKey::Demand) else {
            panic!("demand record has the wrong shape");
        };

        assert!(demand.law.starts_with("The Law of Demand states"));
        assert_eq!(demand.factors.len(), 6);
        assert_eq!(demand.factors[0], "Price of the commodity");
        assert_eq!(demand.factors[5], "Number of consumers in the market");
    }

    #[test]
    fn test_elasticity_categories_keep_order() {
        let kb = KnowledgeBase::new();
        let Some(TopicRecord::Elasticity(elasticity)) = kb.get(TopicKey::Elasticity) else {
            panic!("elasticity record has the wrong shape");
        };

        let names: Vec<_> = elasticity.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["elastic", "inelastic", "unitary"]);
    }

    #[test]
    fn test_market_structures() {
        let kb = KnowledgeBase::new();
        let Some(TopicRecord::MarketStructures(markets)) = kb.get(TopicKey::MarketStructures)
        else {
            panic!("market structures record has the wrong shape");
        };

        let names: Vec<_> = markets.structures.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "perfect_competition",
                "monopoly",
                "monopolistic_competition",
                "oligopoly"
            ]
        );
        assert_eq!(
            markets.structure("monopoly").unwrap().pricing,
            "Firm has market power to set prices"
        );
    }

    #[test]
    fn test_get_by_name() {
        let kb = KnowledgeBase::new();

        assert_eq!(
            kb.get_by_name("Consumer Behavior").unwrap().key(),
            TopicKey::ConsumerBehavior
        );
        assert!(matches!(
            kb.get_by_name("game theory"),
            Err(ContentError::UnknownTopic(name)) if name == "game theory"
        ));
    }

    #[test]
    fn test_absent_topic() {
        let kb = KnowledgeBase::from_records(vec![TopicRecord::Costs(CostsRecord {
            fixed_costs: "rent".to_string(),
            variable_costs: "materials".to_string(),
            total_cost: "TC = FC + VC".to_string(),
            marginal_cost: "one more unit".to_string(),
            average_cost: "TC / Q".to_string(),
        })]);

        assert_eq!(kb.len(), 1);
        assert!(kb.get(TopicKey::Costs).is_some());
        assert!(kb.get(TopicKey::Demand).is_none());
        assert!(kb.get_by_name("demand").is_err());
    }

    #[test]
    fn test_from_records_replaces_duplicates() {
        let base = KnowledgeBase::new();
        let costs = base.get(TopicKey::Costs).unwrap().clone();
        let kb = KnowledgeBase::from_records(base.topics().cloned().chain(std::iter::once(costs)));

        assert_eq!(kb.len(), base.len());
        assert_eq!(kb, base);
    }

    #[test]
    fn test_global_is_shared() {
        let a = KnowledgeBase::global();
        let b = KnowledgeBase::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(*a, KnowledgeBase::new());
    }
}
