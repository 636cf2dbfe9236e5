//! Keyword rules - the ordered dispatch table behind the responder.

use econ_content::TopicKey;
use serde::Serialize;

/// A keyword predicate over lower-cased question text.
///
/// Matching is plain substring containment, so `"elastic"` also matches
/// `"inelastic"` and `"cost"` matches `"costs"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keywords {
    /// At least one keyword appears.
    Any(&'static [&'static str]),
    /// Every keyword appears.
    All(&'static [&'static str]),
}

impl Keywords {
    /// Test the predicate. `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| text.contains(w)),
            Keywords::All(words) => words.iter().all(|w| text.contains(w)),
        }
    }

    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Keywords::Any(words) | Keywords::All(words) => words,
        }
    }
}

/// What the responder answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "topic", rename_all = "snake_case")]
pub enum Reply {
    Greeting,
    Topic(TopicKey),
    ExamTips,
    /// Demand and supply side by side.
    Comparison,
    Fallback,
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub keywords: Keywords,
    pub reply: Reply,
}

impl Rule {
    pub const fn new(name: &'static str, keywords: Keywords, reply: Reply) -> Self {
        Self {
            name,
            keywords,
            reply,
        }
    }
}

/// The dispatch table, evaluated top to bottom; the first match wins.
///
/// Greetings outrank every topic. The comparison rule sits ahead of the demand
/// rule, otherwise "demand" would always shadow it.
pub const RULES: &[Rule] = &[
    Rule::new("greeting", Keywords::Any(&["hello", "hi", "hey"]), Reply::Greeting),
    Rule::new(
        "comparison",
        Keywords::All(&["difference", "demand", "supply"]),
        Reply::Comparison,
    ),
    Rule::new("demand", Keywords::Any(&["demand"]), Reply::Topic(TopicKey::Demand)),
    Rule::new("supply", Keywords::Any(&["supply"]), Reply::Topic(TopicKey::Supply)),
    Rule::new(
        "equilibrium",
        Keywords::Any(&["equilibrium", "market clearing"]),
        Reply::Topic(TopicKey::Equilibrium),
    ),
    Rule::new(
        "elasticity",
        Keywords::Any(&["elasticity", "elastic"]),
        Reply::Topic(TopicKey::Elasticity),
    ),
    Rule::new(
        "consumer_behavior",
        Keywords::Any(&["utility", "consumer", "satisfaction"]),
        Reply::Topic(TopicKey::ConsumerBehavior),
    ),
    Rule::new(
        "production",
        Keywords::Any(&["production"]),
        Reply::Topic(TopicKey::Production),
    ),
    Rule::new("costs", Keywords::Any(&["cost"]), Reply::Topic(TopicKey::Costs)),
    Rule::new(
        "market_structures",
        Keywords::Any(&["market", "competition", "monopoly", "oligopoly"]),
        Reply::Topic(TopicKey::MarketStructures),
    ),
    Rule::new(
        "exam_tips",
        Keywords::Any(&["exam", "tip", "prepare"]),
        Reply::ExamTips,
    ),
];

/// Find the first rule matching lower-cased `text`.
pub fn first_match<'r>(rules: &'r [Rule], text: &str) -> Option<&'r Rule> {
    rules.iter().find(|rule| rule.keywords.matches(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_and_all() {
        let any = Keywords::Any(&["monopoly", "oligopoly"]);
        assert!(any.matches("is an oligopoly efficient"));
        assert!(!any.matches("perfect competition"));

        let all = Keywords::All(&["difference", "demand", "supply"]);
        assert!(all.matches("difference between demand and supply"));
        assert!(!all.matches("difference between demand and price"));
    }

    #[test]
    fn test_substring_containment() {
        assert!(Keywords::Any(&["elastic"]).matches("inelastic goods"));
        assert!(Keywords::Any(&["cost"]).matches("fixed costs"));
    }

    #[test]
    fn test_greeting_rule_comes_first() {
        assert_eq!(RULES[0].reply, Reply::Greeting);
        let rule = first_match(RULES, "hi, tell me about supply").unwrap();
        assert_eq!(rule.name, "greeting");
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "greeting",
                "comparison",
                "demand",
                "supply",
                "equilibrium",
                "elasticity",
                "consumer_behavior",
                "production",
                "costs",
                "market_structures",
                "exam_tips",
            ]
        );
    }

    #[test]
    fn test_earlier_rule_wins() {
        // "market" would match market structures, but equilibrium is checked first.
        let rule = first_match(RULES, "what is market equilibrium?").unwrap();
        assert_eq!(rule.reply, Reply::Topic(TopicKey::Equilibrium));

        // "consumer" and "cost" both appear; consumer behavior is checked first.
        let rule = first_match(RULES, "consumer cost").unwrap();
        assert_eq!(rule.reply, Reply::Topic(TopicKey::ConsumerBehavior));
    }

    #[test]
    fn test_no_match() {
        assert!(first_match(RULES, "xyz123").is_none());
        assert!(first_match(RULES, "").is_none());
        assert!(first_match(RULES, "difference").is_none());
    }

    #[test]
    fn test_one_sided_difference_falls_through() {
        let rule = first_match(RULES, "difference between supply and costs").unwrap();
        assert_eq!(rule.reply, Reply::Topic(TopicKey::Supply));

        let rule = first_match(RULES, "difference between cost types").unwrap();
        assert_eq!(rule.reply, Reply::Topic(TopicKey::Costs));
    }
}
