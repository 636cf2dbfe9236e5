//! Rendering of replies as light markup (`**bold**`, `- ` bullets, line breaks).

use econ_content::resources::{DEMAND_SUPPLY_CONTRAST, EXAM_PREPARATION_TIPS};
use econ_content::TopicRecord;

pub const GREETING: &str = "Hello! I'm your AI Economics tutor. I'm here to help you understand economics concepts. Ask me anything about demand, supply, elasticity, consumer behavior, production, costs, or market structures!";

/// The seven categories offered when a question matches nothing.
pub const FALLBACK_TOPICS: [(&str, &str); 7] = [
    ("Demand and Supply", "Laws, factors, curves"),
    ("Market Equilibrium", "Price determination"),
    ("Elasticity", "Price, income, and cross elasticity"),
    ("Consumer Behavior", "Utility theory"),
    ("Production", "Factors, short run vs long run"),
    ("Costs", "Fixed, variable, marginal costs"),
    (
        "Market Structures",
        "Perfect competition, monopoly, oligopoly, monopolistic competition",
    ),
];

/// Title-case a snake_case key for display: `"perfect_competition"` becomes
/// `"Perfect Competition"`.
///
/// A letter is upper-cased when it follows a non-letter and lower-cased otherwise.
pub fn display_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_is_letter = false;
    for c in key.replace('_', " ").chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn push_bullets<S: AsRef<str>>(out: &mut String, items: &[S]) {
    for item in items {
        out.push_str("- ");
        out.push_str(item.as_ref());
        out.push('\n');
    }
}

/// Render a topic record as a labeled block, fields in a fixed per-topic order.
pub fn render_topic(record: &TopicRecord) -> String {
    let mut out = String::new();

    match record {
        TopicRecord::Demand(topic) => {
            out.push_str("**Understanding Demand:**\n\n");
            out.push_str(&topic.definition);
            out.push_str("\n\n");
            out.push_str(&format!("**{}**\n\n", topic.law));
            out.push_str("**Factors affecting demand:**\n");
            push_bullets(&mut out, &topic.factors);
            out.push_str(&format!("\n**Types:** {}", topic.types));
        }
        TopicRecord::Supply(topic) => {
            out.push_str("**Understanding Supply:**\n\n");
            out.push_str(&topic.definition);
            out.push_str("\n\n");
            out.push_str(&format!("**{}**\n\n", topic.law));
            out.push_str("**Factors affecting supply:**\n");
            push_bullets(&mut out, &topic.factors);
        }
        TopicRecord::Equilibrium(topic) => {
            out.push_str("**Market Equilibrium:**\n\n");
            out.push_str(&topic.definition);
            out.push_str("\n\n");
            out.push_str(&topic.concept);
            out.push_str("\n\n");
            out.push_str(&format!("**Important:** {}", topic.changes));
        }
        TopicRecord::Elasticity(topic) => {
            out.push_str("**Elasticity:**\n\n");
            out.push_str(&topic.definition);
            out.push_str("\n\n");
            out.push_str(&format!("**Formula:** {}\n\n", topic.formula));
            out.push_str("**Types of Elasticity:**\n");
            push_bullets(&mut out, &topic.types);
            out.push_str("\n**Categories:**\n");
            for category in &topic.categories {
                out.push_str(&format!(
                    "- **{}:** {}\n",
                    display_key(&category.name),
                    category.description
                ));
            }
        }
        TopicRecord::ConsumerBehavior(topic) => {
            out.push_str("**Consumer Behavior:**\n\n");
            out.push_str(&format!("**Utility:** {}\n\n", topic.utility));
            out.push_str(&format!("**Marginal Utility:** {}\n\n", topic.marginal_utility));
            out.push_str(&format!("**{}**\n\n", topic.law_diminishing));
            out.push_str(&format!(
                "**Consumer Equilibrium:** {}",
                topic.consumer_equilibrium
            ));
        }
        TopicRecord::Production(topic) => {
            out.push_str("**Production:**\n\n");
            out.push_str(&topic.definition);
            out.push_str("\n\n");
            out.push_str("**Factors of Production:**\n");
            push_bullets(&mut out, &topic.factors);
            out.push_str(&format!("\n**Short Run:** {}\n", topic.short_run));
            out.push_str(&format!("**Long Run:** {}\n\n", topic.long_run));
            out.push_str("**Key Concepts:**\n");
            push_bullets(&mut out, &topic.concepts);
        }
        TopicRecord::Costs(topic) => {
            out.push_str("**Cost Concepts:**\n\n");
            out.push_str(&format!("**Fixed Costs:** {}\n\n", topic.fixed_costs));
            out.push_str(&format!("**Variable Costs:** {}\n\n", topic.variable_costs));
            out.push_str(&format!("**Total Cost:** {}\n\n", topic.total_cost));
            out.push_str(&format!("**Marginal Cost:** {}\n\n", topic.marginal_cost));
            out.push_str(&format!("**Average Cost:** {}", topic.average_cost));
        }
        TopicRecord::MarketStructures(topic) => {
            out.push_str("**Market Structures:**\n\n");
            for structure in &topic.structures {
                out.push_str(&format!("**{}:**\n", display_key(&structure.name)));
                out.push_str(&format!("- Characteristics: {}\n", structure.characteristics));
                out.push_str(&format!("- Pricing: {}\n\n", structure.pricing));
            }
        }
    }

    out
}

/// Numbered exam preparation checklist.
pub fn exam_tips() -> String {
    let mut out = String::from("**Exam Preparation Tips:**\n");
    for (i, tip) in EXAM_PREPARATION_TIPS.iter().enumerate() {
        out.push_str(&format!("\n{}. **{}:** {}", i + 1, tip.title, tip.detail));
    }
    out
}

/// Demand and supply side by side.
pub fn comparison() -> String {
    let mut out = String::from("**Difference Between Demand and Supply:**");
    for side in &DEMAND_SUPPLY_CONTRAST {
        out.push_str(&format!("\n\n**{}:**\n", side.label));
        out.push_str(&side.points.iter().map(|p| format!("- {}", p)).collect::<Vec<_>>().join("\n"));
    }
    out
}

/// Help text listing every topic category.
pub fn fallback() -> String {
    let mut out = String::from(
        "I'd be happy to help you with economics! I can explain concepts about:\n\n",
    );
    for (label, blurb) in FALLBACK_TOPICS {
        out.push_str(&format!("- **{}:** {}\n", label, blurb));
    }
    out.push_str("\nPlease ask a specific question about any of these topics!");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use econ_content::{KnowledgeBase, TopicKey};

    fn rendered(key: TopicKey) -> String {
        render_topic(KnowledgeBase::global().get(key).unwrap())
    }

    #[test]
    fn test_display_key() {
        assert_eq!(display_key("perfect_competition"), "Perfect Competition");
        assert_eq!(display_key("monopoly"), "Monopoly");
        assert_eq!(display_key("elastic"), "Elastic");
        assert_eq!(display_key("MONOPOLISTIC_competition"), "Monopolistic Competition");
        assert_eq!(display_key(""), "");
    }

    #[test]
    fn test_demand_block_layout() {
        let text = rendered(TopicKey::Demand);

        assert!(text.starts_with("**Understanding Demand:**\n\nDemand refers to"));
        assert!(text.contains("**Factors affecting demand:**\n- Price of the commodity\n- Income of the consumer\n"));
        assert!(text.ends_with(
            "\n**Types:** Individual demand (single consumer) and Market demand (all consumers)"
        ));
    }

    #[test]
    fn test_supply_block_ends_with_last_factor() {
        let text = rendered(TopicKey::Supply);
        assert!(text.starts_with("**Understanding Supply:**"));
        assert!(text.ends_with("- Expectations about future prices\n"));
    }

    #[test]
    fn test_elasticity_categories_in_order() {
        let text = rendered(TopicKey::Elasticity);

        let elastic = text.find("- **Elastic:**").unwrap();
        let inelastic = text.find("- **Inelastic:**").unwrap();
        let unitary = text.find("- **Unitary:**").unwrap();
        assert!(elastic < inelastic && inelastic < unitary);
        assert!(text.contains("**Formula:** Elasticity = (% Change in Quantity) / (% Change in Price)\n\n"));
    }

    #[test]
    fn test_market_structures_block() {
        let text = rendered(TopicKey::MarketStructures);

        assert!(text.starts_with("**Market Structures:**\n\n**Perfect Competition:**\n"));
        assert!(text.contains("**Monopolistic Competition:**\n- Characteristics: Many sellers"));
        let monopoly = text.find("**Monopoly:**").unwrap();
        let oligopoly = text.find("**Oligopoly:**").unwrap();
        assert!(monopoly < oligopoly);
    }

    #[test]
    fn test_costs_and_consumer_blocks() {
        let costs = rendered(TopicKey::Costs);
        assert!(costs.contains("**Total Cost:** TC = Fixed Cost + Variable Cost\n\n"));
        assert!(costs.ends_with("**Average Cost:** Total cost divided by quantity of output"));

        let consumer = rendered(TopicKey::ConsumerBehavior);
        assert!(consumer.contains("**Law of Diminishing Marginal Utility:"));
    }

    #[test]
    fn test_production_block() {
        let text = rendered(TopicKey::Production);
        assert!(text.contains("**Factors of Production:**\n- Land\n- Labor\n- Capital\n- Entrepreneurship\n\n**Short Run:**"));
        assert!(text.ends_with("- Average Product (AP): Output per unit of input\n"));
    }

    #[test]
    fn test_exam_tips() {
        let text = exam_tips();
        assert!(text.starts_with("**Exam Preparation Tips:**\n\n1. **Understand Core Concepts:**"));
        assert!(text.ends_with("7. **Past Papers:** Review previous exam questions to understand patterns"));
    }

    #[test]
    fn test_comparison() {
        let text = comparison();
        assert!(text.contains("\n\n**Demand:**\n- Consumer perspective\n"));
        assert!(text.contains("\n\n**Supply:**\n- Producer perspective\n"));
        assert!(text.ends_with("number of sellers"));
    }

    #[test]
    fn test_fallback_lists_seven_categories() {
        let text = fallback();
        let bullets = text.lines().filter(|l| l.starts_with("- **")).count();
        assert_eq!(bullets, 7);
        assert!(text.ends_with("Please ask a specific question about any of these topics!"));
    }
}
