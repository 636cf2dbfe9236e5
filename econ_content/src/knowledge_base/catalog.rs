//! The topic records shipped with the tutor.

use crate::topics::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// All records in declaration order.
pub(super) fn records() -> Vec<TopicRecord> {
    vec![
        TopicRecord::Demand(demand()),
        TopicRecord::Supply(supply()),
        TopicRecord::Equilibrium(equilibrium()),
        TopicRecord::Elasticity(elasticity()),
        TopicRecord::ConsumerBehavior(consumer_behavior()),
        TopicRecord::Production(production()),
        TopicRecord::Costs(costs()),
        TopicRecord::MarketStructures(market_structures()),
    ]
}

fn demand() -> DemandRecord {
    DemandRecord {
        definition: "Demand refers to the quantity of a good or service that consumers are willing and able to purchase at various prices during a given period of time.".to_string(),
        law: "The Law of Demand states that, other things being equal (ceteris paribus), as the price of a good increases, the quantity demanded decreases, and vice versa.".to_string(),
        factors: strings(&[
            "Price of the commodity",
            "Income of the consumer",
            "Prices of related goods (substitutes and complements)",
            "Consumer preferences and tastes",
            "Consumer expectations about future prices",
            "Number of consumers in the market",
        ]),
        types: "Individual demand (single consumer) and Market demand (all consumers)".to_string(),
    }
}

fn supply() -> SupplyRecord {
    SupplyRecord {
        definition: "Supply refers to the quantity of a good or service that producers are willing and able to offer for sale at various prices during a given period of time.".to_string(),
        law: "The Law of Supply states that, other things being equal, as the price of a good increases, the quantity supplied increases, and vice versa.".to_string(),
        factors: strings(&[
            "Price of the commodity",
            "Prices of inputs/factors of production",
            "Technology",
            "Number of sellers",
            "Government policies (taxes and subsidies)",
            "Expectations about future prices",
        ]),
    }
}

fn equilibrium() -> EquilibriumRecord {
    EquilibriumRecord {
        definition: "Market equilibrium occurs when the quantity demanded equals the quantity supplied at a particular price, called the equilibrium price.".to_string(),
        concept: "At equilibrium, there is no tendency for the price to change as the market clears with no excess demand or supply.".to_string(),
        changes: "Shifts in demand or supply curves will create new equilibrium points with different prices and quantities.".to_string(),
    }
}

fn elasticity() -> ElasticityRecord {
    ElasticityRecord {
        definition: "Elasticity measures the responsiveness of quantity demanded or supplied to changes in price or other factors.".to_string(),
        types: strings(&[
            "Price Elasticity of Demand (PED): Responsiveness of quantity demanded to price changes",
            "Income Elasticity of Demand: Responsiveness to income changes",
            "Cross Elasticity of Demand: Responsiveness to changes in prices of related goods",
            "Price Elasticity of Supply: Responsiveness of quantity supplied to price changes",
        ]),
        formula: "Elasticity = (% Change in Quantity) / (% Change in Price)".to_string(),
        categories: vec![
            Category::new("elastic", "When elasticity > 1 (highly responsive)"),
            Category::new("inelastic", "When elasticity < 1 (less responsive)"),
            Category::new("unitary", "When elasticity = 1 (proportionate change)"),
        ],
    }
}

fn consumer_behavior() -> ConsumerBehaviorRecord {
    ConsumerBehaviorRecord {
        utility: "Utility is the satisfaction or pleasure derived from consuming a good or service.".to_string(),
        marginal_utility: "The additional satisfaction from consuming one more unit of a good.".to_string(),
        law_diminishing: "Law of Diminishing Marginal Utility: As consumption increases, the additional satisfaction from each additional unit decreases.".to_string(),
        consumer_equilibrium: "A consumer is in equilibrium when they maximize total utility given their budget constraint.".to_string(),
    }
}

fn production() -> ProductionRecord {
    ProductionRecord {
        definition: "Production is the process of transforming inputs (factors of production) into outputs (goods and services).".to_string(),
        factors: strings(&["Land", "Labor", "Capital", "Entrepreneurship"]),
        short_run: "Period where at least one factor of production is fixed.".to_string(),
        long_run: "Period where all factors of production are variable.".to_string(),
        concepts: strings(&[
            "Total Product (TP): Total output produced",
            "Marginal Product (MP): Additional output from one more unit of input",
            "Average Product (AP): Output per unit of input",
        ]),
    }
}

fn costs() -> CostsRecord {
    CostsRecord {
        fixed_costs: "Costs that do not vary with output level (e.g., rent, salaries)".to_string(),
        variable_costs: "Costs that vary directly with output level (e.g., raw materials)".to_string(),
        total_cost: "TC = Fixed Cost + Variable Cost".to_string(),
        marginal_cost: "The additional cost of producing one more unit of output".to_string(),
        average_cost: "Total cost divided by quantity of output".to_string(),
    }
}

fn market_structures() -> MarketStructuresRecord {
    MarketStructuresRecord {
        structures: vec![
            MarketStructure::new(
                "perfect_competition",
                "Many buyers and sellers, homogeneous products, free entry/exit, perfect information",
                "Price takers - firms accept market price",
            ),
            MarketStructure::new(
                "monopoly",
                "Single seller, unique product, barriers to entry, price maker",
                "Firm has market power to set prices",
            ),
            MarketStructure::new(
                "monopolistic_competition",
                "Many sellers, differentiated products, relatively free entry/exit",
                "Some control over price due to product differentiation",
            ),
            MarketStructure::new(
                "oligopoly",
                "Few large firms, interdependent decision-making, barriers to entry",
                "Strategic pricing decisions considering rivals' reactions",
            ),
        ],
    }
}
