//! Static study resources: lectures, reference tables, tips and the chapter overview.

use serde::Serialize;

/// A titled piece of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub detail: &'static str,
}

const fn tip(title: &'static str, detail: &'static str) -> Tip {
    Tip { title, detail }
}

/// Tips the tutor gives when asked how to prepare for an exam.
pub const EXAM_PREPARATION_TIPS: &[Tip] = &[
    tip("Understand Core Concepts", "Focus on laws of demand and supply, elasticity, and market equilibrium"),
    tip("Practice Diagrams", "Be able to draw and explain supply-demand curves, shifts, and equilibrium changes"),
    tip("Learn Formulas", "Memorize elasticity formulas and understand how to apply them"),
    tip("Real-World Examples", "Connect concepts to current economic events"),
    tip("Solve Numerical Problems", "Practice calculating elasticity, costs, and equilibrium prices"),
    tip("Key Terms", "Create flashcards for important definitions"),
    tip("Past Papers", "Review previous exam questions to understand patterns"),
];

/// The longer checklist shown alongside the video resources.
pub const EXAM_SUCCESS_TIPS: &[Tip] = &[
    tip("Master the Graphs", "Practice drawing supply-demand diagrams until you can do them perfectly"),
    tip("Memorize Key Formulas", "Especially elasticity calculations"),
    tip("Understand, Don't Memorize", "Focus on WHY things happen, not just WHAT happens"),
    tip("Use Real Examples", "Connect theories to real-world scenarios (gas prices, food markets, etc.)"),
    tip("Practice Numerical Problems", "Work through calculation questions multiple times"),
    tip("Create Summary Sheets", "One-page notes for each major topic"),
    tip("Explain to Others", "Teaching concepts helps solidify your understanding"),
    tip("Time Management", "Practice past papers under timed conditions"),
    tip("Review Mistakes", "Learn from errors in practice questions"),
    tip("Stay Current", "Follow economic news to see theories in action"),
];

/// One side of a side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContrastSide {
    pub label: &'static str,
    pub points: &'static [&'static str],
}

/// Demand versus supply, point by point.
pub const DEMAND_SUPPLY_CONTRAST: [ContrastSide; 2] = [
    ContrastSide {
        label: "Demand",
        points: &[
            "Consumer perspective",
            "Inverse relationship with price (Law of Demand)",
            "Shows buyer's willingness to purchase",
            "Affected by income, preferences, prices of related goods",
        ],
    },
    ContrastSide {
        label: "Supply",
        points: &[
            "Producer perspective",
            "Direct relationship with price (Law of Supply)",
            "Shows seller's willingness to sell",
            "Affected by production costs, technology, number of sellers",
        ],
    },
];

/// A recommended video lecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoLecture {
    pub title: &'static str,
    pub topics: &'static [&'static str],
    /// Approximate running time.
    pub duration_minutes: u32,
    pub url: &'static str,
}

pub const VIDEO_LECTURES: &[VideoLecture] = &[
    VideoLecture {
        title: "Microeconomics Fundamentals",
        topics: &[
            "Introduction to Microeconomics",
            "Demand and Supply Basics",
            "Market Equilibrium",
            "Real-world Applications",
        ],
        duration_minutes: 30,
        url: "https://youtu.be/Ec19ljjvlCI",
    },
    VideoLecture {
        title: "Advanced Concepts",
        topics: &[
            "Elasticity of Demand",
            "Consumer Behavior",
            "Production Theory",
            "Market Structures",
        ],
        duration_minutes: 25,
        url: "https://www.youtube.com/watch?v=Z_S0VA4jKes",
    },
];

/// Reading guide for the demand and supply diagram.
pub const CURVE_NOTES: &[Tip] = &[
    tip("Demand Curve", "Slopes downward (inverse relationship between price and quantity)"),
    tip("Supply Curve", "Slopes upward (direct relationship between price and quantity)"),
    tip("Equilibrium Point", "Where the curves intersect"),
];

/// A row of the elasticity spectrum table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpectrumRow {
    pub kind: &'static str,
    pub value: &'static str,
    pub response: &'static str,
}

const fn spectrum(kind: &'static str, value: &'static str, response: &'static str) -> SpectrumRow {
    SpectrumRow {
        kind,
        value,
        response,
    }
}

/// From perfectly inelastic to perfectly elastic.
pub const ELASTICITY_SPECTRUM: &[SpectrumRow] = &[
    spectrum("Perfectly Inelastic", "0", "No response to price changes"),
    spectrum("Inelastic", "< 1", "Weak response to price changes"),
    spectrum("Unit Elastic", "= 1", "Proportional response"),
    spectrum("Elastic", "> 1", "Strong response to price changes"),
    spectrum("Perfectly Elastic", "∞", "Infinite response"),
];

/// A market structure column of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketComparison {
    pub structure: &'static str,
    pub number_of_firms: &'static str,
    pub product_type: &'static str,
    pub entry_barriers: &'static str,
    pub price_control: &'static str,
}

pub const MARKET_COMPARISON: &[MarketComparison] = &[
    MarketComparison {
        structure: "Perfect Competition",
        number_of_firms: "Many",
        product_type: "Homogeneous",
        entry_barriers: "None",
        price_control: "None (Price Taker)",
    },
    MarketComparison {
        structure: "Monopoly",
        number_of_firms: "One",
        product_type: "Unique",
        entry_barriers: "High",
        price_control: "High (Price Maker)",
    },
    MarketComparison {
        structure: "Oligopoly",
        number_of_firms: "Few",
        product_type: "Differentiated/Similar",
        entry_barriers: "High",
        price_control: "Some",
    },
    MarketComparison {
        structure: "Monopolistic Competition",
        number_of_firms: "Many",
        product_type: "Differentiated",
        entry_barriers: "Low",
        price_control: "Some",
    },
];

pub const LEARNING_OUTCOMES: &[&str] = &[
    "Demand and Supply Analysis",
    "Market Equilibrium",
    "Price Elasticity",
    "Consumer Behavior Theory",
    "Production and Costs",
    "Market Structures",
];

pub const FEATURES: &[&str] = &[
    "Keyword-matching Q&A tutor",
    "Teacher-Student dialogue simulations",
    "Video summaries and concepts",
    "Exam preparation tips",
    "Interactive learning experience",
];

pub const CHAPTER_TOPICS: &[&str] = &[
    "Introduction to Microeconomics",
    "Demand: Definition, Law, Determinants",
    "Supply: Definition, Law, Determinants",
    "Market Equilibrium and Price Determination",
    "Elasticity of Demand and Supply",
    "Consumer Behavior and Utility Analysis",
    "Production Function and Costs",
    "Market Structures (Perfect Competition, Monopoly, etc.)",
];

/// Questions offered as one-click starters in the chat.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What is demand?",
    "Explain elasticity",
    "What is market equilibrium?",
];
