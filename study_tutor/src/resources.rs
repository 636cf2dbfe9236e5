//! Text renderings of the static study resources.

use econ_content::resources::*;

fn table_row(cells: &[&str]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

fn table_rule(columns: usize) -> String {
    format!("|{}\n", "---|".repeat(columns))
}

/// Recommended lectures with their topics, running time and link.
pub fn video_lectures() -> String {
    let mut out = String::from("**Recommended Video Lectures:**\n");
    for (i, video) in VIDEO_LECTURES.iter().enumerate() {
        out.push_str(&format!("\n**Video {}: {}**\n", i + 1, video.title));
        out.push_str("Topics Covered:\n");
        for topic in video.topics {
            out.push_str(&format!("- {}\n", topic));
        }
        out.push_str(&format!("Duration: ~{} minutes\n", video.duration_minutes));
        out.push_str(&format!("Watch: {}\n", video.url));
    }
    out
}

/// How to read the demand and supply diagram.
pub fn curve_notes() -> String {
    let mut out = String::from("**Demand and Supply Curve:**\n");
    for note in CURVE_NOTES {
        out.push_str(&format!("- **{}:** {}\n", note.title, note.detail));
    }
    out
}

pub fn elasticity_spectrum() -> String {
    let mut out = String::from("**Elasticity Spectrum:**\n\n");
    out.push_str(&table_row(&["Type", "Elasticity Value", "Consumer Response"]));
    out.push_str(&table_rule(3));
    for row in ELASTICITY_SPECTRUM {
        out.push_str(&table_row(&[row.kind, row.value, row.response]));
    }
    out
}

/// Market structures as columns, features as rows.
pub fn market_comparison() -> String {
    let mut out = String::from("**Market Structure Comparison:**\n\n");

    let mut header = vec!["Feature"];
    header.extend(MARKET_COMPARISON.iter().map(|m| m.structure));
    out.push_str(&table_row(&header));
    out.push_str(&table_rule(header.len()));

    let features: [(&str, fn(&MarketComparison) -> &'static str); 4] = [
        ("Number of Firms", |m| m.number_of_firms),
        ("Product Type", |m| m.product_type),
        ("Entry Barriers", |m| m.entry_barriers),
        ("Price Control", |m| m.price_control),
    ];
    for (feature, cell) in features {
        let mut row = vec![feature];
        row.extend(MARKET_COMPARISON.iter().map(cell));
        out.push_str(&table_row(&row));
    }

    out
}

pub fn exam_success_tips() -> String {
    let mut out = format!("**Top {} Exam Success Tips:**\n", EXAM_SUCCESS_TIPS.len());
    for (i, tip) in EXAM_SUCCESS_TIPS.iter().enumerate() {
        out.push_str(&format!("\n{}. **{}:** {}", i + 1, tip.title, tip.detail));
    }
    out
}

/// Everything on the resources page, in page order.
pub fn resources_page() -> String {
    [
        video_lectures(),
        curve_notes(),
        elasticity_spectrum(),
        market_comparison(),
        exam_success_tips(),
    ]
    .join("\n")
}

/// What the course covers.
pub fn overview() -> String {
    let mut out = String::from("**What You'll Learn:**\n");
    for item in LEARNING_OUTCOMES {
        out.push_str(&format!("- {}\n", item));
    }
    out.push_str("\n**Features:**\n");
    for item in FEATURES {
        out.push_str(&format!("- {}\n", item));
    }
    out.push_str("\n**Chapter Topics Covered:**\n");
    for item in CHAPTER_TOPICS {
        out.push_str(&format!("- {}\n", item));
    }
    out
}
