//! Responder - maps a free-text question to one rendered explanation.
//!
//! Classification works as follows:
//! 1. **Normalize**: Lower-case a copy of the question for matching
//! 2. **Dispatch**: Walk the ordered rule table; the first matching rule wins
//! 3. **Fallback**: No match (including empty input) yields the topic listing
//! 4. **Render**: Look the topic up in the knowledge base and render it

pub mod render;
mod rule;

pub use rule::*;

use econ_content::KnowledgeBase;
use tracing::{debug, warn};

/// Answers questions from a knowledge base.
///
/// Holds no mutable state; the same question always yields the same answer.
#[derive(Debug, Clone, Copy)]
pub struct Responder<'kb> {
    knowledge: &'kb KnowledgeBase,
    rules: &'static [Rule],
}

impl<'kb> Responder<'kb> {
    /// Create a responder over `knowledge` using the standard rule table.
    pub fn new(knowledge: &'kb KnowledgeBase) -> Self {
        Self::with_rules(knowledge, RULES)
    }

    /// Create a responder with a custom rule table.
    pub fn with_rules(knowledge: &'kb KnowledgeBase, rules: &'static [Rule]) -> Self {
        Self { knowledge, rules }
    }

    pub fn knowledge(&self) -> &'kb KnowledgeBase {
        self.knowledge
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Decide what to answer without rendering anything.
    pub fn classify(&self, question: &str) -> Reply {
        let normalized = question.to_lowercase();
        match first_match(self.rules, &normalized) {
            Some(rule) => {
                debug!(rule = rule.name, "Question matched rule");
                rule.reply
            }
            None => {
                debug!("No rule matched, using fallback");
                Reply::Fallback
            }
        }
    }

    /// Answer a question. Never fails and never returns an empty string.
    pub fn respond(&self, question: &str) -> String {
        self.render(self.classify(question))
    }

    /// Render a reply.
    pub fn render(&self, reply: Reply) -> String {
        match reply {
            Reply::Greeting => render::GREETING.to_string(),
            Reply::Topic(key) => match self.knowledge.get(key) {
                Some(record) => render::render_topic(record),
                None => {
                    warn!(topic = %key, "Topic missing from knowledge base, using fallback");
                    render::fallback()
                }
            },
            Reply::ExamTips => render::exam_tips(),
            Reply::Comparison => render::comparison(),
            Reply::Fallback => render::fallback(),
        }
    }
}

impl Responder<'static> {
    /// Responder over the shared knowledge base.
    pub fn global() -> Self {
        Self::new(KnowledgeBase::global())
    }
}

/// Answer a question using the shared knowledge base.
pub fn respond(question: &str) -> String {
    Responder::global().respond(question)
}
