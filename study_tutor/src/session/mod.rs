//! Session module - the chat history a front end keeps for one user.
//!
//! The log is append-only and can only be cleared as a whole. The responder
//! never reads or writes it; the front end owns it and passes it around by
//! reference.

mod entry;

pub use entry::*;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::responder::Responder;

/// Ordered chat history for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatLog {
    session_id: SessionId,
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    /// Create an empty log for a new session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Append an entry and return a reference to it.
    pub fn push(&mut self, entry: ChatEntry) -> &ChatEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &ChatEntry {
        self.push(ChatEntry::new(Role::User, content))
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatEntry {
        self.push(ChatEntry::new(Role::Assistant, content))
    }

    /// Ask the responder a question and record both sides of the exchange.
    ///
    /// Blank questions are ignored and leave the log untouched.
    pub fn ask(&mut self, responder: &Responder<'_>, question: &str) -> Option<String> {
        if question.trim().is_empty() {
            return None;
        }

        let answer = responder.respond(question);
        self.push_user(question);
        self.push_assistant(answer.clone());
        debug!(session = %self.session_id, entries = self.entries.len(), "Recorded exchange");
        Some(answer)
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. The session id is kept.
    pub fn clear(&mut self) {
        info!(session = %self.session_id, dropped = self.entries.len(), "Chat history cleared");
        self.entries.clear();
    }

    /// Render the history, oldest first.
    ///
    /// With `timestamp_format` set, each header carries the entry time,
    /// e.g. `You (14:02:11):`.
    pub fn render(&self, timestamp_format: Option<&str>) -> String {
        let mut out = String::new();

        for entry in &self.entries {
            match timestamp_format {
                Some(format) => out.push_str(&format!(
                    "{} ({}):\n",
                    entry.role.display_name(),
                    entry.formatted_time(format)
                )),
                None => out.push_str(&format!("{}:\n", entry.role.display_name())),
            }
            out.push_str(&entry.content);
            out.push_str("\n\n");
        }

        out
    }

    /// Export the log as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::render;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_ask_appends_question_then_answer() {
        let mut log = ChatLog::new();
        let responder = Responder::global();

        let answer = log.ask(&responder, "What is demand?").unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].role, Role::User);
        assert_eq!(log.entries()[0].content, "What is demand?");
        assert_eq!(log.entries()[1].role, Role::Assistant);
        assert_eq!(log.entries()[1].content, answer);
        assert!(answer.starts_with("**Understanding Demand:**"));
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut log = ChatLog::new();
        let responder = Responder::global();

        assert!(log.ask(&responder, "").is_none());
        assert!(log.ask(&responder, "  \n").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_history_keeps_order() {
        let mut log = ChatLog::new();
        let responder = Responder::global();

        log.ask(&responder, "hello");
        log.ask(&responder, "xyz123");

        let contents: Vec<_> = log.entries().iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0], "hello");
        assert_eq!(contents[1], render::GREETING);
        assert_eq!(contents[2], "xyz123");
        assert_eq!(contents[3], render::fallback());
    }

    #[test]
    fn test_clear() {
        let mut log = ChatLog::new();
        let session = log.session_id();
        log.push_user("question");
        log.push_assistant("answer");

        log.clear();

        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert_eq!(log.session_id(), session);
    }

    #[test]
    fn test_render_with_and_without_timestamps() {
        let at = Local.with_ymd_and_hms(2024, 5, 10, 14, 2, 11).unwrap();
        let mut log = ChatLog::new();
        log.push(ChatEntry::new(Role::User, "hi").with_timestamp(at));
        log.push(ChatEntry::new(Role::Assistant, "Hello!").with_timestamp(at));

        assert_eq!(
            log.render(Some("%H:%M:%S")),
            "You (14:02:11):\nhi\n\nAI Tutor (14:02:11):\nHello!\n\n"
        );
        assert_eq!(log.render(None), "You:\nhi\n\nAI Tutor:\nHello!\n\n");
    }

    #[test]
    fn test_json_export() {
        let mut log = ChatLog::new();
        log.push_user("What is supply?");

        let json = log.to_json().unwrap();
        let restored: ChatLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, log);
        assert!(json.contains("\"role\": \"user\""));
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(ChatLog::new().session_id(), ChatLog::new().session_id());
    }
}
