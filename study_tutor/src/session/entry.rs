//! Chat entry definitions.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a chat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Header shown above the entry.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "AI Tutor",
        }
    }
}

/// One message in the chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    /// Override the timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Format the timestamp with a `chrono` format string.
    pub fn formatted_time(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_creation() {
        let entry = ChatEntry::new(Role::User, "What is demand?");
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.content, "What is demand?");
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let a = ChatEntry::new(Role::User, "a");
        let b = ChatEntry::new(Role::User, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_formatted_time() {
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        let entry = ChatEntry::new(Role::Assistant, "Hello").with_timestamp(at);

        assert_eq!(entry.formatted_time("%H:%M:%S"), "09:05:07");
        assert_eq!(entry.formatted_time("%H:%M"), "09:05");
    }

    #[test]
    fn test_role_names() {
        assert_eq!(Role::User.display_name(), "You");
        assert_eq!(Role::Assistant.display_name(), "AI Tutor");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
