//! Errors raised while looking up study content.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),
}
