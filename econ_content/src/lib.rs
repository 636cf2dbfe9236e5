//! # Econ Content
//!
//! The study material crate - topic records, the knowledge base, the scripted
//! teacher-student dialogue and the static study resources.
//! This crate is the single source of truth for content and does not contain any
//! question-matching logic.

pub mod dialogue;
pub mod error;
pub mod knowledge_base;
pub mod resources;
pub mod topics;

pub use dialogue::*;
pub use error::*;
pub use knowledge_base::*;
pub use topics::*;
