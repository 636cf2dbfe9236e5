//! # Study Tutor
//!
//! The question-answering engine of the economics study tool. This crate reads
//! `econ_content`, classifies free-text questions with an ordered list of keyword
//! rules, and renders the matching topic as a block of light markup.
//!
//! ## Core Components
//!
//! - **responder**: Keyword rules, first-match classification and rendering
//! - **session**: The append-only chat log kept by a front end
//! - **playback**: Paced replay and numbered transcript of the scripted dialogue
//! - **resources**: Text renderings of the static study resources
//! - **config**: TOML configuration for the front end
//!
//! The responder is a total function: every question, including an empty one,
//! produces a non-empty answer.

pub mod config;
pub mod error;
pub mod playback;
pub mod resources;
pub mod responder;
pub mod session;

pub use config::*;
pub use error::*;
pub use playback::*;
pub use responder::*;
pub use session::*;
