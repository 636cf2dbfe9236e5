//! Dialogue playback: a paced replay plan and a numbered transcript.
//!
//! The player only computes the schedule. Sleeping between lines is the
//! front end's job, which keeps this module free of blocking calls.

use econ_content::{dialogue, DialogueLine};
use std::time::Duration;

use crate::config::TutorConfig;

/// One step of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStep<'a> {
    /// 1-based position in the dialogue.
    pub number: usize,
    pub line: &'a DialogueLine,
    /// How long to wait after showing this line.
    pub pause: Duration,
}

/// Replays a dialogue with a fixed pause after every line.
#[derive(Debug, Clone)]
pub struct DialoguePlayer<'a> {
    lines: &'a [DialogueLine],
    pace: Duration,
}

impl DialoguePlayer<'static> {
    /// Player for the scripted lesson, paced from configuration.
    pub fn from_config(config: &TutorConfig) -> Self {
        Self::new(dialogue(), config.dialogue_pace())
    }
}

impl<'a> DialoguePlayer<'a> {
    pub fn new(lines: &'a [DialogueLine], pace: Duration) -> Self {
        Self { lines, pace }
    }

    pub fn pace(&self) -> Duration {
        self.pace
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total time spent pausing over a full replay.
    pub fn total_duration(&self) -> Duration {
        self.pace * self.lines.len() as u32
    }

    /// Steps in dialogue order.
    pub fn steps(&self) -> impl Iterator<Item = PlaybackStep<'a>> {
        let pause = self.pace;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| PlaybackStep {
                number: i + 1,
                line,
                pause,
            })
    }
}

/// Numbered transcript, one line per entry: `**1. Teacher:** ...`.
pub fn transcript(lines: &[DialogueLine]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("**{}. {}:** {}", i + 1, line.speaker, line.text))
        .collect::<Vec<_>>()
        .join("\n")
}
