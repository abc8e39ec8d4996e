//! Mock console for tests.
//!
//! Records everything written to each stream and replays scripted answers
//! for confirmation prompts. An exhausted answer queue simulates EOF.

use std::collections::VecDeque;
use std::io;

use crate::error::{CairnError, Result};

use super::{Console, Verbosity};

/// Recording console used by unit and integration tests.
#[derive(Debug, Default)]
pub struct MockConsole {
    verbosity: Verbosity,
    /// Lines written to the primary output stream.
    pub printed: Vec<String>,
    /// Lines written to the diagnostic stream.
    pub diagnostics: Vec<String>,
    /// Error lines.
    pub errors: Vec<String>,
    /// Questions asked via `confirm`.
    pub confirmations_asked: Vec<String>,
    answers: VecDeque<bool>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    /// Queue an answer for the next confirmation prompt.
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }

    /// All primary output joined into one string.
    pub fn stdout(&self) -> String {
        self.printed.join("\n")
    }

    /// Count of diagnostic lines containing `needle`.
    pub fn diagnostic_count(&self, needle: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.contains(needle)).count()
    }
}

impl Console for MockConsole {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn print(&mut self, msg: &str) {
        self.printed.push(msg.to_string());
    }

    fn diagnostic(&mut self, msg: &str) {
        if self.verbosity.shows_diagnostics() {
            self.diagnostics.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.confirmations_asked.push(question.to_string());
        self.answers.pop_front().ok_or_else(|| {
            CairnError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"))
        })
    }
}
