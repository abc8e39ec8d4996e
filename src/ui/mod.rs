//! Console abstraction: primary output, diagnostic stream, confirmation.
//!
//! This module provides:
//! - [`Console`] trait for terminal abstraction
//! - [`TerminalConsole`] for interactive terminal usage
//! - [`MockConsole`] for tests
//!
//! The diagnostic stream carries deprecation notices, preview/experimental
//! advisories, and warnings; it is suppressed entirely in quiet mode.

pub mod mock;
pub mod terminal;

pub use mock::MockConsole;
pub use terminal::TerminalConsole;

use std::str::FromStr;

use crate::error::Result;

/// Diagnostic-stream verbosity, selected by mutually exclusive flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and above.
    #[default]
    Normal,
    /// Info and above.
    Verbose,
    /// Everything.
    Debug,
}

impl Verbosity {
    /// Whether deprecation notices and advisories are shown.
    pub fn shows_diagnostics(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// The tracing filter directive for this level, scoped to `prog`.
    pub fn tracing_directive(&self, prog: &str) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "trace",
        };
        format!("{}={}", prog, level)
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("unknown verbosity: {}", s)),
        }
    }
}

/// Trait for console interactions.
///
/// This trait allows mocking the terminal in tests.
pub trait Console {
    /// Current verbosity level.
    fn verbosity(&self) -> Verbosity;

    /// Write to the primary output stream (structured results, help text).
    fn print(&mut self, msg: &str);

    /// Write a notice or advisory to the diagnostic stream. Implementations
    /// suppress these in quiet mode.
    fn diagnostic(&mut self, msg: &str);

    /// Write an error to the diagnostic stream. Never suppressed.
    fn error(&mut self, msg: &str);

    /// Present a yes/no prompt. An `Err` means input was unavailable
    /// (EOF or no terminal) and callers treat it as a decline.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_str() {
        assert_eq!("quiet".parse::<Verbosity>(), Ok(Verbosity::Quiet));
        assert_eq!("DEBUG".parse::<Verbosity>(), Ok(Verbosity::Debug));
        assert!("loud".parse::<Verbosity>().is_err());
    }

    #[test]
    fn verbosity_default_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn quiet_suppresses_diagnostics() {
        assert!(!Verbosity::Quiet.shows_diagnostics());
        assert!(Verbosity::Normal.shows_diagnostics());
        assert!(Verbosity::Verbose.shows_diagnostics());
        assert!(Verbosity::Debug.shows_diagnostics());
    }

    #[test]
    fn tracing_directives_scope_to_program() {
        assert_eq!(Verbosity::Quiet.tracing_directive("demo"), "demo=error");
        assert_eq!(Verbosity::Normal.tracing_directive("demo"), "demo=warn");
        assert_eq!(Verbosity::Verbose.tracing_directive("demo"), "demo=info");
        assert_eq!(Verbosity::Debug.tracing_directive("demo"), "demo=trace");
    }
}
