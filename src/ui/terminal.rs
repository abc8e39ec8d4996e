//! Interactive terminal console.

use console::{style, Term};
use dialoguer::Confirm;

use crate::error::{CairnError, Result};

use super::{Console, Verbosity};

/// Convert dialoguer errors to CairnError.
fn map_dialoguer_err(e: dialoguer::Error) -> CairnError {
    CairnError::Io(e.into())
}

/// Console backed by the real terminal: primary output on stdout,
/// diagnostics on stderr, confirmation via dialoguer.
#[derive(Debug)]
pub struct TerminalConsole {
    verbosity: Verbosity,
    term: Term,
}

impl TerminalConsole {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            term: Term::stderr(),
        }
    }
}

impl Console for TerminalConsole {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn print(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn diagnostic(&mut self, msg: &str) {
        if self.verbosity.shows_diagnostics() {
            eprintln!("{}", style(msg).yellow());
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_on(&self.term)
            .map_err(map_dialoguer_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_console_reports_verbosity() {
        let console = TerminalConsole::new(Verbosity::Verbose);
        assert_eq!(console.verbosity(), Verbosity::Verbose);
    }
}
