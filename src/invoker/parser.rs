//! Raw token parsing.
//!
//! Splits an invocation's tokens into positional path segments, command
//! flags, and global flags. `--name value` and `--name=value` are
//! equivalent; `-h`/`--help` is recognized at any position and
//! short-circuits the pipeline to the help catalog.

use crate::args::RawFlag;
use crate::ui::Verbosity;

/// Global flags stripped before binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    /// Diagnostic-stream verbosity. The `--quiet`, `--verbose` and
    /// `--debug` flags are mutually exclusive; the last one wins.
    pub verbosity: Verbosity,
    /// `--yes`/`-y`: bypass confirmation gates.
    pub assume_yes: bool,
}

/// The outcome of token parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// Bare tokens, in order; the leading run is matched against the tree.
    pub positionals: Vec<String>,
    /// Command flags, in order of appearance.
    pub flags: Vec<RawFlag>,
    /// `-h`/`--help` appeared anywhere.
    pub help_requested: bool,
    /// Stripped global flags.
    pub globals: GlobalFlags,
}

/// A token that is never a flag value: another `--flag`, or one of the
/// recognized short globals. Other single-dash tokens (negative numbers)
/// are still consumed as values.
fn is_flag_token(token: &str) -> bool {
    token.starts_with("--") || matches!(token, "-h" | "-q" | "-y")
}

/// Parse raw invocation tokens (without the program name).
pub fn parse_tokens(tokens: &[String]) -> ParsedInvocation {
    let mut parsed = ParsedInvocation::default();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "-h" | "--help" => parsed.help_requested = true,
            "-q" | "--quiet" => parsed.globals.verbosity = Verbosity::Quiet,
            "--verbose" => parsed.globals.verbosity = Verbosity::Verbose,
            "--debug" => parsed.globals.verbosity = Verbosity::Debug,
            "-y" | "--yes" => parsed.globals.assume_yes = true,
            _ if token.starts_with("--") => {
                let body = &token[2..];
                if let Some((name, value)) = body.split_once('=') {
                    parsed.flags.push(RawFlag::new(name, Some(value)));
                } else if i + 1 < tokens.len() && !is_flag_token(&tokens[i + 1]) {
                    parsed.flags.push(RawFlag::new(body, Some(&tokens[i + 1])));
                    i += 1;
                } else {
                    parsed.flags.push(RawFlag::new(body, None));
                }
            }
            _ => parsed.positionals.push(token.to_string()),
        }
        i += 1;
    }

    parsed
}
