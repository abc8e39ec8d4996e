//! The invocation pipeline.
//!
//! A single invocation moves through Parsing, Resolving, Binding, the
//! confirmation gate, and Executing. All resolution and binding failures
//! are caught at this boundary and converted into one user-facing
//! diagnostic plus an exit code; they never reach a handler.

pub mod parser;

pub use parser::{parse_tokens, GlobalFlags, ParsedInvocation};

use serde_json::Value;
use tracing::debug;

use crate::args::{bind, ArgumentCatalog, BoundArgs};
use crate::error::{CairnError, Result};
use crate::help::HelpCatalog;
use crate::status::{Status, Version};
use crate::tree::{CommandNode, CommandPath, CommandTree};
use crate::ui::Console;

/// Exit code for a successful invocation.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any reported error.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a declined or unavailable confirmation, distinct from
/// failure so callers can tell cancellation apart.
pub const EXIT_CANCELLED: i32 = 2;

/// What to do when a deprecated command with a redirect target is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectPolicy {
    /// Emit a deprecation notice and execute the original node.
    #[default]
    WarnAndProceed,
    /// Emit the notice, then execute the redirect target instead.
    Substitute,
}

/// Resolves, binds, gates, and executes a single invocation against the
/// frozen tree.
#[derive(Debug)]
pub struct Invoker<'a> {
    tree: &'a CommandTree,
    args: &'a ArgumentCatalog,
    help: &'a HelpCatalog,
    program_version: Version,
    redirect_policy: RedirectPolicy,
}

impl<'a> Invoker<'a> {
    pub fn new(
        tree: &'a CommandTree,
        args: &'a ArgumentCatalog,
        help: &'a HelpCatalog,
        program_version: Version,
    ) -> Self {
        Self {
            tree,
            args,
            help,
            program_version,
            redirect_policy: RedirectPolicy::default(),
        }
    }

    /// Override the default warn-and-proceed deprecation policy.
    pub fn redirect_policy(mut self, policy: RedirectPolicy) -> Self {
        self.redirect_policy = policy;
        self
    }

    /// Run one invocation and translate the outcome into an exit code.
    ///
    /// A handler's `Some` result is serialized (pretty JSON) to the primary
    /// output stream; `None` produces no additional output.
    pub fn invoke(&self, tokens: &[String], console: &mut dyn Console) -> i32 {
        let parsed = parse_tokens(tokens);
        match self.run(&parsed, console) {
            Ok(Some(value)) => match serde_json::to_string_pretty(&value) {
                Ok(text) => {
                    console.print(&text);
                    EXIT_SUCCESS
                }
                Err(e) => {
                    console.error(&format!("Failed to serialize result: {}", e));
                    EXIT_FAILURE
                }
            },
            Ok(None) => EXIT_SUCCESS,
            Err(CairnError::UserCancelled) => {
                console.error(&CairnError::UserCancelled.to_string());
                EXIT_CANCELLED
            }
            Err(e) => {
                console.error(&e.to_string());
                EXIT_FAILURE
            }
        }
    }

    fn run(&self, parsed: &ParsedInvocation, console: &mut dyn Console) -> Result<Option<Value>> {
        // Help short-circuits past binding and execution, for whatever
        // prefix of the path resolves.
        if parsed.help_requested {
            let (path, _) = self.tree.longest_prefix(&parsed.positionals);
            console.print(&self.help.render(self.tree, self.args, &path));
            return Ok(None);
        }

        if parsed.positionals.is_empty() {
            console.print(&self.help.render(self.tree, self.args, &CommandPath::root()));
            return Ok(None);
        }

        let (path, consumed) = self.tree.longest_prefix(&parsed.positionals);
        debug!("resolved '{}' consuming {} tokens", path, consumed);
        if consumed < parsed.positionals.len() {
            return Err(CairnError::UnknownCommand {
                path: parsed.positionals.join(" "),
            });
        }

        let node = self.node_at(&path)?;
        if node.is_group() {
            console.print(&self.help.render(self.tree, self.args, &path));
            return Err(CairnError::IncompleteCommand {
                path: path.to_string(),
            });
        }

        let node = self.apply_deprecation(node, console)?;
        let path = node.path.clone();

        let specs = self.args.specs_for(&path);
        let bound = bind(specs, &parsed.flags)?;

        self.emit_advisory(node, &bound, console);

        if node.requires_confirmation && !parsed.globals.assume_yes {
            let question = format!("This will run '{}'. Proceed?", path);
            match console.confirm(&question) {
                Ok(true) => {}
                Ok(false) | Err(_) => return Err(CairnError::UserCancelled),
            }
        }

        let handler = node.handler.as_ref().ok_or_else(|| {
            CairnError::Other(anyhow::anyhow!("leaf '{}' has no handler", path))
        })?;
        debug!("executing '{}'", path);
        handler.invoke(&bound)
    }

    fn node_at(&self, path: &CommandPath) -> Result<&'a CommandNode> {
        self.tree
            .get(path)
            .ok_or_else(|| CairnError::UnknownCommand {
                path: path.to_string(),
            })
    }

    /// Gate deprecated nodes on the hide-after version and emit exactly one
    /// notice. Under [`RedirectPolicy::Substitute`] the redirect target is
    /// executed instead of the original node.
    fn apply_deprecation(
        &self,
        node: &'a CommandNode,
        console: &mut dyn Console,
    ) -> Result<&'a CommandNode> {
        let Status::Deprecated(dep) = &node.status else {
            return Ok(node);
        };

        if let Some(hidden_after) = dep.hidden_after {
            if self.program_version >= hidden_after {
                return Err(CairnError::Removed {
                    path: node.path.to_string(),
                    version: hidden_after.to_string(),
                });
            }
        }

        let mut notice = format!("'{}' is deprecated and will be removed", node.path);
        if let Some(hidden_after) = dep.hidden_after {
            notice.push_str(&format!(" in version {}", hidden_after));
        }
        notice.push('.');
        if let Some(target) = &dep.redirect_to {
            notice.push_str(&format!(" Use '{}' instead.", target));
        }
        console.diagnostic(&notice);

        match (&self.redirect_policy, &dep.redirect_to) {
            (RedirectPolicy::Substitute, Some(target)) => {
                let substitute = self.node_at(target)?;
                if substitute.is_group() {
                    return Err(CairnError::IncompleteCommand {
                        path: target.to_string(),
                    });
                }
                debug!("substituting '{}' for '{}'", target, node.path);
                Ok(substitute)
            }
            _ => Ok(node),
        }
    }

    /// One advisory banner when the node or any bound argument is in
    /// preview or experimental status. Never blocks execution.
    fn emit_advisory(&self, node: &CommandNode, bound: &BoundArgs, console: &mut dyn Console) {
        let mut subjects: Vec<String> = Vec::new();
        if node.status.is_advisory() {
            subjects.push(format!(
                "command '{}' is {}",
                node.path,
                node.status.label()
            ));
        }
        for spec in self.args.specs_for(&node.path) {
            if spec.status.is_advisory() && bound.get(&spec.name).is_some() {
                subjects.push(format!("argument '--{}' is {}", spec.name, spec.status.label()));
            }
        }
        if !subjects.is_empty() {
            console.diagnostic(&format!(
                "Advisory: {}; behavior may change without notice.",
                subjects.join(", ")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArgType, ArgValue, ArgumentSpec};
    use crate::help::HelpConfig;
    use crate::tree::{CommandOptions, HandlerRef, Registry};
    use crate::ui::MockConsole;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    struct Fixture {
        tree: CommandTree,
        args: ArgumentCatalog,
        help: HelpCatalog,
    }

    fn fixture() -> Fixture {
        let mut registry = Registry::new();
        let mut abc = registry.open_group("abc".parse().unwrap(), None).unwrap();
        abc.command(
            "first",
            HandlerRef::new(|args| {
                Ok(Some(serde_json::json!({ "number": args.get_int("number") })))
            })
            .describe("Echo the bound number."),
            CommandOptions::new(),
        )
        .unwrap();
        abc.command(
            "last",
            HandlerRef::new(|_| Ok(Some(serde_json::json!("ok")))),
            CommandOptions::new().status(Status::Experimental),
        )
        .unwrap();
        abc.command(
            "letters",
            HandlerRef::new(|_| Ok(Some(serde_json::json!("letters")))),
            CommandOptions::new().status(Status::deprecated(
                Some("abc first".parse().unwrap()),
                Some(Version::new(3, 0, 0)),
            )),
        )
        .unwrap();
        let mut danger = registry.open_group("danger".parse().unwrap(), None).unwrap();
        danger
            .command(
                "cleanup",
                HandlerRef::new(|_| Ok(Some(serde_json::json!("cleaned")))),
                CommandOptions::new().confirm(),
            )
            .unwrap();
        let tree = registry.freeze().unwrap();

        let mut args = ArgumentCatalog::new();
        args.declare(
            &tree,
            &"abc first".parse().unwrap(),
            ArgumentSpec::new("number", ArgType::Integer).default_value(ArgValue::Int(5)),
        )
        .unwrap();
        args.declare(
            &tree,
            &"abc last".parse().unwrap(),
            ArgumentSpec::new("number", ArgType::Integer).default_value(ArgValue::Int(5)),
        )
        .unwrap();

        let help = HelpCatalog::new(HelpConfig::new("demo", "Demo CLI", "No data collected."));
        Fixture { tree, args, help }
    }

    fn invoker(f: &Fixture) -> Invoker<'_> {
        Invoker::new(&f.tree, &f.args, &f.help, Version::new(1, 2, 0))
    }

    #[test]
    fn end_to_end_binds_flag_value() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first", "--number", "3"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(console.stdout().contains("\"number\": 3"));
    }

    #[test]
    fn omitted_flag_uses_default() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(console.stdout().contains("\"number\": 5"));
    }

    #[test]
    fn group_resolution_fails_and_shows_group_help() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.stdout().contains("first"));
        assert!(console.errors.iter().any(|e| e.contains("group")));
    }

    #[test]
    fn unknown_command_fails() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["zzz"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.errors.iter().any(|e| e.contains("zzz")));
    }

    #[test]
    fn leftover_positional_after_leaf_fails() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first", "extra"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.errors.iter().any(|e| e.contains("abc first extra")));
    }

    #[test]
    fn help_short_circuits_execution() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first", "-h"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        // Handler output would be JSON; help text is not.
        assert!(!console.stdout().contains("\"number\""));
        assert!(console.stdout().contains("Echo the bound number."));
    }

    #[test]
    fn no_tokens_shows_root_help() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&[], &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(console.stdout().contains("Demo CLI"));
    }

    #[test]
    fn unknown_flag_fails_without_invoking_handler() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first", "--bogus", "1"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.printed.is_empty());
        assert!(console.errors.iter().any(|e| e.contains("--bogus")));
    }

    #[test]
    fn coercion_failure_reports_offending_argument() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "first", "--number", "three"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.printed.is_empty());
        assert!(console.errors.iter().any(|e| e.contains("three")));
    }

    #[test]
    fn experimental_node_emits_one_advisory_and_succeeds() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "last", "--number", "3"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(console.diagnostic_count("experimental"), 1);
    }

    #[test]
    fn deprecated_node_warns_and_proceeds_against_original() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["abc", "letters"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(console.diagnostic_count("deprecated"), 1);
        assert!(console.stdout().contains("letters"));
    }

    #[test]
    fn deprecated_node_past_hide_version_is_removed() {
        let f = fixture();
        let mut console = MockConsole::new();
        let invoker = Invoker::new(&f.tree, &f.args, &f.help, Version::new(3, 0, 0));
        let code = invoker.invoke(&toks(&["abc", "letters"]), &mut console);
        assert_eq!(code, EXIT_FAILURE);
        assert!(console.errors.iter().any(|e| e.contains("removed")));
    }

    #[test]
    fn substitute_policy_executes_redirect_target() {
        let f = fixture();
        let mut console = MockConsole::new();
        let invoker = invoker(&f).redirect_policy(RedirectPolicy::Substitute);
        let code = invoker.invoke(&toks(&["abc", "letters", "--number", "7"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(console.diagnostic_count("deprecated"), 1);
        assert!(console.stdout().contains("\"number\": 7"));
    }

    #[test]
    fn declined_confirmation_cancels_with_distinct_code() {
        let f = fixture();
        let mut console = MockConsole::new();
        console.push_answer(false);
        let code = invoker(&f).invoke(&toks(&["danger", "cleanup"]), &mut console);
        assert_eq!(code, EXIT_CANCELLED);
        assert!(console.printed.is_empty());
    }

    #[test]
    fn confirmation_eof_cancels() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["danger", "cleanup"]), &mut console);
        assert_eq!(code, EXIT_CANCELLED);
    }

    #[test]
    fn accepted_confirmation_executes() {
        let f = fixture();
        let mut console = MockConsole::new();
        console.push_answer(true);
        let code = invoker(&f).invoke(&toks(&["danger", "cleanup"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(console.stdout().contains("cleaned"));
    }

    #[test]
    fn assume_yes_bypasses_confirmation() {
        let f = fixture();
        let mut console = MockConsole::new();
        let code = invoker(&f).invoke(&toks(&["danger", "cleanup", "-y"]), &mut console);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(console.confirmations_asked.is_empty());
    }
}
