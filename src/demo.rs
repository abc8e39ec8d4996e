//! Demo command set.
//!
//! Wires a handful of trivial handlers (alphabet listing, numeric ranges,
//! sample JSON and log output) into the framework so every part of the
//! contract is exercised: groups, status inheritance, deprecation with a
//! redirect, argument coercion with choices and defaults, confirmation
//! gating, and explicit help entries with examples.

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::args::{ArgType, ArgValue, ArgumentCatalog, ArgumentSpec};
use crate::error::Result;
use crate::help::{EntryType, HelpCatalog, HelpConfig, HelpEntry};
use crate::status::{Status, Version};
use crate::tree::{CommandOptions, CommandPath, CommandTree, HandlerRef, Registry};

/// Invocation name of the demo binary.
pub const PROGRAM: &str = "cairn";

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Everything the invoker needs, built in one registration pass.
#[derive(Debug)]
pub struct Demo {
    pub tree: CommandTree,
    pub args: ArgumentCatalog,
    pub help: HelpCatalog,
}

/// Build the demo command tree, argument specs, and help entries.
pub fn build_demo() -> Result<Demo> {
    let tree = register_commands()?;
    let args = declare_arguments(&tree)?;
    let help = help_entries();
    Ok(Demo { tree, args, help })
}

fn register_commands() -> Result<CommandTree> {
    let mut registry = Registry::new();

    {
        let mut abc = registry.open_group("abc".parse().unwrap_or_default(), None)?;
        abc.command(
            "first",
            HandlerRef::new(|args| {
                let number = args.get_int("number").unwrap_or(5).clamp(0, 26) as usize;
                let letters: Vec<String> =
                    ALPHABET.chars().take(number).map(String::from).collect();
                Ok(Some(json!(letters)))
            })
            .describe("List the first letters of the alphabet."),
            CommandOptions::new(),
        )?;
        abc.command(
            "last",
            HandlerRef::new(|args| {
                let number = args.get_int("number").unwrap_or(5).clamp(0, 26) as usize;
                let letters: Vec<String> = ALPHABET
                    .chars()
                    .skip(26 - number)
                    .map(String::from)
                    .collect();
                Ok(Some(json!(letters)))
            })
            .describe("List the last letters of the alphabet."),
            CommandOptions::new().status(Status::Experimental),
        )?;
        abc.command(
            "letters",
            HandlerRef::new(|_| {
                let letters: Vec<String> = ALPHABET.chars().map(String::from).collect();
                Ok(Some(json!(letters)))
            })
            .describe("List the whole alphabet."),
            CommandOptions::new().status(Status::deprecated(
                Some("abc first".parse().unwrap_or_default()),
                Some(Version::new(3, 0, 0)),
            )),
        )?;
    }

    {
        let mut top = registry.open_group(CommandPath::root(), None)?;
        top.command(
            "range",
            HandlerRef::new(|args| {
                let start = args.get_int("start").unwrap_or(0);
                let end = args.get_int("end").unwrap_or(10);
                let step = args.get_int("step").unwrap_or(1).max(1);
                let numbers: Vec<i64> = (start..end).step_by(step as usize).collect();
                Ok(Some(json!(numbers)))
            })
            .describe("List the integers from start (inclusive) to end (exclusive)."),
            CommandOptions::new(),
        )?;
    }

    {
        let mut sample = registry.open_group("sample".parse().unwrap_or_default(), None)?;
        sample.command(
            "json",
            HandlerRef::new(|_| {
                Ok(Some(json!({
                    "name": "trail marker",
                    "height_m": 1.2,
                    "stones": 14,
                    "tags": ["granite", "summit"],
                })))
            })
            .describe("Emit a small sample JSON document."),
            CommandOptions::new(),
        )?;
        sample.command(
            "log",
            HandlerRef::new(|_| {
                error!("sample error line");
                warn!("sample warning line");
                info!("sample info line");
                debug!("sample debug line");
                Ok(None)
            })
            .describe("Emit one log line at each severity."),
            CommandOptions::new(),
        )?;
    }

    {
        let mut danger = registry.open_group("danger".parse().unwrap_or_default(), None)?;
        danger.command(
            "cleanup",
            HandlerRef::new(|_| Ok(Some(json!({ "status": "cleaned" }))))
                .describe("Pretend to remove everything."),
            CommandOptions::new().confirm(),
        )?;
    }

    registry.freeze()
}

fn declare_arguments(tree: &CommandTree) -> Result<ArgumentCatalog> {
    let mut args = ArgumentCatalog::new();

    let abc_first: CommandPath = "abc first".parse().unwrap_or_default();
    args.declare(
        tree,
        &abc_first,
        ArgumentSpec::new("number", ArgType::Integer)
            .default_value(ArgValue::Int(5))
            .describe("How many letters to list."),
    )?;

    let abc_last: CommandPath = "abc last".parse().unwrap_or_default();
    args.declare(
        tree,
        &abc_last,
        ArgumentSpec::new("number", ArgType::Integer)
            .default_value(ArgValue::Int(5))
            .status(Status::Preview)
            .describe("How many letters to list."),
    )?;

    let range: CommandPath = "range".parse().unwrap_or_default();
    args.declare(
        tree,
        &range,
        ArgumentSpec::new("start", ArgType::Integer).describe("First number, inclusive."),
    )?;
    args.declare(
        tree,
        &range,
        ArgumentSpec::new("end", ArgType::Integer)
            .default_value(ArgValue::Int(10))
            .describe("Last number, exclusive."),
    )?;
    args.declare(
        tree,
        &range,
        ArgumentSpec::new("step", ArgType::Integer)
            .choices(["1", "2", "5"])
            .default_value(ArgValue::Int(1))
            .describe("Stride between numbers."),
    )?;

    Ok(args)
}

fn help_entries() -> HelpCatalog {
    let mut help = HelpCatalog::new(HelpConfig::new(
        PROGRAM,
        "Welcome to Cairn, a demo of hierarchical command dispatch!",
        "This demo runs entirely offline and collects no usage data.",
    ));

    help.insert(
        HelpEntry::new(
            "abc".parse().unwrap_or_default(),
            EntryType::Group,
            "Alphabet listing commands.",
        )
        .long_summary("Toy commands that slice the lowercase alphabet."),
    );
    help.insert(
        HelpEntry::new(
            "abc first".parse().unwrap_or_default(),
            EntryType::Command,
            "List the first letters of the alphabet.",
        )
        .example("List five letters", "{prog} abc first")
        .example("List three letters", "{prog} abc first --number 3"),
    );
    help.insert(
        HelpEntry::new(
            "range".parse().unwrap_or_default(),
            EntryType::Command,
            "List a range of integers.",
        )
        .example("Zero through nine", "{prog} range --start 0")
        .example("Even numbers", "{prog} range --start 0 --end 20 --step 2"),
    );

    help
}
