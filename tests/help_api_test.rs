//! Integration tests for the help catalog public API.

use cairn::args::{ArgType, ArgValue, ArgumentCatalog, ArgumentSpec};
use cairn::help::{EntryType, HelpCatalog, HelpConfig, HelpEntry};
use cairn::status::Status;
use cairn::tree::{CommandOptions, CommandPath, CommandTree, HandlerRef, Registry};

fn build_tree() -> CommandTree {
    let mut registry = Registry::new();
    {
        let mut abc = registry.open_group("abc".parse().unwrap(), None).unwrap();
        abc.command(
            "first",
            HandlerRef::new(|_| Ok(None)).describe("List the first letters."),
            CommandOptions::new(),
        )
        .unwrap();
        abc.command(
            "last",
            HandlerRef::new(|_| Ok(None)),
            CommandOptions::new().status(Status::Experimental),
        )
        .unwrap();
    }
    {
        let mut sample = registry.open_group("sample".parse().unwrap(), None).unwrap();
        sample
            .command("json", HandlerRef::new(|_| Ok(None)), CommandOptions::new())
            .unwrap();
    }
    registry.freeze().unwrap()
}

fn build_catalog() -> HelpCatalog {
    let mut help = HelpCatalog::new(HelpConfig::new(
        "demo",
        "Welcome to the Demo CLI!",
        "The demo collects no usage data.",
    ));
    help.insert(
        HelpEntry::new(
            "abc first".parse().unwrap(),
            EntryType::Command,
            "List the first letters of the alphabet.",
        )
        .long_summary("Counts from 'a' upward.")
        .example("Three letters", "{prog} abc first --number 3"),
    );
    help
}

#[test]
fn lookup_returns_matching_path_for_every_registered_node() {
    let tree = build_tree();
    let help = build_catalog();
    for path in tree.paths() {
        let entry = help.lookup(&tree, path);
        assert_eq!(&entry.path, path, "entry path mismatch for {}", path);
    }
}

#[test]
fn synthesized_stub_carries_correct_entry_type() {
    let tree = build_tree();
    let help = build_catalog();
    assert_eq!(
        help.lookup(&tree, &"abc".parse().unwrap()).entry_type,
        EntryType::Group
    );
    assert_eq!(
        help.lookup(&tree, &"sample json".parse().unwrap()).entry_type,
        EntryType::Command
    );
}

#[test]
fn explicit_entry_preferred_over_synthesis() {
    let tree = build_tree();
    let help = build_catalog();
    let entry = help.lookup(&tree, &"abc first".parse().unwrap());
    assert_eq!(entry.short_summary, "List the first letters of the alphabet.");
    assert_eq!(entry.examples.len(), 1);
}

#[test]
fn root_render_carries_banner_privacy_and_top_level_commands() {
    let tree = build_tree();
    let help = build_catalog();
    let args = ArgumentCatalog::new();
    let text = help.render(&tree, &args, &CommandPath::root());
    assert!(text.contains("Welcome to the Demo CLI!"));
    assert!(text.contains("The demo collects no usage data."));
    assert!(text.contains("abc"));
    assert!(text.contains("sample"));
}

#[test]
fn command_render_has_parameter_table_and_substituted_examples() {
    let tree = build_tree();
    let help = build_catalog();
    let mut args = ArgumentCatalog::new();
    args.declare(
        &tree,
        &"abc first".parse().unwrap(),
        ArgumentSpec::new("number", ArgType::Integer)
            .default_value(ArgValue::Int(5))
            .status(Status::Preview)
            .describe("How many letters."),
    )
    .unwrap();

    let text = help.render(&tree, &args, &"abc first".parse().unwrap());
    assert!(text.contains("Counts from 'a' upward."));
    assert!(text.contains("--number"));
    assert!(text.contains("(default: 5)"));
    assert!(text.contains("[preview]"));
    assert!(text.contains("demo abc first --number 3"));
    assert!(!text.contains("{prog}"));
    assert!(!text.contains("Welcome"));
}
