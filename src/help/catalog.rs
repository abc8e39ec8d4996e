//! Help entry storage and lookup.

use std::collections::BTreeMap;

use crate::tree::{CommandPath, CommandTree};

/// Whether a help entry documents a group or an executable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Group,
    Command,
}

/// A named usage example; `text` may embed `{prog}`, replaced with the
/// program's invocation name at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpExample {
    pub name: String,
    pub text: String,
}

impl HelpExample {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
        }
    }
}

/// Renderable help for one command path.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub path: CommandPath,
    pub entry_type: EntryType,
    pub short_summary: String,
    pub long_summary: Option<String>,
    pub examples: Vec<HelpExample>,
}

impl HelpEntry {
    pub fn new(path: CommandPath, entry_type: EntryType, short_summary: &str) -> Self {
        Self {
            path,
            entry_type,
            short_summary: short_summary.to_string(),
            long_summary: None,
            examples: Vec::new(),
        }
    }

    pub fn long_summary(mut self, text: &str) -> Self {
        self.long_summary = Some(text.to_string());
        self
    }

    pub fn example(mut self, name: &str, text: &str) -> Self {
        self.examples.push(HelpExample::new(name, text));
        self
    }
}

/// Rendering configuration: banner text, legal statement, and the program
/// invocation name substituted into examples.
#[derive(Debug, Clone)]
pub struct HelpConfig {
    pub program_name: String,
    pub banner: String,
    pub privacy_statement: String,
}

impl HelpConfig {
    pub fn new(program_name: &str, banner: &str, privacy_statement: &str) -> Self {
        Self {
            program_name: program_name.to_string(),
            banner: banner.to_string(),
            privacy_statement: privacy_statement.to_string(),
        }
    }
}

/// Maps command paths to help entries, synthesizing stubs for paths that
/// have no explicit entry.
#[derive(Debug)]
pub struct HelpCatalog {
    entries: BTreeMap<CommandPath, HelpEntry>,
    config: HelpConfig,
}

impl HelpCatalog {
    pub fn new(config: HelpConfig) -> Self {
        Self {
            entries: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    /// Supply an explicit entry ahead of lookups. Last insert wins.
    pub fn insert(&mut self, entry: HelpEntry) {
        self.entries.insert(entry.path.clone(), entry);
    }

    /// Exact-path lookup, falling back to a synthesized stub.
    ///
    /// Stubs for leaves use the docstring-like description attached to the
    /// handler reference; group stubs are synthesized from the group's name
    /// alone. The root path always yields a Group entry.
    pub fn lookup(&self, tree: &CommandTree, path: &CommandPath) -> HelpEntry {
        if let Some(entry) = self.entries.get(path) {
            return entry.clone();
        }
        self.synthesize(tree, path)
    }

    fn synthesize(&self, tree: &CommandTree, path: &CommandPath) -> HelpEntry {
        if path.is_empty() {
            return HelpEntry::new(
                CommandPath::root(),
                EntryType::Group,
                &format!("{} command groups and commands.", self.config.program_name),
            );
        }
        match tree.get(path) {
            Some(node) if node.is_leaf() => {
                let summary = node
                    .description()
                    .map(String::from)
                    .unwrap_or_else(|| format!("The {} command.", path));
                HelpEntry::new(path.clone(), EntryType::Command, &summary)
            }
            _ => {
                let name = path.name().unwrap_or_default();
                HelpEntry::new(
                    path.clone(),
                    EntryType::Group,
                    &format!("Commands in the {} group.", name),
                )
            }
        }
    }
}
