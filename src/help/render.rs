//! Plain-text rendering of help entries.
//!
//! Output order: banner and privacy statement (root only), short summary,
//! long summary, child command listing for groups, parameter table derived
//! from the resolved command's argument specs, and the examples block with
//! `{prog}` substituted by the program's invocation name.

use std::fmt::Write as _;

use crate::args::ArgumentCatalog;
use crate::status::Status;
use crate::tree::{CommandPath, CommandTree};

use super::catalog::{EntryType, HelpCatalog};

impl HelpCatalog {
    /// Render the help text for `path`.
    pub fn render(
        &self,
        tree: &CommandTree,
        args: &ArgumentCatalog,
        path: &CommandPath,
    ) -> String {
        let entry = self.lookup(tree, path);
        let config = self.config();
        let mut out = String::new();

        if path.is_empty() {
            let _ = writeln!(out, "{}", config.banner);
            let _ = writeln!(out, "{}", config.privacy_statement);
            let _ = writeln!(out);
        }

        let mut summary = entry.short_summary.clone();
        if let Some(node) = tree.get(path) {
            match &node.status {
                Status::Ga => {}
                Status::Deprecated(dep) => {
                    summary.push_str(" [deprecated");
                    if let Some(target) = &dep.redirect_to {
                        let _ = write!(summary, ", use '{} {}'", config.program_name, target);
                    }
                    summary.push(']');
                }
                other => {
                    let _ = write!(summary, " [{}]", other.label());
                }
            }
        }
        let _ = writeln!(out, "{}", summary);

        if let Some(long) = &entry.long_summary {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", long);
        }

        if entry.entry_type == EntryType::Group {
            let children = tree.children(path);
            if !children.is_empty() {
                let _ = writeln!(out);
                let _ = writeln!(out, "Commands:");
                let width = children
                    .iter()
                    .filter_map(|c| c.path.name().map(str::len))
                    .max()
                    .unwrap_or(0);
                for child in children {
                    let name = child.path.name().unwrap_or_default();
                    let child_entry = self.lookup(tree, &child.path);
                    let marker = match &child.status {
                        Status::Ga => String::new(),
                        other => format!(" [{}]", other.label()),
                    };
                    let _ = writeln!(
                        out,
                        "    {:width$}  {}{}",
                        name,
                        child_entry.short_summary,
                        marker,
                        width = width
                    );
                }
            }
        }

        let specs = args.specs_for(path);
        if !specs.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Arguments:");
            let width = specs.iter().map(|s| s.name.len() + 2).max().unwrap_or(0);
            for spec in specs {
                let mut detail = format!("[{}]", spec.arg_type);
                match &spec.default {
                    Some(default) => {
                        let _ = write!(detail, " (default: {})", default);
                    }
                    None => detail.push_str(" (required)"),
                }
                if let Some(choices) = &spec.choices {
                    let _ = write!(detail, " allowed: {}", choices.join(", "));
                }
                if spec.status != Status::Ga {
                    let _ = write!(detail, " [{}]", spec.status.label());
                }
                if let Some(description) = &spec.description {
                    let _ = write!(detail, "  {}", description);
                }
                let _ = writeln!(
                    out,
                    "    {:width$}  {}",
                    format!("--{}", spec.name),
                    detail,
                    width = width
                );
            }
        }

        if !entry.examples.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Examples:");
            for example in &entry.examples {
                let _ = writeln!(out, "    {}", example.name);
                let text = example.text.replace("{prog}", &config.program_name);
                let _ = writeln!(out, "        {}", text);
            }
        }

        out
    }
}
