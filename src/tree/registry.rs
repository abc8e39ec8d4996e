//! Command registration and the frozen command tree.
//!
//! [`Registry`] is the mutable builder used during the registration phase.
//! [`Registry::open_group`] returns a [`GroupScope`] that writes into the
//! shared tree; the scope's mutable borrow guarantees finalization on every
//! exit path, including early returns. [`Registry::freeze`] consumes the
//! builder and yields an immutable [`CommandTree`], so registration after
//! freeze is impossible by construction.
//!
//! # Example
//!
//! ```
//! use cairn::tree::{CommandOptions, HandlerRef, Registry};
//!
//! let mut registry = Registry::new();
//! {
//!     let mut abc = registry.open_group("abc".parse().unwrap(), None).unwrap();
//!     abc.command(
//!         "first",
//!         HandlerRef::new(|_| Ok(None)),
//!         CommandOptions::new(),
//!     )
//!     .unwrap();
//! }
//! let tree = registry.freeze().unwrap();
//! assert!(tree.get(&"abc first".parse().unwrap()).is_some());
//! ```

use std::collections::BTreeMap;

use crate::error::{CairnError, Result};
use crate::status::Status;

use super::node::{CommandKind, CommandNode, CommandOptions, CommandPath, HandlerRef};

/// Mutable command-table builder used during the registration phase.
#[derive(Debug, Default)]
pub struct Registry {
    nodes: BTreeMap<CommandPath, CommandNode>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a registration scope for the group at `path`, creating the group
    /// node (and any missing ancestor groups) on first use.
    ///
    /// An explicit `status` overrides the group's status; otherwise an
    /// existing group keeps its status and a new group inherits its parent's
    /// status at this point in time.
    ///
    /// Fails with [`CairnError::Registration`] if `path` (or an ancestor) is
    /// already registered as a leaf.
    pub fn open_group(
        &mut self,
        path: CommandPath,
        status: Option<Status>,
    ) -> Result<GroupScope<'_>> {
        if path.is_empty() {
            let effective = status.unwrap_or_default();
            return Ok(GroupScope {
                registry: self,
                path,
                status: effective,
            });
        }

        // Materialize ancestors so every child path is a strict extension
        // of a registered group.
        let mut ancestors: Vec<CommandPath> = Vec::new();
        let mut cursor = path.clone();
        while let Some(parent) = cursor.parent() {
            if !parent.is_empty() {
                ancestors.push(parent.clone());
            }
            cursor = parent;
        }
        for ancestor in ancestors.into_iter().rev() {
            self.ensure_group(&ancestor, None, None)?;
        }

        let effective = self.ensure_group(&path, status, None)?;
        Ok(GroupScope {
            registry: self,
            path,
            status: effective,
        })
    }

    /// Insert or revisit a group node, returning its effective status.
    ///
    /// `status` is an explicit declaration and rewrites an existing group;
    /// `default` applies only when the node is created here, so a revisit
    /// with no explicit status keeps the group's earlier declaration.
    fn ensure_group(
        &mut self,
        path: &CommandPath,
        status: Option<Status>,
        default: Option<Status>,
    ) -> Result<Status> {
        if let Some(existing) = self.nodes.get_mut(path) {
            if existing.kind != CommandKind::Group {
                return Err(CairnError::Registration {
                    path: path.to_string(),
                });
            }
            if let Some(status) = status {
                existing.status = status;
            }
            return Ok(existing.status.clone());
        }

        let inherited = path
            .parent()
            .and_then(|p| self.nodes.get(&p))
            .map(|n| n.status.clone())
            .unwrap_or_default();
        let effective = status.or(default).unwrap_or(inherited);
        self.nodes.insert(
            path.clone(),
            CommandNode {
                path: path.clone(),
                kind: CommandKind::Group,
                handler: None,
                status: effective.clone(),
                requires_confirmation: false,
            },
        );
        Ok(effective)
    }

    /// Consume the builder and produce the immutable [`CommandTree`].
    ///
    /// Validates that every deprecation redirect names a registered node;
    /// fails with [`CairnError::InvalidRedirect`] otherwise.
    pub fn freeze(self) -> Result<CommandTree> {
        for node in self.nodes.values() {
            if let Status::Deprecated(dep) = &node.status {
                if let Some(target) = &dep.redirect_to {
                    if !self.nodes.contains_key(target) {
                        return Err(CairnError::InvalidRedirect {
                            path: node.path.to_string(),
                            target: target.to_string(),
                        });
                    }
                }
            }
        }
        Ok(CommandTree { nodes: self.nodes })
    }
}

/// A scoped registration handle for one group.
///
/// Holds a mutable borrow of the [`Registry`], so the scope cannot outlive
/// the registration phase and nested scopes cannot interleave writes.
#[derive(Debug)]
pub struct GroupScope<'a> {
    registry: &'a mut Registry,
    path: CommandPath,
    status: Status,
}

impl GroupScope<'_> {
    /// Path of the group this scope registers into.
    pub fn path(&self) -> &CommandPath {
        &self.path
    }

    /// The group's effective status, inherited by children by default.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Register a leaf command named `name` under this group.
    ///
    /// Fails with [`CairnError::Registration`] if the full path is already
    /// taken; callers propagate the error, which stops registration.
    pub fn command(
        &mut self,
        name: &str,
        handler: HandlerRef,
        options: CommandOptions,
    ) -> Result<()> {
        let path = self.path.child(name);
        if self.registry.nodes.contains_key(&path) {
            return Err(CairnError::Registration {
                path: path.to_string(),
            });
        }
        let status = options.status.unwrap_or_else(|| self.status.clone());
        self.registry.nodes.insert(
            path.clone(),
            CommandNode {
                path,
                kind: CommandKind::Leaf,
                handler: Some(handler),
                status,
                requires_confirmation: options.requires_confirmation,
            },
        );
        Ok(())
    }

    /// Open a nested group scope sharing the same underlying tree.
    ///
    /// A new child defaults to this group's status; revisiting an existing
    /// child without an explicit status keeps its earlier declaration.
    pub fn child_group(&mut self, name: &str, status: Option<Status>) -> Result<GroupScope<'_>> {
        let path = self.path.child(name);
        let fallback = self.status.clone();
        let effective = self.registry.ensure_group(&path, status, Some(fallback))?;
        Ok(GroupScope {
            registry: &mut *self.registry,
            path,
            status: effective,
        })
    }
}

/// The frozen, read-only command tree consulted during invocation.
#[derive(Debug)]
pub struct CommandTree {
    nodes: BTreeMap<CommandPath, CommandNode>,
}

impl CommandTree {
    /// Look up a node by exact path.
    pub fn get(&self, path: &CommandPath) -> Option<&CommandNode> {
        self.nodes.get(path)
    }

    /// Whether a node exists at `path`.
    pub fn contains(&self, path: &CommandPath) -> bool {
        self.nodes.contains_key(path)
    }

    /// All registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &CommandPath> {
        self.nodes.keys()
    }

    /// Direct children of `path` (the root's children are the top-level
    /// nodes), in sorted order.
    pub fn children(&self, path: &CommandPath) -> Vec<&CommandNode> {
        self.nodes
            .values()
            .filter(|n| n.path.len() == path.len() + 1 && n.path.starts_with(path))
            .collect()
    }

    /// Greedy longest-prefix match: the longest run of leading `tokens`
    /// naming a registered path, with the number of tokens consumed.
    /// Returns the root path and zero when no leading token matches.
    pub fn longest_prefix(&self, tokens: &[String]) -> (CommandPath, usize) {
        for take in (1..=tokens.len()).rev() {
            let candidate = CommandPath::from(tokens[..take].to_vec());
            if self.nodes.contains_key(&candidate) {
                return (candidate, take);
            }
        }
        (CommandPath::root(), 0)
    }
}
