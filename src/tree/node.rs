//! Command tree node types.
//!
//! A [`CommandNode`] is either a [`CommandKind::Group`] (container only) or a
//! [`CommandKind::Leaf`] carrying a [`HandlerRef`]. Nodes are addressed by
//! [`CommandPath`], an ordered sequence of segments.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::args::BoundArgs;
use crate::error::Result;
use crate::status::Status;

/// Ordered sequence of path segments addressing a node in the command tree.
///
/// The empty path is the tree root, which is never itself a registered node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CommandPath(Vec<String>);

impl CommandPath {
    /// The empty root path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// The path's segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend this path by one segment.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// The path with the last segment removed; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// The final segment; `None` for the root.
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Whether `other` is a prefix of this path (root is a prefix of all).
    pub fn starts_with(&self, other: &Self) -> bool {
        self.0.len() >= other.0.len() && self.0[..other.0.len()] == other.0[..]
    }
}

impl From<&[&str]> for CommandPath {
    fn from(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for CommandPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl FromStr for CommandPath {
    type Err = std::convert::Infallible;

    /// Parse a whitespace-separated path like `"abc first"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.split_whitespace().map(String::from).collect()))
    }
}

impl fmt::Display for CommandPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Whether a node is a container or an executable command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Contains child nodes; cannot be executed.
    Group,
    /// Terminal, executable command with a handler.
    Leaf,
}

/// Handler function signature: bound arguments in, optional structured
/// result out. A `Some` result is serialized to the primary output stream
/// by the invoker; `None` means the handler did its own output.
pub type HandlerFn = dyn Fn(&BoundArgs) -> Result<Option<Value>>;

/// A strongly-typed handler reference captured at registration time,
/// with an optional description used when synthesizing help entries.
pub struct HandlerRef {
    func: Box<HandlerFn>,
    description: Option<String>,
}

impl HandlerRef {
    /// Wrap a handler closure.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&BoundArgs) -> Result<Option<Value>> + 'static,
    {
        Self {
            func: Box::new(func),
            description: None,
        }
    }

    /// Attach a one-line description, used as the fallback help summary.
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// The attached description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Invoke the handler synchronously.
    pub fn invoke(&self, args: &BoundArgs) -> Result<Option<Value>> {
        (self.func)(args)
    }
}

// Manual impl: the boxed closure has no Debug, but CommandNode derives it.
impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A node in the command tree.
#[derive(Debug)]
pub struct CommandNode {
    /// Unique path of this node within the tree.
    pub path: CommandPath,
    /// Group or Leaf.
    pub kind: CommandKind,
    /// Handler; present exactly when `kind == Leaf`.
    pub handler: Option<HandlerRef>,
    /// Effective lifecycle status (explicit or inherited at registration).
    pub status: Status,
    /// Leaf-only: gate execution behind a yes/no prompt.
    pub requires_confirmation: bool,
}

impl CommandNode {
    pub fn is_leaf(&self) -> bool {
        self.kind == CommandKind::Leaf
    }

    pub fn is_group(&self) -> bool {
        self.kind == CommandKind::Group
    }

    /// Docstring-like description from the handler, if any.
    pub fn description(&self) -> Option<&str> {
        self.handler.as_ref().and_then(HandlerRef::description)
    }
}

/// Options applied when registering a leaf command.
#[derive(Debug, Default)]
pub struct CommandOptions {
    /// Explicit status; when `None` the enclosing group's status is
    /// inherited at registration time.
    pub status: Option<Status>,
    /// Gate execution behind a confirmation prompt.
    pub requires_confirmation: bool,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn confirm(mut self) -> Self {
        self.requires_confirmation = true;
        self
    }
}
