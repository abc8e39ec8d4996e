//! The command tree: paths, nodes, and the registration builder.
//!
//! Registration happens through a [`Registry`], whose scoped
//! [`Registry::open_group`] calls hand out [`GroupScope`] builders.
//! [`Registry::freeze`] produces the read-only [`CommandTree`] used for the
//! rest of the process lifetime.

pub mod node;
pub mod registry;

pub use node::{CommandKind, CommandNode, CommandOptions, CommandPath, HandlerFn, HandlerRef};
pub use registry::{CommandTree, GroupScope, Registry};
