//! Cairn - hierarchical command registration and dispatch.
//!
//! Cairn is a small framework for building command-line tools out of a tree
//! of grouped commands: register groups and leaf commands with lifecycle
//! status tags, declare typed arguments with choices and defaults, attach
//! help entries, and hand raw tokens to the invoker for resolution, binding,
//! confirmation gating, and execution.
//!
//! # Modules
//!
//! - [`args`] - Argument specifications, type coercion, and binding
//! - [`config`] - Per-program configuration directory discovery
//! - [`demo`] - Example command set exercising the whole contract
//! - [`error`] - Error types and result aliases
//! - [`help`] - Help entries, lazy stubs, and rendering
//! - [`invoker`] - Token parsing, resolution, and the execution pipeline
//! - [`status`] - Lifecycle status tags and version gating
//! - [`tree`] - The command tree and its registration builder
//! - [`ui`] - Console abstraction with terminal and mock implementations
//!
//! # Example
//!
//! ```
//! use cairn::args::ArgumentCatalog;
//! use cairn::help::{HelpCatalog, HelpConfig};
//! use cairn::invoker::Invoker;
//! use cairn::status::Version;
//! use cairn::tree::{CommandOptions, HandlerRef, Registry};
//! use cairn::ui::MockConsole;
//!
//! let mut registry = Registry::new();
//! {
//!     let mut abc = registry.open_group("abc".parse().unwrap(), None).unwrap();
//!     abc.command(
//!         "first",
//!         HandlerRef::new(|_| Ok(Some(serde_json::json!("hello")))),
//!         CommandOptions::new(),
//!     )
//!     .unwrap();
//! }
//! let tree = registry.freeze().unwrap();
//!
//! let args = ArgumentCatalog::new();
//! let help = HelpCatalog::new(HelpConfig::new("demo", "Demo", "No data collected."));
//! let invoker = Invoker::new(&tree, &args, &help, Version::new(1, 0, 0));
//!
//! let mut console = MockConsole::new();
//! let tokens = vec!["abc".to_string(), "first".to_string()];
//! assert_eq!(invoker.invoke(&tokens, &mut console), 0);
//! ```

pub mod args;
pub mod config;
pub mod demo;
pub mod error;
pub mod help;
pub mod invoker;
pub mod status;
pub mod tree;
pub mod ui;

pub use error::{CairnError, Result};
