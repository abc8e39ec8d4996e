//! Help catalog: explicit entries, synthesized stubs, and rendering.
//!
//! Entries may be supplied ahead of time via [`HelpCatalog::insert`] or
//! synthesized lazily on first lookup. Rendering is configured through
//! [`HelpConfig`] rather than subclassing.

pub mod catalog;
pub mod render;

pub use catalog::{EntryType, HelpCatalog, HelpConfig, HelpEntry, HelpExample};
