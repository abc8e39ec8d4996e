//! Argument declaration and binding.
//!
//! [`ArgumentCatalog::declare`] attaches [`ArgumentSpec`]s to registered
//! leaves during the registration phase; [`bind`] turns raw flag tokens into
//! typed [`BoundArgs`] at invocation time.

pub mod binder;
pub mod spec;

pub use binder::{bind, BoundArgs, RawFlag};
pub use spec::{ArgType, ArgValue, ArgumentCatalog, ArgumentSpec};
