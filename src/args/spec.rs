//! Argument specifications and typed values.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CairnError, Result};
use crate::status::Status;
use crate::tree::{CommandPath, CommandTree};

/// Declared type of an argument; drives coercion of raw flag text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    String,
    Integer,
    Float,
    Bool,
}

impl ArgType {
    /// Human-readable name used in coercion errors and help tables.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Bool => "boolean",
        }
    }

    /// Coerce raw flag text to a typed value.
    ///
    /// Fails with [`CairnError::TypeCoercion`] carrying the raw input and
    /// the expected type.
    pub fn coerce(&self, name: &str, raw: &str) -> Result<ArgValue> {
        let fail = || CairnError::TypeCoercion {
            name: name.to_string(),
            raw: raw.to_string(),
            expected: self.expected().to_string(),
        };
        match self {
            Self::String => Ok(ArgValue::Str(raw.to_string())),
            Self::Integer => raw.parse::<i64>().map(ArgValue::Int).map_err(|_| fail()),
            Self::Float => raw.parse::<f64>().map(ArgValue::Float).map_err(|_| fail()),
            Self::Bool => match raw.to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Ok(ArgValue::Bool(true)),
                "false" | "no" | "n" | "0" => Ok(ArgValue::Bool(false)),
                _ => Err(fail()),
            },
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expected())
    }
}

/// A typed argument value produced by coercion or taken from a default.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ArgValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Specification of one argument of a leaf command.
///
/// An argument with no default is required. The status tag is display-only:
/// it shows up in help tables and pre-execution advisories but never alters
/// binding semantics.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    pub name: String,
    pub arg_type: ArgType,
    /// Finite set of allowed raw values; checked after coercion succeeds.
    pub choices: Option<Vec<String>>,
    pub default: Option<ArgValue>,
    pub status: Status,
    pub description: Option<String>,
}

impl ArgumentSpec {
    pub fn new(name: &str, arg_type: ArgType) -> Self {
        Self {
            name: name.to_string(),
            arg_type,
            choices: None,
            default: None,
            status: Status::Ga,
            description: None,
        }
    }

    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn default_value(mut self, value: ArgValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Absence of a default makes the argument required.
    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

/// All declared argument specs, keyed by owning command path.
///
/// Populated during the registration phase and read-only afterward.
#[derive(Debug, Default)]
pub struct ArgumentCatalog {
    specs: BTreeMap<CommandPath, Vec<ArgumentSpec>>,
}

impl ArgumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or update, by name) a spec for an already-registered leaf.
    ///
    /// Fails with [`CairnError::UnknownCommand`] if `path` is not a leaf in
    /// `tree`.
    pub fn declare(
        &mut self,
        tree: &CommandTree,
        path: &CommandPath,
        spec: ArgumentSpec,
    ) -> Result<()> {
        if !tree.get(path).is_some_and(|n| n.is_leaf()) {
            return Err(CairnError::UnknownCommand {
                path: path.to_string(),
            });
        }
        let specs = self.specs.entry(path.clone()).or_default();
        if let Some(existing) = specs.iter_mut().find(|s| s.name == spec.name) {
            *existing = spec;
        } else {
            specs.push(spec);
        }
        Ok(())
    }

    /// Specs declared for `path`, in declaration order.
    pub fn specs_for(&self, path: &CommandPath) -> &[ArgumentSpec] {
        self.specs.get(path).map_or(&[], Vec::as_slice)
    }
}
