//! Flag binding: raw flag tokens in, typed argument map out.
//!
//! Binding runs at invocation time, after resolution and before the
//! confirmation gate. Each recognized value passes through type coercion
//! and then choice validation, in that order. Absent optional arguments
//! take their declared defaults; absent required arguments fail.

use std::collections::BTreeMap;

use crate::error::{CairnError, Result};

use super::spec::{ArgType, ArgValue, ArgumentSpec};

/// A flag token pair produced by the invoker's parser.
///
/// `--name value` and `--name=value` both yield `value: Some(..)`; a bare
/// `--name` yields `value: None` (true for boolean arguments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFlag {
    pub name: String,
    pub value: Option<String>,
}

impl RawFlag {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(String::from),
        }
    }
}

/// Typed argument values handed to a handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    values: BTreeMap<String, ArgValue>,
}

impl BoundArgs {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(ArgValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(ArgValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(ArgValue::as_float)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(ArgValue::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bind raw flags against declared specs.
///
/// Fails with [`CairnError::UnknownArgument`] for flags the command does not
/// declare, [`CairnError::TypeCoercion`] for unparseable values,
/// [`CairnError::InvalidArgument`] for choice violations, and
/// [`CairnError::MissingArgument`] for required arguments left unset. The
/// handler is never invoked on any of these.
pub fn bind(specs: &[ArgumentSpec], flags: &[RawFlag]) -> Result<BoundArgs> {
    let mut bound = BoundArgs::default();

    for flag in flags {
        let spec = specs
            .iter()
            .find(|s| s.name == flag.name)
            .ok_or_else(|| CairnError::UnknownArgument {
                name: flag.name.clone(),
            })?;

        let value = match &flag.value {
            Some(raw) => {
                let value = spec.arg_type.coerce(&spec.name, raw)?;
                if let Some(choices) = &spec.choices {
                    if !choices.iter().any(|c| c == raw) {
                        return Err(CairnError::InvalidArgument {
                            name: spec.name.clone(),
                            value: raw.clone(),
                            allowed: choices.join(", "),
                        });
                    }
                }
                value
            }
            // A bare `--name` only makes sense for booleans.
            None if spec.arg_type == ArgType::Bool => ArgValue::Bool(true),
            None => {
                return Err(CairnError::MissingArgument {
                    name: spec.name.clone(),
                })
            }
        };
        bound.values.insert(spec.name.clone(), value);
    }

    for spec in specs {
        if bound.values.contains_key(&spec.name) {
            continue;
        }
        match &spec.default {
            Some(default) => {
                bound.values.insert(spec.name.clone(), default.clone());
            }
            None => {
                return Err(CairnError::MissingArgument {
                    name: spec.name.clone(),
                })
            }
        }
    }

    Ok(bound)
}
