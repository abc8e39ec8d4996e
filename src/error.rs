//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the framework, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Registration-phase errors (duplicate paths, declaring arguments against
//!   unknown commands, dangling deprecation redirects) are fatal: the tree
//!   would be inconsistent, so callers abort startup.
//! - Invocation-phase errors (resolution, binding, confirmation) are caught
//!   at the invoker boundary and converted into a single user-facing
//!   diagnostic plus a nonzero exit code; they never reach a handler.
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//!   raised inside handlers.

use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// A command or group was registered at an already-taken path.
    #[error("Command path already registered: {path}")]
    Registration { path: String },

    /// A deprecation redirect names a path that is not in the tree.
    #[error("Deprecation redirect for '{path}' points at unknown path '{target}'")]
    InvalidRedirect { path: String, target: String },

    /// An argument was declared against a path never registered as a leaf.
    #[error("Unknown command: {path}")]
    UnknownCommand { path: String },

    /// Positional resolution stopped at a group instead of a leaf.
    #[error("Incomplete command: '{path}' is a command group")]
    IncompleteCommand { path: String },

    /// A deprecated command hidden after a version the program has reached.
    #[error("Command '{path}' was removed in version {version}")]
    Removed { path: String, version: String },

    /// A flag was supplied that the resolved command does not declare.
    #[error("Unknown argument: --{name}")]
    UnknownArgument { name: String },

    /// A raw value could not be coerced to its declared type.
    #[error("Invalid value '{raw}' for --{name}: expected {expected}")]
    TypeCoercion {
        name: String,
        raw: String,
        expected: String,
    },

    /// A value fell outside an argument's declared choices.
    #[error("Invalid value '{value}' for --{name}: allowed values are {allowed}")]
    InvalidArgument {
        name: String,
        value: String,
        allowed: String,
    },

    /// A required argument was omitted and has no default.
    #[error("Missing required argument: --{name}")]
    MissingArgument { name: String },

    /// The user declined a confirmation prompt (or input reached EOF).
    #[error("Operation cancelled by user")]
    UserCancelled,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_displays_path() {
        let err = CairnError::Registration {
            path: "abc first".into(),
        };
        assert!(err.to_string().contains("abc first"));
    }

    #[test]
    fn invalid_redirect_displays_both_paths() {
        let err = CairnError::InvalidRedirect {
            path: "abc letters".into(),
            target: "abc missing".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc letters"));
        assert!(msg.contains("abc missing"));
    }

    #[test]
    fn unknown_command_displays_path() {
        let err = CairnError::UnknownCommand {
            path: "nope".into(),
        };
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn incomplete_command_displays_group() {
        let err = CairnError::IncompleteCommand { path: "abc".into() };
        let msg = err.to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("group"));
    }

    #[test]
    fn removed_displays_path_and_version() {
        let err = CairnError::Removed {
            path: "abc letters".into(),
            version: "2.0.0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc letters"));
        assert!(msg.contains("2.0.0"));
    }

    #[test]
    fn unknown_argument_displays_flag_name() {
        let err = CairnError::UnknownArgument {
            name: "bogus".into(),
        };
        assert!(err.to_string().contains("--bogus"));
    }

    #[test]
    fn type_coercion_displays_raw_and_expected() {
        let err = CairnError::TypeCoercion {
            name: "number".into(),
            raw: "abc".into(),
            expected: "integer".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("abc"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn invalid_argument_displays_allowed_values() {
        let err = CairnError::InvalidArgument {
            name: "step".into(),
            value: "3".into(),
            allowed: "1, 2, 5".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("--step"));
        assert!(msg.contains("1, 2, 5"));
    }

    #[test]
    fn missing_argument_displays_name() {
        let err = CairnError::MissingArgument {
            name: "start".into(),
        };
        assert!(err.to_string().contains("--start"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: CairnError = io_err.into();
        assert!(matches!(err, CairnError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CairnError::UserCancelled)
        }
        assert!(returns_error().is_err());
    }
}
