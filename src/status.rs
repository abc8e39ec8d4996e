//! Lifecycle status tags and version gating.
//!
//! Every command node (and, display-only, every argument) carries a
//! [`Status`]. Deprecated nodes carry a [`Deprecation`] descriptor with an
//! optional redirect target and an optional [`Version`] after which the node
//! is hidden from resolution entirely.

use std::fmt;
use std::str::FromStr;

use crate::tree::CommandPath;

/// Lifecycle status of a command node or argument.
///
/// The variants are mutually exclusive by construction; a node has exactly
/// one status at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Generally available. The default for nodes with no explicit status
    /// and no inherited group status.
    #[default]
    Ga,
    /// Released for early feedback; emits an advisory before execution.
    Preview,
    /// Unstable; emits an advisory before execution.
    Experimental,
    /// Scheduled for removal; emits a deprecation notice, and past the
    /// hide-after version fails resolution outright.
    Deprecated(Deprecation),
}

impl Status {
    /// Build a Deprecated status with an optional redirect target and an
    /// optional version after which the command is hidden.
    pub fn deprecated(redirect_to: Option<CommandPath>, hidden_after: Option<Version>) -> Self {
        Self::Deprecated(Deprecation {
            redirect_to,
            hidden_after,
        })
    }

    /// Whether execution should be preceded by an advisory banner.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::Preview | Self::Experimental)
    }

    /// Short label used in help tables and advisories.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ga => "GA",
            Self::Preview => "preview",
            Self::Experimental => "experimental",
            Self::Deprecated(_) => "deprecated",
        }
    }
}

/// Deprecation metadata attached to a [`Status::Deprecated`] node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deprecation {
    /// Replacement command users should migrate to. Advisory by default;
    /// see the invoker's redirect policy.
    pub redirect_to: Option<CommandPath>,
    /// Program version at which the command stops resolving. `None` means
    /// the command keeps resolving (with a notice) indefinitely.
    pub hidden_after: Option<Version>,
}

/// A `major.minor.patch` program version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = |label: &str| -> Result<u32, String> {
            match parts.next() {
                None | Some("") => Ok(0),
                Some(p) => p
                    .parse::<u32>()
                    .map_err(|_| format!("invalid {} component in version '{}'", label, s)),
            }
        };
        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;
        if parts.next().is_some() {
            return Err(format!("too many components in version '{}'", s));
        }
        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}
