//! Component and user identity types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identity of an activity component: owning package plus class name.
///
/// Two resolution records describe the same component iff both fields are
/// equal. This is the key used for deduplication, scoring and pinning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentName {
    /// Package that owns the component (e.g. `com.example.mail`).
    pub package_name: String,
    /// Fully qualified class name of the activity.
    pub class_name: String,
}

impl ComponentName {
    /// Create a component name from its package and class.
    pub fn new(package_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
        }
    }

    /// Flattened `package/class` form, with the class shortened to `.Suffix`
    /// when it lives inside the package namespace.
    pub fn flatten_to_short_string(&self) -> String {
        match self.class_name.strip_prefix(&self.package_name) {
            Some(rest) if rest.starts_with('.') => format!("{}/{rest}", self.package_name),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package_name, self.class_name)
    }
}

/// Error returned when a flattened component string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid component name: {0:?}")]
pub struct ParseComponentError(pub String);

impl FromStr for ComponentName {
    type Err = ParseComponentError;

    /// Parse `package/class`, expanding `package/.Class` to
    /// `package/package.Class`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((package, class)) = s.split_once('/') else {
            return Err(ParseComponentError(s.to_string()));
        };
        if package.is_empty() || class.is_empty() {
            return Err(ParseComponentError(s.to_string()));
        }

        let class_name = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class.to_string()
        };
        Ok(Self::new(package, class_name))
    }
}

/// A user on the device, by signed user id.
///
/// Negative ids are pseudo-users understood by the platform resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserHandle(pub i32);

impl UserHandle {
    /// The system (owner) user.
    pub const SYSTEM: Self = Self(0);
    /// Every user on the device.
    pub const ALL: Self = Self(-1);
    /// Whichever user is currently in the foreground.
    pub const CURRENT: Self = Self(-2);

    /// Raw user id.
    #[must_use]
    pub const fn id(self) -> i32 {
        self.0
    }

    /// True for the `ALL` and `CURRENT` pseudo-users.
    #[must_use]
    pub const fn is_pseudo(self) -> bool {
        self.0 == Self::ALL.0 || self.0 == Self::CURRENT.0
    }
}

impl Default for UserHandle {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ALL => f.write_str("all"),
            Self::CURRENT => f.write_str("current"),
            Self(id) => write!(f, "{id}"),
        }
    }
}
