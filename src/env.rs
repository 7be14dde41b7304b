#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use crate::error::ConfigError;

/// Environment variable naming the Java installation root.
pub const JAVA_HOME: &str = "JAVA_HOME";

/// Reads a variable from the process environment. Non-unicode values count as
/// unset.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads a required variable through `lookup`.
pub fn require_var<F>(lookup: F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::missing_env(name))
}

/// Resolves the Java installation root from `JAVA_HOME`.
///
/// There is no fallback: an unset variable is a
/// [`ConfigError::MissingEnvironmentVariable`]. A set but empty value is
/// passed through as is.
pub fn resolve_java_home<F>(lookup: F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let java_home = PathBuf::from(require_var(lookup, JAVA_HOME)?);
    tracing::debug!("Using JAVA_HOME {}", java_home.display());
    Ok(java_home)
}
