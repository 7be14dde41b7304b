#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

/// Errors raised while assembling the build configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent. Configuration loading
    /// cannot continue without it.
    #[error("environment variable {name} is not set")]
    MissingEnvironmentVariable {
        /// Name of the missing variable
        name: String,
    },
    /// The anchor path for root directory computation could not be made
    /// absolute.
    #[error("could not resolve an absolute path for {}", path.display())]
    RootPath {
        /// Anchor path as given
        path:   PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },
    /// A module name that is not part of the configured module set.
    #[error("{module} is not one of the configured modules")]
    UnknownModule {
        /// Requested module name
        module: String,
    },
    /// A path that has to be turned into a glob pattern is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    NonUnicodePath {
        /// The offending path
        path: PathBuf,
    },
    /// A source discovery pattern could not be compiled.
    #[error("invalid source glob {pattern}")]
    SourceGlob {
        /// The offending pattern
        pattern: String,
        /// Underlying glob error
        source:  glob::PatternError,
    },
}

impl ConfigError {
    /// Convenience constructor for [`ConfigError::MissingEnvironmentVariable`].
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnvironmentVariable { name: name.into() }
    }
}
