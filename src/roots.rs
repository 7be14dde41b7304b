#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Project-root file the CLI reads its environment from.
pub const ANCHOR_FILE: &str = ".env";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Absolute anchor paths that relative layout paths are interpreted against.
pub struct RootPaths {
    /// Anchor file with symlinks resolved.
    this_file: PathBuf,
    /// Directory containing `this_file`.
    this_dir:  PathBuf,
    /// Directory containing the anchor, without resolving symlinks.
    root_dir:  PathBuf,
}

impl RootPaths {
    /// Computes root paths from an anchor file.
    ///
    /// `this_file` falls back to the plain absolute path when the anchor does
    /// not exist yet and so cannot be canonicalized.
    pub fn resolve(anchor: &Path) -> Result<Self, ConfigError> {
        let absolute = std::path::absolute(anchor).map_err(|source| ConfigError::RootPath {
            path: anchor.to_path_buf(),
            source,
        })?;
        let this_file = absolute.canonicalize().unwrap_or_else(|_| absolute.clone());
        let this_dir = parent_or_self(&this_file);
        let root_dir = parent_or_self(&absolute);

        Ok(Self {
            this_file,
            this_dir,
            root_dir,
        })
    }

    /// Root paths for a project rooted at `dir`, anchored on its `.env` file.
    pub fn in_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::resolve(&dir.join(ANCHOR_FILE))
    }

    /// Root paths for the project in the current working directory.
    pub fn current() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(|source| ConfigError::RootPath {
            path: PathBuf::from("."),
            source,
        })?;
        Self::in_dir(&cwd)
    }

    /// Anchor file.
    pub fn this_file(&self) -> &Path {
        self.this_file.as_path()
    }

    /// Directory of the anchor file.
    pub fn this_dir(&self) -> &Path {
        self.this_dir.as_path()
    }

    /// Project root.
    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    /// Interprets a layout-relative `path` against the project root.
    pub fn rooted(&self, path: &Path) -> PathBuf {
        self.root_dir.join(path)
    }
}

/// Parent of `path`, or `path` itself for filesystem roots.
fn parent_or_self(path: &Path) -> PathBuf {
    path.parent().unwrap_or(path).to_path_buf()
}
