#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use which::which;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Names of the external executables the build invokes.
///
/// Nothing here checks that they exist; see [`ToolchainExecutables::locate`].
pub struct ToolchainExecutables {
    /// Java launcher
    java:   String,
    /// Java compiler
    javac:  String,
    /// Runtime image linker
    jlink:  String,
    /// Script interpreter
    python: String,
    /// Maven wrapper
    maven:  String,
}

impl ToolchainExecutables {
    /// The standard executable names.
    pub fn standard() -> Self {
        Self {
            java:   "java".into(),
            javac:  "javac".into(),
            jlink:  "jlink".into(),
            python: "python".into(),
            maven:  "mvn.cmd".into(),
        }
    }

    /// Java launcher name.
    pub fn java(&self) -> &str {
        &self.java
    }

    /// Java compiler name.
    pub fn javac(&self) -> &str {
        &self.javac
    }

    /// Linker name.
    pub fn jlink(&self) -> &str {
        &self.jlink
    }

    /// Script interpreter name.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Maven wrapper name.
    pub fn maven(&self) -> &str {
        &self.maven
    }

    /// All executables, labelled, in a stable order.
    pub fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("java", self.java()),
            ("javac", self.javac()),
            ("jlink", self.jlink()),
            ("python", self.python()),
            ("maven", self.maven()),
        ]
    }

    /// Looks `name` up on `PATH`.
    pub fn locate(name: &str) -> Result<PathBuf> {
        which(name).with_context(|| format!("Cannot find {name} on path"))
    }
}

impl Default for ToolchainExecutables {
    fn default() -> Self {
        Self::standard()
    }
}
