#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Java modules built by this project, in build/link order.
pub const MODULE_LIST: [&str; 2] = ["net.plantabyte.drptrace", "net.plantabyte.drptrace.testing"];

/// Module holding the application entry point.
pub const MAIN_MODULE: &str = "net.plantabyte.drptrace.testing";

/// Fully qualified entry point class.
pub const MAIN_CLASS: &str = "net.plantabyte.drptrace.testing.Main";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered set of Java modules plus the designated entry point.
pub struct ModuleSet {
    /// Module identifiers. Order is significant downstream.
    modules:     Vec<String>,
    /// Module that contains [`ModuleSet::main_class`].
    main_module: String,
    /// Fully qualified name of the entry point class.
    main_class:  String,
}

impl ModuleSet {
    /// The project's fixed module set.
    pub fn standard() -> Self {
        Self {
            modules:     MODULE_LIST.iter().map(|m| m.to_string()).collect(),
            main_module: MAIN_MODULE.to_string(),
            main_class:  MAIN_CLASS.to_string(),
        }
    }

    /// Module identifiers in build order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Designated main module.
    pub fn main_module(&self) -> &str {
        &self.main_module
    }

    /// Designated main class.
    pub fn main_class(&self) -> &str {
        &self.main_class
    }

    /// Whether `module` is one of the configured modules.
    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }

    /// Whether the main module is part of the module list.
    pub fn contains_main_module(&self) -> bool {
        self.contains(&self.main_module)
    }

    /// `jlink`/`java` style launcher reference, `<module>/<class>`.
    pub fn launcher(&self) -> String {
        format!("{}/{}", self.main_module, self.main_class)
    }

    /// Returns `module` back if it is configured, otherwise an
    /// [`ConfigError::UnknownModule`].
    fn checked<'a>(&self, module: &'a str) -> Result<&'a str, ConfigError> {
        if self.contains(module) {
            Ok(module)
        } else {
            Err(ConfigError::UnknownModule {
                module: module.to_string(),
            })
        }
    }

    /// Source directory of a module: `<module_dir>/<module>/<sources_dirname>`.
    pub fn source_dir(
        &self,
        module_dir: &Path,
        sources_dirname: &str,
        module: &str,
    ) -> Result<PathBuf, ConfigError> {
        Ok(module_dir.join(self.checked(module)?).join(sources_dirname))
    }

    /// Resource directory of a module:
    /// `<module_dir>/<module>/<resources_dirname>`.
    pub fn resources_dir(
        &self,
        module_dir: &Path,
        resources_dirname: &str,
        module: &str,
    ) -> Result<PathBuf, ConfigError> {
        Ok(module_dir.join(self.checked(module)?).join(resources_dirname))
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Finds `.java` files anywhere below `source_dir`, sorted.
///
/// A missing directory yields an empty list. Glob metacharacters in
/// `source_dir` are matched literally.
pub fn find_sources(source_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let dir = source_dir
        .to_str()
        .ok_or_else(|| ConfigError::NonUnicodePath {
            path: source_dir.to_path_buf(),
        })?;
    let pattern = format!("{}/**/*.java", Pattern::escape(dir));

    let mut found: Vec<PathBuf> = glob(&pattern)
        .map_err(|source| ConfigError::SourceGlob {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .collect();
    found.sort();

    tracing::debug!("Found {} java sources under {}", found.len(), dir);
    Ok(found)
}
