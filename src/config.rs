#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    env::{process_env, resolve_java_home},
    error::ConfigError,
    modules::ModuleSet,
    paths::DirectoryLayout,
    platform::{Platform, host_platform_string, resolve_platform_identity},
    roots::RootPaths,
    toolchain::ToolchainExecutables,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Complete build configuration, computed once and handed to whatever needs
/// it.
pub struct BuildConfig {
    /// Resolved platform tag.
    platform:               Platform,
    /// Modules and entry point.
    modules:                ModuleSet,
    /// Relative directory layout.
    layout:                 DirectoryLayout,
    /// External executables.
    toolchain:              ToolchainExecutables,
    /// Java installation root from `JAVA_HOME`.
    java_home:              PathBuf,
    /// Ordered dependency directories, see
    /// [`DirectoryLayout::dependency_search_path`].
    dependency_search_path: Vec<PathBuf>,
    /// Maven coordinates to fetch. Empty for this project.
    maven_deps:             Vec<String>,
    /// Absolute anchors.
    roots:                  RootPaths,
}

impl BuildConfig {
    /// Loads the configuration for the host platform from the process
    /// environment, rooted at the current working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let roots = RootPaths::current()?;
        Self::assemble(&host_platform_string(), process_env, roots)
    }

    /// Loads the configuration from an explicit platform identifier,
    /// environment lookup, and anchor file.
    pub fn from_parts<F>(platform: &str, lookup: F, anchor: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let roots = RootPaths::resolve(anchor)?;
        Self::assemble(platform, lookup, roots)
    }

    /// Shared tail of [`BuildConfig::load`] and [`BuildConfig::from_parts`].
    fn assemble<F>(platform: &str, lookup: F, roots: RootPaths) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let java_home = resolve_java_home(lookup)?;

        let platform = match resolve_platform_identity(platform) {
            Platform::Unknown => {
                tracing::debug!("No platform tag for `{}`, using unknown", platform);
                Platform::Unknown
            }
            known => known,
        };
        let layout = DirectoryLayout::new(platform);
        let dependency_search_path = layout.dependency_search_path(&java_home);

        tracing::debug!(
            "Loaded build configuration for {} rooted at {}",
            platform,
            roots.root_dir().display()
        );

        Ok(Self {
            platform,
            modules: ModuleSet::standard(),
            layout,
            toolchain: ToolchainExecutables::standard(),
            java_home,
            dependency_search_path,
            maven_deps: Vec::new(),
            roots,
        })
    }

    /// Resolved platform tag.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Modules and entry point.
    pub fn modules(&self) -> &ModuleSet {
        &self.modules
    }

    /// Directory layout.
    pub fn layout(&self) -> &DirectoryLayout {
        &self.layout
    }

    /// External executables.
    pub fn toolchain(&self) -> &ToolchainExecutables {
        &self.toolchain
    }

    /// Java installation root.
    pub fn java_home(&self) -> &Path {
        self.java_home.as_path()
    }

    /// Dependency directories in search order.
    pub fn dependency_search_path(&self) -> &[PathBuf] {
        &self.dependency_search_path
    }

    /// Dependency search path joined for `--module-path`.
    pub fn module_path(&self) -> String {
        self.layout.module_path_string(&self.dependency_search_path)
    }

    /// Maven coordinates to fetch.
    pub fn maven_deps(&self) -> &[String] {
        &self.maven_deps
    }

    /// Absolute anchors.
    pub fn roots(&self) -> &RootPaths {
        &self.roots
    }

    /// Absolute source directory of `module`.
    pub fn module_source_dir(&self, module: &str) -> Result<PathBuf, ConfigError> {
        let dir = self.modules.source_dir(
            self.layout.module_dir(),
            self.layout.sources_dirname(),
            module,
        )?;
        Ok(self.roots.rooted(&dir))
    }

    /// Absolute resource directory of `module`.
    pub fn module_resources_dir(&self, module: &str) -> Result<PathBuf, ConfigError> {
        let dir = self.modules.resources_dir(
            self.layout.module_dir(),
            self.layout.resources_dirname(),
            module,
        )?;
        Ok(self.roots.rooted(&dir))
    }
}
