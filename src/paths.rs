#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::platform::Platform;

/// Subdirectory of a Java installation holding the platform jmods.
pub const JAVA_HOME_JMODS: &str = "jmods";

/// File name of the timestamp cache kept in the temp directory.
pub const TIMESTAMP_CACHE_FILE: &str = "file_timestamp_cache.json";

#[derive(Debug, Clone, TypedBuilder)]
#[builder(build_method(into = DirectoryLayout))]
/// Base names a [`DirectoryLayout`] is composed from.
pub struct LayoutNames {
    /// Platform whose native jmods are used.
    platform:          Platform,
    /// Scratch directory.
    #[builder(default = PathBuf::from("temp"), setter(into))]
    temp_dir:          PathBuf,
    /// Compiler output directory.
    #[builder(default = PathBuf::from("out"), setter(into))]
    build_dir:         PathBuf,
    /// Directory holding one subdirectory per module.
    #[builder(default = PathBuf::from("modules"), setter(into))]
    module_dir:        PathBuf,
    /// Root of all third-party dependencies.
    #[builder(default = PathBuf::from("dependencies"), setter(into))]
    dependencies_dir:  PathBuf,
    /// Per-module source folder name.
    #[builder(default = "src".to_string(), setter(into))]
    sources_dirname:   String,
    /// Per-module resource folder name.
    #[builder(default = "resources".to_string(), setter(into))]
    resources_dirname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Relative directory layout of the project and its dependencies.
pub struct DirectoryLayout {
    /// Platform the native jmod directory was resolved for.
    platform:               Platform,
    /// `temp/`
    temp_dir:               PathBuf,
    /// `out/`
    build_dir:              PathBuf,
    /// `out/run/`, always inside the build directory.
    run_dir:                PathBuf,
    /// `modules/`
    module_dir:             PathBuf,
    /// `dependencies/jars/`
    jar_dep_dir:            PathBuf,
    /// `dependencies/maven/`
    maven_dep_dir:          PathBuf,
    /// `dependencies/jmods/`
    universal_jmod_dep_dir: PathBuf,
    /// `dependencies/native/jmods/<platform>/`
    native_jmod_dep_dir:    PathBuf,
    /// `temp/file_timestamp_cache.json`. The format belongs to whoever reads
    /// it.
    timestamp_cachefile:    PathBuf,
    /// Per-module source folder name.
    sources_dirname:        String,
    /// Per-module resource folder name.
    resources_dirname:      String,
}

impl From<LayoutNames> for DirectoryLayout {
    fn from(names: LayoutNames) -> Self {
        let LayoutNames {
            platform,
            temp_dir,
            build_dir,
            module_dir,
            dependencies_dir,
            sources_dirname,
            resources_dirname,
        } = names;

        let run_dir = build_dir.join("run");
        let jar_dep_dir = dependencies_dir.join("jars");
        let maven_dep_dir = dependencies_dir.join("maven");
        let universal_jmod_dep_dir = dependencies_dir.join("jmods");
        let native_jmod_dep_dir = dependencies_dir
            .join("native")
            .join("jmods")
            .join(platform.as_str());
        let timestamp_cachefile = temp_dir.join(TIMESTAMP_CACHE_FILE);

        Self {
            platform,
            temp_dir,
            build_dir,
            run_dir,
            module_dir,
            jar_dep_dir,
            maven_dep_dir,
            universal_jmod_dep_dir,
            native_jmod_dep_dir,
            timestamp_cachefile,
            sources_dirname,
            resources_dirname,
        }
    }
}

impl DirectoryLayout {
    /// Standard layout for `platform`.
    pub fn new(platform: Platform) -> Self {
        LayoutNames::builder().platform(platform).build()
    }

    /// Returns the platform specific separator for module/class paths.
    pub fn separator(&self) -> &'static str {
        if cfg!(windows) { ";" } else { ":" }
    }

    /// Platform the layout was built for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Scratch directory.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.as_path()
    }

    /// Build output directory.
    pub fn build_dir(&self) -> &Path {
        self.build_dir.as_path()
    }

    /// Run directory, a child of the build directory.
    pub fn run_dir(&self) -> &Path {
        self.run_dir.as_path()
    }

    /// Module root directory.
    pub fn module_dir(&self) -> &Path {
        self.module_dir.as_path()
    }

    /// Plain jar dependency directory.
    pub fn jar_dep_dir(&self) -> &Path {
        self.jar_dep_dir.as_path()
    }

    /// Maven dependency directory.
    pub fn maven_dep_dir(&self) -> &Path {
        self.maven_dep_dir.as_path()
    }

    /// Platform independent jmod directory.
    pub fn universal_jmod_dep_dir(&self) -> &Path {
        self.universal_jmod_dep_dir.as_path()
    }

    /// Platform specific jmod directory.
    pub fn native_jmod_dep_dir(&self) -> &Path {
        self.native_jmod_dep_dir.as_path()
    }

    /// Timestamp cache file path.
    pub fn timestamp_cachefile(&self) -> &Path {
        self.timestamp_cachefile.as_path()
    }

    /// Per-module source folder name.
    pub fn sources_dirname(&self) -> &str {
        &self.sources_dirname
    }

    /// Per-module resource folder name.
    pub fn resources_dirname(&self) -> &str {
        &self.resources_dirname
    }

    /// Directories searched for dependencies, in this exact order: jars,
    /// maven, universal jmods, native jmods, `<java_home>/jmods`.
    ///
    /// The order is kept literally; which end takes precedence is up to the
    /// tool consuming the list.
    pub fn dependency_search_path(&self, java_home: &Path) -> Vec<PathBuf> {
        vec![
            self.jar_dep_dir.clone(),
            self.maven_dep_dir.clone(),
            self.universal_jmod_dep_dir.clone(),
            self.native_jmod_dep_dir.clone(),
            java_home.join(JAVA_HOME_JMODS),
        ]
    }

    /// Joins `entries` into a single `--module-path` argument.
    pub fn module_path_string(&self, entries: &[PathBuf]) -> String {
        entries
            .iter()
            .map(|p| p.display().to_string())
            .join(self.separator())
    }

    /// Named directories in display order, for listings.
    pub fn named_dirs(&self) -> Vec<(&'static str, &Path)> {
        vec![
            ("temp_dir", self.temp_dir()),
            ("build_dir", self.build_dir()),
            ("run_dir", self.run_dir()),
            ("module_dir", self.module_dir()),
            ("jar_dep_dir", self.jar_dep_dir()),
            ("maven_dep_dir", self.maven_dep_dir()),
            ("universal_jmod_dep_dir", self.universal_jmod_dep_dir()),
            ("native_jmod_dep_dir", self.native_jmod_dep_dir()),
            ("timestamp_cachefile", self.timestamp_cachefile()),
        ]
    }
}
