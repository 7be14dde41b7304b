//! # drptrace-build
//!
//! Build configuration for the drptrace Java module project: directory
//! layout, module list, toolchain names and dependency search order, resolved
//! once from the host platform and `JAVA_HOME`.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The assembled, immutable build configuration
pub mod config;
/// Environment variable lookups
pub mod env;
/// Error types
pub mod error;
/// Module list and per-module source layout
pub mod modules;
/// Directory layout and dependency search path
pub mod paths;
/// Platform detection
pub mod platform;
/// Absolute anchor paths
pub mod roots;
/// External executable names
pub mod toolchain;

pub use config::BuildConfig;
pub use error::ConfigError;
pub use modules::ModuleSet;
pub use paths::{DirectoryLayout, LayoutNames};
pub use platform::{Platform, resolve_platform_identity};
pub use roots::RootPaths;
pub use toolchain::ToolchainExecutables;
