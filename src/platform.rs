#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target platform tag used to pick native jmod dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// 64-bit Windows
    #[serde(rename = "windows-x64")]
    WindowsX64,
    /// 64-bit Linux
    #[serde(rename = "linux-x64")]
    LinuxX64,
    /// 64-bit macOS
    #[serde(rename = "osx-x64")]
    OsxX64,
    /// Anything else. Not an error; consumers of platform specific paths
    /// decide what to do with it.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Platform {
    /// Directory-segment form of the tag, e.g. `linux-x64`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::WindowsX64 => "windows-x64",
            Platform::LinuxX64 => "linux-x64",
            Platform::OsxX64 => "osx-x64",
            Platform::Unknown => "unknown",
        }
    }

    /// Resolves the tag for the host this process runs on.
    pub fn host() -> Self {
        resolve_platform_identity(&host_platform_string())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring markers checked against the platform identifier, in check order.
const PLATFORM_MARKERS: [(&str, Platform); 3] = [
    ("win", Platform::WindowsX64),
    ("linux", Platform::LinuxX64),
    ("darwin", Platform::OsxX64),
];

/// Maps a free-form platform identifier to a [`Platform`].
///
/// Markers are checked case-sensitively in the order `win`, `linux`,
/// `darwin`, and every later hit overrides an earlier one. `darwin` itself
/// contains `win`, so this is what keeps macOS from being tagged as Windows.
/// Strings matching none of them map to [`Platform::Unknown`].
pub fn resolve_platform_identity(platform: &str) -> Platform {
    PLATFORM_MARKERS
        .iter()
        .filter(|(marker, _)| platform.contains(*marker))
        .map(|(_, tag)| *tag)
        .last()
        .unwrap_or(Platform::Unknown)
}

/// Host platform identifier in the conventional `win32` / `linux` / `darwin`
/// vocabulary. Other operating systems report their Rust OS name verbatim.
pub fn host_platform_string() -> String {
    match std::env::consts::OS {
        "windows" => "win32".to_string(),
        "macos" => "darwin".to_string(),
        other => other.to_string(),
    }
}
