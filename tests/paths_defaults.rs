use std::path::{Path, PathBuf};

use drptrace_build::{DirectoryLayout, LayoutNames, Platform};

#[test]
fn layout_defaults_are_consistent() {
    let via_new = DirectoryLayout::new(Platform::LinuxX64);
    let via_builder = LayoutNames::builder()
        .platform(Platform::LinuxX64)
        .temp_dir("temp")
        .build_dir("out")
        .module_dir("modules")
        .dependencies_dir("dependencies")
        .build();

    assert_eq!(via_new, via_builder);
}

#[test]
fn standard_layout_paths() {
    let layout = DirectoryLayout::new(Platform::LinuxX64);

    assert_eq!(layout.temp_dir(), Path::new("temp"));
    assert_eq!(layout.build_dir(), Path::new("out"));
    assert_eq!(layout.run_dir(), Path::new("out").join("run"));
    assert_eq!(layout.module_dir(), Path::new("modules"));
    assert_eq!(layout.jar_dep_dir(), Path::new("dependencies").join("jars"));
    assert_eq!(layout.maven_dep_dir(), Path::new("dependencies").join("maven"));
    assert_eq!(layout.universal_jmod_dep_dir(), Path::new("dependencies").join("jmods"));
    assert_eq!(
        layout.native_jmod_dep_dir(),
        ["dependencies", "native", "jmods", "linux-x64"]
            .iter()
            .collect::<PathBuf>()
    );
    assert_eq!(
        layout.timestamp_cachefile(),
        Path::new("temp").join("file_timestamp_cache.json")
    );
    assert_eq!(layout.sources_dirname(), "src");
    assert_eq!(layout.resources_dirname(), "resources");
}

#[test]
fn run_dir_stays_under_build_dir() {
    for build in ["out", "build", "target/classes", "/abs/out", "."] {
        let layout = LayoutNames::builder()
            .platform(Platform::Unknown)
            .build_dir(build)
            .build();
        assert!(
            layout.run_dir().starts_with(layout.build_dir()),
            "{} is not under {}",
            layout.run_dir().display(),
            layout.build_dir().display()
        );
        assert_ne!(layout.run_dir(), layout.build_dir());
    }
}

#[test]
fn native_jmod_dir_follows_platform() {
    let cases = [
        (Platform::WindowsX64, "windows-x64"),
        (Platform::LinuxX64, "linux-x64"),
        (Platform::OsxX64, "osx-x64"),
        (Platform::Unknown, "unknown"),
    ];
    for (platform, tag) in cases {
        let layout = DirectoryLayout::new(platform);
        assert_eq!(layout.platform(), platform);
        assert_eq!(layout.native_jmod_dep_dir().file_name().unwrap(), tag);
    }
}

#[test]
fn dependency_search_path_has_five_entries_in_order() {
    let java_home = Path::new("/opt/java");
    for platform in [
        Platform::WindowsX64,
        Platform::LinuxX64,
        Platform::OsxX64,
        Platform::Unknown,
    ] {
        let layout = DirectoryLayout::new(platform);
        let search = layout.dependency_search_path(java_home);

        assert_eq!(search.len(), 5);
        assert_eq!(search[0], layout.jar_dep_dir());
        assert_eq!(search[1], layout.maven_dep_dir());
        assert_eq!(search[2], layout.universal_jmod_dep_dir());
        assert_eq!(search[3], layout.native_jmod_dep_dir());
        assert_eq!(search[4], java_home.join("jmods"));
    }
}

#[test]
fn module_path_string_uses_platform_separator() {
    let layout = DirectoryLayout::new(Platform::LinuxX64);
    let search = layout.dependency_search_path(Path::new("/opt/java"));
    let joined = layout.module_path_string(&search);

    let sep = if cfg!(windows) { ';' } else { ':' };
    let parts: Vec<&str> = joined.split(sep).collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0], layout.jar_dep_dir().to_str().unwrap());
    assert_eq!(parts[4], Path::new("/opt/java").join("jmods").to_str().unwrap());
}

#[test]
fn named_dirs_cover_the_layout() {
    let layout = DirectoryLayout::new(Platform::OsxX64);
    let named = layout.named_dirs();

    assert_eq!(named.len(), 9);
    assert!(named.contains(&("run_dir", layout.run_dir())));
    assert!(named.contains(&("native_jmod_dep_dir", layout.native_jmod_dep_dir())));
}
