#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # drptrace-build
//!
//! Prints the build configuration of the drptrace Java modules so build
//! scripts can consume it.
//!
//! `JAVA_HOME` must be set, either in the environment or in a `.env` file in
//! the working directory.

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use drptrace_build::{BuildConfig, ToolchainExecutables, modules::find_sources};
use tabled::{Table, Tabled};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Print the whole configuration as JSON
    Info,
    /// Print the directory layout
    Paths,
    /// Print the dependency search path
    ModulePath,
    /// Print the module list
    Modules,
    /// List java sources of a module
    Sources(String),
    /// Locate toolchain executables
    Tools,
}

/// One row of the `paths` table.
#[derive(Tabled)]
struct PathRow {
    /// Directory name
    #[tabled(rename = "Name")]
    name: &'static str,
    /// Relative path
    #[tabled(rename = "Path")]
    path: String,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses module name
    fn m() -> impl Parser<String> {
        positional("MODULE").help("Name of a configured module")
    }

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Prints a JSON description of the build configuration");

    let paths = pure(Cmd::Paths)
        .to_options()
        .command("paths")
        .help("Prints the project directory layout");

    let module_path = pure(Cmd::ModulePath)
        .to_options()
        .command("module-path")
        .help("Prints the dependency search path joined for --module-path");

    let modules = pure(Cmd::Modules)
        .to_options()
        .command("modules")
        .help("Prints the modules in build order");

    let sources = construct!(Cmd::Sources(m()))
        .to_options()
        .command("sources")
        .help("Lists java sources of a module");

    let tools = pure(Cmd::Tools)
        .to_options()
        .command("tools")
        .help("Checks that the toolchain executables are on PATH");

    let cmd = construct!([info, paths, module_path, modules, sources, tools]);

    cmd.to_options()
        .descr("Build configuration for the drptrace modules")
        .run()
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();
    let config = BuildConfig::load().context("Could not load build configuration")?;

    match cmd {
        Cmd::Info => {
            let out = serde_json::to_string_pretty(&config)
                .context("Could not serialize build configuration")?;
            println!("{out}");
        }
        Cmd::Paths => {
            let rows: Vec<PathRow> = config
                .layout()
                .named_dirs()
                .into_iter()
                .map(|(name, path)| PathRow {
                    name,
                    path: path.display().to_string(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Cmd::ModulePath => println!("{}", config.module_path()),
        Cmd::Modules => {
            for module in config.modules().modules() {
                if module == config.modules().main_module() {
                    println!("{module} (main: {})", config.modules().main_class());
                } else {
                    println!("{module}");
                }
            }
        }
        Cmd::Sources(module) => {
            let dir = config.module_source_dir(&module)?;
            for file in find_sources(&dir)? {
                println!("{}", file.display());
            }
        }
        Cmd::Tools => {
            for (label, name) in config.toolchain().all() {
                match ToolchainExecutables::locate(name) {
                    Ok(path) => println!("{label}: {}", path.display()),
                    Err(e) => tracing::warn!("{label}: {e:#}"),
                }
            }
        }
    };

    Ok(())
}
