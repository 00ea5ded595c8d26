// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `assetroute`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "assetroute",
    version,
    about = "Validate code location asset graphs and show how their work is routed.",
    long_about = None,
    group(
        ArgGroup::new("query")
            .args(["order", "upstream", "downstream", "kind"])
            .multiple(false)
            .requires("location")
    )
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Assetroute.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Restrict output to a single code location.
    #[arg(long, value_name = "NAME")]
    pub location: Option<String>,

    /// Print the location's assets in dependency order.
    #[arg(long)]
    pub order: bool,

    /// Print every asset the given asset depends on, transitively.
    #[arg(long, value_name = "ASSET")]
    pub upstream: Option<String>,

    /// Print every asset that depends on the given asset, transitively.
    #[arg(long, value_name = "ASSET")]
    pub downstream: Option<String>,

    /// Print the assets tagged with this kind.
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ASSETROUTE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
