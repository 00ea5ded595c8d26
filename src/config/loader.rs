// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; graphs are not built and nothing
/// is validated. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path, validate it and build every graph.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks names, then builds each location's [`AssetGraph`] (unknown
///   dependencies, duplicate assets, cycles) and the worker pool registry
///   (duplicate pools).
///
/// [`AssetGraph`]: crate::graph::AssetGraph
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;

    info!(
        path = %path.as_ref().display(),
        locations = config.locations().count(),
        pools = config.pools().len(),
        "loaded configuration"
    );

    Ok(config)
}

/// Parse and validate configuration from an in-memory TOML string.
pub fn load_from_str(contents: &str) -> Result<ConfigFile> {
    let raw: RawConfigFile = toml::from_str(contents)?;
    ConfigFile::try_from(raw)
}

/// Default config path: `Assetroute.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Assetroute.toml")
}
