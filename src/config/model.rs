// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::location::CodeLocation;
use crate::routing::WorkerPoolRegistry;
use crate::types::DeploymentTarget;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [location.hybrid]
/// target = "hybrid"
/// queue = "hybrid-queue"
///
/// [location.hybrid.asset.raw_customer_transactions]
/// kinds = ["snowflake", "python"]
///
/// [location.hybrid.asset.transformed_transactions]
/// kinds = ["python", "pandas"]
/// deps = ["raw_customer_transactions"]
///
/// [pool.hybrid-agent]
/// queues = ["hybrid-queue"]
/// include_default_queue = false
/// ```
///
/// This is the unvalidated form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    /// Code locations from `[location.<name>]`.
    #[serde(default)]
    pub location: BTreeMap<String, LocationConfig>,

    /// Worker pools from `[pool.<id>]`.
    #[serde(default)]
    pub pool: BTreeMap<String, PoolConfig>,
}

/// `[location.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationConfig {
    /// `"serverless"` (default) or `"hybrid"`.
    #[serde(default)]
    pub target: DeploymentTarget,

    /// Queue for every asset in this location. Unset means the default queue.
    #[serde(default)]
    pub queue: Option<String>,

    /// Assets from `[location.<name>.asset.<asset>]`.
    #[serde(default)]
    pub asset: BTreeMap<String, AssetConfig>,
}

/// `[location.<name>.asset.<asset>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetConfig {
    /// Free-form labels, e.g. `["duckdb", "api"]`.
    #[serde(default)]
    pub kinds: Vec<String>,

    /// Upstream assets in the same location.
    #[serde(default)]
    pub deps: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// `[pool.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Named queues this pool drains.
    #[serde(default)]
    pub queues: Vec<String>,

    /// Whether the pool also drains the default queue.
    ///
    /// Defaults to `true`, so a pool with no `queues` behaves like a plain
    /// default-queue worker.
    #[serde(default = "default_include_default_queue")]
    pub include_default_queue: bool,
}

fn default_include_default_queue() -> bool {
    true
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            queues: Vec::new(),
            include_default_queue: default_include_default_queue(),
        }
    }
}

/// Validated configuration: built graphs plus the worker pool registry.
///
/// Only obtainable through `ConfigFile::try_from(raw)` (see
/// `config::validate`), so holding one means every graph is acyclic and every
/// pool id is unique.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    locations: BTreeMap<String, CodeLocation>,
    pools: WorkerPoolRegistry,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        locations: BTreeMap<String, CodeLocation>,
        pools: WorkerPoolRegistry,
    ) -> Self {
        Self { locations, pools }
    }

    /// Code locations ordered by name.
    pub fn locations(&self) -> impl Iterator<Item = &CodeLocation> {
        self.locations.values()
    }

    pub fn location(&self, name: &str) -> Option<&CodeLocation> {
        self.locations.get(name)
    }

    pub fn pools(&self) -> &WorkerPoolRegistry {
        &self.pools
    }

    /// Split into locations and the pool registry, e.g. to hand the registry
    /// to a [`SharedPoolRegistry`](crate::routing::SharedPoolRegistry).
    pub fn into_parts(self) -> (BTreeMap<String, CodeLocation>, WorkerPoolRegistry) {
        (self.locations, self.pools)
    }
}
