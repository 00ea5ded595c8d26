#![allow(dead_code)]

use std::collections::BTreeMap;

use assetroute::config::{AssetConfig, ConfigFile, LocationConfig, PoolConfig, RawConfigFile};
use assetroute::errors::Result;
use assetroute::graph::{AssetGraph, NodeDescription};
use assetroute::types::DeploymentTarget;

/// Builder for a list of [`NodeDescription`]s to simplify graph setup.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeDescription>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset depending on `deps`.
    pub fn node(mut self, name: &str, deps: &[&str]) -> Self {
        self.nodes
            .push(NodeDescription::new(name).with_deps(deps.iter().copied()));
        self
    }

    /// Add an asset with kinds and dependencies.
    pub fn node_with_kinds(mut self, name: &str, kinds: &[&str], deps: &[&str]) -> Self {
        self.nodes.push(
            NodeDescription::new(name)
                .with_kinds(kinds.iter().copied())
                .with_deps(deps.iter().copied()),
        );
        self
    }

    pub fn descriptions(&self) -> Vec<NodeDescription> {
        self.nodes.clone()
    }

    pub fn try_build(self) -> Result<AssetGraph> {
        AssetGraph::build(self.nodes)
    }

    pub fn build(self) -> AssetGraph {
        self.try_build()
            .expect("Failed to build valid graph from builder")
    }
}

/// Builder for `ConfigFile`, going through the same validation as a TOML file.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: RawConfigFile,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, name: &str, target: DeploymentTarget, queue: Option<&str>) -> Self {
        self.config.location.insert(
            name.to_string(),
            LocationConfig {
                target,
                queue: queue.map(str::to_string),
                asset: BTreeMap::new(),
            },
        );
        self
    }

    /// Add an asset to a location previously declared with [`Self::location`].
    pub fn asset(mut self, location: &str, name: &str, deps: &[&str]) -> Self {
        let loc = self
            .config
            .location
            .get_mut(location)
            .expect("declare the location before adding assets");
        loc.asset.insert(
            name.to_string(),
            AssetConfig {
                kinds: Vec::new(),
                deps: deps.iter().map(|d| d.to_string()).collect(),
                description: None,
            },
        );
        self
    }

    pub fn pool(mut self, id: &str, queues: &[&str], include_default_queue: bool) -> Self {
        self.config.pool.insert(
            id.to_string(),
            PoolConfig {
                queues: queues.iter().map(|q| q.to_string()).collect(),
                include_default_queue,
            },
        );
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn try_build(self) -> Result<ConfigFile> {
        ConfigFile::try_from(self.config)
    }

    pub fn build(self) -> ConfigFile {
        self.try_build()
            .expect("Failed to build valid config from builder")
    }
}
