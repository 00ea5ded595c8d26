// src/graph/asset_graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::errors::{AssetrouteError, Result};
use crate::graph::cycle::find_cycle;
use crate::graph::node::{AssetNode, NodeDescription};
use crate::types::AssetName;

/// Immutable, validated asset dependency graph.
///
/// Edge direction: dependency -> dependent. For an asset `B` declaring
/// `deps = ["A"]` the graph holds the edge `A -> B`.
///
/// The graph is built once through [`AssetGraph::build`] and never mutated
/// afterwards, so shared references can be handed to any number of readers.
#[derive(Debug, Clone)]
pub struct AssetGraph {
    pub(crate) graph: DiGraph<AssetNode, ()>,
    pub(crate) index: BTreeMap<AssetName, NodeIndex>,
}

impl AssetGraph {
    /// Validate a list of node descriptions and build the graph.
    ///
    /// Fails with:
    /// - [`AssetrouteError::DuplicateAsset`] if two descriptions share a name,
    /// - [`AssetrouteError::UnknownDependency`] if a dependency does not name
    ///   another description in the list,
    /// - [`AssetrouteError::CycleDetected`] if the dependencies form a cycle.
    pub fn build<I>(descriptions: I) -> Result<Self>
    where
        I: IntoIterator<Item = NodeDescription>,
    {
        let descriptions: Vec<NodeDescription> = descriptions.into_iter().collect();

        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for desc in &descriptions {
            if !seen.insert(desc.name.as_str()) {
                return Err(AssetrouteError::DuplicateAsset(desc.name.clone()));
            }
        }

        let mut deps: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for desc in &descriptions {
            let entry = deps.entry(desc.name.as_str()).or_default();
            for dep in &desc.deps {
                if !seen.contains(dep.as_str()) {
                    return Err(AssetrouteError::UnknownDependency {
                        asset: desc.name.clone(),
                        dependency: dep.clone(),
                    });
                }
                entry.insert(dep.as_str());
            }
        }

        if let Some(path) = find_cycle(&deps) {
            return Err(AssetrouteError::CycleDetected { path });
        }

        let mut graph: DiGraph<AssetNode, ()> = DiGraph::with_capacity(descriptions.len(), 0);
        let mut index: BTreeMap<AssetName, NodeIndex> = BTreeMap::new();

        for desc in &descriptions {
            let ix = graph.add_node(AssetNode::from_description(desc.clone()));
            index.insert(desc.name.clone(), ix);
        }

        for (&name, node_deps) in &deps {
            let to = index[name];
            for &dep in node_deps {
                graph.add_edge(index[dep], to, ());
            }
        }

        debug!(
            assets = graph.node_count(),
            edges = graph.edge_count(),
            "built asset graph"
        );

        Ok(Self { graph, index })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node(&self, name: &str) -> Option<&AssetNode> {
        self.index.get(name).map(|&ix| &self.graph[ix])
    }

    /// All asset names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }

    /// All nodes, ordered by name.
    pub fn nodes(&self) -> impl Iterator<Item = &AssetNode> {
        self.index.values().map(|&ix| &self.graph[ix])
    }

    /// Direct dependencies of an asset, sorted by name.
    pub fn dependencies_of(&self, name: &str) -> Result<Vec<&str>> {
        self.neighbours(name, Direction::Incoming)
    }

    /// Direct dependents of an asset (assets listing it in `deps`), sorted by name.
    pub fn dependents_of(&self, name: &str) -> Result<Vec<&str>> {
        self.neighbours(name, Direction::Outgoing)
    }

    /// Assets without dependencies.
    pub fn roots(&self) -> Vec<&str> {
        self.names_where(|ix| {
            self.graph
                .neighbors_directed(ix, Direction::Incoming)
                .next()
                .is_none()
        })
    }

    /// Assets nothing else depends on.
    pub fn leaves(&self) -> Vec<&str> {
        self.names_where(|ix| {
            self.graph
                .neighbors_directed(ix, Direction::Outgoing)
                .next()
                .is_none()
        })
    }

    /// Names of assets tagged with `kind`, sorted.
    pub fn with_kind(&self, kind: &str) -> Vec<&str> {
        self.names_where(|ix| self.graph[ix].has_kind(kind))
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<NodeIndex> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| AssetrouteError::UnknownNode(name.to_string()))
    }

    pub(crate) fn name_of(&self, ix: NodeIndex) -> &str {
        self.graph[ix].name()
    }

    fn neighbours(&self, name: &str, dir: Direction) -> Result<Vec<&str>> {
        let ix = self.index_of(name)?;
        let mut out: Vec<&str> = self
            .graph
            .neighbors_directed(ix, dir)
            .map(|n| self.name_of(n))
            .collect();
        out.sort_unstable();
        Ok(out)
    }

    fn names_where<F>(&self, pred: F) -> Vec<&str>
    where
        F: Fn(NodeIndex) -> bool,
    {
        self.index
            .iter()
            .filter(|&(_, &ix)| pred(ix))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
