// src/graph/node.rs

//! Asset node types: the declarative input and the validated node.

use std::collections::BTreeSet;

use crate::types::AssetName;

/// Declarative description of one asset, as handed to [`AssetGraph::build`].
///
/// [`AssetGraph::build`]: crate::graph::AssetGraph::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDescription {
    pub name: AssetName,
    pub kinds: Vec<String>,
    pub deps: Vec<AssetName>,
    pub description: Option<String>,
}

impl NodeDescription {
    pub fn new<N: Into<AssetName>>(name: N) -> Self {
        Self {
            name: name.into(),
            kinds: Vec::new(),
            deps: Vec::new(),
            description: None,
        }
    }

    pub fn with_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kinds.extend(kinds.into_iter().map(Into::into));
        self
    }

    pub fn with_deps<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<AssetName>,
    {
        self.deps.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A validated asset inside an [`AssetGraph`].
///
/// Nodes only exist inside the graph that owns them; callers get shared
/// references through [`AssetGraph::node`].
///
/// [`AssetGraph`]: crate::graph::AssetGraph
/// [`AssetGraph::node`]: crate::graph::AssetGraph::node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetNode {
    name: AssetName,
    kinds: BTreeSet<String>,
    dependencies: BTreeSet<AssetName>,
    description: Option<String>,
}

impl AssetNode {
    pub(crate) fn from_description(desc: NodeDescription) -> Self {
        Self {
            name: desc.name,
            kinds: desc.kinds.into_iter().collect(),
            dependencies: desc.deps.into_iter().collect(),
            description: desc.description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form labels (e.g. `"snowflake"`, `"python"`). Display only.
    pub fn kinds(&self) -> &BTreeSet<String> {
        &self.kinds
    }

    pub fn has_kind(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    /// Direct upstream dependencies.
    pub fn dependencies(&self) -> &BTreeSet<AssetName> {
        &self.dependencies
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
