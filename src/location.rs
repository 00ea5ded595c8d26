// src/location.rs

//! A code location: one deployable asset graph plus its queue routing.

use crate::graph::AssetGraph;
use crate::routing::QueueRoutingPolicy;
use crate::types::{DeploymentTarget, QueueName};

#[derive(Debug, Clone)]
pub struct CodeLocation {
    name: String,
    target: DeploymentTarget,
    policy: QueueRoutingPolicy,
    graph: AssetGraph,
}

impl CodeLocation {
    pub fn new(
        name: impl Into<String>,
        target: DeploymentTarget,
        policy: QueueRoutingPolicy,
        graph: AssetGraph,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            policy,
            graph,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> DeploymentTarget {
        self.target
    }

    pub fn policy(&self) -> &QueueRoutingPolicy {
        &self.policy
    }

    pub fn graph(&self) -> &AssetGraph {
        &self.graph
    }

    /// Queue all of this location's assets are routed to.
    pub fn queue(&self) -> QueueName {
        self.policy.resolve_queue()
    }
}
