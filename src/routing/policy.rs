// src/routing/policy.rs

use crate::types::QueueName;

/// Queue assignment for one whole asset graph.
///
/// Routing is per graph, never per asset: every asset of a code location
/// lands on the same queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueRoutingPolicy {
    /// `None` means the graph uses the default queue.
    graph_queue: Option<String>,
}

impl QueueRoutingPolicy {
    /// Policy routing to the default queue.
    pub fn default_queue() -> Self {
        Self { graph_queue: None }
    }

    /// Policy routing to a named queue.
    pub fn named(queue: impl Into<String>) -> Self {
        Self {
            graph_queue: Some(queue.into()),
        }
    }

    pub fn graph_queue(&self) -> Option<&str> {
        self.graph_queue.as_deref()
    }

    /// The queue work for this graph is sent to.
    pub fn resolve_queue(&self) -> QueueName {
        match &self.graph_queue {
            Some(name) => QueueName::Named(name.clone()),
            None => QueueName::Default,
        }
    }
}
