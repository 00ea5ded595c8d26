// src/graph/order.rs

//! Deterministic topological ordering.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use petgraph::Direction;
use petgraph::graph::NodeIndex;

use crate::graph::AssetGraph;

/// Lazy topological walk over an [`AssetGraph`].
///
/// Every asset is yielded after all of its dependencies. Among assets that
/// are ready at the same time, the smallest name comes first, so two walks
/// over the same graph always produce the same sequence.
#[derive(Debug, Clone)]
pub struct TopologicalOrder<'g> {
    graph: &'g AssetGraph,
    remaining_deps: HashMap<NodeIndex, usize>,
    ready: BinaryHeap<Reverse<(&'g str, NodeIndex)>>,
}

impl<'g> TopologicalOrder<'g> {
    pub(crate) fn new(graph: &'g AssetGraph) -> Self {
        let mut remaining_deps = HashMap::with_capacity(graph.len());
        let mut ready = BinaryHeap::new();

        for (name, &ix) in graph.index.iter() {
            let count = graph
                .graph
                .neighbors_directed(ix, Direction::Incoming)
                .count();
            if count == 0 {
                ready.push(Reverse((name.as_str(), ix)));
            } else {
                remaining_deps.insert(ix, count);
            }
        }

        Self {
            graph,
            remaining_deps,
            ready,
        }
    }
}

impl<'g> Iterator for TopologicalOrder<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let Reverse((name, ix)) = self.ready.pop()?;

        for dependent in graph.graph.neighbors_directed(ix, Direction::Outgoing) {
            if let Some(count) = self.remaining_deps.get_mut(&dependent) {
                *count -= 1;
                if *count == 0 {
                    self.remaining_deps.remove(&dependent);
                    self.ready.push(Reverse((graph.name_of(dependent), dependent)));
                }
            }
        }

        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ready.len() + self.remaining_deps.len();
        (left, Some(left))
    }
}

impl ExactSizeIterator for TopologicalOrder<'_> {}

impl AssetGraph {
    /// Walk the graph in dependency order, ties broken by ascending name.
    ///
    /// Each call starts a fresh walk over the same immutable graph.
    pub fn topological_order(&self) -> TopologicalOrder<'_> {
        TopologicalOrder::new(self)
    }
}
