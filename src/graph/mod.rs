// src/graph/mod.rs

//! Asset dependency graph.
//!
//! - [`node`] holds the declarative [`NodeDescription`] and the validated
//!   [`AssetNode`].
//! - [`asset_graph`] builds and validates the immutable [`AssetGraph`].
//! - [`order`] walks the graph in deterministic dependency order.
//! - `traverse` computes upstream / downstream closures.

pub mod asset_graph;
mod cycle;
pub mod node;
pub mod order;
mod traverse;

pub use asset_graph::AssetGraph;
pub use node::{AssetNode, NodeDescription};
pub use order::TopologicalOrder;
