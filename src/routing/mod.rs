// src/routing/mod.rs

//! Execution queue routing.
//!
//! Routing happens in two separate steps:
//! - [`QueueRoutingPolicy::resolve_queue`] decides which queue a graph's work
//!   goes to (its configured queue, or the default queue).
//! - [`WorkerPoolRegistry::eligible_pools`] decides which registered pools
//!   may pick up work from that queue.
//!
//! Nothing here retries or waits; an empty eligibility result is handed back
//! to the caller as [`AssetrouteError::NoEligibleWorker`].
//!
//! [`AssetrouteError::NoEligibleWorker`]: crate::errors::AssetrouteError::NoEligibleWorker

pub mod policy;
pub mod registry;

pub use policy::QueueRoutingPolicy;
pub use registry::{SharedPoolRegistry, WorkerPool, WorkerPoolRegistry};
