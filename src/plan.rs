// src/plan.rs

//! Per-location execution plan: order, queue and eligible pools.

use std::fmt;

use crate::config::ConfigFile;
use crate::errors::AssetrouteError;
use crate::location::CodeLocation;
use crate::routing::WorkerPoolRegistry;
use crate::types::{AssetName, DeploymentTarget, PoolId, QueueName};

/// What the external orchestrator needs to know about one code location.
#[derive(Debug)]
pub struct ExecutionPlan {
    pub location: String,
    pub target: DeploymentTarget,
    pub queue: QueueName,
    /// Assets in deterministic dependency order.
    pub order: Vec<AssetName>,
    /// Pools that may run this location's work. `Err` carries
    /// [`AssetrouteError::NoEligibleWorker`]; it is reported, not fatal.
    pub pools: Result<Vec<PoolId>, AssetrouteError>,
}

impl ExecutionPlan {
    pub fn for_location(location: &CodeLocation, registry: &WorkerPoolRegistry) -> Self {
        let queue = location.queue();
        let order = location
            .graph()
            .topological_order()
            .map(str::to_string)
            .collect();
        let pools = registry
            .eligible_pools(&queue)
            .map(|pools| pools.into_iter().map(|p| p.id().to_string()).collect());

        Self {
            location: location.name().to_string(),
            target: location.target(),
            queue,
            order,
            pools,
        }
    }

    /// One plan per location, ordered by location name.
    pub fn all(cfg: &ConfigFile) -> Vec<Self> {
        cfg.locations()
            .map(|loc| Self::for_location(loc, cfg.pools()))
            .collect()
    }

    pub fn is_routable(&self) -> bool {
        self.pools.is_ok()
    }
}

impl fmt::Display for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "location {} ({})", self.location, self.target)?;
        writeln!(f, "  queue: {}", self.queue)?;
        match &self.pools {
            Ok(pools) => writeln!(f, "  pools: {}", pools.join(", "))?,
            Err(err) => writeln!(f, "  pools: none ({err})")?,
        }
        writeln!(f, "  order:")?;
        for (i, asset) in self.order.iter().enumerate() {
            writeln!(f, "    {}. {}", i + 1, asset)?;
        }
        Ok(())
    }
}
