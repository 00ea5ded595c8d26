// src/routing/registry.rs

//! Worker pool registry and queue eligibility.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use tracing::{debug, warn};

use crate::errors::{AssetrouteError, Result};
use crate::types::{PoolId, QueueName};

/// A registered executor and the queues it drains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPool {
    id: PoolId,
    queues: BTreeSet<String>,
    include_default_queue: bool,
}

impl WorkerPool {
    pub fn new<I, S>(id: impl Into<PoolId>, queues: I, include_default_queue: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            queues: queues.into_iter().map(Into::into).collect(),
            include_default_queue,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Named queues this pool declares it serves.
    pub fn queues(&self) -> &BTreeSet<String> {
        &self.queues
    }

    pub fn include_default_queue(&self) -> bool {
        self.include_default_queue
    }

    /// Whether work routed to `queue` may run on this pool.
    pub fn serves(&self, queue: &QueueName) -> bool {
        match queue {
            QueueName::Default => self.include_default_queue,
            QueueName::Named(name) => self.queues.contains(name),
        }
    }
}

/// All worker pools known to the router, keyed by id.
///
/// Iteration and eligibility results are ordered by pool id.
#[derive(Debug, Clone, Default)]
pub struct WorkerPoolRegistry {
    pools: BTreeMap<PoolId, WorkerPool>,
}

impl WorkerPoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pool. Fails with [`AssetrouteError::DuplicatePool`] if the
    /// id is already taken; the registry is left unchanged in that case.
    pub fn register<I, S>(
        &mut self,
        id: impl Into<PoolId>,
        queues: I,
        include_default_queue: bool,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(WorkerPool::new(id, queues, include_default_queue))
    }

    /// Register an already constructed [`WorkerPool`].
    pub fn insert(&mut self, pool: WorkerPool) -> Result<()> {
        if self.pools.contains_key(pool.id()) {
            return Err(AssetrouteError::DuplicatePool(pool.id().to_string()));
        }

        if pool.queues.is_empty() && !pool.include_default_queue {
            warn!(pool = %pool.id, "worker pool serves no queue at all");
        }

        debug!(
            pool = %pool.id,
            queues = ?pool.queues,
            include_default_queue = pool.include_default_queue,
            "registered worker pool"
        );
        self.pools.insert(pool.id.clone(), pool);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WorkerPool> {
        self.pools.get(id)
    }

    pub fn pools(&self) -> impl Iterator<Item = &WorkerPool> {
        self.pools.values()
    }

    /// Pools that may execute work routed to `queue`.
    ///
    /// A pool is eligible when it lists `queue` among its named queues, or
    /// when `queue` is the default queue and the pool opted into draining it.
    /// An empty result is reported as [`AssetrouteError::NoEligibleWorker`].
    pub fn eligible_pools(&self, queue: &QueueName) -> Result<Vec<&WorkerPool>> {
        let eligible: Vec<&WorkerPool> = self.pools.values().filter(|p| p.serves(queue)).collect();

        if eligible.is_empty() {
            return Err(AssetrouteError::NoEligibleWorker {
                queue: queue.clone(),
            });
        }

        Ok(eligible)
    }
}

/// Thread-safe handle around a [`WorkerPoolRegistry`].
///
/// Registration takes the write lock, so two registrations of the same id
/// can never both succeed. Eligibility queries only take the read lock.
#[derive(Debug, Clone, Default)]
pub struct SharedPoolRegistry {
    inner: Arc<RwLock<WorkerPoolRegistry>>,
}

impl SharedPoolRegistry {
    pub fn new(registry: WorkerPoolRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    pub fn register<I, S>(
        &self,
        id: impl Into<PoolId>,
        queues: I,
        include_default_queue: bool,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| anyhow!("worker pool registry lock poisoned"))?;
        guard.register(id, queues, include_default_queue)
    }

    /// Ids of the pools eligible for `queue`.
    pub fn eligible_pools(&self, queue: &QueueName) -> Result<Vec<PoolId>> {
        let guard = self
            .inner
            .read()
            .map_err(|_| anyhow!("worker pool registry lock poisoned"))?;
        let pools = guard.eligible_pools(queue)?;
        Ok(pools.into_iter().map(|p| p.id().to_string()).collect())
    }

    /// Copy of the current registry contents.
    pub fn snapshot(&self) -> Result<WorkerPoolRegistry> {
        let guard = self
            .inner
            .read()
            .map_err(|_| anyhow!("worker pool registry lock poisoned"))?;
        Ok(guard.clone())
    }
}
