// src/config/validate.rs

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::model::{ConfigFile, LocationConfig, RawConfigFile};
use crate::errors::{AssetrouteError, Result};
use crate::graph::{AssetGraph, NodeDescription};
use crate::location::CodeLocation;
use crate::routing::{QueueRoutingPolicy, WorkerPoolRegistry};
use crate::types::DeploymentTarget;

/// Asset names: letters, digits and underscores.
static ASSET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("static regex"));

/// Location, pool and queue names may also contain `-` and `.` after the
/// first character (e.g. `hybrid-queue`).
static ROUTING_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").expect("static regex"));

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::AssetrouteError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let mut locations = BTreeMap::new();
        for (name, loc) in raw.location {
            let location = build_location(&name, loc)?;
            locations.insert(name, location);
        }

        let mut pools = WorkerPoolRegistry::new();
        for (id, pool) in raw.pool {
            pools.register(id, pool.queues, pool.include_default_queue)?;
        }

        Ok(ConfigFile::new_unchecked(locations, pools))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_locations(cfg)?;
    validate_locations(cfg)?;
    validate_pools(cfg)?;
    Ok(())
}

fn ensure_has_locations(cfg: &RawConfigFile) -> Result<()> {
    if cfg.location.is_empty() {
        return Err(AssetrouteError::ConfigError(
            "config must contain at least one [location.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_locations(cfg: &RawConfigFile) -> Result<()> {
    for (name, loc) in cfg.location.iter() {
        check_name(&ROUTING_NAME, "location", name)?;

        if loc.asset.is_empty() {
            return Err(AssetrouteError::ConfigError(format!(
                "location '{}' declares no assets",
                name
            )));
        }

        for asset in loc.asset.keys() {
            check_name(&ASSET_NAME, "asset", asset)?;
        }

        match loc.queue.as_deref() {
            Some(queue) => check_name(&ROUTING_NAME, "queue", queue)?,
            None if loc.target == DeploymentTarget::Hybrid => {
                warn!(
                    location = %name,
                    "hybrid location has no queue; its assets go to the default queue"
                );
            }
            None => {}
        }
    }
    Ok(())
}

fn validate_pools(cfg: &RawConfigFile) -> Result<()> {
    for (id, pool) in cfg.pool.iter() {
        check_name(&ROUTING_NAME, "pool", id)?;
        for queue in pool.queues.iter() {
            check_name(&ROUTING_NAME, "queue", queue)?;
        }
    }
    Ok(())
}

fn check_name(pattern: &Regex, what: &str, name: &str) -> Result<()> {
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(AssetrouteError::ConfigError(format!(
            "invalid {} name '{}' (must match {})",
            what,
            name,
            pattern.as_str()
        )))
    }
}

fn build_location(name: &str, loc: LocationConfig) -> Result<CodeLocation> {
    debug!(location = %name, assets = loc.asset.len(), "building asset graph");

    let descriptions = loc.asset.into_iter().map(|(asset, cfg)| NodeDescription {
        name: asset,
        kinds: cfg.kinds,
        deps: cfg.deps,
        description: cfg.description,
    });
    let graph = AssetGraph::build(descriptions)?;

    let policy = match loc.queue {
        Some(queue) => QueueRoutingPolicy::named(queue),
        None => QueueRoutingPolicy::default_queue(),
    };

    Ok(CodeLocation::new(name, loc.target, policy, graph))
}
