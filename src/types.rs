use std::fmt;

use serde::Deserialize;

/// Canonical asset name type used throughout the crate.
pub type AssetName = String;

/// Identifier of a registered worker pool.
pub type PoolId = String;

/// Queue a unit of work is routed to.
///
/// `Default` is the implicit queue used when a code location does not name
/// one. It is kept as its own variant so that no configured string can collide
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueueName {
    Default,
    Named(String),
}

impl QueueName {
    pub fn named(name: impl Into<String>) -> Self {
        QueueName::Named(name.into())
    }

    pub fn is_default(&self) -> bool {
        matches!(self, QueueName::Default)
    }

    /// The configured name, or `None` for the default queue.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            QueueName::Default => None,
            QueueName::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueName::Default => f.write_str("<default>"),
            QueueName::Named(name) => write!(f, "'{name}'"),
        }
    }
}

/// Where a code location is deployed.
///
/// - `Serverless`: fully-managed execution environment.
/// - `Hybrid`: self-hosted agents, usually reached through a dedicated queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Serverless,
    Hybrid,
}

impl Default for DeploymentTarget {
    fn default() -> Self {
        DeploymentTarget::Serverless
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentTarget::Serverless => f.write_str("serverless"),
            DeploymentTarget::Hybrid => f.write_str("hybrid"),
        }
    }
}
