// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::QueueName;

#[derive(Error, Debug)]
pub enum AssetrouteError {
    #[error("asset '{asset}' has unknown dependency '{dependency}'")]
    UnknownDependency { asset: String, dependency: String },

    #[error("cycle detected in asset graph: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("asset not found: {0}")]
    UnknownNode(String),

    #[error("asset '{0}' is declared more than once")]
    DuplicateAsset(String),

    #[error("worker pool '{0}' is already registered")]
    DuplicatePool(String),

    #[error("no worker pool is eligible for queue {queue}")]
    NoEligibleWorker { queue: QueueName },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AssetrouteError>;
