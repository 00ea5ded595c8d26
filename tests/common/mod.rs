#![allow(dead_code)]

use std::path::PathBuf;

pub use assetroute_test_utils::init_tracing;

/// Path to the bundled two-location demo config.
pub fn demo_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/locations.toml")
}
