mod common;
use crate::common::{demo_config_path, init_tracing};

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use assetroute::config::{load_and_validate, load_from_path, load_from_str};
use assetroute::errors::AssetrouteError;
use assetroute::routing::QueueRoutingPolicy;
use assetroute::types::{DeploymentTarget, QueueName};
use assetroute_test_utils::builders::ConfigBuilder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn demo_config_builds_both_locations() -> TestResult {
    init_tracing();

    let cfg = load_and_validate(demo_config_path())?;

    let names: Vec<&str> = cfg.locations().map(|l| l.name()).collect();
    assert_eq!(names, vec!["hybrid", "serverless"]);

    let hybrid = cfg.location("hybrid").unwrap();
    assert_eq!(hybrid.target(), DeploymentTarget::Hybrid);
    assert_eq!(hybrid.queue(), QueueName::named("hybrid-queue"));
    assert_eq!(hybrid.graph().len(), 5);
    assert_eq!(
        hybrid
            .graph()
            .node("raw_customer_transactions")
            .unwrap()
            .description(),
        Some("Ingests large datasets from Snowflake data warehouse")
    );

    let serverless = cfg.location("serverless").unwrap();
    assert_eq!(serverless.target(), DeploymentTarget::Serverless);
    assert!(serverless.queue().is_default());
    assert_eq!(serverless.graph().leaves(), vec!["user_engagement_scores"]);

    assert_eq!(cfg.pools().len(), 2);
    assert!(!cfg.pools().get("hybrid-agent").unwrap().include_default_queue());
    let pool_ids: Vec<&str> = cfg.pools().pools().map(|p| p.id()).collect();
    assert_eq!(pool_ids, vec!["hybrid-agent", "serverless-runtime"]);

    assert_eq!(hybrid.policy().graph_queue(), Some("hybrid-queue"));
    assert_eq!(serverless.policy(), &QueueRoutingPolicy::default_queue());

    let node_names: Vec<&str> = serverless.graph().nodes().map(|n| n.name()).collect();
    assert_eq!(
        node_names,
        vec![
            "cleaned_user_events",
            "daily_user_metrics",
            "raw_user_events",
            "user_engagement_scores"
        ]
    );

    Ok(())
}

#[test]
fn defaults_apply_for_omitted_fields() -> TestResult {
    let cfg = load_from_str(
        r#"
[location.analytics.asset.events]

[pool.worker]
"#,
    )?;

    let loc = cfg.location("analytics").unwrap();
    assert_eq!(loc.target(), DeploymentTarget::Serverless);
    assert!(loc.queue().is_default());
    assert!(loc.graph().node("events").unwrap().kinds().is_empty());

    let pool = cfg.pools().get("worker").unwrap();
    assert!(pool.queues().is_empty());
    assert!(pool.include_default_queue());

    Ok(())
}

#[test]
fn load_from_path_does_not_validate() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[location.loc.asset.A]
deps = ["B"]
"#
    )?;

    let raw = load_from_path(file.path())?;
    assert_eq!(raw.location["loc"].asset["A"].deps, vec!["B".to_string()]);

    assert!(matches!(
        load_and_validate(file.path()),
        Err(AssetrouteError::UnknownDependency { .. })
    ));

    Ok(())
}

#[test]
fn cycle_in_config_returns_structured_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[location.loc.asset.A]
deps = ["B"]

[location.loc.asset.B]
deps = ["A"]
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(AssetrouteError::CycleDetected { path }) => assert_eq!(path, vec!["A", "B", "A"]),
        Err(e) => panic!("Expected CycleDetected error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn dependencies_do_not_cross_locations() {
    let result = ConfigBuilder::new()
        .location("first", DeploymentTarget::Serverless, None)
        .asset("first", "A", &[])
        .location("second", DeploymentTarget::Hybrid, Some("hybrid-queue"))
        .asset("second", "B", &["A"])
        .try_build();

    match result {
        Err(AssetrouteError::UnknownDependency { asset, dependency }) => {
            assert_eq!(asset, "B");
            assert_eq!(dependency, "A");
        }
        other => panic!("Expected UnknownDependency, got: {:?}", other),
    }
}

#[test]
fn config_without_locations_is_rejected() {
    match load_from_str("") {
        Err(AssetrouteError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn location_without_assets_is_rejected() {
    let result = ConfigBuilder::new()
        .location("empty", DeploymentTarget::Serverless, None)
        .try_build();

    match result {
        Err(AssetrouteError::ConfigError(msg)) => assert!(msg.contains("declares no assets")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn invalid_names_are_rejected() {
    let bad_asset = load_from_str(
        r#"
[location.loc.asset."bad-name"]
"#,
    );
    match bad_asset {
        Err(AssetrouteError::ConfigError(msg)) => assert!(msg.contains("invalid asset name")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let empty_queue = ConfigBuilder::new()
        .location("loc", DeploymentTarget::Hybrid, Some(""))
        .asset("loc", "A", &[])
        .try_build();
    match empty_queue {
        Err(AssetrouteError::ConfigError(msg)) => assert!(msg.contains("invalid queue name")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let bad_pool_queue = ConfigBuilder::new()
        .location("loc", DeploymentTarget::Serverless, None)
        .asset("loc", "A", &[])
        .pool("agent", &["no spaces"], false)
        .try_build();
    assert!(matches!(bad_pool_queue, Err(AssetrouteError::ConfigError(_))));
}

#[test]
fn unknown_deployment_target_fails_to_parse() {
    let result = load_from_str(
        r#"
[location.loc]
target = "cloud"

[location.loc.asset.A]
"#,
    );
    assert!(matches!(result, Err(AssetrouteError::TomlError(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("Assetroute.toml"));
    assert!(matches!(result, Err(AssetrouteError::IoError(_))));
}

#[test]
fn hybrid_location_without_queue_is_allowed() -> TestResult {
    init_tracing();

    let cfg = ConfigBuilder::new()
        .location("agents", DeploymentTarget::Hybrid, None)
        .asset("agents", "A", &[])
        .try_build()?;

    assert!(cfg.location("agents").unwrap().queue().is_default());
    Ok(())
}

#[test]
fn registry_can_be_shared_after_loading() -> TestResult {
    use assetroute::routing::SharedPoolRegistry;

    let cfg = load_and_validate(demo_config_path())?;
    let (locations, pools) = cfg.into_parts();
    let shared = SharedPoolRegistry::new(pools);

    let hybrid_queue = locations["hybrid"].queue();
    assert_eq!(shared.eligible_pools(&hybrid_queue)?, vec!["hybrid-agent".to_string()]);

    shared.register("gpu-agent", ["hybrid-queue"], false)?;
    assert_eq!(
        shared.eligible_pools(&hybrid_queue)?,
        vec!["gpu-agent".to_string(), "hybrid-agent".to_string()]
    );
    assert!(matches!(
        shared.register("hybrid-agent", ["hybrid-queue"], false),
        Err(AssetrouteError::DuplicatePool(_))
    ));

    Ok(())
}
