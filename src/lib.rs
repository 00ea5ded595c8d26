// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod location;
pub mod logging;
pub mod plan;
pub mod routing;
pub mod types;

use anyhow::Result;
use tracing::warn;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_and_validate;
use crate::errors::AssetrouteError;
use crate::plan::ExecutionPlan;

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the config, then prints either the execution plans or
/// the answer to a single graph query.
pub fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let output = render(&args, &cfg)?;
    print!("{output}");
    Ok(())
}

/// Produce the text `run` prints for the given arguments.
pub fn render(args: &CliArgs, cfg: &ConfigFile) -> errors::Result<String> {
    let mut out = String::new();

    let location = match args.location.as_deref() {
        Some(name) => Some(cfg.location(name).ok_or_else(|| {
            AssetrouteError::ConfigError(format!("unknown location '{name}'"))
        })?),
        None => None,
    };

    match location {
        Some(loc) => {
            let graph = loc.graph();
            let lines: Vec<&str> = if let Some(asset) = args.upstream.as_deref() {
                graph.upstream_of(asset)?.into_iter().collect()
            } else if let Some(asset) = args.downstream.as_deref() {
                graph.downstream_of(asset)?.into_iter().collect()
            } else if let Some(kind) = args.kind.as_deref() {
                graph.with_kind(kind)
            } else if args.order {
                graph.topological_order().collect()
            } else {
                push_plan(&mut out, &ExecutionPlan::for_location(loc, cfg.pools()));
                return Ok(out);
            };

            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        None => {
            for plan in ExecutionPlan::all(cfg) {
                push_plan(&mut out, &plan);
            }
        }
    }

    Ok(out)
}

fn push_plan(out: &mut String, plan: &ExecutionPlan) {
    if !plan.is_routable() {
        warn!(
            location = %plan.location,
            queue = %plan.queue,
            "location has no eligible worker pool"
        );
    }
    out.push_str(&plan.to_string());
}
