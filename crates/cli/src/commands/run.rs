use anyhow::{Context, Result};
use std::path::Path;
use suite_runner_core::{Config, RunController, UnitRegistry};
use tracing::debug;

/// Load configuration, build the controller, and either print the plan
/// (dry run) or execute it. Returns the process exit code.
pub fn run_command(config_path: Option<&str>, dry_run: bool, registry: UnitRegistry) -> Result<i32> {
    let config = match config_path {
        Some(path) => Config::load_from_file(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    debug!("Loaded config: {:?}", config);

    let controller = RunController::new(config, registry);

    if dry_run {
        let plan = controller.build_plan().context("Failed to build plan")?;
        println!("Plan: {}", plan.name);
        println!("Group: {} (include: {})", plan.group.name, plan.group.include);
        println!("Pattern: {}", plan.group.pattern);
        println!("Units ({}):", plan.group.units.len());
        for name in plan.unit_names() {
            println!("  - {name}");
        }
        return Ok(0);
    }

    controller.run().context("Suite execution failed")
}
