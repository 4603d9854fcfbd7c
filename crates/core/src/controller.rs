//! End-to-end run lifecycle: collect, plan, execute, report, and the
//! terminal exit-code decision.

use crate::config::Config;
use crate::engine::TestEngine;
use crate::error::Result;
use crate::registry::UnitRegistry;
use crate::reporter::LogReporter;
use crate::suite::SuiteBuilder;
use crate::types::ExecutionPlan;
use tracing::{error, info};

/// Exit status when one or more tests or configurations failed.
/// Distinct from generic failure codes so callers can tell "tests ran
/// and failed" from "harness crashed".
pub const FAILURE_EXIT_CODE: i32 = 2;

pub struct RunController {
    config: Config,
    registry: UnitRegistry,
}

impl RunController {
    pub fn new(config: Config, registry: UnitRegistry) -> Self {
        Self { config, registry }
    }

    /// Collect units and assemble the plan without executing it.
    pub fn build_plan(&self) -> Result<ExecutionPlan> {
        let units = self.registry.collect(&self.config.namespace)?;
        let builder = SuiteBuilder::new(
            &self.config.suite_name,
            &self.config.group_name,
            &self.config.namespace,
        );
        Ok(builder.build(units))
    }

    /// Run the suite once and return the process exit code: 0 when
    /// everything passed, [`FAILURE_EXIT_CODE`] when any test or
    /// configuration failed. Harness-level faults propagate as errors
    /// instead; no retries.
    pub fn run(&self) -> Result<i32> {
        let plan = self.build_plan()?;
        info!(
            "Executing plan '{}' with {} unit(s)",
            plan.name,
            plan.group.units.len()
        );

        let mut engine = TestEngine::new();
        engine.set_output_dir(&self.config.output_dir);
        engine.add_observer(Box::new(LogReporter::new()));

        let results = engine.execute(plan)?;

        if results.has_failures() {
            error!("Test(s) have failed, see output above");
            Ok(FAILURE_EXIT_CODE)
        } else {
            Ok(0)
        }
    }
}
