//! Test-execution engine: consumes one execution plan and produces
//! the raw result model.
//!
//! One blocking, strictly sequential run. Test and configuration
//! failures are recorded, never propagated; only harness-level faults
//! (I/O while writing engine output) surface as errors.

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::error::Result;
use crate::types::{
    ExecutionPlan, Failure, ResultCategory, ResultRecord, RunResults, TestStatus, TestUnit,
};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// File name of the results document written under the output
/// directory.
pub const RESULTS_FILE_NAME: &str = "results.json";

/// Observer notified synchronously when a run completes, before
/// `execute` returns.
pub trait RunObserver {
    fn on_run_complete(&self, results: &RunResults);
}

pub struct TestEngine {
    output_dir: PathBuf,
    observers: Vec<Box<dyn RunObserver>>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            observers: Vec::new(),
        }
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = dir.into();
    }

    pub fn add_observer(&mut self, observer: Box<dyn RunObserver>) {
        self.observers.push(observer);
    }

    /// Execute the plan and return the complete result model.
    ///
    /// Consumes the plan: it is built once per run and run once. The
    /// results document is written under the output directory and all
    /// observers are notified before this returns.
    pub fn execute(&self, plan: ExecutionPlan) -> Result<RunResults> {
        debug!(
            "Executing plan '{}', group '{}' (include: {})",
            plan.name, plan.group.name, plan.group.include
        );
        let mut results = RunResults::new(&plan.name);
        for mut unit in plan.group.units {
            run_unit(unit.as_mut(), &mut results);
        }

        self.write_results_document(&results)?;

        for observer in &self.observers {
            observer.on_run_complete(&results);
        }
        Ok(results)
    }

    fn write_results_document(&self, results: &RunResults) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(RESULTS_FILE_NAME);
        fs::write(&path, serde_json::to_string_pretty(results)?)?;
        debug!("Wrote results document to {}", path.display());
        Ok(())
    }
}

impl Default for TestEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn run_unit(unit: &mut dyn TestUnit, results: &mut RunResults) {
    let context = unit.name().to_string();
    let declared = unit.tests();
    debug!("Running unit {} ({} test(s))", context, declared.len());

    match unit.setup() {
        Ok(()) => {
            results.record(config_record(&context, "setup", None));
            for method in &declared {
                let record = match unit.run_test(method) {
                    TestStatus::Passed => ResultRecord {
                        context: context.clone(),
                        method: method.name.clone(),
                        category: ResultCategory::PassedTest,
                        parameters: method.parameters.clone(),
                        failure: None,
                    },
                    TestStatus::Failed(failure) => ResultRecord {
                        context: context.clone(),
                        method: method.name.clone(),
                        category: ResultCategory::FailedTest,
                        parameters: method.parameters.clone(),
                        failure: Some(failure),
                    },
                    TestStatus::Skipped(_reason) => ResultRecord {
                        context: context.clone(),
                        method: method.name.clone(),
                        category: ResultCategory::SkippedTest,
                        parameters: method.parameters.clone(),
                        failure: None,
                    },
                };
                results.record(record);
            }
            // Teardown only runs for units whose setup succeeded.
            results.record(config_record(&context, "teardown", unit.teardown().err()));
        }
        Err(failure) => {
            // A broken fixture skips every test in the unit.
            results.record(config_record(&context, "setup", Some(failure)));
            for method in &declared {
                results.record(ResultRecord {
                    context: context.clone(),
                    method: method.name.clone(),
                    category: ResultCategory::SkippedTest,
                    parameters: method.parameters.clone(),
                    failure: None,
                });
            }
        }
    }
}

fn config_record(context: &str, method: &str, failure: Option<Failure>) -> ResultRecord {
    ResultRecord {
        context: context.to_string(),
        method: method.to_string(),
        category: if failure.is_some() {
            ResultCategory::FailedConfig
        } else {
            ResultCategory::PassedConfig
        },
        parameters: Vec::new(),
        failure,
    }
}
