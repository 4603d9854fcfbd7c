//! Built-in self-check units registered under the default namespace.
//!
//! The business integration tests live in downstream projects and
//! register themselves the same way; these units keep the shipped
//! binary exercising the whole collect/execute/report pipeline.

use suite_runner_core::{Config, Failure, TestMethod, TestStatus, TestUnit, UnitRegistry};

/// Environment variable for deliberately failing or skipping the
/// fault-injection unit, used to verify the harness's failure paths
/// end to end.
pub const FAULT_ENV_VAR: &str = "SUITE_RUNNER_FAULT";

/// Checks that the harness configuration survives a serialization
/// round trip, so config files written by operators parse back into
/// the same run.
#[derive(Debug, Default)]
pub struct ConfigRoundTrip;

impl TestUnit for ConfigRoundTrip {
    fn name(&self) -> &str {
        "itest::tests::ConfigRoundTrip"
    }

    fn tests(&self) -> Vec<TestMethod> {
        vec![
            TestMethod::new("default_config_round_trips"),
            TestMethod::new("partial_config_keeps_defaults"),
        ]
    }

    fn run_test(&mut self, method: &TestMethod) -> TestStatus {
        match method.name.as_str() {
            "default_config_round_trips" => {
                let config = Config::default();
                let json = match serde_json::to_string(&config) {
                    Ok(json) => json,
                    Err(e) => return TestStatus::Failed(Failure::new(e.to_string())),
                };
                match serde_json::from_str::<Config>(&json) {
                    Ok(parsed) if parsed == config => TestStatus::Passed,
                    Ok(_) => TestStatus::Failed(Failure::new(
                        "config changed across serialization round trip",
                    )),
                    Err(e) => TestStatus::Failed(
                        Failure::new("config failed to parse back").with_cause(e.to_string()),
                    ),
                }
            }
            "partial_config_keeps_defaults" => {
                match serde_json::from_str::<Config>(r#"{"group_name": "smoke"}"#) {
                    Ok(parsed)
                        if parsed.group_name == "smoke"
                            && parsed.namespace == Config::default().namespace =>
                    {
                        TestStatus::Passed
                    }
                    Ok(_) => TestStatus::Failed(Failure::new(
                        "partial config did not keep defaulted fields",
                    )),
                    Err(e) => TestStatus::Failed(Failure::new(e.to_string())),
                }
            }
            other => TestStatus::Failed(Failure::new(format!("unknown test method {other}"))),
        }
    }
}

/// Fault-injection hooks for exercising the harness's own failure
/// reporting: set SUITE_RUNNER_FAULT=fail to fail the test method, or
/// SUITE_RUNNER_FAULT=config to fail the unit's setup. With the
/// variable unset the test is skipped.
#[derive(Debug, Default)]
pub struct FaultInjection {
    fault: Option<String>,
}

impl FaultInjection {
    /// Reads the injected fault from SUITE_RUNNER_FAULT once, at
    /// construction.
    pub fn from_env() -> Self {
        Self {
            fault: std::env::var(FAULT_ENV_VAR).ok(),
        }
    }

    /// Constructs the unit with an explicit fault, independent of the
    /// environment.
    pub fn with_fault(fault: Option<&str>) -> Self {
        Self {
            fault: fault.map(str::to_string),
        }
    }
}

impl TestUnit for FaultInjection {
    fn name(&self) -> &str {
        "itest::tests::FaultInjection"
    }

    fn setup(&mut self) -> Result<(), Failure> {
        if self.fault.as_deref() == Some("config") {
            return Err(Failure::new("injected configuration fault")
                .with_cause(format!("{FAULT_ENV_VAR}=config")));
        }
        Ok(())
    }

    fn tests(&self) -> Vec<TestMethod> {
        vec![TestMethod::with_parameters(
            "injected_fault",
            [FAULT_ENV_VAR],
        )]
    }

    fn run_test(&mut self, _method: &TestMethod) -> TestStatus {
        match self.fault.as_deref() {
            Some("fail") => TestStatus::Failed(
                Failure::new("injected test fault").with_cause(format!("{FAULT_ENV_VAR}=fail")),
            ),
            _ => TestStatus::Skipped(Some("fault injection disabled".to_string())),
        }
    }
}

/// Register every built-in unit.
pub fn register_builtin(registry: &mut UnitRegistry) {
    registry.register("itest::tests::ConfigRoundTrip", || {
        Ok(Box::new(ConfigRoundTrip))
    });
    registry.register("itest::tests::FaultInjection", || {
        Ok(Box::new(FaultInjection::from_env()))
    });
}
