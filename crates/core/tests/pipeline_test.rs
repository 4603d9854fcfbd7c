//! Integration test for the full collect/plan/execute/report pipeline

use suite_runner_core::{
    Config, Failure, LogReporter, ReportLevel, RunController, TestMethod, TestStatus, TestUnit,
    UnitRegistry,
};
use tempfile::TempDir;

struct ApiChecks;

impl TestUnit for ApiChecks {
    fn name(&self) -> &str {
        "itest::tests::ApiChecks"
    }
    fn tests(&self) -> Vec<TestMethod> {
        vec![
            TestMethod::new("create_resource"),
            TestMethod::with_parameters("lookup_resource", ["x", "y"]),
        ]
    }
    fn run_test(&mut self, method: &TestMethod) -> TestStatus {
        match method.name.as_str() {
            "create_resource" => TestStatus::Passed,
            _ => TestStatus::Failed(
                Failure::new("lookup returned the wrong resource").with_cause("id mismatch"),
            ),
        }
    }
}

struct CleanupChecks;

impl TestUnit for CleanupChecks {
    fn name(&self) -> &str {
        "itest::tests::CleanupChecks"
    }
    fn tests(&self) -> Vec<TestMethod> {
        vec![TestMethod::new("remove_resource")]
    }
    fn run_test(&mut self, _method: &TestMethod) -> TestStatus {
        TestStatus::Skipped(Some("nothing was created".to_string()))
    }
}

fn registry() -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    registry.register("itest::tests::CleanupChecks", || Ok(Box::new(CleanupChecks)));
    registry.register("itest::tests::ApiChecks", || Ok(Box::new(ApiChecks)));
    registry
}

#[test]
fn test_full_pipeline_produces_results_and_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        output_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };

    let controller = RunController::new(config, registry());

    // Plan reflects lexical collection order and the self-referential filter
    let plan = controller.build_plan().unwrap();
    assert_eq!(
        plan.unit_names(),
        vec!["itest::tests::ApiChecks", "itest::tests::CleanupChecks"]
    );
    assert_eq!(plan.group.include, plan.group.name);
    assert_eq!(plan.group.pattern, "itest::tests::*");

    // One failing test anywhere means exit code 2
    let code = controller.run().unwrap();
    assert_eq!(code, 2);

    // The engine left its results document under the output directory
    let results_path = temp_dir.path().join("results.json");
    let contents = std::fs::read_to_string(results_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed["contexts"]["itest::tests::ApiChecks"].is_object());
    assert!(parsed["contexts"]["itest::tests::CleanupChecks"].is_object());
}

#[test]
fn test_report_lines_for_a_mixed_run() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        output_dir: temp_dir.path().to_path_buf(),
        ..Config::default()
    };

    let controller = RunController::new(config, registry());
    let plan = controller.build_plan().unwrap();

    let mut engine = suite_runner_core::TestEngine::new();
    engine.set_output_dir(temp_dir.path());
    let results = engine.execute(plan).unwrap();

    let lines = LogReporter::render(&results);
    assert!(lines
        .iter()
        .any(|(l, s)| *l == ReportLevel::Info && s.ends_with("create_resource passed")));
    assert!(lines
        .iter()
        .any(|(l, s)| *l == ReportLevel::Warn && s.ends_with("remove_resource skipped")));
    assert!(lines
        .iter()
        .any(|(l, s)| *l == ReportLevel::Error && s.contains("lookup_resource(x,y) failed")));
    assert!(lines.iter().any(|(l, s)| *l == ReportLevel::Error
        && s == "lookup returned the wrong resource: caused by: id mismatch"));
}
