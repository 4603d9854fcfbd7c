//! Categorized, leveled reporting of a completed run.
//!
//! Line construction is pure so it can be tested directly; emission
//! through `tracing` is a thin pass over the rendered lines.

use crate::engine::RunObserver;
use crate::types::{ContextResults, ResultRecord, RunResults};
use tracing::{error, info, warn};

/// Log level for one rendered report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warn,
    Error,
}

/// Emits one leveled log line per result record, successes first and
/// failures last. Never fails and never mutates the results it reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl LogReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report lines for a completed run without emitting
    /// them. Identical input yields identical lines.
    ///
    /// Category order is fixed: passed configurations, passed tests,
    /// skipped tests, failed configurations, failed tests.
    pub fn render(results: &RunResults) -> Vec<(ReportLevel, String)> {
        let mut lines = Vec::new();
        for (context, ctx) in &results.contexts {
            lines.push((ReportLevel::Info, format!("Results for {context}")));
            render_context(ctx, &mut lines);
        }
        lines
    }
}

fn render_context(ctx: &ContextResults, lines: &mut Vec<(ReportLevel, String)>) {
    for record in &ctx.passed_configs {
        lines.push((ReportLevel::Info, format!("{} successful", record.label())));
    }
    for record in &ctx.passed_tests {
        lines.push((ReportLevel::Info, format!("{} passed", record.label())));
    }
    for record in &ctx.skipped_tests {
        lines.push((ReportLevel::Warn, format!("{} skipped", record.label())));
    }
    for record in &ctx.failed_configs {
        lines.push((
            ReportLevel::Error,
            format!("{} configuration failed", record.label()),
        ));
        render_failure(record, lines);
    }
    for record in &ctx.failed_tests {
        if record.parameters.is_empty() {
            lines.push((ReportLevel::Error, format!("{} failed", record.label())));
        } else {
            lines.push((
                ReportLevel::Error,
                format!("{}({}) failed", record.label(), record.parameters.join(",")),
            ));
        }
        render_failure(record, lines);
    }
}

fn render_failure(record: &ResultRecord, lines: &mut Vec<(ReportLevel, String)>) {
    if let Some(failure) = &record.failure {
        lines.push((ReportLevel::Error, failure.render()));
    }
}

impl RunObserver for LogReporter {
    fn on_run_complete(&self, results: &RunResults) {
        for (level, line) in Self::render(results) {
            match level {
                ReportLevel::Info => info!("{line}"),
                ReportLevel::Warn => warn!("{line}"),
                ReportLevel::Error => error!("{line}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Failure, ResultCategory, ResultRecord};

    fn record(
        method: &str,
        category: ResultCategory,
        parameters: Vec<String>,
        failure: Option<Failure>,
    ) -> ResultRecord {
        ResultRecord {
            context: "itest::tests::Unit".to_string(),
            method: method.to_string(),
            category,
            parameters,
            failure,
        }
    }

    fn sample_results() -> RunResults {
        let mut results = RunResults::new("plan");
        for name in ["first", "second", "third"] {
            results.record(record(name, ResultCategory::PassedTest, Vec::new(), None));
        }
        results.record(record(
            "flaky",
            ResultCategory::SkippedTest,
            Vec::new(),
            None,
        ));
        results.record(record(
            "plain_failure",
            ResultCategory::FailedTest,
            Vec::new(),
            Some(Failure::new("expected 200, got 500")),
        ));
        results.record(record(
            "parameterized",
            ResultCategory::FailedTest,
            vec!["x".to_string(), "y".to_string()],
            Some(Failure::new("bad input").with_cause("parse error")),
        ));
        results
    }

    #[test]
    fn test_render_category_counts() {
        let lines = LogReporter::render(&sample_results());

        let infos: Vec<_> = lines
            .iter()
            .filter(|(l, _)| *l == ReportLevel::Info)
            .collect();
        let warns: Vec<_> = lines
            .iter()
            .filter(|(l, _)| *l == ReportLevel::Warn)
            .collect();
        let errors: Vec<_> = lines
            .iter()
            .filter(|(l, _)| *l == ReportLevel::Error)
            .collect();

        // One context header plus three passed tests
        assert_eq!(infos.len(), 4);
        assert_eq!(warns.len(), 1);
        // One line naming each failed test plus one cause line each
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_parameterized_failure_includes_parameters() {
        let lines = LogReporter::render(&sample_results());
        assert!(lines.iter().any(|(_, line)| line
            .contains("itest::tests::Unit::parameterized(x,y) failed")));
    }

    #[test]
    fn test_failure_cause_lines_follow_naming_lines() {
        let lines = LogReporter::render(&sample_results());
        let naming = lines
            .iter()
            .position(|(_, l)| l.contains("plain_failure"))
            .unwrap();
        assert_eq!(lines[naming + 1].1, "expected 200, got 500");
    }

    #[test]
    fn test_successes_render_before_failures() {
        let lines = LogReporter::render(&sample_results());
        let last_info = lines
            .iter()
            .rposition(|(l, _)| *l == ReportLevel::Info)
            .unwrap();
        let first_error = lines
            .iter()
            .position(|(l, _)| *l == ReportLevel::Error)
            .unwrap();
        assert!(last_info < first_error);
    }

    #[test]
    fn test_render_is_idempotent() {
        let results = sample_results();
        assert_eq!(LogReporter::render(&results), LogReporter::render(&results));
    }

    #[test]
    fn test_empty_results_render_nothing() {
        let results = RunResults::new("plan");
        assert!(LogReporter::render(&results).is_empty());
    }
}
