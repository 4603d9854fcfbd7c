use super::unit::Failure;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome category for one executed test or configuration method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultCategory {
    PassedConfig,
    PassedTest,
    SkippedTest,
    FailedConfig,
    FailedTest,
}

/// One outcome per executed test or configuration method. Immutable
/// once produced by the engine; the reporter only reads and formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// The test context (unit) this record belongs to.
    pub context: String,
    /// Method name within the context.
    pub method: String,
    pub category: ResultCategory,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,
}

impl ResultRecord {
    /// Fully-qualified method identity used in report lines.
    pub fn label(&self) -> String {
        format!("{}::{}", self.context, self.method)
    }
}

/// The five result categories for one test context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContextResults {
    pub passed_configs: Vec<ResultRecord>,
    pub passed_tests: Vec<ResultRecord>,
    pub skipped_tests: Vec<ResultRecord>,
    pub failed_configs: Vec<ResultRecord>,
    pub failed_tests: Vec<ResultRecord>,
}

impl ContextResults {
    pub fn push(&mut self, record: ResultRecord) {
        match record.category {
            ResultCategory::PassedConfig => self.passed_configs.push(record),
            ResultCategory::PassedTest => self.passed_tests.push(record),
            ResultCategory::SkippedTest => self.skipped_tests.push(record),
            ResultCategory::FailedConfig => self.failed_configs.push(record),
            ResultCategory::FailedTest => self.failed_tests.push(record),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_configs.is_empty() || !self.failed_tests.is_empty()
    }
}

/// The complete result model for one executed plan, keyed by
/// test-context name. Produced by the engine, read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResults {
    pub plan: String,
    pub contexts: BTreeMap<String, ContextResults>,
}

impl RunResults {
    pub fn new(plan: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            contexts: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, record: ResultRecord) {
        self.contexts
            .entry(record.context.clone())
            .or_default()
            .push(record);
    }

    /// True iff any failed-test or failed-configuration record exists.
    /// Skipped tests do not affect the verdict.
    pub fn has_failures(&self) -> bool {
        self.contexts.values().any(ContextResults::has_failures)
    }
}
