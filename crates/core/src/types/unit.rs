use serde::{Deserialize, Serialize};
use std::fmt;

/// A failure raised by a test or configuration method: a message plus
/// the chain of underlying causes, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// The failure message followed by its full cause chain.
    pub fn render(&self) -> String {
        let mut rendered = self.message.clone();
        for cause in &self.causes {
            rendered.push_str(": caused by: ");
            rendered.push_str(cause);
        }
        rendered
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A single test method declared by a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMethod {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl TestMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameters(
        name: impl Into<String>,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Status of one executed test method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed(Failure),
    /// Intentionally not executed, e.g. an unmet precondition.
    Skipped(Option<String>),
}

/// One self-contained integration-test class.
///
/// Identity is the fully-qualified name under the configured
/// namespace, e.g. `itest::tests::RegistrySelfCheck`. Units must be
/// constructible with no arguments; each unit registers a constructor
/// in a [`crate::registry::UnitRegistry`].
pub trait TestUnit {
    /// Fully-qualified unit name.
    fn name(&self) -> &str;

    /// Configuration method run before the unit's tests.
    fn setup(&mut self) -> std::result::Result<(), Failure> {
        Ok(())
    }

    /// Configuration method run after the unit's tests.
    fn teardown(&mut self) -> std::result::Result<(), Failure> {
        Ok(())
    }

    /// The test methods this unit declares, in execution order.
    fn tests(&self) -> Vec<TestMethod>;

    /// Execute one declared test method.
    fn run_test(&mut self, method: &TestMethod) -> TestStatus;
}
