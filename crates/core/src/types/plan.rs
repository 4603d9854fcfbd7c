use super::unit::TestUnit;
use std::fmt;

/// The single named group inside an execution plan.
pub struct TestGroup {
    pub name: String,
    /// Inclusion filter. Always set to the group's own name so the
    /// engine runs every member without exclusion.
    pub include: String,
    /// Wildcard pattern describing the namespace the units were
    /// collected under, e.g. `itest::tests::*`.
    pub pattern: String,
    /// Units in collection order (lexical by fully-qualified name).
    pub units: Vec<Box<dyn TestUnit>>,
}

/// A named execution plan: one plan, one group, built once per run and
/// consumed exactly once by the engine.
pub struct ExecutionPlan {
    pub name: String,
    pub group: TestGroup,
}

impl ExecutionPlan {
    pub fn unit_names(&self) -> Vec<&str> {
        self.group.units.iter().map(|u| u.name()).collect()
    }
}

impl fmt::Debug for TestGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestGroup")
            .field("name", &self.name)
            .field("include", &self.include)
            .field("pattern", &self.pattern)
            .field("units", &self.units.iter().map(|u| u.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Debug for ExecutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionPlan")
            .field("name", &self.name)
            .field("group", &self.group)
            .finish()
    }
}
