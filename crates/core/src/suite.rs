//! Assembles collected units into the single execution plan the
//! engine consumes.

use crate::types::{ExecutionPlan, TestGroup, TestUnit};

/// Builds exactly one plan containing exactly one named group.
///
/// The group's inclusion filter is set to the group's own name, so the
/// engine runs every member without exclusion.
#[derive(Debug, Clone)]
pub struct SuiteBuilder {
    plan_name: String,
    group_name: String,
    namespace: String,
}

impl SuiteBuilder {
    pub fn new(
        plan_name: impl Into<String>,
        group_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            plan_name: plan_name.into(),
            group_name: group_name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn build(&self, units: Vec<Box<dyn TestUnit>>) -> ExecutionPlan {
        ExecutionPlan {
            name: self.plan_name.clone(),
            group: TestGroup {
                name: self.group_name.clone(),
                include: self.group_name.clone(),
                pattern: format!("{}::*", self.namespace),
                units,
            },
        }
    }
}
