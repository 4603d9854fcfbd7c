mod plan;
mod results;
mod unit;

pub use plan::{ExecutionPlan, TestGroup};
pub use results::{ContextResults, ResultCategory, ResultRecord, RunResults};
pub use unit::{Failure, TestMethod, TestStatus, TestUnit};
