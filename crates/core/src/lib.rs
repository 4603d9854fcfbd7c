//! suite-runner - an integration-test orchestration harness
//!
//! This crate provides functionality to:
//! - Collect registered test units from a configured namespace
//! - Assemble them into a single named execution plan
//! - Execute the plan through the test engine, report categorized
//!   outcomes, and decide the process exit status
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod registry;
pub mod reporter;
pub mod suite;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Config;
pub use controller::{FAILURE_EXIT_CODE, RunController};
pub use engine::{RunObserver, TestEngine};
pub use registry::{UnitCtor, UnitRegistry};
pub use reporter::{LogReporter, ReportLevel};
pub use suite::SuiteBuilder;
