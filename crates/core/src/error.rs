use std::io;

/// Errors that can occur during harness orchestration.
///
/// Failures inside individual test or configuration methods are never
/// represented here; the engine records those as result records and
/// the run continues.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered unit could not be instantiated, or its reported
    /// identity does not match its registration. Fatal: aborts the run
    /// before anything executes.
    #[error("Discovery error: {0}")]
    Discovery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;
