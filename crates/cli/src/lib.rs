pub mod cli;
pub mod commands;
pub mod units;

// Re-export commonly used items
pub use cli::Cli;
