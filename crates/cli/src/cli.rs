use clap::Parser;

/// Run the integration-test suite once.
///
/// Exits 0 when every test and configuration passed, 2 when anything
/// failed. No other arguments are consumed by the run itself.
#[derive(Parser)]
#[command(name = "suite-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Explicit config file (defaults to discovering .suite-runner.json
    /// from the current directory)
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Print the execution plan without running it
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,
}
