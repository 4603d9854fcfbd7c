use anyhow::Result;
use clap::Parser;
use suite_runner::cli::Cli;
use suite_runner::commands::run_command;
use suite_runner::units;
use suite_runner_core::UnitRegistry;

fn main() -> Result<()> {
    // Report lines are the primary interface; default to info so they
    // are visible without RUST_LOG set.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut registry = UnitRegistry::new();
    units::register_builtin(&mut registry);

    let code = run_command(cli.config.as_deref(), cli.dry_run, registry)?;
    std::process::exit(code);
}
