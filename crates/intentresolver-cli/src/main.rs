//! CLI entry point - the composition root.
//!
//! Ranking blocks on the scorer's completion signal, so everything here runs
//! on the main thread without an async runtime.

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use intentresolver_cli::{Cli, CliError, Commands, Scenario, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let overrides = cli.settings_update();
    let load = |path: &std::path::Path| -> anyhow::Result<_> {
        let scenario = Scenario::load(path)?;
        bootstrap(scenario, &overrides)
            .with_context(|| format!("failed to set up {}", path.display()))
    };

    match command {
        Commands::Candidates { scenario } => {
            let ctx = load(scenario)?;
            handlers::candidates::execute(&ctx, cli.keep_low_priority, cli.json)?;
        }
        Commands::Rank { scenario } => {
            let mut ctx = load(scenario)?;
            handlers::rank::execute(&mut ctx, cli.keep_low_priority, cli.json)?;
        }
        Commands::LastChosen { scenario } => {
            let ctx = load(scenario)?;
            handlers::last_chosen::execute(&ctx, cli.json)?;
        }
        Commands::Remember {
            scenario,
            component,
        } => {
            let mut ctx = load(scenario)?;
            handlers::remember::execute(&mut ctx, scenario, component)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
