use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::{handle_runtime_commands, Shell};
use domain::constants::DEFAULT_LOG_FILTER;
use domain::errors::LibraryError;
use services::catalog::Catalog;
use services::output::print_err_json;
use services::storage;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => Ok(()),
        Err(e) if cli.json => {
            let code = e
                .downcast_ref::<LibraryError>()
                .map(LibraryError::code)
                .unwrap_or("INTERNAL");
            print_err_json(code, &e.to_string());
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut catalog = Catalog::from(storage::load(&cli.file)?);
    tracing::debug!(books = catalog.len(), file = %cli.file.display(), "catalog ready");

    match &cli.command {
        Some(command) => handle_runtime_commands(cli, command, &mut catalog),
        None => {
            let stdin = std::io::stdin();
            let mut shell = Shell::new(&mut catalog, &cli.file, stdin.lock(), std::io::stdout());
            shell.run()?;
            Ok(())
        }
    }
}
