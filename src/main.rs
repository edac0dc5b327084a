mod cli;
mod config;
mod deploy;
mod error;
mod output;
mod params;
mod runner;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::PipelineConfig;
use deploy::Outcome;
use error::DeployError;
use runner::ShellRunner;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors share the exit status of every other failure.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .without_time()
        .init();

    if let Err(err) = execute(&cli) {
        err.report();
        std::process::exit(err.exit_code());
    }
}

fn execute(cli: &Cli) -> Result<Outcome, DeployError> {
    cli::deploy::run(
        cli,
        &ShellRunner,
        PipelineConfig::default(),
        std::env::current_dir,
    )
}
