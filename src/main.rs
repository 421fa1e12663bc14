use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod dates;
mod error;
mod lookup;
mod models;
mod report;
mod rounding;
mod toggl;
mod transform;

use cli::Cli;
use config::Config;
use error::AppError;
use lookup::CachedResolver;
use report::write_report_file;
use toggl::TogglClient;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", cli::version_string());
        return ExitCode::SUCCESS;
    }
    init_tracing();

    match run(cli) {
        Ok(()) => {
            println!("Done!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", error_chain(&err));
            err.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    config::load_env_file()?;
    let config = Config::resolve(cli, dates::today(), |key| std::env::var(key).ok())?;

    let client = TogglClient::new(&config.credentials, config.request_delay)?;
    let (start, end) = config.range.as_query();
    info!("Fetching time entries between {}...", config.range.label());
    let entries = client.fetch_time_entries(&start, &end)?;
    info!(count = entries.len(), "fetched time entries");

    info!("Writing to file {}...", config.output.display());
    let summary = if config.cache_lookups {
        let mut resolver = CachedResolver::new(client);
        write_report_file(&config.output, &entries, &mut resolver, &config.rounding)?
    } else {
        let mut resolver = client;
        write_report_file(&config.output, &entries, &mut resolver, &config.rounding)?
    };
    info!(
        written = summary.written,
        skipped = summary.skipped,
        "report complete"
    );

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
