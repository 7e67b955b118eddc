#![doc = include_str!("../README.md")]

mod config;
mod output;
mod telemetry;

use clap::Parser;
use config::{CliArgs, Config};
use output::{Report, write_reports};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry(&config.log)?;
    tracing::debug!(?config, "starting");

    let reports: Vec<Report> = config
        .inputs
        .iter()
        .map(|input| Report::new(input, config.from, &config.targets))
        .collect();

    let mut stdout = std::io::stdout().lock();
    write_reports(&mut stdout, &reports, config.output)?;

    let failures = reports.iter().filter(|report| report.is_err()).count();
    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs failed to decode", reports.len());
    }
    Ok(())
}
