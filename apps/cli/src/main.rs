use anyhow::Context;
use clap::Parser;
use invp_cli::args::{Cli, Commands};
use invp_cli::handlers::{inspect, predict};
use invp_cli::settings;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cfg = settings::load(&cli).context("Critical: Configuration is malformed")?;
    let _log = settings::init_logger(&cfg.logging, cli.verbose)?;

    let mut out = io::stdout().lock();
    let code = match &cli.command {
        Commands::Countries {} => inspect::countries(&mut out).map(|()| ExitCode::SUCCESS)?,
        Commands::Schema {} => inspect::schema(&mut out).map(|()| ExitCode::SUCCESS)?,
        Commands::Assemble { invoice } => {
            predict::assemble(invoice, &mut out).map(|()| ExitCode::SUCCESS)?
        }
        Commands::Predict { invoice } => predict::predict(&cfg, invoice, &mut out)?,
    };
    out.flush()?;

    Ok(code)
}
