#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! ghlicense — list open-source licenses and render LICENSE files.

mod cli;
mod commands;
mod config;
mod license;
mod logging;

use std::io::Write;

use clap::Parser;
use clap::error::ErrorKind;

use cli::output::ERROR_PREFIX;
use cli::{Cli, write_error};
use config::{Config, SystemClock};
use license::{HttpLicenseSource, LicenseError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => fail(&LicenseError::Usage(usage_message(&err))),
    };

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("{ERROR_PREFIX}{err:#}");
        std::process::exit(1);
    }

    if let Err(err) = run(&cli) {
        fail(&err);
    }
}

fn run(cli: &Cli) -> Result<(), LicenseError> {
    let config = Config::from_cli(cli, &SystemClock)?;
    let source = HttpLicenseSource::new(&config.api_uri, config.timeout)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&config, &source, &mut out)?;
    out.flush()?;
    Ok(())
}

fn fail(err: &LicenseError) -> ! {
    write_error(&mut std::io::stderr().lock(), err);
    std::process::exit(err.exit_code());
}

/// First line of a clap error without its `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}
