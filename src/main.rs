//! `license-detectr` command line front end.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Read text from stdin, a single file, or scan a directory.
//! 3. For directories, load config ([`license_detectr::config::load_config`])
//!    and build the file-name pattern set.
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` (identified), `1` (no license file or unrecognized text), or
//!    `2` (I/O or configuration failure).

mod cli;
mod report;

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use license_detectr::config::load_config;
use license_detectr::{scan_directory, scan_directory_first, License, LicenseError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            match e.downcast_ref::<LicenseError>() {
                Some(LicenseError::UnrecognizedLicense | LicenseError::NoLicenseFileFound) => {
                    ExitCode::from(1)
                }
                _ => ExitCode::from(2),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let (target, licenses) = if cli.stdin {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        (Path::new("<stdin>"), vec![License::from_text(text)?])
    } else if cli.path.is_dir() {
        (cli.path.as_path(), detect_in_dir(cli)?)
    } else {
        (cli.path.as_path(), vec![License::from_file(&cli.path)?])
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&licenses, target, cli.verbose, cli.quiet),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&licenses)?),
    }

    Ok(())
}

fn detect_in_dir(cli: &Cli) -> Result<Vec<License>> {
    let config = load_config(&cli.path, cli.config.as_deref())?;
    let mut patterns = config.file_patterns()?;
    patterns.extend(&cli.patterns)?;

    let licenses = if cli.all {
        scan_directory(&cli.path, &patterns)?
    } else {
        vec![scan_directory_first(&cli.path, &patterns)?]
    };
    Ok(licenses)
}
