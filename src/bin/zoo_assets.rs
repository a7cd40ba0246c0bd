//! zoo-assets: generate the full Zoo logo asset set.
//!
//! Usage:
//!   zoo-assets [--out-dir DIR] [--config FILE] [--showcase]
//!
//! Writes the SVG sources plus every raster ladder under the output
//! directory. Individual failures are reported and do not stop the batch;
//! the process exits non-zero if any emission failed.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use zoo_logo::{standard_requests, write_page, write_svg_sources, Error, LogoConfig};

#[derive(Parser)]
#[command(name = "zoo-assets")]
#[command(about = "Generate the Zoo logo asset set")]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = "dist")]
    out_dir: PathBuf,

    /// JSON file overriding the built-in logo geometry
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write an HTML preview page referencing the generated assets
    #[arg(long)]
    showcase: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generate(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> zoo_logo::Result<LogoConfig> {
    match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            let config = LogoConfig::from_json(&json)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
            config.validate()?;
            Ok(config)
        }
        None => Ok(LogoConfig::default()),
    }
}

/// Returns `Ok(false)` when the batch finished but some emissions failed.
fn generate(cli: &Cli, config: &LogoConfig) -> zoo_logo::Result<bool> {
    let mut files = write_svg_sources(config, &cli.out_dir)?;

    let requests = standard_requests(config, &cli.out_dir)?;
    let report = zoo_logo::run(&requests);
    files.extend(report.written.iter().cloned());

    if cli.showcase {
        let page = write_page(&cli.out_dir, &files)?;
        println!("Preview page: {}", page.display());
    }

    for failure in &report.failures {
        eprintln!(
            "failed: {} ({} px): {}",
            failure.target.display(),
            failure.pixel_size,
            failure.error
        );
    }
    println!(
        "{} files written, {} failures",
        files.len(),
        report.failures.len()
    );

    Ok(report.is_success())
}
