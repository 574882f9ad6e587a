//! dview - package.json dependency viewer
//!
//! Shows requested, installed and published versions of the regular,
//! development and peer dependencies of a package.json.

use clap::Parser;
use dview::cli::{CliArgs, OutputType};
use dview::error::OutputError;
use dview::manifest::{write_updates, ManifestDocument};
use dview::orchestrator::Orchestrator;
use dview::output::{create_formatter, render, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize stderr logging; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dview=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    if args.output == OutputType::Table {
        println!("Processing: {}", args.file.display());
    }

    let mut document = ManifestDocument::load(&args.file)?;

    let orchestrator = Orchestrator::new(&args);
    let mut report = orchestrator.run(&document).await?;

    // Persist before filtering so excluded dependencies are still updated
    if args.update {
        let result = write_updates(&mut document, &report)?;
        info!(
            "updated {} ranges in {}",
            result.updates_applied,
            result.path.display()
        );
    }

    args.report_filter().apply(&mut report);

    let config = OutputConfig::new(args.output, args.hide_local)
        .with_color(args.output_file.is_none());
    let formatter = create_formatter(config);

    match &args.output_file {
        Some(path) => {
            let rendered = render(formatter.as_ref(), &report).map_err(OutputError::Render)?;
            std::fs::write(path, rendered).map_err(|source| OutputError::WriteFile {
                path: path.clone(),
                source,
            })?;
            info!("wrote report to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            formatter
                .format(&report, &mut stdout)
                .and_then(|()| stdout.flush())
                .map_err(OutputError::Render)?;
        }
    }

    Ok(())
}
