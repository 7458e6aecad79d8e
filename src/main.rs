use clap::error::ErrorKind;
use clap::Parser;
use match_visualizer::logging::{init_logging, LoggingConfig};
use match_visualizer::visualization::{save_overlay, show_overlay};
use match_visualizer::{Config, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showmatches")]
#[command(about = "Overlay 2-way or 3-way feature matches on equirectangular images")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file naming the image directory, model directory and match file
    config_file: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Logging configuration (TOML or JSON)
    #[arg(long)]
    log_config: Option<PathBuf>,

    /// Write the computed statistics as JSON
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Directory to save the annotated images and the composite
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open any window
    #[arg(long)]
    no_display: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) =>
        {
            e.exit()
        }
        Err(e) => {
            // nothing left to report if stderr is gone
            e.print().ok();
            std::process::exit(1);
        }
    };

    let logging_config = match &cli.log_config {
        Some(path) => LoggingConfig::load_from_file(path)?,
        None => LoggingConfig::default(),
    }
    .with_verbosity(cli.verbose);
    let _log_guard = init_logging(&logging_config)?;

    handle_show(cli)
}

fn handle_show(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_from_file(&cli.config_file)?;
    tracing::info!(config = ?config, "Configuration loaded");

    let session = Session::load(config)?;
    session.report.print_summary();

    if let Some(report_path) = &cli.report {
        session.report.save_json(report_path)?;
    }

    let overlay = session.render()?;

    if let Some(output_dir) = &cli.output {
        save_overlay(&overlay, output_dir)?;
    }

    if !cli.no_display {
        show_overlay(&overlay)?;
    }

    Ok(())
}
