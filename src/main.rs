mod config;
mod error;
mod heuristics;
mod pipeline;
mod render;
mod tsv;

use clap::Parser;
use config::{Config, OutputFormat};
use pipeline::Pipeline;
use pipeline::normalize::ExtractionMode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Build a consolidated pick list from a tab-delimited order report.
#[derive(Parser, Debug)]
#[command(name = "pick_list", version)]
struct Cli {
    /// Order report (.txt / .tsv), first row is the header row
    report: PathBuf,

    /// TOML config file; missing means defaults
    #[arg(long, default_value = ".config/pick_list.toml")]
    config: PathBuf,

    /// Group on the raw product name instead of extracted attributes
    #[arg(long)]
    raw: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Heading shown above the table
    #[arg(long)]
    title: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // logs go to stderr, the pick list to stdout
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_line(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Last line printed on a failed run; uses Display, not Debug.
fn failure_line(err: &dyn std::error::Error) -> String {
    format!("error: {err}")
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load(&cli.config)?;

    let mode = if cli.raw {
        ExtractionMode::Raw
    } else {
        cfg.pipeline.mode
    };
    let format = cli.format.unwrap_or(cfg.output.format);
    let title = cli.title.unwrap_or(cfg.output.title);
    let delimiter = cfg.pipeline.delimiter_byte()?;

    let source = cli
        .report
        .file_name()
        .map(|n| n.to_string_lossy().into_owned());
    info!(file = %cli.report.display(), mode = ?mode, "Loading report");

    let bytes = tokio::fs::read(&cli.report).await?;

    let pick_list = match Pipeline::new(mode).with_delimiter(delimiter).run_bytes(&bytes) {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "Pick list not generated");
            return Err(e.into());
        }
    };

    print!("{}", render::render(&pick_list, format, &title, source.as_deref())?);
    Ok(())
}
