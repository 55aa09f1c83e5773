//! Scan command - detect an IBAN in a single image.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use ibandetect_core::{IbanScanner, PureOcrEngine, ScanOutcome};

use super::{OutputFormat, load_config};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Also print the full recognized text
    #[arg(long)]
    raw_text: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let model_dir = args
        .model_dir
        .clone()
        .unwrap_or_else(|| config.models.model_dir.clone());
    let engine = PureOcrEngine::from_models(&model_dir, &config.models, config.ocr.clone())?;

    let image = image::open(&args.input)?;
    let scanner = IbanScanner::with_config(engine, config);
    let outcome = scanner.scan(&image)?;

    let rendered = render_outcome(&outcome, args.format, args.raw_text)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            println!("Result written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    if outcome.iban.is_none() {
        eprintln!("{}", style("No valid IBAN found.").yellow());
        std::process::exit(1);
    }

    Ok(())
}

fn render_outcome(
    outcome: &ScanOutcome,
    format: OutputFormat,
    raw_text: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if let Some(iban) = &outcome.iban {
                lines.push(format!("{} {}", style("IBAN:").green().bold(), iban.formatted));
                if let Some(confidence) = iban.confidence {
                    lines.push(format!("Confidence: {:.2}", confidence));
                }
            }
            if raw_text {
                lines.push(String::new());
                lines.push("Recognized text:".to_string());
                lines.push(outcome.raw_text.clone());
            }
            lines.push(format!("Processed in {}ms", outcome.processing_time_ms));
            Ok(lines.join("\n"))
        }
    }
}
