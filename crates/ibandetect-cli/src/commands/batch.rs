//! Batch command - scan multiple images for IBANs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use ibandetect_core::{IbanScanner, PureOcrEngine, ScanOutcome};

use super::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Exit non-zero when any file yields no IBAN
    #[arg(long)]
    fail_on_empty: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Option<ScanOutcome>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "tiff" | "bmp"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No image files match: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let model_dir = args
        .model_dir
        .clone()
        .unwrap_or_else(|| config.models.model_dir.clone());
    let engine = PureOcrEngine::from_models(&model_dir, &config.models, config.ocr.clone())?;
    let scanner = IbanScanner::with_config(engine, config);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let result = process_file(&scanner, path);

        if let Some(message) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), message);
            } else {
                error!("Failed to process {}: {}", result.path.display(), message);
                pb.abandon();
                anyhow::bail!("Processing failed: {}", message);
            }
        }

        if let (Some(dir), Some(outcome)) = (&args.output_dir, &result.outcome) {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("result");
            let out_path = dir.join(format!("{stem}.json"));
            fs::write(&out_path, serde_json::to_string_pretty(outcome)?)?;
            debug!("wrote {}", out_path.display());
        }

        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");
    print_summary(&results, start.elapsed().as_secs_f64());

    let misses = results
        .iter()
        .filter(|r| matches!(&r.outcome, Some(o) if o.iban.is_none()))
        .count();
    if args.fail_on_empty && misses > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn process_file(scanner: &IbanScanner<PureOcrEngine>, path: PathBuf) -> FileResult {
    let scanned = image::open(&path)
        .map_err(|e| e.to_string())
        .and_then(|image| scanner.scan(&image).map_err(|e| e.to_string()));

    match scanned {
        Ok(outcome) => FileResult {
            path,
            outcome: Some(outcome),
            error: None,
        },
        Err(message) => FileResult {
            path,
            outcome: None,
            error: Some(message),
        },
    }
}

fn print_summary(results: &[FileResult], elapsed_secs: f64) {
    let found: Vec<&FileResult> = results
        .iter()
        .filter(|r| matches!(&r.outcome, Some(o) if o.iban.is_some()))
        .collect();
    let errors = results.iter().filter(|r| r.error.is_some()).count();

    println!();
    println!(
        "{} Processed {} files in {:.1}s: {} with IBAN, {} without, {} failed",
        style("✓").green(),
        results.len(),
        elapsed_secs,
        style(found.len()).green(),
        results.len() - found.len() - errors,
        if errors > 0 {
            style(errors).red()
        } else {
            style(errors).dim()
        },
    );

    for result in found {
        if let Some(iban) = result.outcome.as_ref().and_then(|o| o.iban.as_ref()) {
            println!("  {}: {}", result.path.display(), iban.formatted);
        }
    }
}
