//! Batch command for multiple statement text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use stmt_core::{ExtractionResult, StatementExtractor, aggregate};

use super::extract::{OutputFormat, format_transactions};
use super::{load_config, read_statement};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching statement text files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    extraction: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let extractor = StatementExtractor::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = read_statement(&path).map(|text| extractor.extract_detailed(&text));
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(extraction) => {
                if extraction.is_empty() {
                    warn!("No statement layout recognized in {}", path.display());
                }
                results.push(FileResult {
                    path,
                    extraction: Some(extraction),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        extraction: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    progress.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.extraction.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(extraction) = &result.extraction {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("statement");
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_transactions(extraction, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "recognizer",
        "transactions",
        "total_income",
        "total_expenses",
        "net_change",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(extraction) = &result.extraction {
            let totals = aggregate(&extraction.transactions);
            let recognizer = extraction
                .recognizer
                .map(|id| id.to_string())
                .unwrap_or_default();

            wtr.write_record([
                filename,
                "success",
                &recognizer,
                &extraction.transactions.len().to_string(),
                &format!("{:.2}", totals.total_income),
                &format!("{:.2}", totals.total_expenses),
                &format!("{:.2}", totals.net_change),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
