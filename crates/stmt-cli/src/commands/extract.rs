//! Extract command - pull transactions out of a single statement text file.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use stmt_core::{ExtractionResult, StatementExtractor, Transaction};

use super::{load_config, read_statement, write_output};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Statement text file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of transactions
    Json,
    /// One CSV row per transaction
    Csv,
    /// Aligned plain text table
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_statement(&args.input)?;

    info!("Extracting transactions from {}", args.input.display());

    let result = StatementExtractor::from_config(&config.extraction).extract_detailed(&text);
    if result.is_empty() {
        eprintln!(
            "{} No statement layout recognized in {}",
            style("⚠").yellow(),
            args.input.display()
        );
    }

    let output = format_transactions(&result, args.format)?;
    write_output(args.output.as_ref(), &output)?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_transactions(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&result.transactions)?),
        OutputFormat::Csv => format_csv(&result.transactions),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(transactions: &[Transaction]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    if transactions.is_empty() {
        wtr.write_record(["date", "description", "amount", "balance", "type", "category"])?;
    }
    for txn in transactions {
        wtr.serialize(txn)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    match result.recognizer {
        Some(id) => output.push_str(&format!("Layout: {}\n\n", id)),
        None => output.push_str("Layout: none recognized\n\n"),
    }

    for txn in &result.transactions {
        output.push_str(&format!(
            "{:<12} {:<40} {:>12.2} {:<6}",
            txn.date, txn.description, txn.amount, txn.kind
        ));
        if txn.balance != 0.0 {
            output.push_str(&format!(" {:>12.2}", txn.balance));
        }
        output.push('\n');
    }

    output.push_str(&format!("\n{} transactions\n", result.transactions.len()));
    output
}
