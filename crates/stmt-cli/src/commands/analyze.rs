//! Analyze command - extract, categorize and summarize a statement.

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use stmt_core::{
    AnalysisResult, Analyzer, RecognizerId, StatementExtractor, Transaction, categorize_all,
};

use super::{load_config, read_statement, write_output};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Statement text file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ReportFormat,

    /// Number of top merchants to report (default: from config)
    #[arg(long)]
    top: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ReportFormat {
    /// Transactions and analysis as one JSON document
    Json,
    /// Human-readable summary
    Text,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    recognizer: Option<RecognizerId>,
    transactions: &'a [Transaction],
    analysis: &'a AnalysisResult,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(top) = args.top {
        config.analysis.top_merchants = top;
    }
    let text = read_statement(&args.input)?;

    info!("Analyzing {}", args.input.display());

    let extraction = StatementExtractor::from_config(&config.extraction).extract_detailed(&text);
    if extraction.is_empty() {
        eprintln!(
            "{} No statement layout recognized in {}",
            style("⚠").yellow(),
            args.input.display()
        );
    }

    let transactions = if config.analysis.categorize {
        categorize_all(&extraction.transactions)
    } else {
        extraction.transactions
    };

    let analysis = Analyzer::with_config(config.analysis).analyze(&transactions);

    let output = match args.format {
        ReportFormat::Json => serde_json::to_string_pretty(&Report {
            recognizer: extraction.recognizer,
            transactions: &transactions,
            analysis: &analysis,
        })?,
        ReportFormat::Text => format_report(extraction.recognizer, &analysis),
    };

    write_output(args.output.as_ref(), &output)
}

fn format_report(recognizer: Option<RecognizerId>, analysis: &AnalysisResult) -> String {
    let mut output = String::new();

    if let Some(id) = recognizer {
        output.push_str(&format!("Layout: {}\n", id));
    }
    output.push_str(&format!("Transactions: {}\n", analysis.transaction_count));
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!("  Income:      {:>12.2}\n", analysis.total_income));
    output.push_str(&format!("  Expenses:    {:>12.2}\n", analysis.total_expenses));
    output.push_str(&format!("  Net change:  {:>12.2}\n", analysis.net_change));
    output.push_str(&format!("  Average:     {:>12.2}\n", analysis.average_transaction));

    if !analysis.category_totals.is_empty() {
        output.push_str("\nSpending by category:\n");
        for (category, total) in &analysis.category_totals {
            output.push_str(&format!("  {:<24} {:>12.2}\n", category, total));
        }
    }

    if !analysis.top_merchants.is_empty() {
        output.push_str("\nTop merchants:\n");
        for merchant in &analysis.top_merchants {
            output.push_str(&format!(
                "  {:<32} {:>4}x {:>12.2}\n",
                merchant.merchant, merchant.count, merchant.total
            ));
        }
    }

    if !analysis.monthly_spending.is_empty() {
        output.push_str("\nMonthly:\n");
        for month in &analysis.monthly_spending {
            output.push_str(&format!(
                "  {:<8} income {:>12.2}  expenses {:>12.2}\n",
                month.month, month.income, month.expenses
            ));
        }
    }

    if !analysis.anomalies.is_empty() {
        output.push_str("\nUnusual transactions:\n");
        for txn in &analysis.anomalies {
            output.push_str(&format!(
                "  {:<12} {:<40} {:>12.2}\n",
                txn.date, txn.description, txn.amount
            ));
        }
    }

    output
}
