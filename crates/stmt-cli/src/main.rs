//! CLI application for bank statement transaction extraction.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, batch, config, extract};

/// Bank statement extraction - turn statement text into transactions
#[derive(Parser)]
#[command(name = "stmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract transactions from a statement text file
    Extract(extract::ExtractArgs),

    /// Extract, categorize and summarize a statement
    Analyze(analyze::AnalyzeArgs),

    /// Extract transactions from many statement files
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Extract(args) => extract::run(args, config_path),
        Commands::Analyze(args) => analyze::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}
