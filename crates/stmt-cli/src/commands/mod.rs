//! Subcommands and the file handling they share.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::debug;

use stmt_core::StmtConfig;

/// Load configuration from `--config`, or defaults when none was given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StmtConfig> {
    match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path);
            Ok(StmtConfig::from_file(Path::new(path))?)
        }
        None => Ok(StmtConfig::default()),
    }
}

/// Read already-extracted statement text.
pub fn read_statement(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        anyhow::bail!("Input file is empty: {}", path.display());
    }

    Ok(text)
}

/// Write to `output` if given, stdout otherwise.
pub fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}
