//! Core library for bank statement transaction extraction.
//!
//! This crate provides:
//! - Ten layout recognizers for common bank and card statement formats
//! - Priority-ordered extraction from already-extracted statement text
//! - Amount and description normalization
//! - Totals, keyword categorization and anomaly detection
//! - Merchant, daily and monthly spending breakdowns

pub mod analysis;
pub mod error;
pub mod extract;
pub mod models;

pub use analysis::{Analyzer, aggregate, categorize, categorize_all};
pub use error::{ConfigError, Result, StmtError};
pub use extract::{
    ExtractionResult, LayoutRecognizer, RecognizerId, StatementExtractor, extract_transactions,
};
pub use extract::rules::{NumberLocale, ParsedAmount, clean_description, parse_amount};
pub use models::{
    AnalysisConfig, AnalysisResult, DailySpending, ExtractionConfig, MerchantTotal,
    MonthlySpending, StmtConfig, Transaction, TransactionType,
};
