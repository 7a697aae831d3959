//! Data models shared across extraction and analysis.

pub mod analysis;
pub mod config;
pub mod transaction;

pub use analysis::{AnalysisResult, DailySpending, MerchantTotal, MonthlySpending};
pub use config::{AnalysisConfig, ExtractionConfig, StmtConfig};
pub use transaction::{Transaction, TransactionType, UNCATEGORIZED};
