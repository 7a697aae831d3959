//! Aggregation and follow-on analysis of extracted transactions.

mod analyzer;
pub mod categorizer;
pub mod dates;
pub mod merchants;
pub mod stats;

pub use analyzer::{Analyzer, aggregate};
pub use categorizer::{categorize, categorize_all};
