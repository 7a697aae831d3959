//! WASM bindings for bank statement extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Text extraction from PDFs stays on the JavaScript side; these functions
//! take the resulting plain text.

use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use stmt_core::analysis::categorizer;
use stmt_core::{Analyzer, StatementExtractor, StmtConfig, Transaction, categorize_all};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Plain objects rather than `Map`s, so category totals read naturally in JS.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract transactions from statement text.
///
/// Returns an array of transactions; empty when no layout was recognized.
#[wasm_bindgen]
pub fn extract_transactions(text: &str) -> Result<JsValue, JsValue> {
    to_js(&stmt_core::extract_transactions(text))
}

/// Compute totals, category and merchant spending, time buckets and
/// anomalies for an array of transactions.
#[wasm_bindgen]
pub fn analyze_transactions(transactions: JsValue) -> Result<JsValue, JsValue> {
    let transactions: Vec<Transaction> = from_js(transactions)?;
    to_js(&Analyzer::new().analyze(&transactions))
}

/// Assign keyword categories to an array of transactions.
#[wasm_bindgen]
pub fn categorize_transactions(transactions: JsValue) -> Result<JsValue, JsValue> {
    let transactions: Vec<Transaction> = from_js(transactions)?;
    to_js(&categorize_all(&transactions))
}

/// Parse a statement amount (e.g., "-$1,234.56" or "(45.00)").
///
/// Returns the signed value; unparseable text yields 0.
#[wasm_bindgen]
pub fn parse_amount(amount: &str) -> f64 {
    stmt_core::parse_amount(amount).signed()
}

/// Statement extractor and analyzer for browser use.
#[wasm_bindgen]
pub struct StatementAnalyzer {
    extractor: StatementExtractor,
    analyzer: Analyzer,
    categorize: bool,
}

#[wasm_bindgen]
impl StatementAnalyzer {
    /// Create an analyzer with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(StmtConfig::default())
    }

    /// Create an analyzer from a JSON configuration document.
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<StatementAnalyzer, JsValue> {
        let config: StmtConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Extract transactions from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.extract(text))
    }

    /// Extract and analyze text in one call.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsValue> {
        let transactions = self.transactions(text);
        to_js(&self.analyzer.analyze(&transactions))
    }

    /// Highest-spend merchants in the text, largest first.
    #[wasm_bindgen]
    pub fn top_merchants(&self, text: &str, limit: usize) -> Result<JsValue, JsValue> {
        let transactions = self.transactions(text);
        to_js(&self.analyzer.top_merchants(&transactions, limit))
    }

    /// Income and expenses per statement date.
    #[wasm_bindgen]
    pub fn daily_spending(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.analyzer.daily_spending(&self.transactions(text)))
    }

    /// Income and expenses per calendar month.
    #[wasm_bindgen]
    pub fn monthly_spending(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.analyzer.monthly_spending(&self.transactions(text)))
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let start = js_sys::Date::now();
        let result = self.extractor.extract_detailed(text);
        let elapsed = js_sys::Date::now() - start;

        #[derive(Serialize)]
        struct ExtractResult {
            transactions: Vec<Transaction>,
            recognizer: Option<String>,
            recognizer_number: Option<u8>,
            processing_time_ms: u64,
        }

        let output = ExtractResult {
            recognizer: result.recognizer.map(|id| id.to_string()),
            recognizer_number: result.recognizer.map(|id| id.number()),
            transactions: result.transactions,
            processing_time_ms: elapsed.max(0.0) as u64,
        };

        to_js(&output)
    }
}

impl StatementAnalyzer {
    fn with_config(config: StmtConfig) -> Self {
        Self {
            extractor: StatementExtractor::from_config(&config.extraction),
            categorize: config.analysis.categorize,
            analyzer: Analyzer::with_config(config.analysis),
        }
    }

    fn transactions(&self, text: &str) -> Vec<Transaction> {
        let transactions = self.extractor.extract(text);
        if self.categorize {
            categorize_all(&transactions)
        } else {
            transactions
        }
    }
}

impl Default for StatementAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Utilities for displaying statement data.
#[wasm_bindgen]
pub struct StatementUtils;

#[wasm_bindgen]
impl StatementUtils {
    /// Format amount with comma thousands (1,234.56).
    #[wasm_bindgen]
    pub fn format_amount(amount: f64) -> String {
        let s = format!("{:.2}", amount.abs());
        let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

        let chars: Vec<char> = integer_part.chars().collect();
        let mut formatted = String::new();
        if amount < 0.0 {
            formatted.push('-');
        }
        for (i, c) in chars.iter().enumerate() {
            if i > 0 && (chars.len() - i) % 3 == 0 {
                formatted.push(',');
            }
            formatted.push(*c);
        }

        format!("{}.{}", formatted, decimal_part)
    }

    /// Every category label the categorizer can assign.
    #[wasm_bindgen]
    pub fn categories() -> Vec<String> {
        categorizer::all_categories()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Category for a single description.
    #[wasm_bindgen]
    pub fn categorize(description: &str, is_credit: bool) -> String {
        let kind = if is_credit {
            stmt_core::TransactionType::Credit
        } else {
            stmt_core::TransactionType::Debit
        };
        categorizer::categorize(description, kind).to_string()
    }
}
