//! Priority-ordered dispatch over the layout recognizers.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{ExtractionConfig, Transaction};

use super::recognizers::{LayoutRecognizer, RecognizerId};

/// Detailed outcome of one extraction call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    /// Transactions from the winning recognizer, in text order.
    pub transactions: Vec<Transaction>,
    /// Which recognizer produced them, `None` when nothing matched.
    pub recognizer: Option<RecognizerId>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Runs recognizers in a fixed order and keeps the first non-empty result.
pub struct StatementExtractor {
    ladder: Vec<Box<dyn LayoutRecognizer>>,
}

impl StatementExtractor {
    /// Create an extractor with every recognizer in default priority.
    pub fn new() -> Self {
        Self::with_recognizers(RecognizerId::PRIORITY.iter().map(|id| id.recognizer()))
    }

    /// Create an extractor from an explicit ladder, tried front to back.
    pub fn with_recognizers(ladder: impl IntoIterator<Item = Box<dyn LayoutRecognizer>>) -> Self {
        Self {
            ladder: ladder.into_iter().collect(),
        }
    }

    /// Default ladder without the recognizers disabled in `config`.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_recognizers(
            RecognizerId::PRIORITY
                .iter()
                .filter(|id| config.is_enabled(**id))
                .map(|id| id.recognizer()),
        )
    }

    /// Recognizers in the order they will be tried.
    pub fn ladder(&self) -> Vec<RecognizerId> {
        self.ladder.iter().map(|r| r.id()).collect()
    }

    /// Extract transactions from statement text.
    ///
    /// An empty result means no layout matched; it is not an error.
    pub fn extract(&self, text: &str) -> Vec<Transaction> {
        self.extract_detailed(text).transactions
    }

    /// Extract transactions and report which recognizer matched.
    pub fn extract_detailed(&self, text: &str) -> ExtractionResult {
        let (result, processing_time_ms) = timed(|| self.run_ladder(&normalize_newlines(text)));

        ExtractionResult {
            processing_time_ms,
            ..result
        }
    }

    fn run_ladder(&self, text: &str) -> ExtractionResult {
        debug!("Extracting from {} characters of text", text.len());

        for recognizer in &self.ladder {
            let transactions = recognizer.recognize(text);
            if transactions.is_empty() {
                continue;
            }

            let id = recognizer.id();
            info!("Matched {}: {} transactions", id, transactions.len());

            return ExtractionResult {
                transactions,
                recognizer: Some(id),
                processing_time_ms: 0,
            };
        }

        warn!("No pattern matched, 0 transactions found");
        ExtractionResult::default()
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with the default ladder.
pub fn extract_transactions(text: &str) -> Vec<Transaction> {
    StatementExtractor::new().extract(text)
}

/// Fold `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    let start = std::time::Instant::now();
    let out = f();
    (out, start.elapsed().as_millis() as u64)
}

// No monotonic clock on wasm32-unknown-unknown; hosts time the call themselves.
#[cfg(target_arch = "wasm32")]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u64) {
    (f(), 0)
}
