//! Last-resort layout for old or unusual statements.
//!
//! No sign survives in these rows, so every match is a debit. The pattern is
//! loose on purpose and its row filter is the strictest.

use crate::extract::rules::patterns::LEGACY;
use crate::extract::rules::{RowFilter, clean_description, parse_amount};
use crate::models::{Transaction, TransactionType};

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(5).strict_balance();

/// Recognizer 10: `Date | Description | Amount`.
pub struct LegacyRecognizer;

impl LayoutRecognizer for LegacyRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::Legacy
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in LEGACY.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            transactions.push(Transaction::new(
                &caps["date"],
                description,
                parse_amount(&caps["amount"]).magnitude,
                TransactionType::Debit,
            ));
        }

        transactions
    }
}
