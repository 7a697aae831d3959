//! Credit card layout with a transaction date and a posting date.
//!
//! On card statements a negative amount is a refund or payment to the card.

use crate::extract::rules::patterns::DUAL_DATE;
use crate::extract::rules::{RowFilter, clean_description, has_payment_cue, parse_amount};
use crate::models::{Transaction, TransactionType};

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 2: `Trans date | Post date | Description | Amount`.
pub struct DualDateRecognizer;

impl LayoutRecognizer for DualDateRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::DualDate
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in DUAL_DATE.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let amount = parse_amount(&caps["amount"]);
            let kind = if amount.negative || has_payment_cue(&description.to_uppercase()) {
                TransactionType::Credit
            } else {
                TransactionType::Debit
            };

            transactions.push(Transaction::new(
                &caps["trans"],
                description,
                amount.magnitude,
                kind,
            ));
        }

        transactions
    }
}
