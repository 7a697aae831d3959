//! English / French statements (Desjardins, National Bank).
//!
//! Columns are read like the check register, but numerals follow the
//! European convention (`1 234,56`), so every cell goes through
//! [`NumberLocale::European`].

use crate::extract::rules::patterns::BILINGUAL;
use crate::extract::rules::{
    NumberLocale, RowFilter, clean_description, has_digits, parse_amount_in,
};
use crate::models::{Transaction, TransactionType};

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

fn european(cell: &str) -> f64 {
    parse_amount_in(cell, cell, NumberLocale::European).magnitude
}

/// Recognizer 8: `Date | Description | Débit | Crédit | Solde`.
pub struct BilingualRecognizer;

impl LayoutRecognizer for BilingualRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::Bilingual
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in BILINGUAL.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let debit = caps.name("debit").map(|m| m.as_str());
            let credit = caps.name("credit").map(|m| m.as_str());

            let (cell, kind) = match (debit, credit) {
                (Some(cell), _) if has_digits(debit) => (cell, TransactionType::Debit),
                (_, Some(cell)) if has_digits(credit) => (cell, TransactionType::Credit),
                _ => continue,
            };

            transactions.push(
                Transaction::new(&caps["date"], description, european(cell), kind)
                    .with_balance(european(&caps["balance"])),
            );
        }

        transactions
    }
}
