//! Bare CSV-like exports: date, description, amount and nothing else.

use crate::extract::rules::patterns::MINIMAL_EXPORT;
use crate::extract::rules::{RowFilter, clean_description, direction_from_sign, parse_amount};
use crate::models::Transaction;

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 5: `Date | Description | Amount`.
pub struct MinimalExportRecognizer;

impl LayoutRecognizer for MinimalExportRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::MinimalExport
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        MINIMAL_EXPORT
            .captures_iter(text)
            .filter_map(|caps| {
                let description = clean_description(&caps["desc"]);
                if !FILTER.accepts(&description) {
                    return None;
                }

                let amount = parse_amount(&caps["amount"]);
                Some(Transaction::new(
                    &caps["date"],
                    description,
                    amount.magnitude,
                    direction_from_sign(&amount),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_row_per_line() {
        let text = "2024-03-01 Netflix -15.99\n2024-03-02 Refund Amazon 20.00";
        let txns = MinimalExportRecognizer.recognize(text);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "2024-03-01");
        assert_eq!(txns[0].description, "Netflix");
        assert_eq!(txns[0].amount, 15.99);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[1].kind, TransactionType::Credit);
        assert_eq!(txns[1].balance, 0.0);
    }

    #[test]
    fn test_numeric_description_skipped() {
        assert!(MinimalExportRecognizer.recognize("03/01/2024 12345 -15.99").is_empty());
    }
}
