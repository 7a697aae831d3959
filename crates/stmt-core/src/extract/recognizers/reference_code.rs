//! Layouts that print a bank reference code before each description.
//!
//! The reference is matched to anchor the row but not kept.

use crate::extract::rules::patterns::REFERENCE_CODE;
use crate::extract::rules::{RowFilter, clean_description, direction_from_sign, parse_amount};
use crate::models::Transaction;

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 6: `Date | Reference | Description | Amount | [Balance]`.
pub struct ReferenceCodeRecognizer;

impl LayoutRecognizer for ReferenceCodeRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::ReferenceCode
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in REFERENCE_CODE.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let amount = parse_amount(&caps["amount"]);
            let balance = caps
                .name("balance")
                .map(|b| parse_amount(b.as_str()).magnitude)
                .unwrap_or_default();

            transactions.push(
                Transaction::new(
                    &caps["date"],
                    description,
                    amount.magnitude,
                    direction_from_sign(&amount),
                )
                .with_balance(balance),
            );
        }

        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_is_dropped() {
        let text = "01/15/2024 TXN8891234 Wire transfer to landlord -$1,500.00 $2,500.00\n\
                    01/16/2024 REF0042AB Interest paid 1.25 2,501.25";
        let txns = ReferenceCodeRecognizer.recognize(text);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "01/15/2024");
        assert_eq!(txns[0].description, "Wire transfer to landlord");
        assert_eq!(txns[0].amount, 1500.0);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[0].balance, 2500.0);

        assert_eq!(txns[1].description, "Interest paid");
        assert_eq!(txns[1].kind, TransactionType::Credit);
    }

    #[test]
    fn test_short_reference_rejected() {
        assert!(ReferenceCodeRecognizer.recognize("01/15/2024 AB12 Coffee -4.50 10.00").is_empty());
    }
}
