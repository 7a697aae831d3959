//! The most common retail layout: one date, a description, a signed amount
//! and sometimes a running balance.

use crate::extract::rules::patterns::SINGLE_DATE;
use crate::extract::rules::{RowFilter, clean_description, direction_from_sign, parse_amount};
use crate::models::Transaction;

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 3: `Date | Description | Amount | [Balance]`.
pub struct SingleDateRecognizer;

impl LayoutRecognizer for SingleDateRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::SingleDate
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in SINGLE_DATE.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let amount = parse_amount(&caps["amount"]);
            let mut txn = Transaction::new(
                &caps["date"],
                description,
                amount.magnitude,
                direction_from_sign(&amount),
            );
            if let Some(balance) = caps.name("balance") {
                txn = txn.with_balance(parse_amount(balance.as_str()).magnitude);
            }

            transactions.push(txn);
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
    fn test_amount_with_balance() {
        let text = "01/15/2024 Grocery Store -45.67 1,234.56\n\
                    2024-01-16 Payroll ACME 2,000.00 3,234.56";
        let txns = SingleDateRecognizer.recognize(text);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "01/15/2024");
        assert_eq!(txns[0].description, "Grocery Store");
        assert_eq!(txns[0].amount, 45.67);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[0].balance, 1234.56);

        assert_eq!(txns[1].date, "2024-01-16");
        assert_eq!(txns[1].amount, 2000.0);
        assert_eq!(txns[1].kind, TransactionType::Credit);
    }

    #[test]
    fn test_currency_symbol_and_no_balance() {
        let txns = SingleDateRecognizer.recognize("01/15/2024 #4521 -$4.50  ");

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "#4521");
        assert_eq!(txns[0].amount, 4.5);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[0].balance, 0.0);
    }

    #[test]
    fn test_header_row_skipped() {
        let text = "01/01/2024 Opening Balance 0.00 500.00\n\
                    01/02/2024 Coffee -3.00 497.00";
        let txns = SingleDateRecognizer.recognize(text);

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Coffee");
    }
}
