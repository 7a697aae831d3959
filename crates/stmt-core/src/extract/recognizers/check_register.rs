//! Check-heavy business registers with separate debit and credit columns.
//!
//! ```text
//! Check#  Date        Description          Debit      Credit     Balance
//! 1042    01/15/2024  Rent cheque          1,200.00              3,800.00
//! ****    01/16/2024  Client deposit                  250.00     4,050.00
//! ```

use crate::extract::rules::patterns::CHECK_REGISTER;
use crate::extract::rules::{RowFilter, clean_description, has_digits, parse_amount};
use crate::models::{Transaction, TransactionType};

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 4: the populated column decides both amount and direction.
pub struct CheckRegisterRecognizer;

impl LayoutRecognizer for CheckRegisterRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::CheckRegister
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in CHECK_REGISTER.captures_iter(text) {
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
                Transaction::new(&caps["date"], description, parse_amount(cell).magnitude, kind)
                    .with_balance(parse_amount(&caps["balance"]).magnitude),
            );
        }

        transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_debit_and_credit_columns() {
        let text = "1042 01/15/2024 Rent cheque 1,200.00      3,800.00\n\
                    **** 01/16/2024 Client deposit      250.00 4,050.00";
        let txns = CheckRegisterRecognizer.recognize(text);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "01/15/2024");
        assert_eq!(txns[0].description, "Rent cheque");
        assert_eq!(txns[0].amount, 1200.0);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[0].balance, 3800.0);

        assert_eq!(txns[1].description, "Client deposit");
        assert_eq!(txns[1].amount, 250.0);
        assert_eq!(txns[1].kind, TransactionType::Credit);
        assert_eq!(txns[1].balance, 4050.0);
    }

    #[test]
    fn test_requires_check_number() {
        assert!(CheckRegisterRecognizer
            .recognize("01/15/2024 Rent cheque 1,200.00      3,800.00")
            .is_empty());
    }
}
