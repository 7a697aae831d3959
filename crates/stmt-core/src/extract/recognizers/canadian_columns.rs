//! Canadian chequing layout (RBC, TD, BMO, Scotiabank).
//!
//! ```text
//! Date     Description                 Withdrawals   Deposits     Balance
//! Jan 5    Payroll Deposit ACME                      2,100.00    3,412.19
//!          Interac purchase - Metro        54.12                 3,358.07
//! ```
//!
//! Rows on the same day omit the date, so the last seen date is carried
//! forward through the scan.

use regex::Captures;

use crate::extract::rules::patterns::CANADIAN_COLUMNS;
use crate::extract::rules::{RowFilter, clean_description, keyword_direction, parse_amount};
use crate::models::{Transaction, TransactionType};

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 1: withdrawal / deposit / balance columns.
pub struct CanadianColumnsRecognizer;

impl LayoutRecognizer for CanadianColumnsRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::CanadianColumns
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let (transactions, _last_date) = CANADIAN_COLUMNS.captures_iter(text).fold(
            (Vec::new(), None::<String>),
            |(mut out, last_date), caps| {
                let description = clean_description(&caps["desc"]);
                if !FILTER.accepts(&description) {
                    return (out, last_date);
                }

                let date = match caps.name("date").map(|m| m.as_str().trim()) {
                    Some(date) if !date.is_empty() => date.to_string(),
                    _ => match last_date {
                        Some(date) => date,
                        // nothing to carry forward yet
                        None => return (out, None),
                    },
                };

                if let Some(txn) = derive(&date, description, &caps) {
                    out.push(txn);
                }
                (out, Some(date))
            },
        );

        transactions
    }
}

fn derive(date: &str, description: String, caps: &Captures<'_>) -> Option<Transaction> {
    let first = parse_amount(&caps["first"]);

    match (caps.name("second"), caps.name("third")) {
        // Withdrawal | Deposit | Balance
        (Some(deposit), Some(balance)) => {
            let deposit = parse_amount(deposit.as_str());
            let balance = parse_amount(balance.as_str());

            let (amount, kind) = if !first.is_zero() {
                (first, TransactionType::Debit)
            } else if !deposit.is_zero() {
                (deposit, TransactionType::Credit)
            } else {
                return None;
            };

            Some(
                Transaction::new(date, description, amount.magnitude, kind)
                    .with_balance(balance.magnitude),
            )
        }
        // Amount [Balance]: the first column is the transaction, keywords decide direction
        _ => {
            let kind = keyword_direction(&description.to_uppercase())
                .unwrap_or(TransactionType::Debit);
            Some(Transaction::new(date, description, first.magnitude, kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recognize(text: &str) -> Vec<Transaction> {
        CanadianColumnsRecognizer.recognize(text)
    }

    #[test]
    fn test_date_carry_forward() {
        let txns = recognize("Jan 5 Deposit from Employer 100.00\nPurchase at Store 20.00");

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "Jan 5");
        assert_eq!(txns[0].amount, 100.0);
        assert_eq!(txns[0].kind, TransactionType::Credit);

        assert_eq!(txns[1].date, "Jan 5");
        assert_eq!(txns[1].description, "Purchase at Store");
        assert_eq!(txns[1].amount, 20.0);
        assert_eq!(txns[1].kind, TransactionType::Debit);
    }

    #[test]
    fn test_rows_before_first_date_are_dropped() {
        let txns = recognize("Coffee beans 12.00\nJan 6 Grocery store 40.00\nBakery 6.25");

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "Grocery store");
        assert_eq!(txns[1].date, "Jan 6");
        assert_eq!(txns[1].description, "Bakery");
    }

    #[test]
    fn test_day_first_dates() {
        let txns = recognize("12 Mar Online transfer to savings 250.00");

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, "12 Mar");
        assert_eq!(txns[0].kind, TransactionType::Debit);
    }

    #[test]
    fn test_three_columns_withdrawal_wins() {
        let txns = recognize("Jan 5 Interac purchase Metro 54.12 0.00 3,358.07");

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 54.12);
        assert_eq!(txns[0].kind, TransactionType::Debit);
        assert_eq!(txns[0].balance, 3358.07);
    }

    #[test]
    fn test_three_columns_zero_withdrawal_uses_deposit() {
        let txns = recognize("Jan 5 Payroll ACME 0.00 2,100.00 3,412.19");

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, 2100.0);
        assert_eq!(txns[0].kind, TransactionType::Credit);
    }

    #[test]
    fn test_three_zero_columns_dropped() {
        assert!(recognize("Jan 5 Memo adjustment 0.00 0.00 100.00").is_empty());
    }

    #[test]
    fn test_two_columns_use_keywords() {
        let txns = recognize("Jan 5 Autodeposit from Jane 75.00 1,075.00\nJan 6 Tim Hortons 3.10 1,071.90");

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].amount, 75.0);
        assert_eq!(txns[0].kind, TransactionType::Credit);
        assert_eq!(txns[0].balance, 0.0);
        // no cue at all defaults to debit
        assert_eq!(txns[1].kind, TransactionType::Debit);
    }

    #[test]
    fn test_header_rows_do_not_reset_date() {
        let text = "Jan 5 Opening balance 1,000.00\nJan 6 E-Transfer sent Bob 30.00\nClosing balance 970.00";
        let txns = recognize(text);

        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].date, "Jan 6");
        assert_eq!(txns[0].description, "E-Transfer sent Bob");
    }
}
