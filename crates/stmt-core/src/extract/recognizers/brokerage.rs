//! Brokerage trade ledgers.
//!
//! ```text
//! Trade     Settle    Symbol  Description          Action  Qty    Price     Amount
//! 03/01/24  03/05/24  AAPL    APPLE INC            BUY     10     172.5000  -1,725.00
//! ```

use crate::extract::rules::patterns::BROKERAGE;
use crate::extract::rules::{RowFilter, clean_description, direction_from_sign, parse_amount};
use crate::models::Transaction;

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 7: trade ledger rows. Direction comes from the amount's sign,
/// not from the action keyword.
pub struct BrokerageRecognizer;

impl LayoutRecognizer for BrokerageRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::Brokerage
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in BROKERAGE.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let amount = parse_amount(&caps["amount"]);
            transactions.push(Transaction::new(
                &caps["trade"],
                format!("{} {}", &caps["symbol"], description),
                amount.magnitude,
                direction_from_sign(&amount),
            ));
        }

        transactions
    }
}
