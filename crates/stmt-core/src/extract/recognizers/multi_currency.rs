//! Travel card statements that show the foreign amount and its conversion.

use crate::extract::rules::patterns::MULTI_CURRENCY;
use crate::extract::rules::{RowFilter, clean_description, direction_from_sign, parse_amount};
use crate::models::Transaction;

use super::{LayoutRecognizer, RecognizerId};

const FILTER: RowFilter = RowFilter::new(3);

/// Recognizer 9: `Date | Description | Amount | CCY | Converted`.
///
/// The original-currency amount is kept; the converted figure is only used
/// to anchor the match.
pub struct MultiCurrencyRecognizer;

impl LayoutRecognizer for MultiCurrencyRecognizer {
    fn id(&self) -> RecognizerId {
        RecognizerId::MultiCurrency
    }

    fn recognize(&self, text: &str) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for caps in MULTI_CURRENCY.captures_iter(text) {
            let description = clean_description(&caps["desc"]);
            if !FILTER.accepts(&description) {
                continue;
            }

            let amount = parse_amount(&caps["amount"]);
            transactions.push(Transaction::new(
                &caps["date"],
                format!("{} ({})", description, &caps["currency"]),
                amount.magnitude,
                direction_from_sign(&amount),
            ));
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
    fn test_currency_annotation() {
        let text = "03/10/2024 Hotel Paris 120.00 EUR 130.45\n\
                    03/11/2024 Taxi Lyon -35.50 EUR -38.60";
        let txns = MultiCurrencyRecognizer.recognize(text);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, "03/10/2024");
        assert_eq!(txns[0].description, "Hotel Paris (EUR)");
        assert_eq!(txns[0].amount, 120.0);
        assert_eq!(txns[0].kind, TransactionType::Credit);

        assert_eq!(txns[1].description, "Taxi Lyon (EUR)");
        assert_eq!(txns[1].amount, 35.5);
        assert_eq!(txns[1].kind, TransactionType::Debit);
    }

    #[test]
    fn test_requires_currency_code() {
        assert!(MultiCurrencyRecognizer
            .recognize("03/10/2024 Hotel Paris 120.00 130.45")
            .is_empty());
    }
}
