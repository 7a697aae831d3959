//! End-to-end behaviour of the extraction ladder and the aggregator.

use pretty_assertions::assert_eq;
use stmt_core::{
    RecognizerId, StatementExtractor, Transaction, TransactionType, aggregate, clean_description,
    extract_transactions, parse_amount,
};

const SAMPLES: &[&str] = &[
    "Jan 5 Jan 7 STARBUCKS #123 -4.50",
    "Jan 5 Deposit from Employer 100.00\nPurchase at Store 20.00",
    "01/15/2024 #4521 -4.50  ",
    "1042 01/15/2024 1234 1,200.00      3,800.00",
    "03/01/24 03/05/24 AAPL APPLE INC COMMON BUY 10 172.5000 -1,725.00",
    "Févr 3   Épicerie Metro   45,67      1 234,56",
    "03/10/2024 Hotel Paris 120.00 EUR 130.45",
    "Lorem ipsum dolor sit amet",
    "",
];

fn first_non_empty(text: &str) -> (Option<RecognizerId>, Vec<Transaction>) {
    RecognizerId::PRIORITY
        .iter()
        .map(|id| (*id, id.recognizer().recognize(text)))
        .find(|(_, txns)| !txns.is_empty())
        .map_or((None, Vec::new()), |(id, txns)| (Some(id), txns))
}

#[test]
fn dual_date_refund_is_credit() {
    let result = StatementExtractor::new().extract_detailed("Jan 5 Jan 7 STARBUCKS #123 -4.50");

    assert_eq!(result.recognizer, Some(RecognizerId::DualDate));
    assert_eq!(
        result.transactions,
        vec![Transaction::new("Jan 5", "STARBUCKS #123", 4.5, TransactionType::Credit)]
    );
}

#[test]
fn canadian_rows_carry_the_date_forward() {
    let text = "Jan 5 Deposit from Employer 100.00\nPurchase at Store 20.00";
    let result = StatementExtractor::new().extract_detailed(text);

    assert_eq!(result.recognizer, Some(RecognizerId::CanadianColumns));
    assert_eq!(
        result.transactions,
        vec![
            Transaction::new("Jan 5", "Deposit from Employer", 100.0, TransactionType::Credit),
            Transaction::new("Jan 5", "Purchase at Store", 20.0, TransactionType::Debit),
        ]
    );
}

#[test]
fn unrecognized_text_yields_nothing() {
    let result = StatementExtractor::new().extract_detailed("Lorem ipsum dolor sit amet");

    assert!(result.transactions.is_empty());
    assert_eq!(result.recognizer, None);
}

#[test]
fn aggregate_credit_and_debit() {
    let result = aggregate(&[
        Transaction::new("Jan 1", "Salary", 100.0, TransactionType::Credit),
        Transaction::new("Jan 2", "Groceries", 40.0, TransactionType::Debit),
    ]);

    assert_eq!(result.total_income, 100.0);
    assert_eq!(result.total_expenses, 40.0);
    assert_eq!(result.net_change, 60.0);
}

#[test]
fn extraction_is_deterministic() {
    let extractor = StatementExtractor::new();
    for text in SAMPLES {
        let first = serde_json::to_string(&extractor.extract(text)).unwrap();
        let second = serde_json::to_string(&extractor.extract(text)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn earliest_matching_recognizer_wins() {
    let extractor = StatementExtractor::new();
    for text in SAMPLES {
        let result = extractor.extract_detailed(text);
        let (expected_id, expected) = first_non_empty(text);

        assert_eq!(result.recognizer, expected_id, "{text:?}");
        assert_eq!(result.transactions, expected, "{text:?}");
    }
}

#[test]
fn single_date_layout_reached_after_higher_priorities_fail() {
    let result = StatementExtractor::new().extract_detailed("01/15/2024 #4521 -4.50  ");

    assert_eq!(result.recognizer, Some(RecognizerId::SingleDate));
    assert_eq!(result.transactions[0].description, "#4521");
    assert_eq!(result.transactions[0].kind, TransactionType::Debit);
}

#[test]
fn amounts_are_never_negative() {
    for text in SAMPLES {
        for txn in extract_transactions(text) {
            assert!(txn.amount >= 0.0, "{txn:?}");
            assert!(!txn.date.is_empty(), "{txn:?}");
        }
    }
}

#[test]
fn aggregation_identity_holds() {
    let txns = [
        Transaction::new("d", "a", 0.25, TransactionType::Credit),
        Transaction::new("d", "b", 1.5, TransactionType::Debit),
        Transaction::new("d", "c", 100.0, TransactionType::Credit),
        Transaction::new("d", "e", 0.5, TransactionType::Debit),
    ];
    let result = aggregate(&txns);
    let sum: f64 = txns.iter().map(|t| t.amount).sum();

    assert_eq!(result.net_change, result.total_income - result.total_expenses);
    assert_eq!(result.total_income + result.total_expenses, sum);
}

#[test]
fn garbage_amount_fails_to_zero() {
    let parsed = parse_amount("abc");
    assert_eq!(parsed.magnitude, 0.0);
    assert!(parsed.fallback);

    let parsed = parse_amount("$");
    assert_eq!(parsed.magnitude, 0.0);
    assert!(!parsed.fallback);
}

#[test]
fn description_cleaning_is_idempotent() {
    for raw in ["  STARBUCKS   #123 ", "a\t\tb\n c", "", "plain"] {
        let once = clean_description(raw);
        assert_eq!(clean_description(&once), once);
    }
}
