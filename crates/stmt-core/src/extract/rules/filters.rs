//! Row suppression and keyword lexicons shared by the recognizers.

use crate::models::TransactionType;

use super::patterns::NUMERIC_ONLY;

/// Descriptions this short are column headers ("BALANCE", "DATE POSTED"),
/// longer ones may be real merchants.
const SHORT_HEADER_LEN: usize = 20;

/// Credit cues for Canadian dual-column statements.
pub const CREDIT_CUES: &[&str] = &[
    "DEPOSIT",
    "CREDIT",
    "AUTODEPOSIT",
    "TRANSFER FROM",
    "INCOMING",
    "RECEIVED",
];

/// Card payment cues (English / French).
pub const PAYMENT_CUES: &[&str] = &["PAYMENT", "PAIEMENT"];

pub const DEBIT_CUES: &[&str] = &[
    "FEE",
    "WITHDRAWAL",
    "PURCHASE",
    "SENT",
    "TRANSFER TO",
    "PAYMENT TO",
    "DEBIT",
    "E-TRANSFER SENT",
    "ONLINE TRANSFER TO",
];

fn contains_any(upper: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| upper.contains(cue))
}

/// Direction implied by keywords. Credit cues take precedence.
pub fn keyword_direction(upper: &str) -> Option<TransactionType> {
    if contains_any(upper, CREDIT_CUES) {
        Some(TransactionType::Credit)
    } else if contains_any(upper, DEBIT_CUES) {
        Some(TransactionType::Debit)
    } else {
        None
    }
}

pub fn has_payment_cue(upper: &str) -> bool {
    contains_any(upper, PAYMENT_CUES)
}

/// Header, footer and banner rows that look like transactions.
pub fn is_header_or_footer(upper: &str) -> bool {
    let short = upper.chars().count() < SHORT_HEADER_LEN;

    upper.contains("DESCRIPTION")
        || (upper.contains("WITHDRAWAL") && upper.contains("DEPOSIT"))
        || (short && upper.contains("BALANCE"))
        || (short && upper.contains("DATE"))
        || upper.contains("OPENING")
        || upper.contains("CLOSING")
        || upper.contains("TOTAL")
        || upper.contains("SUMMARY")
        || upper.contains("DETAILS OF YOUR ACCOUNT")
}

/// Per-recognizer post-filter applied to a cleaned description.
#[derive(Debug, Clone, Copy)]
pub struct RowFilter {
    min_len: usize,
    reject_any_balance: bool,
}

impl RowFilter {
    pub const fn new(min_len: usize) -> Self {
        Self {
            min_len,
            reject_any_balance: false,
        }
    }

    /// Also drop rows mentioning a balance regardless of length.
    pub const fn strict_balance(mut self) -> Self {
        self.reject_any_balance = true;
        self
    }

    /// Whether a row survives suppression.
    pub fn accepts(&self, description: &str) -> bool {
        let upper = description.to_uppercase();

        if is_header_or_footer(&upper) {
            return false;
        }
        if self.reject_any_balance && upper.contains("BALANCE") {
            return false;
        }

        description.chars().count() >= self.min_len && !NUMERIC_ONLY.is_match(description)
    }
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(3)
    }
}
