//! Statement transaction data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category assigned to every transaction at extraction time.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Direction of a ledger line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Decreases available funds (purchase, withdrawal, fee).
    #[default]
    Debit,
    /// Increases available funds (deposit, refund, payment to a card).
    Credit,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One financial ledger line recovered from statement text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date text exactly as it appeared (or carried forward from a previous line).
    pub date: String,

    /// Whitespace-collapsed merchant / reference text.
    pub description: String,

    /// Non-negative magnitude; direction lives in `kind`.
    pub amount: f64,

    /// Running balance after this line, `0.0` when the layout has none.
    pub balance: f64,

    /// Debit or credit.
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Free-form category label.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

impl Transaction {
    /// Build an uncategorized transaction without a known balance.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount: amount.abs(),
            balance: 0.0,
            kind,
            category: default_category(),
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_credit(&self) -> bool {
        self.kind.is_credit()
    }

    /// Amount with the sign implied by its direction (credits positive).
    pub fn signed_amount(&self) -> f64 {
        if self.is_credit() { self.amount } else { -self.amount }
    }
}
