//! Aggregated view over a set of transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// Totals and outliers computed for one analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Sum of credit amounts.
    pub total_income: f64,

    /// Sum of debit amounts.
    pub total_expenses: f64,

    /// `total_income - total_expenses`.
    pub net_change: f64,

    /// Debit spending per category.
    pub category_totals: BTreeMap<String, f64>,

    /// Debits whose amount deviates from the mean by more than the threshold.
    pub anomalies: Vec<Transaction>,

    /// Number of transactions analyzed.
    pub transaction_count: usize,

    /// `total_expenses / transaction_count`, zero for an empty set.
    pub average_transaction: f64,

    /// Highest-spend merchants, largest first.
    pub top_merchants: Vec<MerchantTotal>,

    /// Income and expenses per statement date, oldest first.
    pub daily_spending: Vec<DailySpending>,

    /// Income and expenses per calendar month, oldest first.
    pub monthly_spending: Vec<MonthlySpending>,
}

/// Debit spending at one merchant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantTotal {
    pub merchant: String,
    pub total: f64,
    pub count: usize,
    /// Category of the most recent transaction at this merchant.
    pub category: String,
}

/// Totals for one statement date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpending {
    /// ISO date when the text parses, otherwise the date text as printed.
    pub date: String,
    /// `expenses - income`.
    pub total: f64,
    pub income: f64,
    pub expenses: f64,
    /// Balance of the last transaction on that date.
    pub balance: f64,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySpending {
    /// `MM/YYYY`.
    pub month: String,
    pub year: i32,
    /// `expenses - income`.
    pub total: f64,
    pub income: f64,
    pub expenses: f64,
    pub transaction_count: usize,
}
