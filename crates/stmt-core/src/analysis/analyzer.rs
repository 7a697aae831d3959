//! Totals, category spending and outlier detection.

use std::collections::BTreeMap;

use tracing::debug;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    AnalysisConfig, AnalysisResult, DailySpending, MerchantTotal, MonthlySpending, Transaction,
    TransactionType,
};

use super::categorizer::categorize;
use super::dates::parse_statement_date;
use super::merchants::{extract_merchant_name, normalize_merchant_name};
use super::stats::{mean, std_dev};

/// Income, expense and net totals.
///
/// Total over any input; category spending and anomalies are left empty.
pub fn aggregate(transactions: &[Transaction]) -> AnalysisResult {
    let (total_income, total_expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), txn| match txn.kind {
                TransactionType::Credit => (income + txn.amount, expenses),
                TransactionType::Debit => (income, expenses + txn.amount),
            });

    let transaction_count = transactions.len();
    let average_transaction = if transaction_count == 0 {
        0.0
    } else {
        total_expenses / transaction_count as f64
    };

    AnalysisResult {
        total_income,
        total_expenses,
        net_change: total_income - total_expenses,
        transaction_count,
        average_transaction,
        ..Default::default()
    }
}

/// Full analysis driven by an [`AnalysisConfig`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a set of transactions.
    pub fn analyze(&self, transactions: &[Transaction]) -> AnalysisResult {
        let result = AnalysisResult {
            category_totals: self.category_totals(transactions),
            anomalies: self.detect_anomalies(transactions),
            top_merchants: self.top_merchants(transactions, self.config.top_merchants),
            daily_spending: self.daily_spending(transactions),
            monthly_spending: self.monthly_spending(transactions),
            ..aggregate(transactions)
        };

        debug!(
            "Analyzed {} transactions: {} categories, {} anomalies, {} months",
            result.transaction_count,
            result.category_totals.len(),
            result.anomalies.len(),
            result.monthly_spending.len()
        );

        result
    }

    /// Debit spending summed per category.
    pub fn category_totals(&self, transactions: &[Transaction]) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.kind == TransactionType::Debit) {
            *totals.entry(self.category_of(txn)).or_insert(0.0) += txn.amount;
        }

        totals
    }

    fn category_of(&self, txn: &Transaction) -> String {
        if self.config.categorize {
            categorize(&txn.description, txn.kind).to_string()
        } else {
            txn.category.clone()
        }
    }

    /// The `limit` merchants with the largest debit spending.
    ///
    /// Spellings that normalize to the same merchant are grouped under the
    /// first name seen. Ties keep first-seen order.
    pub fn top_merchants(&self, transactions: &[Transaction], limit: usize) -> Vec<MerchantTotal> {
        let mut merchants: Vec<(String, MerchantTotal)> = Vec::new();

        for txn in transactions.iter().filter(|t| t.kind == TransactionType::Debit) {
            let key = normalize_merchant_name(&txn.description);
            let category = self.category_of(txn);

            match merchants.iter().position(|(k, _)| *k == key) {
                Some(index) => {
                    let entry = &mut merchants[index].1;
                    entry.total += txn.amount;
                    entry.count += 1;
                    entry.category = category;
                }
                None => merchants.push((
                    key,
                    MerchantTotal {
                        merchant: extract_merchant_name(&txn.description),
                        total: txn.amount,
                        count: 1,
                        category,
                    },
                )),
            }
        }

        let mut totals: Vec<MerchantTotal> = merchants.into_iter().map(|(_, m)| m).collect();
        totals.sort_by(|a, b| b.total.total_cmp(&a.total));
        totals.truncate(limit);
        totals
    }

    /// Income and expenses grouped by statement date.
    ///
    /// Dates that parse are keyed and sorted as calendar days; the rest keep
    /// their printed text and follow in first-seen order.
    pub fn daily_spending(&self, transactions: &[Transaction]) -> Vec<DailySpending> {
        let mut days: Vec<(Option<NaiveDate>, DailySpending)> = Vec::new();

        for txn in transactions {
            let parsed = parse_statement_date(&txn.date);
            let date = match parsed {
                Some(day) => day.format("%Y-%m-%d").to_string(),
                None => txn.date.trim().to_string(),
            };

            let index = match days.iter().position(|(_, d)| d.date == date) {
                Some(index) => index,
                None => {
                    days.push((
                        parsed,
                        DailySpending {
                            date,
                            total: 0.0,
                            income: 0.0,
                            expenses: 0.0,
                            balance: 0.0,
                        },
                    ));
                    days.len() - 1
                }
            };

            let day = &mut days[index].1;
            match txn.kind {
                TransactionType::Credit => day.income += txn.amount,
                TransactionType::Debit => day.expenses += txn.amount,
            }
            day.total = day.expenses - day.income;
            day.balance = txn.balance;
        }

        // `None` sorts before `Some`; flip it so unparsed dates go last
        days.sort_by_key(|(parsed, _)| (parsed.is_none(), *parsed));
        days.into_iter().map(|(_, day)| day).collect()
    }

    /// Income and expenses per calendar month. Transactions whose date has
    /// no year or does not parse are left out.
    pub fn monthly_spending(&self, transactions: &[Transaction]) -> Vec<MonthlySpending> {
        let mut months: BTreeMap<(i32, u32), MonthlySpending> = BTreeMap::new();

        for txn in transactions {
            let Some(date) = parse_statement_date(&txn.date) else {
                continue;
            };

            let month = months
                .entry((date.year(), date.month()))
                .or_insert_with(|| MonthlySpending {
                    month: format!("{:02}/{}", date.month(), date.year()),
                    year: date.year(),
                    total: 0.0,
                    income: 0.0,
                    expenses: 0.0,
                    transaction_count: 0,
                });

            match txn.kind {
                TransactionType::Credit => month.income += txn.amount,
                TransactionType::Debit => month.expenses += txn.amount,
            }
            month.total = month.expenses - month.income;
            month.transaction_count += 1;
        }

        months.into_values().collect()
    }

    /// Debits whose amount is more than `anomaly_threshold` standard
    /// deviations from the mean debit.
    pub fn detect_anomalies(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let min_sample = self.config.min_anomaly_sample;
        if transactions.len() < min_sample {
            return Vec::new();
        }

        let amounts: Vec<f64> = transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Debit)
            .map(|t| t.amount)
            .collect();
        if amounts.len() < min_sample {
            return Vec::new();
        }

        let mean = mean(&amounts);
        let deviation = std_dev(&amounts);
        if deviation == 0.0 {
            return Vec::new();
        }

        transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Debit)
            .filter(|t| ((t.amount - mean) / deviation).abs() > self.config.anomaly_threshold)
            .cloned()
            .collect()
    }
}
