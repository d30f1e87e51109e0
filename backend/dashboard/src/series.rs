//! Month-bucketed chart series.

use bank::Transaction;
use chrono::Datelike;
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub labels: [&'static str; 12],
    pub income: [f64; 12],
    pub expenses: [f64; 12],
}

impl MonthlySeries {
    pub fn from_transactions(incomes: &[Transaction], expenses: &[Transaction]) -> Self {
        Self {
            labels: MONTH_LABELS,
            income: bucket_by_month(incomes),
            expenses: bucket_by_month(expenses),
        }
    }
}

/// Sums amounts per calendar month. The year is ignored, so March 2024 and March 2025
/// land in the same bucket.
pub fn bucket_by_month(transactions: &[Transaction]) -> [f64; 12] {
    let mut buckets = [0.0; 12];

    for transaction in transactions {
        buckets[transaction.date.month0() as usize] += transaction.amount;
    }

    buckets
}
