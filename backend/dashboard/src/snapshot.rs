use bank::{Challenge, ChallengeKind, ForumPost, Goal, RecordId, Transaction};
use serde::Serialize;

use crate::series::MonthlySeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings_rate_percent: i64,
}

impl Totals {
    pub fn from_transactions(incomes: &[Transaction], expenses: &[Transaction]) -> Self {
        let total_income = sum(incomes);
        let total_expenses = sum(expenses);
        let balance = total_income - total_expenses;

        Self {
            total_income,
            total_expenses,
            balance,
            savings_rate_percent: savings_rate_percent(balance, total_income),
        }
    }

    pub fn balance_tone(&self) -> Tone {
        if self.balance >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

pub fn sum(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// `round(balance / income * 100)`, or 0 when there is no income to divide by.
pub fn savings_rate_percent(balance: f64, total_income: f64) -> i64 {
    if total_income > 0.0 {
        (balance / total_income * 100.0).round() as i64
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub id: RecordId,
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub percent: i64,
    pub reached: bool,
}

impl From<&Goal> for GoalProgress {
    fn from(goal: &Goal) -> Self {
        let percent = if goal.target > 0.0 {
            (goal.current / goal.target * 100.0).round() as i64
        } else {
            0
        };

        Self {
            id: goal.id,
            name: goal.name.clone(),
            current: goal.current,
            target: goal.target,
            percent,
            reached: goal.is_reached(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeProgress {
    pub id: RecordId,
    pub name: String,
    pub current: u32,
    pub target: u32,
    /// Amount put aside so far: `amount` for saving challenges, `saved` for restrictions.
    pub value: f64,
}

impl From<&Challenge> for ChallengeProgress {
    fn from(challenge: &Challenge) -> Self {
        let value = match challenge.kind {
            ChallengeKind::Saving { amount } => amount,
            ChallengeKind::Restriction { saved } => saved,
        };

        Self {
            id: challenge.id,
            name: challenge.name.clone(),
            current: challenge.current,
            target: challenge.target,
            value,
        }
    }
}

/// Everything the dashboard shows, derived from one read of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub totals: Totals,
    pub balance_tone: Tone,
    pub recent_incomes: Vec<Transaction>,
    pub recent_expenses: Vec<Transaction>,
    pub recent_forum_posts: Vec<ForumPost>,
    pub chart: MonthlySeries,
    pub goals: Vec<GoalProgress>,
    pub challenges: Vec<ChallengeProgress>,
}
