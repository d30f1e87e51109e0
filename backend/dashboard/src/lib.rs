//! # Dashboard
//!
//! View synchronizer for the finance dashboard.
//!
//! [`refresh`] rereads every collection it needs and rebuilds the whole [`Snapshot`]:
//! totals, balance, savings rate, the three newest incomes, expenses and forum posts,
//! the month-bucketed chart series, and goal/challenge progress.
//!
//! There is no cache and no partial update. Callers run a store mutation, then
//! `refresh`, then hand the snapshot to whatever draws it.
//!
//! ## Aggregates
//!
//! - `balance = totalIncome - totalExpenses`
//! - `savingsRatePercent = round(balance / totalIncome * 100)`, or `0` with no income
//! - chart buckets are keyed by month only; different years share a bucket

pub mod series;
pub mod snapshot;

use bank::{RecordStore, Storage};
use tracing::debug;

pub use series::{MONTH_LABELS, MonthlySeries};
pub use snapshot::{ChallengeProgress, GoalProgress, Snapshot, Tone, Totals};

/// How many of the newest records each recent list shows.
pub const RECENT_LIMIT: usize = 3;

pub fn refresh<S: Storage>(store: &RecordStore<S>) -> Snapshot {
    let incomes = store.incomes();
    let expenses = store.expenses();
    let forum_posts = store.forum_posts();

    let totals = Totals::from_transactions(&incomes, &expenses);
    let chart = MonthlySeries::from_transactions(&incomes, &expenses);

    debug!(
        "Refreshed: income {}, expenses {}, rate {}%",
        totals.total_income, totals.total_expenses, totals.savings_rate_percent
    );

    Snapshot {
        balance_tone: totals.balance_tone(),
        totals,
        recent_incomes: recent(incomes),
        recent_expenses: recent(expenses),
        recent_forum_posts: recent(forum_posts),
        chart,
        goals: store.goals().iter().map(GoalProgress::from).collect(),
        challenges: store.challenges().iter().map(ChallengeProgress::from).collect(),
    }
}

fn recent<T>(mut records: Vec<T>) -> Vec<T> {
    records.truncate(RECENT_LIMIT);
    records
}

#[cfg(test)]
mod tests {
    use bank::{MemoryStorage, NewForumPost, NewTransaction, TransactionKind};

    use super::*;

    fn seeded() -> RecordStore<MemoryStorage> {
        RecordStore::open(MemoryStorage::new()).unwrap()
    }

    fn add(store: &mut RecordStore<MemoryStorage>, kind: TransactionKind, amount: f64, date: &str) {
        store
            .add_transaction(
                kind,
                NewTransaction {
                    amount,
                    date: date.parse().ok(),
                    category: "misc".to_string(),
                    note: None,
                },
            )
            .unwrap();
    }

    #[test]
    fn test_seeded_totals() {
        let snapshot = refresh(&seeded());

        assert_eq!(snapshot.totals.total_income, 30000.0);
        assert_eq!(snapshot.totals.total_expenses, 15000.0);
        assert_eq!(snapshot.totals.balance, 15000.0);
        assert_eq!(snapshot.totals.savings_rate_percent, 50);
        assert_eq!(snapshot.balance_tone, Tone::Positive);
    }

    #[test]
    fn test_empty_store() {
        let snapshot = refresh(&RecordStore::new(MemoryStorage::new()));

        assert_eq!(snapshot.totals.total_income, 0.0);
        assert_eq!(snapshot.totals.total_expenses, 0.0);
        assert_eq!(snapshot.totals.savings_rate_percent, 0);
        assert!(snapshot.recent_incomes.is_empty());
        assert!(snapshot.goals.is_empty());
    }

    #[test]
    fn test_expenses_without_income() {
        let mut store = RecordStore::new(MemoryStorage::new());
        add(&mut store, TransactionKind::Expense, 400.0, "2025-05-05");

        let snapshot = refresh(&store);
        assert_eq!(snapshot.totals.balance, -400.0);
        assert_eq!(snapshot.totals.savings_rate_percent, 0);
        assert_eq!(snapshot.balance_tone, Tone::Negative);
    }

    #[test]
    fn test_recent_lists_cap_at_three_newest() {
        let mut store = seeded();
        add(&mut store, TransactionKind::Income, 1.0, "2025-04-01");
        add(&mut store, TransactionKind::Income, 2.0, "2025-04-02");
        store
            .add_forum_post(NewForumPost {
                author: "Lata".to_string(),
                content: "First SIP done".to_string(),
                ..Default::default()
            })
            .unwrap();

        let snapshot = refresh(&store);
        let amounts: Vec<f64> = snapshot.recent_incomes.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![2.0, 1.0, 25000.0]);
        assert_eq!(snapshot.recent_expenses.len(), 2);
        assert_eq!(snapshot.recent_forum_posts.len(), 3);
        assert_eq!(snapshot.recent_forum_posts[0].author, "Lata");
    }

    #[test]
    fn test_refresh_tracks_mutations() {
        let mut store = seeded();
        let before = refresh(&store);

        add(&mut store, TransactionKind::Expense, 15000.0, "2025-03-20");
        let after = refresh(&store);

        assert_eq!(before.totals.savings_rate_percent, 50);
        assert_eq!(after.totals.balance, 0.0);
        assert_eq!(after.totals.savings_rate_percent, 0);
        assert_eq!(after.chart.expenses[2], 30000.0);
    }

    #[test]
    fn test_chart_merges_years() {
        let mut store = RecordStore::new(MemoryStorage::new());
        add(&mut store, TransactionKind::Income, 100.0, "2025-03-01");
        add(&mut store, TransactionKind::Income, 100.0, "2024-03-20");

        assert_eq!(refresh(&store).chart.income[2], 200.0);
    }

    #[test]
    fn test_snapshot_serializes_for_the_chart() {
        let value = serde_json::to_value(refresh(&seeded())).unwrap();

        assert_eq!(value["totals"]["savingsRatePercent"], 50);
        assert_eq!(value["chart"]["labels"][2], "Mar");
        assert_eq!(value["chart"]["income"][2], 30000.0);
        assert_eq!(value["balanceTone"], "positive");
    }
}
