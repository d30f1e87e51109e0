//! Sample data written into collections that have never been stored.

use chrono::NaiveDate;

use crate::records::{
    Challenge, ChallengeKind, Collection, ForumPost, Goal, Transaction, VaultEntry,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Only called with the literal dates below.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn transaction(id: u64, amount: f64, day: u32, category: &str, note: &str) -> Transaction {
    Transaction {
        id,
        amount,
        date: date(2025, 3, day),
        category: category.to_string(),
        note: Some(note.to_string()),
    }
}

pub fn incomes() -> Vec<Transaction> {
    vec![
        transaction(1, 25000.0, 1, "salary", "Monthly salary"),
        transaction(2, 5000.0, 5, "investment", "Stock dividends"),
    ]
}

pub fn expenses() -> Vec<Transaction> {
    vec![
        transaction(1, 10000.0, 2, "rent", "Monthly rent"),
        transaction(2, 5000.0, 4, "groceries", "Weekly groceries"),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            name: "Emergency Fund".to_string(),
            target: 50000.0,
            current: 30000.0,
            deadline: date(2025, 6, 1),
        },
        Goal {
            id: 2,
            name: "Vacation".to_string(),
            target: 20000.0,
            current: 5000.0,
            deadline: date(2025, 12, 1),
        },
    ]
}

pub fn forum_posts() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: 1,
            author: "Sarah".to_string(),
            content: "Started my investment journey today!".to_string(),
            date: date(2025, 3, 7),
            likes: 5,
            comments: Vec::new(),
        },
        ForumPost {
            id: 2,
            author: "Priya".to_string(),
            content: "Completed the No-Spend Week challenge!".to_string(),
            date: date(2025, 3, 6),
            likes: 3,
            comments: Vec::new(),
        },
    ]
}

pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: 1,
            name: "30-Day Rupee Rise".to_string(),
            kind: ChallengeKind::Saving { amount: 465.0 },
            current: 15,
            target: 30,
        },
        Challenge {
            id: 2,
            name: "No-Spend Week".to_string(),
            kind: ChallengeKind::Restriction { saved: 1000.0 },
            current: 5,
            target: 7,
        },
    ]
}

/// Serialized sample for one collection.
pub fn sample_json(collection: Collection) -> Result<String, serde_json::Error> {
    match collection {
        Collection::Incomes => serde_json::to_string(&incomes()),
        Collection::Expenses => serde_json::to_string(&expenses()),
        Collection::Goals => serde_json::to_string(&goals()),
        Collection::ForumPosts => serde_json::to_string(&forum_posts()),
        Collection::Challenges => serde_json::to_string(&challenges()),
        Collection::Vault => serde_json::to_string(&Vec::<VaultEntry>::new()),
    }
}
