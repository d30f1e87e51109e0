//! # Records
//!
//! Shapes of everything the dashboard persists. Field names follow the
//! persisted JSON (camelCase), so values written by older builds still decode.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type RecordId = u64;

/// Storage keys. Each collection lives under exactly one key as a JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Incomes,
    Expenses,
    Goals,
    ForumPosts,
    Challenges,
    Vault,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Incomes,
        Collection::Expenses,
        Collection::Goals,
        Collection::ForumPosts,
        Collection::Challenges,
        Collection::Vault,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Collection::Incomes => "incomes",
            Collection::Expenses => "expenses",
            Collection::Goals => "goals",
            Collection::ForumPosts => "forumPosts",
            Collection::Challenges => "challenges",
            Collection::Vault => "vault",
        }
    }

    /// Newest-first collections insert at the head, the rest append at the tail.
    pub fn newest_first(self) -> bool {
        matches!(
            self,
            Collection::Incomes | Collection::Expenses | Collection::ForumPosts
        )
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which side of the ledger a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn collection(self) -> Collection {
        match self {
            TransactionKind::Income => Collection::Incomes,
            TransactionKind::Expense => Collection::Expenses,
        }
    }

    /// Singular noun used in notices, e.g. "income".
    pub fn noun(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Caller input for an income or expense. A missing date means today.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: Option<NaiveDate>,
    pub category: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: RecordId,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
}

impl Goal {
    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }
}

/// Caller input for a goal. `current` is accepted but discarded: new goals start at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: RecordId,
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

/// Caller input for a forum post.
///
/// Only `author` and `content` survive. The store overwrites `date`, `likes` and
/// `comments` so every post starts fresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewForumPost {
    pub author: String,
    pub content: String,
    pub date: Option<NaiveDate>,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

/// Type-dependent part of a challenge. Persisted inline as `"type": "saving", "amount": ..`
/// or `"type": "restriction", "saved": ..`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChallengeKind {
    Saving { amount: f64 },
    Restriction { saved: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub kind: ChallengeKind,
    pub current: u32,
    pub target: u32,
}

/// Challenges a user can join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeTemplate {
    RupeeRise,
    NoSpend,
}

impl ChallengeTemplate {
    pub fn name(self) -> &'static str {
        match self {
            ChallengeTemplate::RupeeRise => "30-Day Rupee Rise",
            ChallengeTemplate::NoSpend => "No-Spend Week",
        }
    }

    pub(crate) fn instantiate(self, id: RecordId) -> Challenge {
        let (kind, current, target) = match self {
            ChallengeTemplate::RupeeRise => (ChallengeKind::Saving { amount: 0.0 }, 1, 30),
            ChallengeTemplate::NoSpend => (ChallengeKind::Restriction { saved: 0.0 }, 0, 7),
        };

        Challenge {
            id,
            name: self.name().to_string(),
            kind,
            current,
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    pub id: RecordId,
    pub title: String,
    /// Sealed by a [`crate::vault::Cipher`], never plaintext.
    pub credential: String,
    pub created_at: DateTime<Utc>,
}

/// Display preference stored beside the collections under the `theme` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const KEY: &'static str = "theme";

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
