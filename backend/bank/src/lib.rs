//! # Bank
//!
//! Record store behind the finance dashboard.
//!
//! ## Collections
//!
//! Every collection is one JSON array under one storage key.
//!
//! | Key | Record | Order |
//! |---|---|---|
//! | `incomes`, `expenses` | [`Transaction`] | newest first |
//! | `goals` | [`Goal`] | insertion |
//! | `forumPosts` | [`ForumPost`] | newest first |
//! | `challenges` | [`Challenge`] | insertion |
//! | `vault` | [`VaultEntry`] | insertion |
//!
//! The `theme` key sits beside them and holds a bare `dark` or `light`.
//!
//! ## Rules
//!
//! - A key that has never been written is seeded with sample data on open. A key holding
//!   anything, even `[]` or garbage, is never reseeded.
//! - Garbage under a key reads as an empty collection. See [`store::decode_or_empty`].
//! - Ids come from wall-clock milliseconds, bumped past the last issued id and the
//!   collection's largest id.
//! - New goals start at `current = 0`. New forum posts start today with no likes and no
//!   comments. Whatever the caller passed for those fields is dropped.
//! - Nothing is ever deleted. The only in-place edit is goal progress.
//! - Input is trusted. Validation belongs to whoever collects it.
//!
//! ## Example
//!
//! ```
//! use bank::{MemoryStorage, NewTransaction, RecordStore, TransactionKind};
//!
//! let mut store = RecordStore::open(MemoryStorage::new())?;
//! store.add_transaction(
//!     TransactionKind::Income,
//!     NewTransaction { amount: 1500.0, category: "gift".into(), ..Default::default() },
//! )?;
//!
//! assert_eq!(store.incomes()[0].amount, 1500.0);
//! # Ok::<(), bank::StoreError>(())
//! ```
//!
//! Records only enter a collection through its own typed method:
//!
//! ```compile_fail
//! use bank::{Collection, MemoryStorage, RecordStore, Transaction};
//!
//! let mut store = RecordStore::new(MemoryStorage::new());
//! store.append(Collection::Goals, |id| Transaction {
//!     id,
//!     amount: 1.0,
//!     date: "2025-01-01".parse().unwrap(),
//!     category: "misc".into(),
//!     note: None,
//! });
//! ```

pub mod error;
pub mod ids;
pub mod records;
pub mod seed;
pub mod storage;
pub mod store;
pub mod vault;

pub use error::StoreError;
pub use records::{
    Challenge, ChallengeKind, ChallengeTemplate, Collection, Comment, ForumPost, Goal,
    NewForumPost, NewGoal, NewTransaction, RecordId, Theme, Transaction, TransactionKind,
    VaultEntry,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::RecordStore;
