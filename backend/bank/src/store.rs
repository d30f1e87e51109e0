//! # Record Store
//!
//! Typed access to the collections over any [`Storage`].
//!
//! Every read decodes the whole collection fresh; every mutation decodes, edits, and
//! writes the whole collection back. Mutations take `&mut self`, which is all the
//! exclusion a single owner needs.

use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::{
    error::StoreError,
    ids::{Clock, IdGenerator, SystemClock},
    records::{
        Challenge, ChallengeTemplate, Collection, ForumPost, Goal, NewForumPost, NewGoal,
        NewTransaction, RecordId, Theme, Transaction, TransactionKind, VaultEntry,
    },
    seed,
    storage::Storage,
    vault::Cipher,
};

/// Anything stored in a collection carries an id.
pub(crate) trait Record: Serialize + DeserializeOwned {
    fn id(&self) -> RecordId;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> RecordId {
                self.id
            }
        })*
    };
}

impl_record!(Transaction, Goal, ForumPost, Challenge, VaultEntry);

/// Decodes a persisted collection, treating absent or malformed content as empty.
///
/// There is no recovery path for a corrupt client-side value, so a structural mismatch
/// yields an empty sequence instead of an error.
pub fn decode_or_empty<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!("Discarding malformed {key}: {e}");
        Vec::new()
    })
}

pub struct RecordStore<S> {
    storage: S,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
}

impl<S: Storage> RecordStore<S> {
    /// Wraps `storage` without seeding.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: Box::new(SystemClock),
            ids: IdGenerator::default(),
        }
    }

    /// Wraps `storage` and seeds any collection that has never been written.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut store = Self::new(storage);
        store.seed()?;

        Ok(store)
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Writes sample data under every collection key that has no value yet.
    ///
    /// Existing values, including empty arrays and corrupt blobs, are left alone.
    pub fn seed(&mut self) -> Result<(), StoreError> {
        for collection in Collection::ALL {
            let key = collection.key();
            if self.storage.get(key).is_some() {
                continue;
            }

            let sample = seed::sample_json(collection).map_err(|source| StoreError::Encode {
                key: key.to_string(),
                source,
            })?;
            self.storage.set(key, sample)?;

            info!("Seeded {key}");
        }

        Ok(())
    }

    /// Raw, possibly malformed, persisted value of a collection.
    pub fn raw(&self, collection: Collection) -> Option<String> {
        self.storage.get(collection.key())
    }

    pub(crate) fn get<T: Record>(&self, collection: Collection) -> Vec<T> {
        let raw = self.storage.get(collection.key());

        decode_or_empty(collection.key(), raw.as_deref())
    }

    pub fn transactions(&self, kind: TransactionKind) -> Vec<Transaction> {
        self.get(kind.collection())
    }

    pub fn incomes(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::Income)
    }

    pub fn expenses(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::Expense)
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.get(Collection::Goals)
    }

    pub fn forum_posts(&self) -> Vec<ForumPost> {
        self.get(Collection::ForumPosts)
    }

    pub fn challenges(&self) -> Vec<Challenge> {
        self.get(Collection::Challenges)
    }

    pub fn vault(&self) -> Vec<VaultEntry> {
        self.get(Collection::Vault)
    }

    pub fn goal(&self, id: RecordId) -> Option<Goal> {
        self.goals().into_iter().find(|goal| goal.id == id)
    }

    pub fn vault_entry(&self, id: RecordId) -> Option<VaultEntry> {
        self.vault().into_iter().find(|entry| entry.id == id)
    }

    /// Assigns an id, inserts at the head or tail per the collection's order, and persists.
    ///
    /// Callers pick the collection, so this stays behind the typed `add_*` methods.
    pub(crate) fn append<T: Record + Clone>(
        &mut self,
        collection: Collection,
        build: impl FnOnce(RecordId) -> T,
    ) -> Result<T, StoreError> {
        let mut records: Vec<T> = self.get(collection);

        let existing_max = records.iter().map(|record| record.id()).max().unwrap_or(0);
        let id = self.ids.next(self.clock.now(), existing_max);
        let record = build(id);

        if collection.newest_first() {
            records.insert(0, record.clone());
        } else {
            records.push(record.clone());
        }

        self.write(collection, &records)?;
        debug!("Appended {id} to {collection}");

        Ok(record)
    }

    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        input: NewTransaction,
    ) -> Result<Transaction, StoreError> {
        let date = input.date.unwrap_or_else(|| self.today());

        self.append(kind.collection(), |id| Transaction {
            id,
            amount: input.amount,
            date,
            category: input.category,
            note: input.note,
        })
    }

    pub fn add_goal(&mut self, input: NewGoal) -> Result<Goal, StoreError> {
        self.append(Collection::Goals, |id| Goal {
            id,
            name: input.name,
            target: input.target,
            current: 0.0,
            deadline: input.deadline,
        })
    }

    pub fn add_forum_post(&mut self, input: NewForumPost) -> Result<ForumPost, StoreError> {
        let date = self.today();

        self.append(Collection::ForumPosts, |id| ForumPost {
            id,
            author: input.author,
            content: input.content,
            date,
            likes: 0,
            comments: Vec::new(),
        })
    }

    pub fn join_challenge(&mut self, template: ChallengeTemplate) -> Result<Challenge, StoreError> {
        self.append(Collection::Challenges, |id| template.instantiate(id))
    }

    pub fn add_vault_entry(
        &mut self,
        title: &str,
        credential: &str,
        cipher: &dyn Cipher,
    ) -> Result<VaultEntry, StoreError> {
        let created_at = self.clock.now();
        let sealed = cipher.seal(credential);

        self.append(Collection::Vault, |id| VaultEntry {
            id,
            title: title.to_string(),
            credential: sealed,
            created_at,
        })
    }

    /// Adds `delta` to a goal's `current` and persists.
    ///
    /// Returns `Ok(None)` without writing anything when no goal has `goal_id`. Whether the
    /// goal is now reached is left to the caller.
    pub fn update_goal_progress(
        &mut self,
        goal_id: RecordId,
        delta: f64,
    ) -> Result<Option<Goal>, StoreError> {
        let mut goals = self.goals();

        let Some(goal) = goals.iter_mut().find(|goal| goal.id == goal_id) else {
            return Ok(None);
        };
        goal.current += delta;
        let updated = goal.clone();

        self.write(Collection::Goals, &goals)?;
        debug!("Goal {goal_id} now at {}", updated.current);

        Ok(Some(updated))
    }

    pub fn theme(&self) -> Option<Theme> {
        self.storage
            .get(Theme::KEY)
            .and_then(|raw| Theme::parse(&raw))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.storage.set(Theme::KEY, theme.as_str().to_string())
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    fn write<T: Serialize>(&mut self, collection: Collection, records: &[T]) -> Result<(), StoreError> {
        let key = collection.key();
        let payload = serde_json::to_string(records).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;

        self.storage.set(key, payload)
    }
}
