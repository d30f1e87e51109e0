//! Record identifiers.
//!
//! Ids start from wall-clock milliseconds but are forced strictly upward: never at or
//! below the last id handed out, and never at or below the largest id already present in
//! the target collection. Two appends inside one millisecond therefore still get distinct ids.

use chrono::{DateTime, Utc};

use crate::records::RecordId;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    pub fn next(&mut self, now: DateTime<Utc>, existing_max: RecordId) -> RecordId {
        let millis = RecordId::try_from(now.timestamp_millis()).unwrap_or(0);

        let id = millis
            .max(self.last.saturating_add(1))
            .max(existing_max.saturating_add(1));
        self.last = id;

        id
    }
}
