use chrono::{DateTime, NaiveDate, Utc};
use pitaka_domain::{EntityId, Identifiable};

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests. Aggregations never read a clock themselves; they
/// take the reference date as a parameter and callers resolve it here.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn at_millis(millis: i64) -> Self {
        Self(DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(DateTime::<Utc>::UNIX_EPOCH))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Stamps a fresh id for a new list entry: the clock instant in milliseconds,
/// bumped past the list's newest id so same-millisecond creations stay unique.
pub fn stamp_id<T: Identifiable>(clock: &dyn Clock, existing: &[T]) -> EntityId {
    let now = clock.now().timestamp_millis();
    let newest = existing
        .iter()
        .map(|entry| entry.id().as_millis())
        .max()
        .unwrap_or(i64::MIN);
    EntityId::from_millis(now.max(newest.saturating_add(1)))
}
