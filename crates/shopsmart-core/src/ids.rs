//! Item id generation.
//!
//! Ids are millisecond timestamps. A batch (template load) takes one base
//! timestamp and numbers its items `base, base + 1, ...`. The generator
//! remembers the last id it handed out so a later call in the same
//! millisecond, or a clock that steps backwards, still yields fresh ids.
//! Ids never wrap: once the floor reaches `i64::MAX` the generator reports
//! `CartError::IdsExhausted` instead of handing out a smaller id.

use chrono::Utc;

use crate::error::{CartError, Result};
use crate::item::ItemId;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Monotonic id source.
#[derive(Debug)]
pub struct IdGenerator<C = SystemClock> {
    clock: C,
    last: Option<ItemId>,
}

impl IdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> IdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, last: None }
    }

    /// Never issue an id at or below `floor`.
    ///
    /// Called with the highest id of a freshly loaded list.
    pub fn observe(&mut self, floor: ItemId) {
        self.last = Some(self.last.map_or(floor, |last| last.max(floor)));
    }

    /// Next single id.
    pub fn next_id(&mut self) -> Result<ItemId> {
        self.next_batch(1).map(|ids| ids[0])
    }

    /// `count` consecutive ids sharing one base timestamp.
    ///
    /// Nothing is consumed when the batch would run past `i64::MAX`.
    pub fn next_batch(&mut self, count: usize) -> Result<Vec<ItemId>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let now = self.clock.now_millis();
        let base = match self.last {
            Some(last) if last >= now => last.checked_add(1),
            _ => Some(now),
        };
        let span = i64::try_from(count - 1).ok();
        let range = base
            .zip(span)
            .and_then(|(base, span)| Some((base, base.checked_add(span)?)));
        let (base, end) = range.ok_or(CartError::IdsExhausted)?;
        self.last = Some(end);
        Ok((base..=end).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_uses_sequential_offsets() {
        let mut ids = IdGenerator::with_clock(FixedClock(1_000));
        assert_eq!(ids.next_batch(3).unwrap(), vec![1_000, 1_001, 1_002]);
    }

    #[test]
    fn test_same_millisecond_stays_unique() {
        let mut ids = IdGenerator::with_clock(FixedClock(1_000));
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        let batch = ids.next_batch(2).unwrap();
        assert_eq!(first, 1_000);
        assert_eq!(second, 1_001);
        assert_eq!(batch, vec![1_002, 1_003]);
    }

    #[test]
    fn test_observe_raises_floor() {
        let mut ids = IdGenerator::with_clock(FixedClock(50));
        ids.observe(900);
        assert_eq!(ids.next_id().unwrap(), 901);
        // Observing a lower id never moves the floor back
        ids.observe(10);
        assert_eq!(ids.next_id().unwrap(), 902);
    }

    #[test]
    fn test_empty_batch() {
        let mut ids = IdGenerator::with_clock(FixedClock(5));
        assert!(ids.next_batch(0).unwrap().is_empty());
        assert_eq!(ids.next_id().unwrap(), 5);
    }

    #[test]
    fn test_floor_at_max_is_exhausted() {
        let mut ids = IdGenerator::with_clock(FixedClock(5));
        ids.observe(i64::MAX);
        assert!(matches!(ids.next_id(), Err(CartError::IdsExhausted)));
        assert!(matches!(ids.next_batch(3), Err(CartError::IdsExhausted)));
    }

    #[test]
    fn test_last_ids_below_max_are_still_issued() {
        let mut ids = IdGenerator::with_clock(FixedClock(5));
        ids.observe(i64::MAX - 2);
        // Two ids remain: a batch of three takes nothing
        assert!(ids.next_batch(3).is_err());
        assert_eq!(ids.next_batch(2).unwrap(), vec![i64::MAX - 1, i64::MAX]);
        assert!(ids.next_id().is_err());
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
