//! # Poll Store
//!
//! Correlation store mapping poll ids to their metadata. The router only sees
//! the [`PollStore`] trait, so the in-memory table can be swapped for a
//! persistent backend without touching routing.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Honour poll duration as a time-to-live, add purge_expired
//! - 1.0.0: DashMap-backed store replacing the process-wide map

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use super::poll::{Poll, PollId};

/// Single-key put/get store for open polls
///
/// Implementations must make each call atomic for its key; the router never
/// holds a read across an await point.
pub trait PollStore: Send + Sync {
    /// Insert or overwrite the poll under its own id
    fn put(&self, poll: Poll);

    /// Look up a poll, treating expired entries as absent
    fn get(&self, id: PollId) -> Option<Poll>;

    /// Drop every poll that expired at or before `now`, returning how many were removed
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
pub struct InMemoryPollStore {
    polls: DashMap<PollId, Poll>,
}

impl InMemoryPollStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PollStore for InMemoryPollStore {
    fn put(&self, poll: Poll) {
        self.polls.insert(poll.id, poll);
    }

    fn get(&self, id: PollId) -> Option<Poll> {
        let now = Utc::now();
        let poll = self.polls.get(&id)?;
        if poll.is_expired(now) {
            // Release the read guard before removing to avoid deadlocking the shard
            drop(poll);
            self.polls.remove_if(&id, |_, p| p.is_expired(now));
            return None;
        }
        Some(poll.clone())
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.polls.len();
        self.polls.retain(|_, poll| !poll.is_expired(now));
        before.saturating_sub(self.polls.len())
    }

    fn len(&self) -> usize {
        self.polls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::polls::poll::PollDuration;
    use chrono::Duration;

    fn poll(id: u64, duration: Option<PollDuration>, created_at: DateTime<Utc>) -> Poll {
        Poll::new(
            PollId(id),
            None,
            format!("Question {id}?"),
            duration,
            555,
            created_at,
        )
    }

    #[test]
    fn test_put_then_get() {
        let store = InMemoryPollStore::new();
        assert!(store.is_empty());

        store.put(poll(1, None, Utc::now()));

        let found = store.get(PollId(1)).unwrap();
        assert_eq!(found.question, "Question 1?");
        assert!(store.get(PollId(2)).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = InMemoryPollStore::new();
        store.put(poll(1, None, Utc::now()));

        let mut replacement = poll(1, None, Utc::now());
        replacement.question = "Changed?".to_string();
        store.put(replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(PollId(1)).unwrap().question, "Changed?");
    }

    #[test]
    fn test_expired_poll_is_absent_and_evicted() {
        let store = InMemoryPollStore::new();
        let two_hours_ago = Utc::now() - Duration::hours(2);
        store.put(poll(1, Some(PollDuration::OneHour), two_hours_ago));

        assert_eq!(store.len(), 1);
        assert!(store.get(PollId(1)).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_purge_expired_keeps_open_polls() {
        let store = InMemoryPollStore::new();
        let now = Utc::now();
        store.put(poll(1, Some(PollDuration::OneHour), now - Duration::hours(2)));
        store.put(poll(2, Some(PollDuration::OneDay), now));
        store.put(poll(3, None, now - Duration::weeks(10)));

        assert_eq!(store.purge_expired(now), 1);
        assert_eq!(store.len(), 2);
        assert!(store.get(PollId(2)).is_some());
        assert!(store.get(PollId(3)).is_some());
    }
}
