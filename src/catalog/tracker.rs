//! Request bookkeeping: in-flight deduplication, a bounded response cache
//! and stale-response detection.
//!
//! The tracker remembers the most recently requested key. A response whose key
//! differs from it is stale and must not reach the view, regardless of the
//! order in which responses arrive.

use std::collections::{BTreeSet, VecDeque};

use crate::domain::Result;

/// What to do after [`RequestTracker::request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<V> {
    /// Not cached and not in flight: send the request.
    Dispatch,
    /// An identical request is already in flight: wait for it.
    InFlight,
    /// Served from the cache.
    Cached(V),
}

/// What to do with a completed response.
#[derive(Debug)]
pub enum Completion<V> {
    /// The response answers the latest request.
    Current(Result<V>),
    /// A newer request superseded this one.
    Stale,
}

/// Tracks requests keyed by `K` whose successful responses are `V`.
#[derive(Debug, Clone)]
pub struct RequestTracker<K, V> {
    latest: Option<K>,
    in_flight: BTreeSet<K>,
    cache: VecDeque<(K, V)>,
    capacity: usize,
}

impl<K: Ord + Clone, V: Clone> RequestTracker<K, V> {
    /// Creates a tracker caching at most `capacity` responses. Zero disables
    /// caching.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            latest: None,
            in_flight: BTreeSet::new(),
            cache: VecDeque::new(),
            capacity,
        }
    }

    /// Records `key` as the latest request and decides whether to send it.
    pub fn request(&mut self, key: K) -> Lookup<V> {
        self.latest = Some(key.clone());

        if let Some(value) = self.cached(&key) {
            return Lookup::Cached(value.clone());
        }
        if self.in_flight.insert(key) {
            Lookup::Dispatch
        } else {
            Lookup::InFlight
        }
    }

    /// Records the response for `key`.
    ///
    /// Successful values are cached even when stale. Failures are never
    /// cached, so the next request for the key is sent again.
    pub fn complete(&mut self, key: &K, result: Result<V>) -> Completion<V> {
        self.in_flight.remove(key);

        if let Ok(value) = &result {
            self.store(key.clone(), value.clone());
        }

        if self.is_latest(key) {
            Completion::Current(result)
        } else {
            Completion::Stale
        }
    }

    /// Forgets the latest key, so every outstanding response becomes stale.
    pub fn reset_latest(&mut self) {
        self.latest = None;
    }

    #[must_use]
    pub fn is_latest(&self, key: &K) -> bool {
        self.latest.as_ref() == Some(key)
    }

    #[must_use]
    pub const fn latest(&self) -> Option<&K> {
        self.latest.as_ref()
    }

    #[must_use]
    pub fn is_in_flight(&self, key: &K) -> bool {
        self.in_flight.contains(key)
    }

    #[must_use]
    pub fn cached(&self, key: &K) -> Option<&V> {
        self.cache.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn store(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.cache.retain(|(k, _)| *k != key);
        while self.cache.len() >= self.capacity {
            self.cache.pop_front();
        }
        self.cache.push_back((key, value));
    }
}
