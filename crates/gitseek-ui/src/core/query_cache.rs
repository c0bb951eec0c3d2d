//! Keyed async-resource cache.
//!
//! # Design
//! - One cache per resource kind; keys are the lookup parameter.
//! - Every issued request carries a [`Ticket`]; only the key's current ticket
//!   may attach a result, so superseded responses are dropped.
//! - Responses are filed under their own key and never touch other keys.
//! - Successful results suppress refetching until they are older than the
//!   stale window. Failures are always considered stale.

use std::collections::HashMap;
use std::hash::Hash;

/// Default freshness window for cached results, in milliseconds.
pub const DEFAULT_STALE_TIME_MS: u64 = 60_000;

/// Handle identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheEntry<V, E> {
    outcome: Option<Result<V, E>>,
    in_flight: Option<Ticket>,
    updated_at: Option<u64>,
}

impl<V, E> Default for CacheEntry<V, E> {
    fn default() -> Self {
        Self {
            outcome: None,
            in_flight: None,
            updated_at: None,
        }
    }
}

impl<V, E> CacheEntry<V, E> {
    const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Render-facing view of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus<'a, V, E> {
    /// Nothing requested for this key.
    Idle,
    /// First request in flight, no settled outcome yet.
    Loading,
    /// Last request failed.
    Error(&'a E),
    /// Last request succeeded.
    Success(&'a V),
}

/// Request-deduplicating cache keyed by lookup parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryCache<K, V, E>
where
    K: Eq + Hash,
{
    entries: HashMap<K, CacheEntry<V, E>>,
    stale_time_ms: u64,
    next_ticket: u64,
}

impl<K, V, E> Default for QueryCache<K, V, E>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new(DEFAULT_STALE_TIME_MS)
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Eq + Hash,
{
    /// Create an empty cache with the given freshness window.
    #[must_use]
    pub fn new(stale_time_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time_ms,
            next_ticket: 0,
        }
    }

    /// Start observing `key`; returns a ticket when a request must be issued.
    ///
    /// No ticket is issued while a request for the key is in flight or while
    /// its last successful result is still fresh.
    pub fn observe(&mut self, key: K, now: u64) -> Option<Ticket> {
        let stale_time_ms = self.stale_time_ms;
        let entry = self.entries.entry(key).or_default();
        if entry.in_flight.is_some() {
            return None;
        }
        let fresh = matches!(entry.outcome, Some(Ok(_)))
            && entry
                .updated_at
                .is_some_and(|at| now.saturating_sub(at) < stale_time_ms);
        if fresh {
            return None;
        }
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        entry.in_flight = Some(ticket);
        Some(ticket)
    }

    /// Force a new request for `key`, superseding any outstanding one.
    pub fn refetch(&mut self, key: K) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.entries.entry(key).or_default().in_flight = Some(ticket);
        ticket
    }

    /// Attach a settled outcome. Returns `false` when the ticket was superseded.
    pub fn resolve(&mut self, key: &K, ticket: Ticket, outcome: Result<V, E>, now: u64) -> bool {
        let Some(entry) = self.entries.get_mut(key) else {
            return false;
        };
        if entry.in_flight != Some(ticket) {
            return false;
        }
        entry.in_flight = None;
        entry.outcome = Some(outcome);
        entry.updated_at = Some(now);
        true
    }

    /// Render-facing status for `key`.
    #[must_use]
    pub fn status(&self, key: &K) -> QueryStatus<'_, V, E> {
        match self.entries.get(key) {
            None => QueryStatus::Idle,
            Some(entry) => match &entry.outcome {
                Some(Ok(value)) => QueryStatus::Success(value),
                Some(Err(err)) => QueryStatus::Error(err),
                None if entry.in_flight.is_some() => QueryStatus::Loading,
                None => QueryStatus::Idle,
            },
        }
    }

    /// Whether a request for `key` is outstanding.
    #[must_use]
    pub fn is_fetching(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(CacheEntry::is_fetching)
    }
}
