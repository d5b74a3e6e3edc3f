//! Bounded, time-ordered event ledger with ring-buffer eviction.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use shepherd_core::constants::MAX_LEDGER_CAPACITY;
use shepherd_core::models::AiEvent;

#[derive(Debug, Clone)]
pub struct EventLedger {
    events: VecDeque<AiEvent>,
    capacity: usize,
}

impl EventLedger {
    /// Capacity is clamped to `1..=MAX_LEDGER_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_LEDGER_CAPACITY);
        Self {
            events: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append an event, returning the oldest one if it had to be evicted.
    pub fn push(&mut self, event: AiEvent) -> Option<AiEvent> {
        let evicted = if self.events.len() >= self.capacity {
            self.events.pop_front()
        } else {
            None
        };
        self.events.push_back(event);
        evicted
    }

    /// Most recently appended event with this id.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut AiEvent> {
        self.events.iter_mut().rev().find(|e| e.id == id)
    }

    /// Drop every event timestamped before `cutoff`. Returns how many were removed.
    pub fn purge_before(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.timestamp >= cutoff);
        before - self.events.len()
    }

    /// Completed responses with `since <= timestamp <= until`, oldest first.
    pub fn responses_between(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Vec<&AiEvent> {
        let mut window: Vec<&AiEvent> = self
            .events
            .iter()
            .filter(|e| e.is_response() && e.timestamp >= since && e.timestamp <= until)
            .collect();
        window.sort_by_key(|e| e.timestamp);
        window
    }

    /// Up to `limit` events, newest first.
    pub fn recent(&self, limit: usize) -> Vec<AiEvent> {
        self.events.iter().rev().take(limit).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
