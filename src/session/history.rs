//! Log of played rounds, for display and export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::round::Round;
use crate::core::{Choice, Outcome};

/// A played round with its sequence number and timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number within the session.
    pub number: u64,
    pub played_at: DateTime<Utc>,
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

impl RoundRecord {
    /// Create a record for a round.
    pub fn new(number: u64, played_at: DateTime<Utc>, round: &Round) -> Self {
        Self {
            number,
            played_at,
            player: round.player(),
            computer: round.computer(),
            outcome: round.outcome(),
        }
    }
}

/// Log of `RoundRecord`s, optionally bounded.
///
/// A bounded log drops its oldest record when full. A capacity of 0 keeps
/// nothing but still numbers rounds.
#[derive(Clone, Debug, Default)]
pub struct RoundHistory {
    records: VecDeque<RoundRecord>,
    max_records: Option<usize>,
    rounds_seen: u64,
}

impl RoundHistory {
    /// Create a new history holding at most `max_records` records.
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_records.min(64)),
            max_records: Some(max_records),
            rounds_seen: 0,
        }
    }

    /// Create a history that keeps every round.
    pub fn unbounded() -> Self {
        Self {
            records: VecDeque::new(),
            max_records: None,
            rounds_seen: 0,
        }
    }

    /// Record a round played now.
    pub fn push(&mut self, round: &Round) -> Option<&RoundRecord> {
        self.push_at(round, Utc::now())
    }

    /// Record a round played at `played_at`.
    ///
    /// Returns the stored record, or `None` when the history is disabled.
    pub fn push_at(&mut self, round: &Round, played_at: DateTime<Utc>) -> Option<&RoundRecord> {
        self.rounds_seen = self.rounds_seen.saturating_add(1);
        if let Some(max) = self.max_records {
            if max == 0 {
                return None;
            }
            if self.records.len() >= max {
                self.records.pop_front();
            }
        }
        self.records
            .push_back(RoundRecord::new(self.rounds_seen, played_at, round));
        self.records.back()
    }

    /// Get the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the maximum capacity, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.max_records
    }

    /// Rounds seen since the session started, stored or not.
    pub fn rounds_seen(&self) -> u64 {
        self.rounds_seen
    }

    /// Iterate over stored records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter()
    }

    /// Iterate over the newest `n` records, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &RoundRecord> {
        self.records.iter().rev().take(n)
    }
}
