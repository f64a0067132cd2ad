//! Winner history storage and export.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use huddle_core::{Participant, ParticipantId};

/// One successful draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerRecord {
    /// The participant who won.
    pub participant: Participant,
    /// 1-based ordinal of this draw; the oldest record is 1.
    pub drawn_at: usize,
    /// When the draw happened.
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of winners, iterated newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: VecDeque<WinnerRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a winner and return the new record.
    pub fn record(&mut self, participant: Participant) -> &WinnerRecord {
        let record = WinnerRecord {
            participant,
            drawn_at: self.records.len() + 1,
            timestamp: Utc::now(),
        };
        self.records.push_front(record);
        &self.records[0]
    }

    /// Iterate records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &WinnerRecord> {
        self.records.iter()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&WinnerRecord> {
        self.records.front()
    }

    /// Whether the participant with this id has already won.
    pub fn contains(&self, id: ParticipantId) -> bool {
        self.records.iter().any(|r| r.participant.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no one has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Export the history as plain text, newest first.
    pub fn export_text(&self) -> String {
        let mut out = format!("Winners ({})\n", self.len());
        for record in &self.records {
            out.push_str(&format!(
                "NO. {}  {}\n",
                record.drawn_at, record.participant.name
            ));
        }
        out
    }
}
