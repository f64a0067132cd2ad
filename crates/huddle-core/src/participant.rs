use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant within a roster snapshot.
///
/// Every normalization pass draws one random batch token and pairs it with the
/// participant's position, so two entries with the same name never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId {
    /// Token shared by every participant created in the same normalization pass.
    pub batch: Uuid,
    /// Zero-based position of the participant within its batch.
    pub position: usize,
}

impl ParticipantId {
    /// Create an identifier from an explicit batch token and position.
    pub fn new(batch: Uuid, position: usize) -> Self {
        Self { batch, position }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.batch.to_string()[..8], self.position)
    }
}

/// A named person on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Stable identifier for the lifetime of the roster snapshot.
    pub id: ParticipantId,
    /// Display name, always trimmed and non-empty.
    pub name: String,
}

impl Participant {
    /// Create a participant with the given id and name.
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
