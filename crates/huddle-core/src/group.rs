use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group produced by a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Generate a new random group ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named set of participants produced by one partition run.
///
/// Members are copied by name, so later roster changes never alter a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier.
    pub id: GroupId,
    /// Display label. Starts as `Group {n}` and may be replaced by decoration.
    pub name: String,
    /// Member names in shuffled order.
    pub members: Vec<String>,
}

impl Group {
    /// Create a group with a fresh id.
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            members,
        }
    }

    /// Default label for the group at the given 1-based ordinal.
    pub fn default_name(ordinal: usize) -> String {
        format!("Group {ordinal}")
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
