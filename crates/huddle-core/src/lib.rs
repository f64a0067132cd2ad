//! Core types for Huddle: participants, rosters, and groups.
//!
//! This crate holds the data model shared by the draw and grouping engines.
//! A [`Roster`] is normalized from raw text and then read by both engines;
//! neither engine mutates it.

/// Groups produced by a partition run.
pub mod group;
/// Participant identifiers and records.
pub mod participant;
/// Roster normalization, duplicate detection, and deduplication.
pub mod roster;

/// Re-export group types.
pub use group::{Group, GroupId};
/// Re-export participant types.
pub use participant::{Participant, ParticipantId};
/// Re-export roster types.
pub use roster::{LineFormat, Roster};
