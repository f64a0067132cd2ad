//! Random grouping for Huddle.
//!
//! Shuffles a roster into fixed-size groups, optionally asks an external
//! service for fun group names, and exports the result as CSV. Naming is
//! best-effort: whatever goes wrong, the groups keep their default names.

pub mod config;
pub mod decorate;
pub mod engine;
pub mod error;
pub mod export;
/// Gemini-backed implementation of [`GroupNamer`].
pub mod gemini;
pub mod namer;
pub mod partition;

pub use config::{GroupingConfig, NamingConfig};
pub use decorate::{Decoration, apply_names, decorate};
pub use engine::GroupingEngine;
pub use error::{GroupError, GroupResult, NamingError};
pub use export::{EXPORT_MEDIA_TYPE, default_file_name, to_delimited_text};
pub use gemini::GeminiNamer;
pub use namer::{GroupNamer, NamerClient, NamingRequest, NamingStyle};
pub use partition::{clamp_group_size, group_count, partition};
