//! Lucky draw engine for Huddle.
//!
//! Picks one winner at a time from a roster. By default a participant can win
//! only once; the engine reports [`DrawError::EmptyPool`] once everyone has
//! been drawn. Winners are kept in an append-only [`History`].

pub mod config;
pub mod engine;
pub mod error;
pub mod history;

pub use config::DrawConfig;
pub use engine::DrawEngine;
pub use error::{DrawError, DrawResult};
pub use history::{History, WinnerRecord};
