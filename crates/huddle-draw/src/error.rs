//! Error types for the draw engine.

use thiserror::Error;

/// Result type for draw operations.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors that can occur during a draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Nobody is eligible: the roster is empty, or everyone has already won
    /// and repeat winners are not allowed.
    #[error("no eligible participants left to draw ({drawn} of {roster_size} already drawn)")]
    EmptyPool {
        /// Roster size at the time of the draw.
        roster_size: usize,
        /// Number of roster participants already in the winner history.
        drawn: usize,
    },
}
