//! SM-2 spaced repetition scheduling.
//!
//! Pure functions over a per-card [`LearningState`]: record a review, preview
//! the interval a grade would produce, and format intervals for display.
//! Persisting the state and serializing concurrent reviews of the same card
//! are left to the caller.

pub mod clock;
pub mod error;
pub mod export;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ScheduleError, StateFileError};
pub use models::{
    LearningState, ProjectedIntervals, Quality, apply_review, apply_review_at, format_interval,
    preview_review, projected_intervals, projected_intervals_for_new_card,
};
