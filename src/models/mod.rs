pub mod learning_state;
pub mod projection;
pub mod quality;
pub mod sm2;

pub use learning_state::{INITIAL_EASINESS, LearningState, MIN_EASINESS};
pub use projection::{
    PREVIEW_QUALITIES, ProjectedIntervals, format_interval, projected_intervals,
    projected_intervals_for_new_card,
};
pub use quality::Quality;
pub use sm2::{apply_review, apply_review_at, preview_review};
