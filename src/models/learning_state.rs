//! Per-card learning progress read and written by the SM-2 scheduler.
use super::projection::{ProjectedIntervals, projected_intervals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Easiness factor given to a card the learner has never reviewed.
pub const INITIAL_EASINESS: f64 = 2.5;
/// Easiness never drops below this.
pub const MIN_EASINESS: f64 = 1.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningState {
    /// Consecutive successful reviews since the last failure
    pub repetitions: u32,
    /// Days until the card is due again
    pub interval: u32,
    pub easiness: f64,
    #[serde(default)]
    pub next_review: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Default for LearningState {
    fn default() -> Self {
        Self {
            repetitions: 0,
            interval: 0,
            easiness: INITIAL_EASINESS,
            next_review: None,
            last_reviewed: None,
        }
    }
}

impl LearningState {
    pub fn new(repetitions: u32, interval: u32, easiness: f64) -> Self {
        Self {
            repetitions,
            interval,
            easiness,
            ..Self::default()
        }
    }

    /// True once the card has been through at least one review.
    pub fn is_reviewed(&self) -> bool {
        self.last_reviewed.is_some()
    }

    /// Due once `next_review` has been reached. A card that was never reviewed
    /// has no due date and is not due; use [`LearningState::is_reviewed`] to
    /// pick out new cards.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review.is_some_and(|next| next <= now)
    }

    /// Labels for the intervals each preview grade would produce from this state.
    pub fn projected_intervals(&self) -> ProjectedIntervals {
        projected_intervals(self.repetitions, self.interval, self.easiness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_default_is_new_card() {
        let state = LearningState::default();
        assert_eq!(state.repetitions, 0);
        assert_eq!(state.interval, 0);
        assert_eq!(state.easiness, 2.5);
        assert!(state.next_review.is_none());
        assert!(state.last_reviewed.is_none());
        assert!(!state.is_reviewed());
    }

    #[test]
    fn test_is_due() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let mut state = LearningState::default();
        assert!(!state.is_due(now));
        assert!(!state.is_reviewed());

        state.next_review = Some(now + Duration::days(1));
        assert!(!state.is_due(now));

        state.next_review = Some(now);
        assert!(state.is_due(now));
    }

    #[test]
    fn test_deserialize_without_timestamps() {
        let json = r#"{ "repetitions": 2, "interval": 6, "easiness": 2.5 }"#;
        let state: LearningState = serde_json::from_str(json).unwrap();
        assert_eq!(state, LearningState::new(2, 6, 2.5));
    }
}
