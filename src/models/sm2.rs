//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Each card has an easiness factor (EF) that is adjusted on every review
//! - Quality grades 0-2: Reset interval and repetitions (card needs relearning)
//! - Quality grades 3-5: Increase interval progressively (1 day → 6 days → EF multiplier)
//! - EF has a minimum value of 1.3
//! - The interval multiplier is the EF *after* this review's adjustment
//!
//! `apply_review` and `preview_review` both go through `transition`, so a
//! preview always shows the interval a real review would store.

use super::learning_state::{LearningState, MIN_EASINESS};
use super::quality::Quality;
use crate::clock::Clock;
use crate::error::Result;
use chrono::{DateTime, TimeDelta, Utc};

const FIRST_INTERVAL: u32 = 1;
const SECOND_INTERVAL: u32 = 6;
/// Interval after a failed recall
const RELEARN_INTERVAL: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    repetitions: u32,
    interval: u32,
    easiness: f64,
}

/// EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at 1.3
fn next_easiness(easiness: f64, quality: Quality) -> f64 {
    let miss = (Quality::MAX - quality.value()) as f64;
    let ef = easiness + (0.1 - miss * (0.08 + miss * 0.02));
    ef.max(MIN_EASINESS)
}

fn transition(repetitions: u32, interval: u32, easiness: f64, quality: Quality) -> Transition {
    let easiness = next_easiness(easiness, quality);

    let (repetitions, interval) = if !quality.is_pass() {
        (0, RELEARN_INTERVAL)
    } else {
        let reps = repetitions.saturating_add(1);
        let interval = match reps {
            1 => FIRST_INTERVAL,
            2 => SECOND_INTERVAL,
            // Ties round to even; the cast saturates at u32::MAX
            _ => (interval as f64 * easiness).round_ties_even() as u32,
        };
        (reps, interval)
    };

    Transition {
        repetitions,
        interval,
        easiness,
    }
}

/// Records a review of `state` with the given quality (0-5), reading "now"
/// from `clock` once.
///
/// Fails with `InvalidQuality` without touching `state` if `quality` is out of range.
pub fn apply_review<C>(state: &mut LearningState, quality: i32, clock: &C) -> Result<()>
where
    C: Clock + ?Sized,
{
    let quality = Quality::new(quality)?;
    commit(state, quality, clock.now());
    Ok(())
}

/// Same as [`apply_review`] with an explicit review instant.
pub fn apply_review_at(state: &mut LearningState, quality: i32, now: DateTime<Utc>) -> Result<()> {
    let quality = Quality::new(quality)?;
    commit(state, quality, now);
    Ok(())
}

/// `now + days`, pinned to the latest representable instant when the sum overflows.
fn due_date(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn commit(state: &mut LearningState, quality: Quality, now: DateTime<Utc>) {
    let next = transition(state.repetitions, state.interval, state.easiness, quality);
    let next_review = due_date(now, next.interval);

    state.easiness = next.easiness;
    state.repetitions = next.repetitions;
    state.interval = next.interval;
    state.next_review = Some(next_review);
    state.last_reviewed = Some(now);
}

/// Interval in days a review with `quality` would give a card in this state.
/// Nothing is mutated and no timestamps are involved.
pub fn preview_review(repetitions: u32, interval: u32, easiness: f64, quality: i32) -> Result<u32> {
    let quality = Quality::new(quality)?;
    Ok(preview_interval(repetitions, interval, easiness, quality))
}

pub(crate) fn preview_interval(repetitions: u32, interval: u32, easiness: f64, quality: Quality) -> u32 {
    transition(repetitions, interval, easiness, quality).interval
}
