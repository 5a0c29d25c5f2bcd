//! Interval labels shown to the learner before they grade a card.
use super::learning_state::INITIAL_EASINESS;
use super::quality::Quality;
use super::sm2::preview_interval;
use std::collections::BTreeMap;

/// Grades previewed for a card: forgot, hard, easy.
pub const PREVIEW_QUALITIES: [Quality; 3] = [Quality::FORGOT, Quality::HARD, Quality::EASY];

const DAYS_PER_MONTH: f64 = 30.0;

/// Quality (as a string key) to formatted interval, e.g. `{"1": "1d", "5": "16d"}`.
pub type ProjectedIntervals = BTreeMap<String, String>;

/// Formats a day count as `"{n}d"` below 30 days, otherwise as whole months `"{n}mo"`.
pub fn format_interval(days: u32) -> String {
    if days < 30 {
        format!("{}d", days)
    } else {
        let months = (days as f64 / DAYS_PER_MONTH).round_ties_even().max(1.0) as u32;
        format!("{}mo", months)
    }
}

/// Previews every grade in [`PREVIEW_QUALITIES`] and formats the results.
pub fn projected_intervals(repetitions: u32, interval: u32, easiness: f64) -> ProjectedIntervals {
    PREVIEW_QUALITIES
        .iter()
        .map(|&quality| {
            let days = preview_interval(repetitions, interval, easiness, quality);
            (quality.to_string(), format_interval(days))
        })
        .collect()
}

/// Projection for a card the learner has not seen yet.
pub fn projected_intervals_for_new_card() -> ProjectedIntervals {
    projected_intervals(0, 0, INITIAL_EASINESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_interval_days() {
        assert_eq!(format_interval(0), "0d");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(7), "7d");
        assert_eq!(format_interval(29), "29d");
    }

    #[test]
    fn test_format_interval_months() {
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(60), "2mo");
        assert_eq!(format_interval(90), "3mo");
        assert_eq!(format_interval(365), "12mo");
    }

    #[test]
    fn test_format_interval_month_ties() {
        // 1.5 -> 2, 2.5 -> 2
        assert_eq!(format_interval(45), "2mo");
        assert_eq!(format_interval(75), "2mo");
    }

    #[test]
    fn test_new_card_projection() {
        let result = projected_intervals_for_new_card();
        assert_eq!(result.len(), 3);
        assert_eq!(result["1"], "1d");
        assert_eq!(result["3"], "1d");
        assert_eq!(result["5"], "1d");
    }

    #[test]
    fn test_projection_after_two_reviews() {
        let result = projected_intervals(2, 6, 2.5);
        assert_eq!(result["1"], "1d");
        assert_eq!(result["3"], "14d");
        assert_eq!(result["5"], "16d");
    }

    #[test]
    fn test_projection_has_every_preview_grade() {
        for (reps, interval, easiness) in [(0, 0, 2.5), (4, 40, 1.3), (9, u32::MAX, 3.5)] {
            let result = projected_intervals(reps, interval, easiness);
            let keys: Vec<&str> = result.keys().map(String::as_str).collect();
            assert_eq!(keys, ["1", "3", "5"]);
        }
    }

    #[test]
    fn test_projection_json_shape() {
        let json = serde_json::to_string(&projected_intervals_for_new_card()).unwrap();
        assert_eq!(json, r#"{"1":"1d","3":"1d","5":"1d"}"#);
    }
}
