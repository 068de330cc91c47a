//! Calendar-day alignment for chart windows.
//!
//! Workouts start at arbitrary times; charts want a fixed number of
//! day-aligned slots. The window is trailing and inclusive: `window_days`
//! days back through the reference day itself.

use chrono::{Duration, NaiveDate};

use crate::error::AnalyticsError;
use crate::models::WorkoutRecord;

/// The `window_days + 1` calendar days ending at `reference`, oldest first.
pub fn day_window(
  reference: NaiveDate,
  window_days: i64,
) -> Result<Vec<NaiveDate>, AnalyticsError> {
  if window_days < 0 {
    return Err(AnalyticsError::InvalidWindow { days: window_days });
  }

  Ok(
    (0..=window_days)
      .map(|offset| reference - Duration::days(window_days - offset))
      .collect(),
  )
}

/// The workout charted for a calendar day: the first one starting on that
/// day. Same-day follow-up workouts are not summed into the day series;
/// the summary aggregator still counts them.
pub fn workout_for_day(workouts: &[WorkoutRecord], day: NaiveDate) -> Option<&WorkoutRecord> {
  workouts.iter().find(|w| w.started_at.date_naive() == day)
}
