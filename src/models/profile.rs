use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

/// How far back to look when deriving max heart rate from workout history.
pub const MAX_HEARTRATE_LOOKBACK_DAYS: i64 = 30;

/// The slice of the user profile the analytics care about.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
  /// Maximum heart rate (bpm). 0 means "unknown"; heart-rate based
  /// intensity refuses to run against it.
  pub max_heartrate: f64,
}

impl UserProfile {
  pub fn new(max_heartrate: f64) -> Self {
    Self { max_heartrate }
  }

  /// Derive max heart rate as the highest sample observed across the
  /// trailing 30 days of workouts, 0 when nothing was recorded.
  pub fn from_workouts(workouts: &[WorkoutRecord], reference: NaiveDate) -> Self {
    let cutoff = reference - Duration::days(MAX_HEARTRATE_LOOKBACK_DAYS);

    let max_heartrate = workouts
      .iter()
      .filter(|w| {
        let day = w.started_at.date_naive();
        day >= cutoff && day <= reference
      })
      .filter_map(WorkoutRecord::max_heartrate_sample)
      .fold(0.0, f64::max);

    Self { max_heartrate }
  }
}
