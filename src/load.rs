//! Cumulative training load and the suggested week-over-week band
//!
//! The cumulative curve is the running total of daily intensity across the
//! window, a non-decreasing step function. The suggested band brackets the
//! cumulative load of the window of equal length immediately before it,
//! flagging training spikes and drops.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::bucket::{day_window, workout_for_day};
use crate::error::AnalyticsError;
use crate::format::Formatter;
use crate::metrics::{self, IntensitySource, Metric};
use crate::models::{UserProfile, WorkoutRecord};
use crate::series::{DaySeries, SeriesPoint};

/// Healthy training-load band derived from the previous window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestedRange {
  pub lower_bound: f64,
  pub upper_bound: f64,
}

impl SuggestedRange {
  /// Band around a reference cumulative load. A reference window without
  /// any training yields `(0, 0)`.
  pub fn around(reference_load: f64, lower_multiplier: f64, upper_multiplier: f64) -> Self {
    Self {
      lower_bound: reference_load * lower_multiplier,
      upper_bound: reference_load * upper_multiplier,
    }
  }
}

/// Running-total intensity curve over the bucketed day list.
pub fn cumulative_series<F: Formatter>(
  days: &[NaiveDate],
  workouts: &[WorkoutRecord],
  source: IntensitySource,
  profile: &UserProfile,
  formatter: &F,
  label_pattern: &str,
) -> Result<DaySeries, AnalyticsError> {
  let mut values = Vec::with_capacity(days.len());
  let mut labels = Vec::with_capacity(days.len());
  let mut running_total = 0.0;

  for (day_index, day) in days.iter().enumerate() {
    let workout = workout_for_day(workouts, *day);
    running_total += metrics::value_for(workout, Metric::Intensity, source, profile)?;

    values.push(SeriesPoint {
      day_index,
      value: running_total,
    });
    labels.push(formatter.format_date(*day, label_pattern));
  }

  Ok(DaySeries { values, labels })
}

/// Cumulative intensity over the `window_days + 1` days immediately
/// preceding the window that ends at `reference`. Per-day first-match,
/// like the charted window itself.
pub fn reference_cumulative_load(
  reference: NaiveDate,
  window_days: i64,
  workouts: &[WorkoutRecord],
  source: IntensitySource,
  profile: &UserProfile,
) -> Result<f64, AnalyticsError> {
  let previous_end = reference - Duration::days(window_days + 1);
  let days = day_window(previous_end, window_days)?;

  let mut total = 0.0;
  for day in days {
    let workout = workout_for_day(workouts, day);
    total += metrics::value_for(workout, Metric::Intensity, source, profile)?;
  }

  Ok(total)
}
