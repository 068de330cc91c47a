//! Window-wide summary totals
//!
//! Reduces every workout in the caller-supplied window into three totals
//! and the display strings the presentation layer renders as-is. Unlike
//! the day series, the summary sums all same-day workouts.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::format::Formatter;
use crate::metrics::{self, IntensitySource};
use crate::models::{UserProfile, WorkoutRecord};

/// Raw sums over a window of workouts. Recomputed on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryTotals {
  pub intensity_total: f64,
  pub distance_total_km: f64,
  pub duration_total_seconds: f64,
}

/// Display strings for the summary totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryText {
  /// Integer-rounded training load, e.g. `"42 pts"`.
  pub intensity: String,
  /// One decimal place, e.g. `"5.2 km"`.
  pub distance: String,
  /// `"H:MM"` from one hour up, `"M:SS min"` below.
  pub duration: String,
}

/// Sum every workout in the window. Empty input yields all-zero totals.
pub fn totals(
  workouts: &[WorkoutRecord],
  source: IntensitySource,
  profile: &UserProfile,
) -> Result<SummaryTotals, AnalyticsError> {
  let mut result = SummaryTotals::default();

  for workout in workouts {
    result.intensity_total += metrics::intensity(workout, source, profile)?;
    result.distance_total_km += metrics::distance_km(workout);
    result.duration_total_seconds += workout.duration_seconds;
  }

  Ok(result)
}

/// Apply display rounding and unit labels.
pub fn format_totals<F: Formatter>(totals: &SummaryTotals, formatter: &F) -> SummaryText {
  SummaryText {
    intensity: format!("{} pts", totals.intensity_total.round() as i64),
    distance: format!("{} km", formatter.format_number(totals.distance_total_km, 1)),
    duration: duration_text(totals.duration_total_seconds),
  }
}

fn duration_text(total_seconds: f64) -> String {
  let total_seconds = total_seconds.round() as i64;

  if total_seconds >= 3600 {
    format!("{}:{:02}", total_seconds / 3600, (total_seconds % 3600) / 60)
  } else {
    format!("{}:{:02} min", total_seconds / 60, total_seconds % 60)
  }
}
