//! Per-workout metric extraction
//!
//! Pure functions from one workout record (or none, for an empty day) to a
//! single numeric value. All values are non-negative for well-formed input;
//! missing data extracts as 0, never as an error.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::models::{UserProfile, WorkoutRecord};

/// Exponent of the heart-rate session-load power law.
pub const SESSION_LOAD_EXPONENT: f64 = 0.52936;

/// The metric a chart series is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
  Intensity,
  Distance,
  Duration,
}

/// Where intensity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensitySource {
  /// Imported training-load value taken as-is.
  #[default]
  Precomputed,
  /// Session load from duration and relative heart-rate intensity.
  /// Requires a positive max heart rate on the profile.
  HeartRate,
}

/// Training-load score for one workout.
pub fn intensity(
  workout: &WorkoutRecord,
  source: IntensitySource,
  profile: &UserProfile,
) -> Result<f64, AnalyticsError> {
  match source {
    IntensitySource::Precomputed => Ok(workout.training_load_value.unwrap_or(0.0)),
    IntensitySource::HeartRate => session_load(workout, profile),
  }
}

/// Heart-rate session load:
/// `(100 * duration_min * (avg_hr / max_hr)) ^ 0.52936`
///
/// A power-law estimate of training stress from relative heart-rate
/// intensity and session duration. A workout without any heart-rate
/// signal scores 0.
pub fn session_load(
  workout: &WorkoutRecord,
  profile: &UserProfile,
) -> Result<f64, AnalyticsError> {
  if profile.max_heartrate <= 0.0 {
    return Err(AnalyticsError::InvalidProfile {
      max_heartrate: profile.max_heartrate,
    });
  }

  let duration_min = workout.duration_seconds / 60.0;
  let relative_hr = workout.effective_average_heartrate() / profile.max_heartrate;

  Ok((100.0 * duration_min * relative_hr).powf(SESSION_LOAD_EXPONENT))
}

/// Distance in kilometers, 0 when the workout carries none.
pub fn distance_km(workout: &WorkoutRecord) -> f64 {
  workout.total_distance_km.unwrap_or(0.0)
}

/// Duration in minutes, floating for charting.
pub fn duration_min(workout: &WorkoutRecord) -> f64 {
  workout.duration_seconds / 60.0
}

/// Metric value for an optional per-day workout; empty days chart as 0.
pub fn value_for(
  workout: Option<&WorkoutRecord>,
  metric: Metric,
  source: IntensitySource,
  profile: &UserProfile,
) -> Result<f64, AnalyticsError> {
  let Some(workout) = workout else {
    return Ok(0.0);
  };

  match metric {
    Metric::Intensity => intensity(workout, source, profile),
    Metric::Distance => Ok(distance_km(workout)),
    Metric::Duration => Ok(duration_min(workout)),
  }
}
