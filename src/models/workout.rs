use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One imported workout, as handed over by the workout store.
///
/// `duration_seconds` is an independent field in the source data and need
/// not equal `ended_at - started_at` exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
  /// Opaque identifier, stable across imports.
  pub id: String,
  pub started_at: DateTime<Utc>,
  pub ended_at: DateTime<Utc>,
  pub duration_seconds: f64,
  pub total_distance_km: Option<f64>,
  /// Precomputed intensity metric (average METs in the source data).
  pub training_load_value: Option<f64>,
  /// Explicit average heart rate, when the importer provides one.
  pub average_heartrate: Option<f64>,
  /// Raw heart-rate samples (bpm) recorded during the workout.
  #[serde(default)]
  pub heartrate_samples: Vec<f64>,
}

impl WorkoutRecord {
  /// Average heart rate for load computations. The explicit field wins;
  /// otherwise the strictly positive samples are averaged. No usable
  /// signal averages to 0.
  pub fn effective_average_heartrate(&self) -> f64 {
    if let Some(avg) = self.average_heartrate {
      return avg;
    }
    average(self.heartrate_samples.iter().copied().filter(|hr| *hr > 0.0))
  }

  /// Highest heart-rate sample of this workout, if any were recorded.
  pub fn max_heartrate_sample(&self) -> Option<f64> {
    self.heartrate_samples.iter().copied().reduce(f64::max)
  }
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
  let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
  if count == 0 {
    0.0
  } else {
    sum / count as f64
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn workout(samples: Vec<f64>, explicit: Option<f64>) -> WorkoutRecord {
    let started_at = Utc.with_ymd_and_hms(2022, 3, 12, 9, 0, 0).unwrap();
    WorkoutRecord {
      id: "w1".to_string(),
      started_at,
      ended_at: started_at + chrono::Duration::seconds(1800),
      duration_seconds: 1800.0,
      total_distance_km: None,
      training_load_value: None,
      average_heartrate: explicit,
      heartrate_samples: samples,
    }
  }

  #[test]
  fn explicit_average_wins_over_samples() {
    let w = workout(vec![120.0, 140.0], Some(150.0));
    assert_eq!(w.effective_average_heartrate(), 150.0);
  }

  #[test]
  fn samples_average_skips_non_positive_values() {
    let w = workout(vec![0.0, 120.0, 140.0, -5.0], None);
    assert_eq!(w.effective_average_heartrate(), 130.0);
  }

  #[test]
  fn no_signal_averages_to_zero() {
    let w = workout(vec![], None);
    assert_eq!(w.effective_average_heartrate(), 0.0);

    let w = workout(vec![0.0, 0.0], None);
    assert_eq!(w.effective_average_heartrate(), 0.0);
  }

  #[test]
  fn max_sample_is_none_without_samples() {
    assert_eq!(workout(vec![], None).max_heartrate_sample(), None);
    assert_eq!(
      workout(vec![130.0, 175.0, 160.0], None).max_heartrate_sample(),
      Some(175.0)
    );
  }
}
