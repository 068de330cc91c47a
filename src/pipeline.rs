//! Analytics pipeline
//!
//! One refresh call takes the workouts and profile a store fetched, and
//! returns everything the screens render: per-metric day series, the
//! cumulative load curve with its suggested band, and formatted summary
//! totals. Synchronous, side-effect free, no state between calls.

use chrono::{NaiveDate, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bucket::day_window;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;
use crate::format::{ChronoFormatter, Formatter};
use crate::load::{cumulative_series, reference_cumulative_load, SuggestedRange};
use crate::metrics::{IntensitySource, Metric};
use crate::models::{UserProfile, WorkoutRecord};
use crate::series::{build_series, DaySeries};
use crate::summary::{format_totals, totals, SummaryText, SummaryTotals};

/// Everything one refresh produces. Immutable, discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
  pub intensity: DaySeries,
  pub distance: DaySeries,
  pub duration: DaySeries,
  pub cumulative_load: DaySeries,
  pub suggested_range: SuggestedRange,
  pub totals: SummaryTotals,
  pub display: SummaryText,
}

impl AnalyticsReport {
  /// Serialize for a presentation layer that consumes JSON.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// The pipeline itself: configuration plus the injected formatting
/// collaborator. Construct once, call per refresh.
pub struct AnalyticsPipeline<F: Formatter> {
  config: AnalyticsConfig,
  formatter: F,
}

impl Default for AnalyticsPipeline<ChronoFormatter> {
  fn default() -> Self {
    Self::new(AnalyticsConfig::default(), ChronoFormatter)
  }
}

impl<F: Formatter> AnalyticsPipeline<F> {
  pub fn new(config: AnalyticsConfig, formatter: F) -> Self {
    Self { config, formatter }
  }

  pub fn config(&self) -> &AnalyticsConfig {
    &self.config
  }

  /// Run the full pipeline against today (UTC).
  pub fn analyze_today(
    &self,
    workouts: &[WorkoutRecord],
    profile: &UserProfile,
  ) -> Result<AnalyticsReport, AnalyticsError> {
    self.analyze(workouts, profile, Utc::now().date_naive())
  }

  /// Run the full pipeline for the window ending at `reference`.
  ///
  /// Fails fast on a negative window or, for heart-rate intensity, on a
  /// profile without a positive max heart rate. No partial reports.
  pub fn analyze(
    &self,
    workouts: &[WorkoutRecord],
    profile: &UserProfile,
    reference: NaiveDate,
  ) -> Result<AnalyticsReport, AnalyticsError> {
    let source = self.config.intensity_source;

    if source == IntensitySource::HeartRate && profile.max_heartrate <= 0.0 {
      return Err(AnalyticsError::InvalidProfile {
        max_heartrate: profile.max_heartrate,
      });
    }

    let days = day_window(reference, self.config.window_days)?;
    debug!(
      "analytics refresh: {} workouts across {} day buckets ending {}",
      workouts.len(),
      days.len(),
      reference
    );

    let pattern = self.config.day_label_pattern.as_str();

    let intensity = build_series(
      &days,
      workouts,
      Metric::Intensity,
      source,
      profile,
      &self.formatter,
      pattern,
    )?;
    let distance = build_series(
      &days,
      workouts,
      Metric::Distance,
      source,
      profile,
      &self.formatter,
      pattern,
    )?;
    let duration = build_series(
      &days,
      workouts,
      Metric::Duration,
      source,
      profile,
      &self.formatter,
      pattern,
    )?;

    let cumulative_load =
      cumulative_series(&days, workouts, source, profile, &self.formatter, pattern)?;

    let reference_load = reference_cumulative_load(
      reference,
      self.config.window_days,
      workouts,
      source,
      profile,
    )?;
    let suggested_range = SuggestedRange::around(
      reference_load,
      self.config.range_lower_multiplier,
      self.config.range_upper_multiplier,
    );

    let totals = totals(workouts, source, profile)?;
    let display = format_totals(&totals, &self.formatter);

    Ok(AnalyticsReport {
      intensity,
      distance,
      duration,
      cumulative_load,
      suggested_range,
      totals,
      display,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 3, 14).unwrap()
  }

  fn workout_on(day: NaiveDate, load: f64, distance_km: f64, duration_seconds: f64) -> WorkoutRecord {
    let started_at = day.and_hms_opt(8, 0, 0).unwrap().and_utc();
    WorkoutRecord {
      id: day.to_string(),
      started_at,
      ended_at: started_at + Duration::seconds(duration_seconds as i64),
      duration_seconds,
      total_distance_km: Some(distance_km),
      training_load_value: Some(load),
      average_heartrate: None,
      heartrate_samples: vec![],
    }
  }

  #[test]
  fn empty_window_renders_a_usable_zero_chart() {
    // Scenario: 6-day window, no workouts at all
    let pipeline = AnalyticsPipeline::default();
    let report = pipeline
      .analyze(&[], &UserProfile::default(), reference())
      .unwrap();

    assert_eq!(report.intensity.len(), 7);
    assert_eq!(report.intensity.labels.len(), 7);
    assert!(report.intensity.values.iter().all(|p| p.value == 0.0));
    assert!(report.distance.values.iter().all(|p| p.value == 0.0));
    assert!(report.duration.values.iter().all(|p| p.value == 0.0));
    assert!(report.cumulative_load.values.iter().all(|p| p.value == 0.0));
    assert_eq!(report.suggested_range, SuggestedRange::default());
    assert_eq!(report.totals, SummaryTotals::default());
  }

  #[test]
  fn single_workout_populates_its_day_only() {
    // Scenario: one workout on day index 3 of a 7-point window
    let workouts = vec![workout_on(reference() - Duration::days(3), 42.0, 5.2, 1800.0)];
    let pipeline = AnalyticsPipeline::default();
    let report = pipeline
      .analyze(&workouts, &UserProfile::default(), reference())
      .unwrap();

    let intensity: Vec<f64> = report.intensity.values.iter().map(|p| p.value).collect();
    assert_eq!(intensity, vec![0.0, 0.0, 0.0, 42.0, 0.0, 0.0, 0.0]);

    let distance: Vec<f64> = report.distance.values.iter().map(|p| p.value).collect();
    assert_eq!(distance, vec![0.0, 0.0, 0.0, 5.2, 0.0, 0.0, 0.0]);

    let duration: Vec<f64> = report.duration.values.iter().map(|p| p.value).collect();
    assert_eq!(duration, vec![0.0, 0.0, 0.0, 30.0, 0.0, 0.0, 0.0]);

    assert_eq!(report.totals.intensity_total, 42.0);
    assert_eq!(report.display.intensity, "42 pts");
    assert_eq!(report.display.distance, "5.2 km");
    assert_eq!(report.display.duration, "30:00 min");
  }

  #[test]
  fn suggested_band_brackets_the_previous_window() {
    // Scenario: previous window cumulative intensity 100, ±20% band
    let workouts = vec![
      workout_on(NaiveDate::from_ymd_opt(2022, 3, 2).unwrap(), 60.0, 0.0, 0.0),
      workout_on(NaiveDate::from_ymd_opt(2022, 3, 6).unwrap(), 40.0, 0.0, 0.0),
    ];
    let pipeline = AnalyticsPipeline::default();
    let report = pipeline
      .analyze(&workouts, &UserProfile::default(), reference())
      .unwrap();

    assert_eq!(report.suggested_range.lower_bound, 80.0);
    assert_eq!(report.suggested_range.upper_bound, 120.0);
  }

  #[test]
  fn heartrate_intensity_without_max_heartrate_is_a_hard_error() {
    // Scenario: heart-rate intensity requested against an unknown max HR
    let config = AnalyticsConfig {
      intensity_source: IntensitySource::HeartRate,
      ..AnalyticsConfig::default()
    };
    let pipeline = AnalyticsPipeline::new(config, ChronoFormatter);

    let workouts = vec![workout_on(reference(), 42.0, 5.2, 1800.0)];
    let result = pipeline.analyze(&workouts, &UserProfile::new(0.0), reference());

    assert_eq!(
      result,
      Err(AnalyticsError::InvalidProfile { max_heartrate: 0.0 })
    );
  }

  #[test]
  fn negative_window_is_rejected() {
    let config = AnalyticsConfig {
      window_days: -3,
      ..AnalyticsConfig::default()
    };
    let pipeline = AnalyticsPipeline::new(config, ChronoFormatter);

    let result = pipeline.analyze(&[], &UserProfile::default(), reference());
    assert_eq!(result, Err(AnalyticsError::InvalidWindow { days: -3 }));
  }

  #[test]
  fn identical_inputs_yield_identical_reports() {
    let workouts = vec![
      workout_on(reference() - Duration::days(1), 15.0, 4.1, 1500.0),
      workout_on(reference() - Duration::days(4), 33.0, 8.0, 2700.0),
    ];
    let pipeline = AnalyticsPipeline::default();

    let first = pipeline
      .analyze(&workouts, &UserProfile::default(), reference())
      .unwrap();
    let second = pipeline
      .analyze(&workouts, &UserProfile::default(), reference())
      .unwrap();

    assert_eq!(first, second);
  }

  #[test]
  fn cumulative_curve_never_decreases() {
    let workouts = vec![
      workout_on(reference() - Duration::days(6), 12.0, 0.0, 600.0),
      workout_on(reference() - Duration::days(3), 42.0, 0.0, 1800.0),
      workout_on(reference(), 9.0, 0.0, 900.0),
    ];
    let pipeline = AnalyticsPipeline::default();
    let report = pipeline
      .analyze(&workouts, &UserProfile::default(), reference())
      .unwrap();

    let values: Vec<f64> = report
      .cumulative_load
      .values
      .iter()
      .map(|p| p.value)
      .collect();
    for pair in values.windows(2) {
      assert!(pair[1] >= pair[0], "cumulative curve decreased: {:?}", values);
    }
    assert_eq!(*values.last().unwrap(), 63.0);
  }

  #[test]
  fn report_serializes_for_the_presentation_layer() {
    let pipeline = AnalyticsPipeline::default();
    let report = pipeline
      .analyze(&[], &UserProfile::default(), reference())
      .unwrap();

    let json = report.to_json();
    let parsed: AnalyticsReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
  }
}
