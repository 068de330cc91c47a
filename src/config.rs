use serde::{Deserialize, Serialize};

use crate::metrics::IntensitySource;

/// Trailing window length in days; the series always carries one more
/// point than this (window + today).
pub const DEFAULT_WINDOW_DAYS: i64 = 6;

/// Acceptable week-over-week cumulative-load variation, ±20%. A stricter
/// ±10% band stays reachable through `AnalyticsConfig`.
pub const DEFAULT_RANGE_LOWER_MULTIPLIER: f64 = 0.8;
pub const DEFAULT_RANGE_UPPER_MULTIPLIER: f64 = 1.2;

/// Day-of-month over short weekday, the axis label format the charts use.
pub const DAY_LABEL_PATTERN: &str = "%d\n%a";

/// Knobs for one analytics run. Constructor-injected alongside the
/// formatter; there is no global registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
  pub window_days: i64,
  pub range_lower_multiplier: f64,
  pub range_upper_multiplier: f64,
  pub day_label_pattern: String,
  pub intensity_source: IntensitySource,
}

impl Default for AnalyticsConfig {
  fn default() -> Self {
    Self {
      window_days: DEFAULT_WINDOW_DAYS,
      range_lower_multiplier: DEFAULT_RANGE_LOWER_MULTIPLIER,
      range_upper_multiplier: DEFAULT_RANGE_UPPER_MULTIPLIER,
      day_label_pattern: DAY_LABEL_PATTERN.to_string(),
      intensity_source: IntensitySource::default(),
    }
  }
}
