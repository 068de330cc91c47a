//! Day series construction
//!
//! Builds the ordered (day index, value) pairs a chart renders, together
//! with the parallel axis labels. Length is always window + 1 regardless of
//! how many days went untrained.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bucket::workout_for_day;
use crate::error::AnalyticsError;
use crate::format::Formatter;
use crate::metrics::{self, IntensitySource, Metric};
use crate::models::{UserProfile, WorkoutRecord};

/// One chart point. `day_index` 0 is the oldest day of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
  pub day_index: usize,
  pub value: f64,
}

/// Chart-ready values with parallel axis labels, one pair per calendar day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySeries {
  pub values: Vec<SeriesPoint>,
  pub labels: Vec<String>,
}

impl DaySeries {
  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

/// Build the series for one metric across the bucketed day list.
pub fn build_series<F: Formatter>(
  days: &[NaiveDate],
  workouts: &[WorkoutRecord],
  metric: Metric,
  source: IntensitySource,
  profile: &UserProfile,
  formatter: &F,
  label_pattern: &str,
) -> Result<DaySeries, AnalyticsError> {
  let mut values = Vec::with_capacity(days.len());
  let mut labels = Vec::with_capacity(days.len());

  for (day_index, day) in days.iter().enumerate() {
    let workout = workout_for_day(workouts, *day);
    let value = metrics::value_for(workout, metric, source, profile)?;

    values.push(SeriesPoint { day_index, value });
    labels.push(formatter.format_date(*day, label_pattern));
  }

  Ok(DaySeries { values, labels })
}
