use serde::{Deserialize, Serialize};

/// Errors the analytics pipeline can fail with. Sparse or missing fitness
/// data is not an error anywhere in this crate; empty days chart as zero.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum AnalyticsError {
  /// Window length is negative. Fails fast, no partial result.
  #[error("Invalid window: {days} days")]
  InvalidWindow { days: i64 },

  /// Heart-rate based intensity was requested without a usable max heart
  /// rate. Callers decide whether to surface a warning or retry with the
  /// precomputed intensity source.
  #[error("Invalid profile: max heart rate must be positive, got {max_heartrate}")]
  InvalidProfile { max_heartrate: f64 },
}
