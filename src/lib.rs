//! Workout analytics core
//!
//! Turns imported workout records into presentation-ready values:
//! - per-metric day series for charting (intensity, distance, duration)
//! - a cumulative training-load curve with a suggested week-over-week band
//! - summary totals with display formatting applied
//!
//! Everything here is a pure transformation over the workouts passed in.
//! Fetching workouts and rendering the results belong to the callers.

pub mod bucket;
pub mod config;
pub mod error;
pub mod format;
pub mod load;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod series;
pub mod summary;

pub use config::AnalyticsConfig;
pub use error::AnalyticsError;
pub use format::{ChronoFormatter, Formatter};
pub use load::SuggestedRange;
pub use metrics::{IntensitySource, Metric};
pub use models::{UserProfile, WorkoutRecord};
pub use pipeline::{AnalyticsPipeline, AnalyticsReport};
pub use series::{DaySeries, SeriesPoint};
pub use summary::{SummaryText, SummaryTotals};
