use chrono::NaiveDate;

/// Date and number formatting used by the series builder and the summary
/// aggregator. Injected so the presentation layer can own locale decisions.
pub trait Formatter {
  fn format_date(&self, date: NaiveDate, pattern: &str) -> String;
  fn format_number(&self, value: f64, decimal_places: usize) -> String;
}

/// Plain chrono/format backed formatter, locale-agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter;

impl Formatter for ChronoFormatter {
  fn format_date(&self, date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
  }

  fn format_number(&self, value: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, value)
  }
}
