//! Pure aggregation helpers for the dashboard.
//!
//! Everything here is stateless and total: inputs are immutable record
//! slices, outputs are recomputed from scratch on every call. Division by
//! zero and unparsable dates are absorbed with deterministic defaults
//! instead of surfacing errors.

use serde::{Deserialize, Serialize};

/// Canonical month labels, fixed at design time.
/// Month names are deliberately not resolved through a runtime locale.
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Bucket label for records whose date cannot be parsed.
pub const INVALID_MONTH_LABEL: &str = "Invalid";

/// One month's worth of aggregated records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Short month label ("Jan".."Dec", or "Invalid")
    pub month: String,
    /// Number of records that mapped to this label
    pub count: usize,
    /// Last non-zero rate seen in input order (0.0 if none)
    pub rate: f64,
}

/// Record that can be bucketed by month.
pub trait MonthlyRecord {
    /// ISO-8601 date string ("YYYY-MM-DD", optionally with a time part)
    fn date(&self) -> &str;

    /// Optional numeric rate carried by the record
    fn rate(&self) -> Option<f64> {
        None
    }
}

/// Share of `part` in `total` as a percentage, rounded to one decimal.
/// Returns 0.0 when `total` is zero. Negative inputs flow through the
/// signed formula unchanged.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round1(part / total * 100.0)
}

/// Arithmetic mean rounded to one decimal; 0.0 for an empty slice.
pub fn average_hours(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round1(values.iter().sum::<f64>() / values.len() as f64)
}

/// Group records by short month label.
///
/// Buckets appear in first-occurrence order of their label, not calendar
/// order. Per bucket, `count` accumulates and `rate` keeps the last
/// non-zero rate seen in input order (last write wins, no summing or
/// averaging).
pub fn aggregate_monthly<R: MonthlyRecord>(records: &[R]) -> Vec<MonthlyBucket> {
    let mut buckets: Vec<MonthlyBucket> = Vec::new();

    for record in records {
        let label = month_label(record.date());
        let idx = match buckets.iter().position(|b| b.month == label) {
            Some(idx) => idx,
            None => {
                buckets.push(MonthlyBucket {
                    month: label,
                    count: 0,
                    rate: 0.0,
                });
                buckets.len() - 1
            }
        };

        buckets[idx].count += 1;
        if let Some(rate) = record.rate() {
            if rate != 0.0 {
                buckets[idx].rate = rate;
            }
        }
    }

    buckets
}

/// Derive the short month label from an ISO date string.
/// Anything unparsable maps to [`INVALID_MONTH_LABEL`].
fn month_label(date: &str) -> String {
    let date_part = date.split('T').next().unwrap_or(date);
    let month = date_part
        .split('-')
        .nth(1)
        .and_then(|m| m.parse::<usize>().ok());

    match month {
        Some(m) if (1..=12).contains(&m) => MONTH_LABELS[m - 1].to_string(),
        _ => INVALID_MONTH_LABEL.to_string(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        date: &'static str,
        rate: Option<f64>,
    }

    impl MonthlyRecord for Sample {
        fn date(&self) -> &str {
            self.date
        }
        fn rate(&self) -> Option<f64> {
            self.rate
        }
    }

    fn sample(date: &'static str, rate: Option<f64>) -> Sample {
        Sample { date, rate }
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(5.0, 20.0), 25.0);
        assert_eq!(percentage(1.0, 3.0), 33.3);
        assert_eq!(percentage(2.0, 3.0), 66.7);
    }

    #[test]
    fn percentage_applies_signed_formula_to_negatives() {
        assert_eq!(percentage(-1.0, 4.0), -25.0);
        assert_eq!(percentage(1.0, -4.0), -25.0);
    }

    #[test]
    fn average_hours_of_empty_is_zero() {
        assert_eq!(average_hours(&[]), 0.0);
    }

    #[test]
    fn average_hours_rounds_mean() {
        assert_eq!(average_hours(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(average_hours(&[1.0, 2.0]), 1.5);
        assert_eq!(average_hours(&[1.0, 1.0, 2.0]), 1.3);
    }

    #[test]
    fn one_bucket_per_distinct_month() {
        let records = [
            sample("2025-01-03", None),
            sample("2025-01-28", None),
            sample("2025-02-10", None),
        ];
        let buckets = aggregate_monthly(&records);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].month, "Jan");
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].month, "Feb");
        assert_eq!(buckets[1].count, 1);
    }

    // Deliberate behavior: within a month the last non-zero rate
    // overwrites earlier ones. Not a sum, not an average.
    #[test]
    fn last_nonzero_rate_wins_within_month() {
        let records = [
            sample("2025-04-01", Some(5.0)),
            sample("2025-04-15", Some(8.0)),
        ];
        let buckets = aggregate_monthly(&records);
        assert_eq!(buckets[0].rate, 8.0);
    }

    #[test]
    fn zero_and_missing_rates_do_not_overwrite() {
        let records = [
            sample("2025-04-01", Some(5.0)),
            sample("2025-04-15", Some(0.0)),
            sample("2025-04-20", None),
        ];
        let buckets = aggregate_monthly(&records);
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].rate, 5.0);
    }

    #[test]
    fn buckets_follow_first_occurrence_order_not_calendar_order() {
        let records = [
            sample("2025-03-05", None),
            sample("2025-01-09", None),
            sample("2025-03-20", None),
        ];
        let buckets = aggregate_monthly(&records);
        let labels: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(labels, vec!["Mar", "Jan"]);
    }

    #[test]
    fn unparsable_dates_bucket_under_invalid() {
        let records = [
            sample("not-a-date", Some(3.0)),
            sample("", None),
            sample("2025-13-01", None),
        ];
        let buckets = aggregate_monthly(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].month, INVALID_MONTH_LABEL);
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].rate, 3.0);
    }

    #[test]
    fn datetime_strings_use_the_date_part() {
        let records = [sample("2025-06-02T10:15:00Z", None)];
        assert_eq!(aggregate_monthly(&records)[0].month, "Jun");
    }
}
