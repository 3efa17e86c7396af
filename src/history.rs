//! Trend series for metric charts

use chrono::{Days, NaiveDate};
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Default chart window
pub const DEFAULT_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// `days` daily points ending at `end`, oldest first, values in `[10, 60)`
///
/// Dates that would precede the calendar's minimum are skipped.
pub fn historical_series<R: RngExt + ?Sized>(
    days: u32,
    end: NaiveDate,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    (0..days)
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(u64::from(back))))
        .map(|date| HistoryPoint {
            date,
            value: rng.random_range(10.0..60.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn dates_are_consecutive_and_end_today() {
        let end = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let series = historical_series(DEFAULT_DAYS, end, &mut rng);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2026, 2, 24).unwrap());
        assert_eq!(series[6].date, end);
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn values_in_chart_range() {
        let end = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for point in historical_series(90, end, &mut rng) {
            assert!((10.0..60.0).contains(&point.value));
        }
    }

    #[test]
    fn zero_days_is_empty() {
        let end = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(historical_series(0, end, &mut rng).is_empty());
    }

    #[test]
    fn dates_serialize_as_plain_days() {
        let point = HistoryPoint {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            value: 12.5,
        };
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"date":"2026-10-16","value":12.5}"#
        );
    }
}
