use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::filters::weekday_name;
use crate::loader::Dataset;
use crate::stats::types::TimeStats;
use crate::stats::utility::mode;

/// Most popular month, day of week and start hour.
///
/// Ties go to the smaller month or hour and to the lexically smallest day
/// name, so `"Friday"` beats `"Monday"`.
#[tracing::instrument(skip(ds), fields(records = ds.len()))]
pub fn compute_time_stats(ds: &Dataset) -> Result<TimeStats> {
    let empty = || BikeshareError::EmptyDataset { statistic: "time" };
    let trips = ds.trips();

    let month = mode(trips.iter().map(|t| t.month)).ok_or_else(empty)?;
    let day = mode(trips.iter().map(|t| weekday_name(t.day_of_week))).ok_or_else(empty)?;
    let hour = mode(trips.iter().map(|t| t.start_hour())).ok_or_else(empty)?;

    debug!(month, day, hour, "Time statistics computed");

    Ok(TimeStats {
        most_popular_month: month,
        most_popular_day_of_week: day.to_string(),
        most_popular_start_hour: hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::{dataset, record};
    use crate::parser::Schema;

    #[test]
    fn test_time_stats() {
        let ds = dataset(
            vec![
                record("2017-03-06 08:15:00", "A", "B", 1), // Mon
                record("2017-03-07 08:45:00", "A", "B", 1), // Tue
                record("2017-03-13 17:00:00", "A", "B", 1), // Mon
                record("2017-01-02 09:00:00", "A", "B", 1), // Mon
            ],
            Schema::default(),
        );

        let stats = compute_time_stats(&ds).unwrap();
        assert_eq!(stats.most_popular_month, 3);
        assert_eq!(stats.most_popular_day_of_week, "Monday");
        assert_eq!(stats.most_popular_start_hour, 8);
    }

    #[test]
    fn test_time_stats_ties_pick_smallest() {
        let ds = dataset(
            vec![
                record("2017-06-04 23:00:00", "A", "B", 1), // Sun
                record("2017-02-01 05:00:00", "A", "B", 1), // Wed
            ],
            Schema::default(),
        );

        let stats = compute_time_stats(&ds).unwrap();
        assert_eq!(stats.most_popular_month, 2);
        assert_eq!(stats.most_popular_day_of_week, "Sunday");
        assert_eq!(stats.most_popular_start_hour, 5);
    }

    #[test]
    fn test_day_tie_uses_name_order() {
        let ds = dataset(
            vec![
                record("2017-01-02 08:00:00", "A", "B", 1), // Mon
                record("2017-01-06 08:00:00", "A", "B", 1), // Fri
            ],
            Schema::default(),
        );

        assert_eq!(compute_time_stats(&ds).unwrap().most_popular_day_of_week, "Friday");
    }

    #[test]
    fn test_time_stats_is_repeatable() {
        let ds = dataset(
            vec![record("2017-04-11 10:00:00", "A", "B", 1)],
            Schema::default(),
        );
        assert_eq!(compute_time_stats(&ds).unwrap(), compute_time_stats(&ds).unwrap());
    }

    #[test]
    fn test_time_stats_empty() {
        let ds = dataset(vec![], Schema::default());
        let err = compute_time_stats(&ds).unwrap_err();
        assert!(err.is_empty_dataset());
    }
}
