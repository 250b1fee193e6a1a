//! Value types returned by the statistics engine.

use std::collections::BTreeMap;

use serde::Serialize;

/// Most frequent travel times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    /// 1 (January) through 12 (December).
    pub most_popular_month: u32,
    /// Full day name, e.g. `"Monday"`.
    pub most_popular_day_of_week: String,
    /// 0 through 23.
    pub most_popular_start_hour: u32,
}

/// Most frequent stations and station pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: String,
    pub most_common_end_station: String,
    /// `"<start> to <end>"`.
    pub most_common_trip_combo: String,
}

/// Trip duration aggregates in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    pub total_duration: u64,
    pub average_duration: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics.
///
/// `gender_counts` and `birth_year` are `None` when the source has no such
/// column. A present column whose cells are all blank yields an empty
/// `gender_counts` map and a `None` birth-year summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_type_counts: BTreeMap<String, usize>,
    pub gender_counts: Option<BTreeMap<String, usize>>,
    pub birth_year: Option<BirthYearStats>,
}

/// A duration split into hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Hms {
    pub fn from_seconds(total: u64) -> Self {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        Hms {
            hours,
            minutes,
            seconds,
        }
    }
}

/// All four sub-reports for one dataset. Computed, shown, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    pub records: usize,
    pub time: TimeStats,
    pub station: StationStats,
    pub duration: DurationStats,
    pub user: UserStats,
}
