//! Statistics engine.
//!
//! Four independent, read-only computations over a [`Dataset`]: travel
//! times, stations, trip durations and user demographics. Each one fails
//! with `EmptyDataset` on its own, so a caller can show whichever succeed.
//! Modes are built from an explicit frequency table and break ties toward
//! the smallest value.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::compute_duration_stats;
pub use station::compute_station_stats;
pub use time::compute_time_stats;
pub use types::{
    BirthYearStats, DurationStats, Hms, StationStats, StatisticsReport, TimeStats, UserStats,
};
pub use user::compute_user_stats;

use crate::error::Result;
use crate::loader::Dataset;

impl StatisticsReport {
    /// Runs all four computations. Fails on the first error, which for a
    /// loaded dataset can only be `EmptyDataset`.
    pub fn compute(ds: &Dataset) -> Result<Self> {
        Ok(StatisticsReport {
            records: ds.len(),
            time: compute_time_stats(ds)?,
            station: compute_station_stats(ds)?,
            duration: compute_duration_stats(ds)?,
            user: compute_user_stats(ds)?,
        })
    }
}
