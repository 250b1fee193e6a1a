use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::loader::Dataset;
use crate::stats::types::DurationStats;
use crate::stats::utility::rounded_mean;

/// Total and rounded mean trip duration in seconds.
#[tracing::instrument(skip(ds), fields(records = ds.len()))]
pub fn compute_duration_stats(ds: &Dataset) -> Result<DurationStats> {
    if ds.is_empty() {
        return Err(BikeshareError::EmptyDataset {
            statistic: "duration",
        });
    }

    let total: u64 = ds
        .trips()
        .iter()
        .map(|t| t.record.trip_duration_seconds)
        .fold(0u64, u64::saturating_add);
    let average = rounded_mean(total, ds.len());

    debug!(total, average, "Duration statistics computed");

    Ok(DurationStats {
        total_duration: total,
        average_duration: average,
    })
}
