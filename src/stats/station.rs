use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::loader::Dataset;
use crate::stats::types::StationStats;
use crate::stats::utility::mode;

/// Most common start station, end station and `"<start> to <end>"` pair.
#[tracing::instrument(skip(ds), fields(records = ds.len()))]
pub fn compute_station_stats(ds: &Dataset) -> Result<StationStats> {
    let empty = || BikeshareError::EmptyDataset {
        statistic: "station",
    };
    let trips = ds.trips();

    let start = mode(trips.iter().map(|t| t.record.start_station.as_str())).ok_or_else(empty)?;
    let end = mode(trips.iter().map(|t| t.record.end_station.as_str())).ok_or_else(empty)?;
    let combo = mode(
        trips
            .iter()
            .map(|t| format!("{} to {}", t.record.start_station, t.record.end_station)),
    )
    .ok_or_else(empty)?;

    debug!(start, end, combo = %combo, "Station statistics computed");

    Ok(StationStats {
        most_common_start_station: start.to_string(),
        most_common_end_station: end.to_string(),
        most_common_trip_combo: combo,
    })
}
