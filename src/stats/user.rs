use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::loader::Dataset;
use crate::stats::types::{BirthYearStats, UserStats};
use crate::stats::utility::mode;

/// Counts by user type and, when the source carries them, by gender and
/// birth year. Blank cells are skipped rather than counted.
#[tracing::instrument(skip(ds), fields(records = ds.len()))]
pub fn compute_user_stats(ds: &Dataset) -> Result<UserStats> {
    if ds.is_empty() {
        return Err(BikeshareError::EmptyDataset { statistic: "user" });
    }
    let trips = ds.trips();

    let user_type_counts = count_labels(
        trips
            .iter()
            .map(|t| t.record.user_type.as_str())
            .filter(|s| !s.is_empty()),
    );

    let gender_counts = ds
        .schema
        .has_gender
        .then(|| count_labels(trips.iter().filter_map(|t| t.record.gender.as_deref())));

    let birth_year = if ds.schema.has_birth_year {
        birth_year_stats(trips.iter().filter_map(|t| t.record.birth_year))
    } else {
        None
    };

    debug!(
        user_types = user_type_counts.len(),
        has_gender = gender_counts.is_some(),
        has_birth_year = birth_year.is_some(),
        "User statistics computed"
    );

    Ok(UserStats {
        user_type_counts,
        gender_counts,
        birth_year,
    })
}

fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> Option<BirthYearStats> {
    Some(BirthYearStats {
        earliest: years.clone().min()?,
        most_recent: years.clone().max()?,
        most_common: mode(years)?,
    })
}
