//! Text and JSON rendering of statistics and raw pages.
//!
//! Everything here returns a `String`; the caller decides where it goes.

use anyhow::Result;

use crate::filters::{month_name, weekday_name};
use crate::loader::Trip;
use crate::stats::utility::ranked;
use crate::stats::{DurationStats, Hms, StationStats, StatisticsReport, TimeStats, UserStats};

pub const RULE_WIDTH: usize = 80;

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Renders a report as pretty-printed JSON.
pub fn render_json(report: &StatisticsReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_time(stats: &TimeStats) -> String {
    format!(
        "Most Popular Month is: {} ({})\n\nMost Popular Day of the Week is: {}\n\nMost Popular Start Hour is: {}",
        stats.most_popular_month,
        month_name(stats.most_popular_month),
        stats.most_popular_day_of_week,
        stats.most_popular_start_hour
    )
}

pub fn render_station(stats: &StationStats) -> String {
    format!(
        "The most commonly used start station is: {}\n\nThe most commonly used end station is: {}\n\nThe most frequent combination of trips are from {}.",
        stats.most_common_start_station, stats.most_common_end_station, stats.most_common_trip_combo
    )
}

/// `H hours, M minutes and S seconds`.
pub fn format_hms(total_seconds: u64) -> String {
    let hms = Hms::from_seconds(total_seconds);
    format!(
        "{} hours, {} minutes and {} seconds",
        hms.hours, hms.minutes, hms.seconds
    )
}

/// Like [`format_hms`] but drops the hour part below one hour.
pub fn format_short_hms(total_seconds: u64) -> String {
    let hms = Hms::from_seconds(total_seconds);
    if hms.hours > 0 {
        format_hms(total_seconds)
    } else {
        format!("{} minutes and {} seconds", hms.minutes, hms.seconds)
    }
}

pub fn render_duration(stats: &DurationStats) -> String {
    format!(
        "The total trip duration is {}.\n\nThe average trip duration is {}.",
        format_hms(stats.total_duration),
        format_short_hms(stats.average_duration)
    )
}

pub fn render_user(stats: &UserStats) -> String {
    let mut out = String::from("The count of users by type is:\n");
    for (label, count) in ranked(&stats.user_type_counts) {
        out.push_str(&format!("\n{label}: {count}"));
    }

    match &stats.gender_counts {
        Some(genders) => {
            out.push_str("\n\nThe count of users by gender is:\n");
            for (label, count) in ranked(genders) {
                out.push_str(&format!("\n{label}: {count}"));
            }
        }
        None => out.push_str("\n\nThere is no gender column in this dataset."),
    }

    match &stats.birth_year {
        Some(years) => {
            out.push_str(&format!(
                "\n\nThe earliest year of birth is: {}\n\nThe most recent year of birth is: {}\n\nThe most common year of birth is: {}",
                years.earliest, years.most_recent, years.most_common
            ));
        }
        None => out.push_str("\n\nThere are no birth year details in the dataset."),
    }

    out
}

/// Renders one page of raw trips; `first_row` is the dataset index of
/// `trips[0]`.
pub fn render_page(trips: &[Trip], first_row: usize) -> String {
    let mut out = String::new();
    for (offset, trip) in trips.iter().enumerate() {
        let r = &trip.record;
        out.push_str(&format!(
            "#{} {} ({}) | {} -> {} | {}s | {}",
            first_row + offset,
            r.start_time,
            weekday_name(trip.day_of_week),
            r.start_station,
            r.end_station,
            r.trip_duration_seconds,
            if r.user_type.is_empty() { "-" } else { r.user_type.as_str() }
        ));
        if let Some(end) = r.end_time {
            out.push_str(&format!(" | ended {end}"));
        }
        if let Some(gender) = &r.gender {
            out.push_str(&format!(" | {gender}"));
        }
        if let Some(year) = r.birth_year {
            out.push_str(&format!(" | born {year}"));
        }
        out.push('\n');
    }
    out
}
