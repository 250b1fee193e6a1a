use bikeshare_stats::BikeshareError;
use bikeshare_stats::config::CitySources;
use bikeshare_stats::loader::Loader;
use bikeshare_stats::paginate::{PAGE_SIZE, next_page};
use bikeshare_stats::source::CsvSource;
use bikeshare_stats::stats::{
    StatisticsReport, compute_duration_stats, compute_station_stats, compute_time_stats,
    compute_user_stats,
};
use chrono::{Datelike, Weekday};

fn fixtures_loader() -> Loader<CsvSource> {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");
    Loader::new(CsvSource::new(CitySources::new(dir)))
}

#[test]
fn test_full_pipeline_chicago() {
    let ds = fixtures_loader()
        .load("chicago", "all", "all")
        .expect("Failed to load chicago fixture");
    assert_eq!(ds.len(), 12);

    let time = compute_time_stats(&ds).unwrap();
    assert_eq!(time.most_popular_month, 1); // January and March tie on 3
    assert_eq!(time.most_popular_day_of_week, "Monday");
    assert_eq!(time.most_popular_start_hour, 8);

    let station = compute_station_stats(&ds).unwrap();
    assert_eq!(station.most_common_start_station, "Canal St & Adams St");
    assert_eq!(station.most_common_end_station, "Clinton St & Madison St");
    assert_eq!(
        station.most_common_trip_combo,
        "Canal St & Adams St to Clinton St & Madison St"
    );

    let duration = compute_duration_stats(&ds).unwrap();
    assert_eq!(duration.total_duration, 14405);
    assert_eq!(duration.average_duration, 1200);

    let user = compute_user_stats(&ds).unwrap();
    assert_eq!(user.user_type_counts.get("Subscriber"), Some(&8));
    assert_eq!(user.user_type_counts.get("Customer"), Some(&4));
    let genders = user.gender_counts.expect("chicago has a gender column");
    assert_eq!(genders.get("Male"), Some(&5));
    assert_eq!(genders.get("Female"), Some(&4));
    let years = user.birth_year.expect("chicago has a birth year column");
    assert_eq!(years.earliest, 1962);
    assert_eq!(years.most_recent, 2000);
    assert_eq!(years.most_common, 1990);
}

#[test]
fn test_washington_has_no_demographics() {
    let ds = fixtures_loader().load("washington", "all", "all").unwrap();
    assert_eq!(ds.len(), 7);

    let user = compute_user_stats(&ds).unwrap();
    assert!(user.gender_counts.is_none());
    assert!(user.birth_year.is_none());

    let duration = compute_duration_stats(&ds).unwrap();
    assert_eq!(duration.total_duration, 6250);
    assert_eq!(duration.average_duration, 893);

    assert_eq!(compute_time_stats(&ds).unwrap().most_popular_day_of_week, "Saturday");
}

#[test]
fn test_filter_composition_matches_manual_conjunction() {
    let loader = fixtures_loader();
    let all = loader.load("chicago", "all", "all").unwrap();

    for (month_name, month) in [("january", 1), ("march", 3), ("june", 6)] {
        for (day_name, day) in [("monday", Weekday::Mon), ("friday", Weekday::Fri)] {
            let filtered = loader.load("chicago", month_name, day_name).unwrap();
            let expected: Vec<_> = all
                .trips()
                .iter()
                .filter(|t| t.month == month && t.day_of_week == day)
                .cloned()
                .collect();
            assert_eq!(filtered.trips(), expected.as_slice());
        }
    }

    let march_monday = loader.load("chicago", "march", "monday").unwrap();
    assert_eq!(march_monday.len(), 1);
    assert_eq!(march_monday.trips()[0].record.start_time.day(), 6);
}

#[test]
fn test_filters_commute() {
    let loader = fixtures_loader();
    let month_first: Vec<_> = loader
        .load("chicago", "march", "all")
        .unwrap()
        .trips()
        .iter()
        .filter(|t| t.day_of_week == Weekday::Fri)
        .cloned()
        .collect();
    let day_first: Vec<_> = loader
        .load("chicago", "all", "friday")
        .unwrap()
        .trips()
        .iter()
        .filter(|t| t.month == 3)
        .cloned()
        .collect();
    assert_eq!(month_first, day_first);
    assert_eq!(month_first.len(), 1);
}

#[test]
fn test_empty_selection_fails_each_statistic_independently() {
    // No Washington trips on a Sunday in the fixture.
    let ds = fixtures_loader().load("washington", "all", "sunday").unwrap();
    assert!(ds.is_empty());

    assert!(compute_time_stats(&ds).unwrap_err().is_empty_dataset());
    assert!(compute_station_stats(&ds).unwrap_err().is_empty_dataset());
    assert!(compute_duration_stats(&ds).unwrap_err().is_empty_dataset());
    assert!(compute_user_stats(&ds).unwrap_err().is_empty_dataset());
}

#[test]
fn test_missing_city_file_is_unavailable() {
    let err = fixtures_loader()
        .load("new york city", "all", "all")
        .unwrap_err();
    assert!(matches!(err, BikeshareError::DataSourceUnavailable { .. }));
}

#[test]
fn test_invalid_filter_is_rejected_before_loading() {
    let err = fixtures_loader().load("chicago", "december", "all").unwrap_err();
    assert!(matches!(err, BikeshareError::InvalidFilter(_)));
}

#[test]
fn test_paging_reconstructs_dataset() {
    let ds = fixtures_loader().load("chicago", "all", "all").unwrap();

    let mut cursor = 0;
    let mut calls = 0;
    let mut rebuilt = Vec::new();
    loop {
        let (page, next) = next_page(&ds, cursor);
        if page.is_empty() {
            break;
        }
        assert!(page.len() <= PAGE_SIZE);
        calls += 1;
        rebuilt.extend(page.iter().cloned());
        cursor = next;
    }

    assert_eq!(calls, 3);
    assert_eq!(rebuilt.as_slice(), ds.trips());
}

#[test]
fn test_report_is_repeatable() {
    let ds = fixtures_loader().load("chicago", "all", "monday").unwrap();
    let first = StatisticsReport::compute(&ds).unwrap();
    let second = StatisticsReport::compute(&ds).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.records, 6);
}
