//! Conversion of raw bikeshare CSV rows into [`TripRecord`]s.

use std::io::Read;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{BikeshareError, Result};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// One bicycle trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    pub trip_duration_seconds: u64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Which optional columns a source carries. Decided from the header row,
/// never from cell values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut schema = Schema::default();
        for header in headers {
            match header.trim() {
                GENDER_COLUMN => schema.has_gender = true,
                BIRTH_YEAR_COLUMN => schema.has_birth_year = true,
                _ => {}
            }
        }
        schema
    }
}

/// Records of one source plus the optional columns it declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub records: Vec<TripRecord>,
}

/// A single row as it appears in the CSV file.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_record(self) -> std::result::Result<TripRecord, String> {
        let start_time = parse_timestamp(&self.start_time)
            .ok_or_else(|| format!("unparseable Start Time '{}'", self.start_time))?;

        let end_time = match non_blank(self.end_time) {
            Some(raw) => Some(
                parse_timestamp(&raw).ok_or_else(|| format!("unparseable End Time '{raw}'"))?,
            ),
            None => None,
        };

        let trip_duration_seconds = parse_duration(&self.trip_duration)
            .ok_or_else(|| format!("invalid Trip Duration '{}'", self.trip_duration))?;

        Ok(TripRecord {
            start_time,
            end_time,
            start_station: self.start_station,
            end_station: self.end_station,
            trip_duration_seconds,
            user_type: non_blank(self.user_type).unwrap_or_default(),
            gender: non_blank(self.gender),
            birth_year: self
                .birth_year
                .filter(|y| y.is_finite())
                .map(|y| y.round() as i32),
        })
    }
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp, with optional fractional
/// seconds and optionally a `T` separator.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Parses a non-negative duration in seconds. Whole numbers are read exactly;
/// decimal cells such as `489.066` round to the nearest second.
pub fn parse_duration(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(seconds) = raw.parse::<u64>() {
        return Some(seconds);
    }
    let seconds = raw.parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 || seconds.round() >= u64::MAX as f64 {
        return None;
    }
    Some(seconds.round() as u64)
}

/// Reads every row of a bikeshare CSV.
///
/// # Errors
///
/// Returns [`BikeshareError::DataSourceUnavailable`] naming `source_id` if the
/// header is unreadable, a required column is missing, or any row fails to parse.
pub fn parse_trips<R: Read>(source_id: &str, reader: R) -> Result<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let schema = Schema::from_headers(
        rdr.headers()
            .map_err(|e| BikeshareError::unavailable(source_id, e))?
            .iter(),
    );

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|e| BikeshareError::unavailable(source_id, e))?;
        let record = raw
            .into_record()
            .map_err(|msg| BikeshareError::unavailable(source_id, format!("row {}: {msg}", idx + 1)))?;
        records.push(record);
    }

    Ok(TripTable { schema, records })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
