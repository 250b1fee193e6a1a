//! Dataset loading: fetch a city's trips, derive calendar fields, filter.

use chrono::{Datelike, Timelike, Weekday};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::filters::FilterSelection;
use crate::parser::{Schema, TripRecord};
use crate::source::RecordSource;

/// A trip annotated with the calendar fields derived from its start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub record: TripRecord,
    /// 1 (January) through 12 (December).
    pub month: u32,
    pub day_of_week: Weekday,
}

impl Trip {
    pub fn from_record(record: TripRecord) -> Self {
        let month = record.start_time.month();
        let day_of_week = record.start_time.weekday();
        Trip {
            record,
            month,
            day_of_week,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.record.start_time.hour()
    }
}

/// The filtered trips of one city, in source order. Never mutated after
/// [`Loader`] builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub selection: FilterSelection,
    pub schema: Schema,
    trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(selection: FilterSelection, schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            selection,
            schema,
            trips,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

pub struct Loader<S> {
    source: S,
}

impl<S: RecordSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads from raw filter strings.
    ///
    /// # Errors
    ///
    /// `InvalidFilter` for an unrecognised city, month or day, before any
    /// source is touched. `DataSourceUnavailable` if the city's rows cannot
    /// be fetched.
    pub fn load(&self, city: &str, month: &str, day: &str) -> Result<Dataset> {
        let selection = FilterSelection::validate(city, month, day)?;
        self.load_selection(&selection)
    }

    /// Loads the city of `selection` and keeps the trips matching both its
    /// month and day filters, preserving source order.
    #[tracing::instrument(skip(self), fields(city = %selection.city))]
    pub fn load_selection(&self, selection: &FilterSelection) -> Result<Dataset> {
        let table = self.source.fetch_records(selection.city)?;
        let total = table.records.len();

        let trips: Vec<Trip> = table
            .records
            .into_iter()
            .map(Trip::from_record)
            .filter(|t| selection.month.matches(t.month) && selection.day.matches(t.day_of_week))
            .collect();

        info!(
            total,
            kept = trips.len(),
            month = %selection.month,
            day = %selection.day,
            "Loaded trips"
        );

        Ok(Dataset::new(*selection, table.schema, trips))
    }
}
