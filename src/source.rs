//! Suppliers of trip records.
//!
//! [`RecordSource`] is the seam between the loader and wherever rows live.
//! [`CsvSource`] reads the city files from disk; [`MemorySource`] serves
//! pre-built tables and backs the tests.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::debug;

use crate::config::CitySources;
use crate::error::{BikeshareError, Result};
use crate::filters::City;
use crate::parser::{TripTable, parse_trips};

/// Fetches the ordered rows for one city.
pub trait RecordSource {
    /// Returns every record for `city` in source order.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::DataSourceUnavailable`] if the source cannot be
    /// opened or parsed.
    fn fetch_records(&self, city: City) -> Result<TripTable>;
}

/// Reads `<data_dir>/<file>` for each city as configured in [`CitySources`].
pub struct CsvSource {
    sources: CitySources,
}

impl CsvSource {
    pub fn new(sources: CitySources) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &CitySources {
        &self.sources
    }
}

impl RecordSource for CsvSource {
    fn fetch_records(&self, city: City) -> Result<TripTable> {
        let source_id = self.sources.source_id(city);
        let path: PathBuf = self.sources.path_for(city);
        debug!(city = %city, path = %path.display(), "Opening trip file");

        let file = File::open(&path).map_err(|e| BikeshareError::unavailable(source_id, e))?;
        parse_trips(source_id, BufReader::new(file))
    }
}

/// In-memory tables keyed by city. Cities without a table are unavailable.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    tables: HashMap<City, TripTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, city: City, table: TripTable) -> Self {
        self.tables.insert(city, table);
        self
    }
}

impl RecordSource for MemorySource {
    fn fetch_records(&self, city: City) -> Result<TripTable> {
        self.tables
            .get(&city)
            .cloned()
            .ok_or_else(|| BikeshareError::unavailable(city.key(), "no table registered"))
    }
}
