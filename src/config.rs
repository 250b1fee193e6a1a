use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::filters::City;

/// Maps each city to the CSV file holding its trips.
///
/// Built once at startup and read-only afterwards. File names can be
/// overridden with a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "chicago.csv",
///   "new york city": "nyc_2017.csv"
/// }
/// ```
/// Cities missing from the override keep their default file name.
#[derive(Debug, Clone)]
pub struct CitySources {
    data_dir: PathBuf,
    entries: HashMap<City, String>,
}

impl CitySources {
    /// Default file names for the three bundled datasets, rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let entries = City::ALL
            .into_iter()
            .map(|city| (city, default_file_name(city).to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            entries,
        }
    }

    /// Loads file-name overrides from a JSON file at `path`.
    pub fn load(data_dir: impl Into<PathBuf>, path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read source mapping '{path}'"))?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("source mapping '{path}' is not a JSON object of strings"))?;

        let mut sources = Self::new(data_dir);
        for (name, file) in overrides {
            let city = City::parse(&name)
                .with_context(|| format!("source mapping '{path}' names an unknown city"))?;
            sources.entries.insert(city, file);
        }
        Ok(sources)
    }

    /// Source identifier (file name) configured for `city`.
    pub fn source_id(&self, city: City) -> &str {
        self.entries
            .get(&city)
            .map(String::as_str)
            .unwrap_or_else(|| default_file_name(city))
    }

    /// Full path of the CSV file for `city`.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(self.source_id(city))
    }

    /// Iterates over all `(city, source_id)` pairs in a fixed city order.
    pub fn iter(&self) -> impl Iterator<Item = (City, &str)> {
        City::ALL.into_iter().map(|city| (city, self.source_id(city)))
    }
}

fn default_file_name(city: City) -> &'static str {
    match city {
        City::Chicago => "chicago.csv",
        City::NewYorkCity => "new_york_city.csv",
        City::Washington => "washington.csv",
    }
}
