//! Error kinds surfaced by the loading and statistics pipeline.

use thiserror::Error;

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// A raw user value that did not match any entry of its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown city '{0}', expected one of: chicago, new york city, washington")]
    UnknownCity(String),

    #[error("unknown month '{0}', expected january through june or 'all'")]
    UnknownMonth(String),

    #[error("unknown day '{0}', expected monday through sunday or 'all'")]
    UnknownDay(String),

    #[error("unrecognised answer '{0}', expected yes or no")]
    UnknownAnswer(String),
}

#[derive(Debug, Error)]
pub enum BikeshareError {
    /// A filter value reached the loader without passing validation.
    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] ValidationError),

    /// The named source could not be opened or one of its rows could not be parsed.
    #[error("data source '{source_id}' is unavailable: {source}")]
    DataSourceUnavailable {
        source_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A statistic was requested over zero records.
    #[error("cannot compute {statistic} statistics over an empty dataset")]
    EmptyDataset { statistic: &'static str },
}

impl BikeshareError {
    pub fn unavailable(
        source_id: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        BikeshareError::DataSourceUnavailable {
            source_id: source_id.into(),
            source: source.into(),
        }
    }

    pub fn is_empty_dataset(&self) -> bool {
        matches!(self, BikeshareError::EmptyDataset { .. })
    }
}
