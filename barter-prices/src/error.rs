use crate::index::IndexKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

/// All errors generated in `barter-prices`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum PricesError {
    #[error("series index must be time based, found {kind} key at position {position}")]
    IndexNotTime { position: usize, kind: IndexKind },

    #[error("series index cannot have duplicates: {0}")]
    DuplicateIndex(DateTime<Utc>),

    #[error("series cannot have non-positive prices: {value} at {time}")]
    NonPositivePrice { value: f64, time: DateTime<Utc> },

    #[error("series cannot be empty")]
    EmptySeries,

    #[error("unsupported frequency: {0}")]
    UnsupportedFrequency(SmolStr),

    #[error("unsupported fill method: {0}")]
    UnsupportedFillMethod(SmolStr),

    #[error("no whole days elapsed between {time_start} and {time_end}")]
    NoElapsedDays {
        time_start: DateTime<Utc>,
        time_end: DateTime<Utc>,
    },
}

/// Broad classification of a [`PricesError`].
///
/// A series with a non time based index is the only [`ErrorKind::Type`] failure, every other
/// failure is a problem with the values supplied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum ErrorKind {
    Type,
    Value,
}

impl PricesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricesError::IndexNotTime { .. } => ErrorKind::Type,
            PricesError::DuplicateIndex(_)
            | PricesError::NonPositivePrice { .. }
            | PricesError::EmptySeries
            | PricesError::UnsupportedFrequency(_)
            | PricesError::UnsupportedFillMethod(_)
            | PricesError::NoElapsedDays { .. } => ErrorKind::Value,
        }
    }
}
