// src/error.rs
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("page schema error: {0}")]
    Schema(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no locations found on {url}")]
    NoLocations { url: String },

    /// Scan stopped at the first failed location (`position` is 1-based).
    #[error("location {position} of {total} failed, run stopped: {reason}")]
    LocationFailed { position: usize, total: usize, reason: String },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Administrative total read from a detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Registered,
    Envelopes,
    Valid,
}

impl Field {
    pub fn column(self) -> &'static str {
        use crate::config::consts::*;
        match self {
            Field::Registered => COL_REGISTERED,
            Field::Envelopes => COL_ENVELOPES,
            Field::Valid => COL_VALID,
        }
    }
}

/// Non-fatal condition; the run goes on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    MissingFields { url: String, fields: Vec<Field> },
    UnknownCandidates { url: String, names: Vec<String> },
    ConflictingVotes { url: String, name: String, previous: String, current: String },
    LocationFailed { code: String, url: String, reason: String },
    /// Candidate named like a fixed column; the header repeats that name.
    ReservedName { name: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingFields { url, fields } => {
                let names: Vec<&str> = fields.iter().map(|f| f.column()).collect();
                write!(f, "missing {} on {url}; page structure may have changed", names.join(", "))
            }
            Warning::UnknownCandidates { url, names } => {
                write!(f, "{url} lists candidates outside the universe, votes not captured: {}", names.join(", "))
            }
            Warning::ConflictingVotes { url, name, previous, current } => {
                write!(f, "{url} reports '{name}' twice ({previous} then {current}); keeping {current}")
            }
            Warning::LocationFailed { code, url, reason } => {
                write!(f, "location {code} skipped ({url}): {reason}")
            }
            Warning::ReservedName { name } => {
                write!(f, "candidate '{name}' shares its name with a fixed column; the header lists it twice")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_names_columns_and_address() {
        let w = Warning::MissingFields { url: s!("http://x/1"), fields: vec![Field::Envelopes] };
        assert_eq!(w.to_string(), "missing envelopes on http://x/1; page structure may have changed");
    }

    #[test]
    fn status_error_mentions_address() {
        let e = ScrapeError::from(FetchError::Status { url: s!("http://x/"), status: 404 });
        assert_eq!(e.to_string(), "unexpected HTTP status 404 from http://x/");
    }
}
