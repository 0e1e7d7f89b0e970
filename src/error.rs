//! Error types for address enrichment.
//!
//! Every error here is scoped to a single record: the batch driver reports it
//! and moves on to the next record.

use thiserror::Error;

/// A value that cannot be put into canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("unrecognized country '{country}' for {uid}")]
    UnrecognizedCountry { uid: String, country: String },

    #[error("unrecognized state '{state}' for {uid}")]
    UnrecognizedState { uid: String, state: String },

    #[error("malformed zip code '{zipcode}' for {uid}")]
    MalformedZip { uid: String, zipcode: String },
}

/// A lookup collaborator failed to answer at all.
///
/// Misses (unknown zip, no geocode match) are not errors; they come back as
/// `Ok(None)` or an empty address.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("reverse geocoding failed: {0}")]
    Geocoder(String),

    #[error("zip database error: {0}")]
    ZipDatabase(#[from] rusqlite::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Geocoder(err.to_string())
    }
}

/// Why a record was excluded from the write-back.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("lookup failed for {uid}: {source}")]
    Lookup {
        uid: String,
        #[source]
        source: LookupError,
    },
}

impl RecordError {
    pub fn lookup(uid: &str, source: LookupError) -> Self {
        RecordError::Lookup {
            uid: uid.to_string(),
            source,
        }
    }
}
