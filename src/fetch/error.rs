use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid latitude {0}, must be within [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Invalid longitude {0}, must be within [-180, 180]")]
    InvalidLongitude(f64),

    #[error("Date range start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("No daily variables requested")]
    NoVariables,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode archive response body")]
    BodyDecode(#[source] reqwest::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
}

/// The archive answered with a success status but the payload shape is wrong.
/// Recovered the same way as any other fetch failure: the city is skipped.
#[derive(Debug, Error)]
pub enum MalformedResponse {
    #[error("Response has no 'daily' block")]
    MissingDailyBlock,

    #[error("Response is missing the '{0}' daily series")]
    MissingSeries(&'static str),

    #[error("Daily series '{variable}' has {found} entries, expected {expected} to match 'time'")]
    LengthMismatch {
        variable: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Unparseable date '{value}' in daily time axis")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
