//! HTTP client for the Open-Meteo historical weather archive. One GET per
//! city, no retries; every failure maps to a typed [`FetchError`] so the
//! caller can skip the city and keep going.

use crate::config::{City, DateRange};
use crate::fetch::error::FetchError;
use crate::fetch::response::ArchiveResponse;
use crate::types::observation::DailyObservation;
use crate::types::variable::DailyVariable;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

/// Base URL of the Open-Meteo historical weather archive.
pub const ARCHIVE_ENDPOINT: &str = "https://archive-api.open-meteo.com/v1/archive";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ArchiveClient {
    http: Client,
    endpoint: String,
}

impl ArchiveClient {
    /// Client against the real archive endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(ARCHIVE_ENDPOINT)
    }

    /// Client against an alternative endpoint, e.g. a mock server in tests.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches one city's daily series for the given inclusive date range.
    ///
    /// Issues a single GET with `latitude`, `longitude`, `start_date`,
    /// `end_date` and the comma-joined `daily` variable list as query
    /// parameters (plus `timezone` when the city carries one), then parses
    /// the response body into one [`DailyObservation`] per covered day.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLatitude`], [`FetchError::InvalidLongitude`],
    /// [`FetchError::InvalidDateRange`] or [`FetchError::NoVariables`] before
    /// any I/O when the inputs are out of range. Transport problems surface
    /// as [`FetchError::NetworkRequest`], non-success statuses as
    /// [`FetchError::HttpStatus`], and a success response with a broken
    /// payload shape as [`FetchError::Malformed`].
    pub async fn fetch_daily(
        &self,
        city: &City,
        range: &DateRange,
        variables: &[DailyVariable],
    ) -> Result<Vec<DailyObservation>, FetchError> {
        if !(-90.0..=90.0).contains(&city.latitude) {
            return Err(FetchError::InvalidLatitude(city.latitude));
        }
        if !(-180.0..=180.0).contains(&city.longitude) {
            return Err(FetchError::InvalidLongitude(city.longitude));
        }
        if range.start > range.end {
            return Err(FetchError::InvalidDateRange {
                start: range.start,
                end: range.end,
            });
        }
        if variables.is_empty() {
            return Err(FetchError::NoVariables);
        }

        let mut query: Vec<(&str, String)> = vec![
            ("latitude", city.latitude.to_string()),
            ("longitude", city.longitude.to_string()),
            ("start_date", range.start.format("%Y-%m-%d").to_string()),
            ("end_date", range.end.format("%Y-%m-%d").to_string()),
            ("daily", DailyVariable::join_api_ids(variables)),
        ];
        if let Some(timezone) = &city.timezone {
            query.push(("timezone", timezone.clone()));
        }

        debug!("Requesting {} for {}", self.endpoint, city.name);
        let response = self
            .http
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(self.endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error fetching archive data for {}: {:?}", city.name, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        let payload: ArchiveResponse = response.json().await.map_err(FetchError::BodyDecode)?;
        let observations = payload.into_observations(variables)?;
        info!(
            "Fetched {} days of archive data for {}",
            observations.len(),
            city.name
        );
        Ok(observations)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}
