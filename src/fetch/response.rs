//! Wire shape of an Open-Meteo archive response. Only the `daily` block of
//! parallel arrays is consumed; everything else in the payload is ignored.

use crate::fetch::error::MalformedResponse;
use crate::types::observation::DailyObservation;
use crate::types::variable::DailyVariable;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveResponse {
    pub(crate) daily: Option<DailySeries>,
}

/// Per-day arrays, positionally aligned with `time`.
#[derive(Debug, Deserialize)]
pub(crate) struct DailySeries {
    pub(crate) time: Vec<String>,
    #[serde(default)]
    pub(crate) temperature_2m_mean: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub(crate) precipitation_sum: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub(crate) wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

impl ArchiveResponse {
    /// Flattens the parallel arrays into one observation per day, sorted by
    /// date. Every requested variable must come back as an array of the same
    /// length as `time`; anything else is a malformed response.
    pub(crate) fn into_observations(
        self,
        variables: &[DailyVariable],
    ) -> Result<Vec<DailyObservation>, MalformedResponse> {
        let daily = self.daily.ok_or(MalformedResponse::MissingDailyBlock)?;
        let days = daily.time.len();

        let temperature = take_series(
            daily.temperature_2m_mean,
            DailyVariable::TemperatureMean,
            variables,
            days,
        )?;
        let precipitation = take_series(
            daily.precipitation_sum,
            DailyVariable::PrecipitationSum,
            variables,
            days,
        )?;
        let wind_speed = take_series(
            daily.wind_speed_10m_max,
            DailyVariable::WindSpeedMax,
            variables,
            days,
        )?;

        let mut observations = Vec::with_capacity(days);
        for (i, raw_date) in daily.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|source| {
                MalformedResponse::InvalidDate {
                    value: raw_date.clone(),
                    source,
                }
            })?;
            observations.push(DailyObservation {
                date,
                temperature_mean: temperature[i],
                precipitation_sum: precipitation[i],
                wind_speed_max: wind_speed[i],
            });
        }
        observations.sort_by_key(|observation| observation.date);
        Ok(observations)
    }
}

/// Validates one variable's array against the time axis. A requested variable
/// must be present; an unrequested one reads as all-missing.
fn take_series(
    series: Option<Vec<Option<f64>>>,
    variable: DailyVariable,
    requested: &[DailyVariable],
    days: usize,
) -> Result<Vec<Option<f64>>, MalformedResponse> {
    match series {
        Some(values) if values.len() != days => Err(MalformedResponse::LengthMismatch {
            variable: variable.api_id(),
            expected: days,
            found: values.len(),
        }),
        Some(values) => Ok(values),
        None if requested.contains(&variable) => {
            Err(MalformedResponse::MissingSeries(variable.api_id()))
        }
        None => Ok(vec![None; days]),
    }
}
