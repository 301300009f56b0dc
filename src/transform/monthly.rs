//! Folds a city's daily series into month-by-year tables, one per variable:
//! mean temperature, summed precipitation, max wind speed.

use crate::transform::error::TransformError;
use crate::types::monthly_table::{MonthlyTable, Year};
use crate::types::observation::DailyObservation;
use crate::types::variable::DailyVariable;
use chrono::Datelike;
use std::collections::BTreeMap;

/// The three monthly grids derived from one city's daily series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummaries {
    pub temperature: MonthlyTable,
    pub precipitation: MonthlyTable,
    pub wind_speed: MonthlyTable,
}

impl MonthlySummaries {
    /// The table aggregating the given variable.
    pub fn table(&self, variable: DailyVariable) -> &MonthlyTable {
        match variable {
            DailyVariable::TemperatureMean => &self.temperature,
            DailyVariable::PrecipitationSum => &self.precipitation,
            DailyVariable::WindSpeedMax => &self.wind_speed,
        }
    }
}

#[derive(Default)]
struct MeanAccumulator {
    sum: f64,
    count: u32,
}

/// Groups observations by (year, month) of their date and aggregates each
/// group in a single pass: arithmetic mean of temperature readings, sum of
/// precipitation, maximum wind speed. Only present readings contribute; a
/// group with no readings for a variable produces no cell in that table.
///
/// The grouping key is the sole grouping criterion, so the result is
/// identical for any ordering of the input and the input is never mutated.
///
/// # Errors
///
/// Returns [`TransformError::NoObservations`] for an empty slice and
/// [`TransformError::NonFiniteValue`] as soon as a NaN or infinite reading
/// is encountered; nothing is silently dropped.
pub fn monthly_summaries(
    observations: &[DailyObservation],
) -> Result<MonthlySummaries, TransformError> {
    if observations.is_empty() {
        return Err(TransformError::NoObservations);
    }

    let mut temperature: BTreeMap<(i32, u32), MeanAccumulator> = BTreeMap::new();
    let mut precipitation: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    let mut wind_speed: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for observation in observations {
        let key = (observation.date.year(), observation.date.month());

        if let Some(value) = observation.temperature_mean {
            check_finite(value, DailyVariable::TemperatureMean, observation)?;
            let acc = temperature.entry(key).or_default();
            acc.sum += value;
            acc.count += 1;
        }
        if let Some(value) = observation.precipitation_sum {
            check_finite(value, DailyVariable::PrecipitationSum, observation)?;
            *precipitation.entry(key).or_insert(0.0) += value;
        }
        if let Some(value) = observation.wind_speed_max {
            check_finite(value, DailyVariable::WindSpeedMax, observation)?;
            let max = wind_speed.entry(key).or_insert(f64::NEG_INFINITY);
            if value > *max {
                *max = value;
            }
        }
    }

    let mut summaries = MonthlySummaries {
        temperature: MonthlyTable::new(DailyVariable::TemperatureMean),
        precipitation: MonthlyTable::new(DailyVariable::PrecipitationSum),
        wind_speed: MonthlyTable::new(DailyVariable::WindSpeedMax),
    };
    for ((year, month), acc) in temperature {
        summaries
            .temperature
            .insert(Year(year), month, acc.sum / f64::from(acc.count));
    }
    for ((year, month), total) in precipitation {
        summaries.precipitation.insert(Year(year), month, total);
    }
    for ((year, month), max) in wind_speed {
        summaries.wind_speed.insert(Year(year), month, max);
    }
    Ok(summaries)
}

fn check_finite(
    value: f64,
    variable: DailyVariable,
    observation: &DailyObservation,
) -> Result<(), TransformError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TransformError::NonFiniteValue {
            variable,
            date: observation.date,
        })
    }
}
