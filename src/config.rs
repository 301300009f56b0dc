//! Static configuration: which cities, which date window, which variables.
//! Everything is explicit data handed to the orchestrator, so tests can
//! inject alternate city sets instead of relying on process-wide constants.

use crate::types::variable::DailyVariable;
use bon::bon;
use chrono::NaiveDate;

/// A fixed city the pipeline fetches archive data for. Never mutated at
/// runtime; the name doubles as the unique key in reports and chart titles.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Optional IANA timezone passed through to the archive API.
    pub timezone: Option<String>,
}

#[bon]
impl City {
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        latitude: f64,
        longitude: f64,
        #[builder(into)] timezone: Option<String>,
    ) -> Self {
        Self {
            name,
            latitude,
            longitude,
            timezone,
        }
    }
}

/// Inclusive calendar date range, fixed per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Everything one [`crate::Meteoplot::run`] needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub cities: Vec<City>,
    pub range: DateRange,
    pub variables: Vec<DailyVariable>,
}

#[bon]
impl RunConfig {
    #[builder]
    pub fn new(
        cities: Vec<City>,
        range: DateRange,
        #[builder(default = DailyVariable::ALL.to_vec())] variables: Vec<DailyVariable>,
    ) -> Self {
        Self {
            cities,
            range,
            variables,
        }
    }
}

/// The original fixed city set: Madrid, London and Rio.
pub fn default_cities() -> Vec<City> {
    vec![
        City::builder()
            .name("Madrid")
            .latitude(40.416775)
            .longitude(-3.703790)
            .build(),
        City::builder()
            .name("London")
            .latitude(51.507351)
            .longitude(-0.127758)
            .build(),
        City::builder()
            .name("Rio")
            .latitude(-22.906847)
            .longitude(-43.172896)
            .build(),
    ]
}
