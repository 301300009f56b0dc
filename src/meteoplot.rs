//! Main entry point: ties the archive client, the monthly transform and the
//! chart renderer together, one city at a time.

use crate::config::{City, DateRange, RunConfig};
use crate::error::MeteoplotError;
use crate::fetch::archive_client::ArchiveClient;
use crate::render::chart::{ChartRenderer, RenderTarget};
use crate::transform::monthly::{monthly_summaries, MonthlySummaries};
use crate::types::observation::DailyObservation;
use crate::types::variable::DailyVariable;
use bon::bon;
use log::{info, warn};

/// Client for fetching Open-Meteo archive data and turning it into monthly
/// comparison charts.
///
/// Create one with [`Meteoplot::builder()`]; the defaults talk to the real
/// archive endpoint and open charts in the browser.
///
/// # Examples
///
/// ```no_run
/// # use chrono::NaiveDate;
/// # use meteoplot::{default_cities, DateRange, Meteoplot, RunConfig};
/// # #[tokio::main]
/// # async fn main() {
/// let client = Meteoplot::builder().build();
/// let config = RunConfig::builder()
///     .cities(default_cities())
///     .range(DateRange::new(
///         NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
///     ))
///     .build();
/// let report = client.run(&config).await;
/// println!("{} cities completed", report.completed());
/// # }
/// ```
pub struct Meteoplot {
    client: ArchiveClient,
    renderer: ChartRenderer,
}

#[bon]
impl Meteoplot {
    /// Builds a client. Both knobs are optional:
    ///
    /// * `.endpoint(String)`: archive base URL, defaults to the real
    ///   Open-Meteo archive; point it at a mock server in tests.
    /// * `.render_target(RenderTarget)`: where charts go, defaults to the
    ///   browser.
    #[builder]
    pub fn new(
        #[builder(into)] endpoint: Option<String>,
        render_target: Option<RenderTarget>,
    ) -> Self {
        let client = match endpoint {
            Some(endpoint) => ArchiveClient::with_endpoint(endpoint),
            None => ArchiveClient::new(),
        };
        let renderer = match render_target {
            Some(target) => ChartRenderer::with_target(target),
            None => ChartRenderer::new(),
        };
        Self { client, renderer }
    }

    /// Fetches one city's daily observation series.
    ///
    /// * `.city(&City)`: **Required.**
    /// * `.range(DateRange)`: **Required.** Inclusive date window.
    /// * `.variables(Vec<DailyVariable>)`: Optional, defaults to all three.
    ///
    /// # Errors
    ///
    /// Returns [`MeteoplotError::Fetch`] for invalid inputs, transport
    /// errors, non-success statuses or malformed payloads.
    #[builder]
    pub async fn daily_series(
        &self,
        city: &City,
        range: DateRange,
        variables: Option<Vec<DailyVariable>>,
    ) -> Result<Vec<DailyObservation>, MeteoplotError> {
        let variables = variables.unwrap_or_else(|| DailyVariable::ALL.to_vec());
        let observations = self.client.fetch_daily(city, &range, &variables).await?;
        Ok(observations)
    }

    /// Fetches one city's daily series and folds it into the three monthly
    /// tables (mean temperature, summed precipitation, max wind speed).
    ///
    /// # Errors
    ///
    /// Returns [`MeteoplotError::Fetch`] on fetch problems and
    /// [`MeteoplotError::Transform`] when the series is empty or contains a
    /// non-finite reading.
    #[builder]
    pub async fn monthly_summaries(
        &self,
        city: &City,
        range: DateRange,
        variables: Option<Vec<DailyVariable>>,
    ) -> Result<MonthlySummaries, MeteoplotError> {
        let observations = self
            .daily_series()
            .city(city)
            .range(range)
            .maybe_variables(variables)
            .call()
            .await?;
        Ok(monthly_summaries(&observations)?)
    }

    /// Runs the full pipeline for one city: fetch, transform, render. Only
    /// the requested variables are charted; the others were never fetched
    /// and have nothing to draw.
    #[builder]
    pub async fn compare_city(
        &self,
        city: &City,
        range: DateRange,
        variables: Option<Vec<DailyVariable>>,
    ) -> Result<(), MeteoplotError> {
        let variables = variables.unwrap_or_else(|| DailyVariable::ALL.to_vec());
        let summaries = self
            .monthly_summaries()
            .city(city)
            .range(range)
            .variables(variables.clone())
            .call()
            .await?;
        self.renderer.render_city(&city.name, &summaries, &variables)?;
        Ok(())
    }

    /// Processes every configured city strictly in sequence. A failure in any
    /// stage skips that city and the loop moves on; nothing is retried and no
    /// state survives between cities. The guard applies uniformly to fetch,
    /// transform and render failures.
    pub async fn run(&self, config: &RunConfig) -> RunReport {
        let mut outcomes = Vec::with_capacity(config.cities.len());
        for city in &config.cities {
            let result = self
                .compare_city()
                .city(city)
                .range(config.range)
                .variables(config.variables.clone())
                .call()
                .await;
            match result {
                Ok(()) => {
                    info!("Completed charts for {}", city.name);
                    outcomes.push(CityOutcome {
                        city: city.name.clone(),
                        status: CityStatus::Completed,
                    });
                }
                Err(error) => {
                    warn!("Skipping {}: {}", city.name, error);
                    outcomes.push(CityOutcome {
                        city: city.name.clone(),
                        status: CityStatus::Skipped(error),
                    });
                }
            }
        }
        RunReport { outcomes }
    }
}

impl Default for Meteoplot {
    fn default() -> Self {
        Meteoplot::builder().build()
    }
}

/// Per-city results of one [`Meteoplot::run`], in configured city order.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<CityOutcome>,
}

impl RunReport {
    pub fn completed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, CityStatus::Completed))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.completed()
    }
}

#[derive(Debug)]
pub struct CityOutcome {
    pub city: String,
    pub status: CityStatus,
}

#[derive(Debug)]
pub enum CityStatus {
    Completed,
    /// The city was skipped; the error says at which stage and why.
    Skipped(MeteoplotError),
}
