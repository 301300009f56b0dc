//! Orchestrator behavior: one city fully processed after another, failures
//! skip only the affected city, charts land where the render target says.

use chrono::NaiveDate;
use meteoplot::{
    City, CityStatus, DailyVariable, DateRange, Meteoplot, MeteoplotError, RenderTarget, RunConfig,
};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn city(name: &str, latitude: f64) -> City {
    City::builder()
        .name(name)
        .latitude(latitude)
        .longitude(0.0)
        .build()
}

fn range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
    )
}

fn two_year_payload() -> serde_json::Value {
    serde_json::json!({
        "daily": {
            "time": ["2020-01-01", "2020-01-02", "2021-01-01", "2021-01-02"],
            "temperature_2m_mean": [10.0, 12.0, 9.0, 11.0],
            "precipitation_sum": [2.0, 0.0, 4.0, 1.0],
            "wind_speed_10m_max": [15.0, 20.0, 30.0, 10.0],
        }
    })
}

#[tokio::test]
async fn fetch_failure_skips_only_that_city_and_the_run_continues() {
    let server = MockServer::start().await;
    // Alpha (latitude 10) fails, Beta (latitude 20) succeeds.
    Mock::given(method("GET"))
        .and(query_param("latitude", "10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_year_payload()))
        .mount(&server)
        .await;

    let charts = tempfile::tempdir().unwrap();
    let client = Meteoplot::builder()
        .endpoint(server.uri())
        .render_target(RenderTarget::HtmlDir(charts.path().to_path_buf()))
        .build();
    let config = RunConfig::builder()
        .cities(vec![city("Alpha", 10.0), city("Beta", 20.0)])
        .range(range())
        .build();

    let report = client.run(&config).await;

    assert_eq!(report.completed(), 1);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.outcomes[0].city, "Alpha");
    assert!(matches!(
        report.outcomes[0].status,
        CityStatus::Skipped(MeteoplotError::Fetch(_))
    ));
    assert!(matches!(report.outcomes[1].status, CityStatus::Completed));

    // Charts exist only for the city that completed all three steps.
    assert!(charts.path().join("beta_temperature.html").exists());
    assert!(charts.path().join("beta_precipitation.html").exists());
    assert!(charts.path().join("beta_wind_speed.html").exists());
    assert!(charts.path().join("beta.html").exists());
    assert!(!charts.path().join("alpha_temperature.html").exists());
    assert!(!charts.path().join("alpha.html").exists());
}

#[tokio::test]
async fn transform_failure_is_also_recovered_per_city() {
    let server = MockServer::start().await;
    // Alpha returns a success payload with zero days, which the transformer
    // rejects; Beta is untouched by that failure.
    Mock::given(method("GET"))
        .and(query_param("latitude", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "daily": {
                "time": [],
                "temperature_2m_mean": [],
                "precipitation_sum": [],
                "wind_speed_10m_max": [],
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_year_payload()))
        .mount(&server)
        .await;

    let charts = tempfile::tempdir().unwrap();
    let client = Meteoplot::builder()
        .endpoint(server.uri())
        .render_target(RenderTarget::HtmlDir(charts.path().to_path_buf()))
        .build();
    let config = RunConfig::builder()
        .cities(vec![city("Alpha", 10.0), city("Beta", 20.0)])
        .range(range())
        .build();

    let report = client.run(&config).await;

    assert!(matches!(
        report.outcomes[0].status,
        CityStatus::Skipped(MeteoplotError::Transform(_))
    ));
    assert!(matches!(report.outcomes[1].status, CityStatus::Completed));
}

#[tokio::test]
async fn all_cities_complete_when_the_archive_cooperates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_year_payload()))
        .mount(&server)
        .await;

    let charts = tempfile::tempdir().unwrap();
    let client = Meteoplot::builder()
        .endpoint(server.uri())
        .render_target(RenderTarget::HtmlDir(charts.path().to_path_buf()))
        .build();
    let config = RunConfig::builder()
        .cities(vec![city("Alpha", 10.0), city("Beta", 20.0)])
        .range(range())
        .build();

    let report = client.run(&config).await;

    assert_eq!(report.completed(), 2);
    assert_eq!(report.skipped(), 0);
    // Three charts plus one index page per city.
    assert_eq!(charts.path().read_dir().unwrap().count(), 8);
}

#[tokio::test]
async fn variable_subset_completes_and_charts_only_those_variables() {
    let server = MockServer::start().await;
    // The archive answers a subset request with only the requested series.
    Mock::given(method("GET"))
        .and(query_param("daily", "precipitation_sum"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "daily": {
                "time": ["2020-01-01", "2020-01-02"],
                "precipitation_sum": [2.0, 1.0],
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let charts = tempfile::tempdir().unwrap();
    let client = Meteoplot::builder()
        .endpoint(server.uri())
        .render_target(RenderTarget::HtmlDir(charts.path().to_path_buf()))
        .build();
    let config = RunConfig::builder()
        .cities(vec![city("Madrid", 10.0)])
        .range(range())
        .variables(vec![DailyVariable::PrecipitationSum])
        .build();

    let report = client.run(&config).await;

    assert_eq!(report.completed(), 1);
    assert_eq!(report.skipped(), 0);
    assert!(charts.path().join("madrid_precipitation.html").exists());
    assert!(charts.path().join("madrid.html").exists());
    assert!(!charts.path().join("madrid_temperature.html").exists());
    assert!(!charts.path().join("madrid_wind_speed.html").exists());
}

#[tokio::test]
async fn monthly_summaries_builder_exposes_the_transform_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_year_payload()))
        .mount(&server)
        .await;

    let client = Meteoplot::builder().endpoint(server.uri()).build();
    let alpha = city("Alpha", 10.0);

    let summaries = client
        .monthly_summaries()
        .city(&alpha)
        .range(range())
        .call()
        .await
        .unwrap();

    assert_eq!(
        summaries.temperature.value(meteoplot::Year(2020), 1),
        Some(11.0)
    );
    assert_eq!(
        summaries.precipitation.value(meteoplot::Year(2021), 1),
        Some(5.0)
    );
    assert_eq!(
        summaries.wind_speed.value(meteoplot::Year(2021), 1),
        Some(30.0)
    );
}
