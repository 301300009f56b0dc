//! Full pipeline over the default city set: one fetch per city, monthly
//! aggregation, and three comparison charts per city in the browser.
//!
//! To run: cargo run --example compare_cities

use chrono::NaiveDate;
use meteoplot::{default_cities, CityStatus, DateRange, Meteoplot, RunConfig};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = RunConfig::builder()
        .cities(default_cities())
        .range(DateRange::new(
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        ))
        .build();

    let client = Meteoplot::builder().build();
    let report = client.run(&config).await;

    for outcome in &report.outcomes {
        match &outcome.status {
            CityStatus::Completed => println!("{}: charts rendered", outcome.city),
            CityStatus::Skipped(error) => println!("{}: skipped ({})", outcome.city, error),
        }
    }
    println!(
        "Completed {} of {} cities",
        report.completed(),
        report.outcomes.len()
    );

    Ok(())
}
