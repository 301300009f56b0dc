//! Fetches London's daily series and prints the three monthly tables as
//! polars frames (one column per year, nulls where a month has no data).
//!
//! To run: cargo run --example monthly_tables

use chrono::NaiveDate;
use meteoplot::{default_cities, DateRange, Meteoplot};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = Meteoplot::builder().build();
    let cities = default_cities();
    let london = &cities[1];

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
    );

    let summaries = client
        .monthly_summaries()
        .city(london)
        .range(range)
        .call()
        .await?;

    println!("Mean temperature:\n{}", summaries.temperature.to_dataframe()?);
    println!("Precipitation:\n{}", summaries.precipitation.to_dataframe()?);
    println!("Max wind speed:\n{}", summaries.wind_speed.to_dataframe()?);

    Ok(())
}
