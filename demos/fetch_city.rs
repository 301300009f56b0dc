//! Fetches a decade of daily observations for Madrid and prints the first few.
//!
//! To run: cargo run --example fetch_city

use chrono::NaiveDate;
use meteoplot::{default_cities, DateRange, Meteoplot};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let client = Meteoplot::builder().build();
    let cities = default_cities();
    let madrid = &cities[0];

    let range = DateRange::new(
        NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
    );

    let observations = client
        .daily_series()
        .city(madrid)
        .range(range)
        .call()
        .await?;

    println!("Fetched {} days for {}", observations.len(), madrid.name);
    for observation in observations.iter().take(7) {
        println!("{:?}", observation);
    }

    Ok(())
}
