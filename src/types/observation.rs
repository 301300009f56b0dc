use chrono::NaiveDate;

/// A single day of archive data for one city.
///
/// A `None` reading means the archive reported no measurement for that day.
/// That is normal for sparse stations and is distinct from a malformed
/// payload, which the fetch layer rejects before observations are built.
#[derive(Debug, PartialEq, Clone)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub temperature_mean: Option<f64>, // °C
    pub precipitation_sum: Option<f64>, // mm, total over the day
    pub wind_speed_max: Option<f64>,   // km/h
}
