use crate::types::variable::DailyVariable;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("Cannot aggregate an empty observation series")]
    NoObservations,

    #[error("Non-finite {variable} reading on {date}")]
    NonFiniteValue {
        variable: DailyVariable,
        date: NaiveDate,
    },
}
