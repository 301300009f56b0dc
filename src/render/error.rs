use crate::types::variable::DailyVariable;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No {variable} data to plot for {city}")]
    EmptyTable {
        city: String,
        variable: DailyVariable,
    },

    #[error("Failed to assemble plot data for {city}")]
    PlotData {
        city: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to create chart output directory '{0}'")]
    OutputDir(PathBuf, #[source] std::io::Error),

    #[error("Failed to write chart index '{0}'")]
    IndexWrite(PathBuf, #[source] std::io::Error),
}
