mod config;
mod error;
mod fetch;
mod meteoplot;
mod render;
mod transform;
mod types;

pub use error::MeteoplotError;
pub use meteoplot::*;

pub use config::{default_cities, City, DateRange, RunConfig};

pub use fetch::archive_client::{ArchiveClient, ARCHIVE_ENDPOINT};
pub use fetch::error::{FetchError, MalformedResponse};

pub use transform::error::TransformError;
pub use transform::monthly::{monthly_summaries, MonthlySummaries};

pub use render::chart::{ChartRenderer, RenderTarget};
pub use render::error::RenderError;

pub use types::monthly_table::{MonthlyTable, Year, MONTH_LABELS};
pub use types::observation::DailyObservation;
pub use types::variable::DailyVariable;
