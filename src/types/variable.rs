use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the daily quantities reported by the Open-Meteo archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyVariable {
    TemperatureMean,
    PrecipitationSum,
    WindSpeedMax,
}

impl DailyVariable {
    /// Every variable the pipeline knows about, in request order.
    pub const ALL: [DailyVariable; 3] = [
        DailyVariable::TemperatureMean,
        DailyVariable::PrecipitationSum,
        DailyVariable::WindSpeedMax,
    ];

    /// Identifier used in the `daily` query parameter and in the response payload.
    pub fn api_id(self) -> &'static str {
        match self {
            DailyVariable::TemperatureMean => "temperature_2m_mean",
            DailyVariable::PrecipitationSum => "precipitation_sum",
            DailyVariable::WindSpeedMax => "wind_speed_10m_max",
        }
    }

    /// Human-readable label with unit, used for chart titles and axes.
    pub fn label(self) -> &'static str {
        match self {
            DailyVariable::TemperatureMean => "Mean temperature (°C)",
            DailyVariable::PrecipitationSum => "Precipitation (mm)",
            DailyVariable::WindSpeedMax => "Max wind speed (km/h)",
        }
    }

    /// Comma-joined API identifiers, the format the `daily` query parameter expects.
    pub(crate) fn join_api_ids(variables: &[DailyVariable]) -> String {
        variables
            .iter()
            .map(|v| v.api_id())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Display for DailyVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_id())
    }
}
