//! Draws the monthly tables as line charts with plotlars: x axis Jan..Dec,
//! one line per year, earlier years in lighter shades of the variable's base
//! color. One figure per variable per city; the HTML target additionally
//! writes a city page that places the figures side by side.

use crate::render::error::RenderError;
use crate::transform::monthly::MonthlySummaries;
use crate::types::monthly_table::MonthlyTable;
use crate::types::variable::DailyVariable;
use log::info;
use plotlars::{Line, LinePlot, Plot, Rgb, Text};
use std::path::{Path, PathBuf};

/// Where rendered charts end up.
#[derive(Debug, Clone)]
pub enum RenderTarget {
    /// Open each chart interactively in the default browser.
    Browser,
    /// Write each chart as a standalone HTML file into the given directory,
    /// plus one index page per city composing them side by side.
    /// Used by tests and headless runs.
    HtmlDir(PathBuf),
}

pub struct ChartRenderer {
    target: RenderTarget,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self {
            target: RenderTarget::Browser,
        }
    }

    pub fn with_target(target: RenderTarget) -> Self {
        Self { target }
    }

    /// Draws one chart per requested variable for a city, in list order.
    /// Variables that were never requested from the archive have empty
    /// tables and must not be passed here.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::EmptyTable`] when a requested table has no
    /// cells to plot and [`RenderError::PlotData`] when the plot frame
    /// cannot be built. Rendering performs no data validation beyond that.
    pub fn render_city(
        &self,
        city_name: &str,
        summaries: &MonthlySummaries,
        variables: &[DailyVariable],
    ) -> Result<(), RenderError> {
        if let RenderTarget::HtmlDir(dir) = &self.target {
            std::fs::create_dir_all(dir).map_err(|e| RenderError::OutputDir(dir.clone(), e))?;
        }
        for variable in variables {
            self.render_table(city_name, summaries.table(*variable))?;
        }
        if let RenderTarget::HtmlDir(dir) = &self.target {
            self.write_city_index(dir, city_name, variables)?;
        }
        Ok(())
    }

    fn render_table(&self, city_name: &str, table: &MonthlyTable) -> Result<(), RenderError> {
        let variable = table.variable();
        let frame = table.to_dataframe().map_err(|e| RenderError::PlotData {
            city: city_name.to_string(),
            source: e,
        })?;

        let year_labels: Vec<String> = table.years().iter().map(|y| y.to_string()).collect();
        let (first_year, later_years) = match year_labels.split_first() {
            Some(split) => split,
            None => {
                return Err(RenderError::EmptyTable {
                    city: city_name.to_string(),
                    variable,
                })
            }
        };
        let additional: Vec<&str> = later_years.iter().map(String::as_str).collect();
        let colors = color_ramp(base_color(variable), year_labels.len());
        let title = format!("{} - {}", city_name, variable.label());

        let chart = LinePlot::builder()
            .data(&frame)
            .x("month")
            .y(first_year.as_str())
            .additional_lines(additional)
            .colors(colors)
            .lines(vec![Line::Solid; year_labels.len()])
            .plot_title(Text::from(title.as_str()).size(18))
            .x_title("Month")
            .y_title(variable.label())
            .build();

        match &self.target {
            RenderTarget::Browser => chart.plot(),
            RenderTarget::HtmlDir(dir) => {
                let path = dir.join(chart_file_name(city_name, variable));
                chart.write_html(path.to_string_lossy().into_owned());
                info!("Wrote {} chart for {} to {:?}", variable, city_name, path);
            }
        }
        Ok(())
    }

    /// Composes the per-variable chart files side by side on one page
    /// titled with the city name.
    fn write_city_index(
        &self,
        dir: &Path,
        city_name: &str,
        variables: &[DailyVariable],
    ) -> Result<(), RenderError> {
        let frames: String = variables
            .iter()
            .map(|variable| {
                format!(
                    "<iframe src=\"{}\" style=\"flex:1;height:600px;border:none\"></iframe>",
                    chart_file_name(city_name, *variable)
                )
            })
            .collect();
        let page = format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{city}</title></head>\n\
             <body><h1>{city}</h1><div style=\"display:flex\">{frames}</div></body></html>\n",
            city = city_name,
            frames = frames,
        );
        let path = dir.join(format!("{}.html", slug(city_name)));
        std::fs::write(&path, page).map_err(|e| RenderError::IndexWrite(path.clone(), e))?;
        info!("Wrote chart index for {} to {:?}", city_name, path);
        Ok(())
    }
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Base hue for each variable's year ramp.
fn base_color(variable: DailyVariable) -> Rgb {
    match variable {
        DailyVariable::TemperatureMean => Rgb(235, 117, 0),
        DailyVariable::PrecipitationSum => Rgb(69, 157, 230),
        DailyVariable::WindSpeedMax => Rgb(46, 139, 87),
    }
}

/// Shades running from near-white toward the full base color, so that with
/// years in chronological order the earliest draws lightest and the latest
/// darkest.
fn color_ramp(base: Rgb, steps: usize) -> Vec<Rgb> {
    (0..steps)
        .map(|i| {
            let t = if steps <= 1 {
                1.0
            } else {
                0.25 + 0.75 * (i as f64 / (steps - 1) as f64)
            };
            Rgb(blend(base.0, t), blend(base.1, t), blend(base.2, t))
        })
        .collect()
}

fn blend(channel: u8, t: f64) -> u8 {
    (255.0 + (f64::from(channel) - 255.0) * t).round() as u8
}

fn chart_file_name(city_name: &str, variable: DailyVariable) -> String {
    let suffix = match variable {
        DailyVariable::TemperatureMean => "temperature",
        DailyVariable::PrecipitationSum => "precipitation",
        DailyVariable::WindSpeedMax => "wind_speed",
    };
    format!("{}_{}.html", slug(city_name), suffix)
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
