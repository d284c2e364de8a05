//! What gets drawn: titles, axis labels and one line per symbol.
//!
//! [`ChartSpec`] is plain data derived from a [`SeriesTable`]; turning it into
//! pixels or HTML is the job of a [`ChartRenderer`].

pub mod plotly_renderer;

use std::path::Path;

use tracing::warn;

use crate::config::ChartSettings;
use crate::io::sink::PersistError;
use crate::models::{
    date_range::{DateRange, HistoryWindow},
    field::Field,
    series_table::SeriesTable,
};

pub use plotly_renderer::PlotlyRenderer;

/// One named line.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    /// ISO dates.
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub subtitle: String,
    pub y_axis_label: String,
    /// Only ever true for price charts.
    pub log_scale: bool,
    pub width: usize,
    pub height: usize,
    pub traces: Vec<Trace>,
}

impl ChartSpec {
    /// Derives titles and traces from a built table.
    ///
    /// `range` is the explicit window the table was requested with, if any; the
    /// volume subtitle shows its end date. A log scale is only applied to price
    /// charts.
    pub fn from_table(
        table: &SeriesTable,
        range: Option<DateRange>,
        log_scale: bool,
        settings: &ChartSettings,
    ) -> Self {
        let (title, subtitle, y_axis_label, log_scale) = match table.field() {
            Field::Price(price) => {
                let base = table
                    .first_date()
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                let label = if log_scale {
                    "Indexed Price (log scale)"
                } else {
                    "Indexed Price"
                };
                (
                    format!("Comparison of {price} prices"),
                    format!("(100={base})"),
                    label.to_string(),
                    log_scale,
                )
            }
            Field::Volume => {
                if log_scale {
                    warn!("log scale is only available for price charts, ignoring it");
                }
                let subtitle = match range {
                    Some(range) => range.end().to_string(),
                    None => HistoryWindow::TRAILING_YEAR_LABEL.to_string(),
                };
                ("Stock Volume".to_string(), subtitle, "Volume".to_string(), false)
            }
        };

        let x: Vec<String> = table.dates().iter().map(|d| d.to_string()).collect();
        let traces = table
            .columns()
            .iter()
            .map(|(symbol, values)| Trace {
                name: symbol.clone(),
                x: x.clone(),
                y: values.clone(),
            })
            .collect();

        Self {
            title,
            subtitle,
            y_axis_label,
            log_scale,
            width: settings.width,
            height: settings.height,
            traces,
        }
    }

    /// Title markup: bold title over a smaller subtitle line.
    pub fn title_markup(&self) -> String {
        format!("<b>{}</b><br><sup>{}</sup>", self.title, self.subtitle)
    }
}

/// Renders a [`ChartSpec`] for a person to look at, or to a file.
pub trait ChartRenderer {
    /// Shows the chart interactively.
    fn display(&self, spec: &ChartSpec) -> Result<(), PersistError>;

    /// Writes a standalone interactive HTML document.
    fn write_html(&self, spec: &ChartSpec, path: &Path) -> Result<(), PersistError>;

    /// Writes a static PNG image.
    fn write_png(&self, spec: &ChartSpec, path: &Path) -> Result<(), PersistError>;
}
