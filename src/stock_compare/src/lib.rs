//! Compare the daily history of several stocks on one chart.
//!
//! The pipeline is: [`series::SeriesBuilder`] fetches each symbol through a
//! [`providers::HistoryProvider`] and produces an aligned
//! [`models::series_table::SeriesTable`]; [`chart::ChartSpec`] describes the
//! plot; [`io::sink::save_chart`] writes it to disk when asked.

pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod io;
pub mod models;
pub mod providers;
pub mod series;
