use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};

use super::params::parse_bool_literal;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare daily stock prices or volume on one chart"
)]
pub struct Cli {
    /// Ticker symbols; commas also separate them (e.g. "AAPL,MSFT")
    #[arg(short, long, required = true, num_args = 1..)]
    pub symbols: Vec<String>,

    /// First date to include, YYYY-MM-DD
    #[arg(short = 'b', long, requires = "end")]
    pub start: Option<NaiveDate>,

    /// Date to stop before, YYYY-MM-DD
    #[arg(short, long, requires = "start")]
    pub end: Option<NaiveDate>,

    /// Price column to compare: Open, High, Low or Close
    #[arg(short, long, default_value = "Close")]
    pub price_type: String,

    /// Logarithmic y axis (price charts only)
    #[arg(short, long, action = ArgAction::Set, default_value = "false", value_parser = parse_bool_literal)]
    pub log_scale: bool,

    /// Chart raw daily volume instead of indexed prices
    #[arg(short, long, action = ArgAction::Set, default_value = "false", value_parser = parse_bool_literal)]
    pub volume: bool,

    /// Save without asking (true) or skip saving (false); asks when omitted
    #[arg(long, value_parser = parse_bool_literal)]
    pub save: Option<bool>,

    /// Path to a TOML config file (falls back to $STOCK_COMPARE_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not open the chart in a browser
    #[arg(long)]
    pub no_display: bool,
}
