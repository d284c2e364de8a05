use chrono::{Days, NaiveDate, NaiveTime};

use crate::models::date_range::HistoryWindow;

/// Daily bars only.
const INTERVAL: &str = "1d";

/// `range` value Yahoo understands as the trailing twelve months.
const TRAILING_YEAR_RANGE: &str = "1y";

/// Exchange sessions can start up to a day away from UTC midnight.
const WINDOW_PADDING: Days = Days::new(1);

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Builds the query string for a chart request.
///
/// Explicit windows become `period1`/`period2` at UTC midnight, padded by a day
/// on each side; the decoder trims back to the window by exchange-local date.
/// The trailing window uses `range=1y` so the provider picks the boundary.
pub fn construct_params(window: &HistoryWindow) -> Vec<(String, String)> {
    let mut query = vec![
        ("interval".to_string(), INTERVAL.to_string()),
        ("events".to_string(), "history".to_string()),
    ];

    match window {
        HistoryWindow::Range(range) => {
            let start = range.start().checked_sub_days(WINDOW_PADDING).unwrap_or(range.start());
            let end = range.end().checked_add_days(WINDOW_PADDING).unwrap_or(range.end());
            query.push(("period1".to_string(), unix_midnight(start).to_string()));
            query.push(("period2".to_string(), unix_midnight(end).to_string()));
        }
        HistoryWindow::TrailingYear => {
            query.push(("range".to_string(), TRAILING_YEAR_RANGE.to_string()));
        }
    }

    query
}
