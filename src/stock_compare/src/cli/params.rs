use std::io::{self, BufRead, Write};

use crate::models::date_range::{DateRange, InvalidDateRange};
use crate::models::request_params::SeriesRequest;

use super::commands::Cli;

/// Accepts `true/false`, `True/False`, `1/0` and `yes/no`.
pub fn parse_bool_literal(value: &str) -> Result<bool, String> {
    match value.trim() {
        "true" | "True" | "TRUE" | "1" | "yes" | "Yes" | "y" => Ok(true),
        "false" | "False" | "FALSE" | "0" | "no" | "No" | "n" => Ok(false),
        other => Err(format!(
            "expected true/false, True/False, 1/0 or yes/no, got '{other}'"
        )),
    }
}

/// Flattens `-s` values, splitting on commas and dropping blanks.
pub fn split_symbols<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.as_ref().split(','))
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string)
        .collect()
}

impl Cli {
    /// The explicit window, when both ends were given.
    pub fn date_range(&self) -> Result<Option<DateRange>, InvalidDateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => DateRange::new(start, end).map(Some),
            _ => Ok(None),
        }
    }

    pub fn series_request(&self) -> Result<SeriesRequest, InvalidDateRange> {
        let mut request = SeriesRequest::new(split_symbols(&self.symbols))
            .with_price_type(self.price_type.clone())
            .with_volume(self.volume);
        if let Some(range) = self.date_range()? {
            request = request.with_range(range);
        }
        Ok(request)
    }
}

/// Asks whether to save; only a lone `y` or `Y` counts as yes.
pub fn prompt_save<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "Save graph to the current folder? (y/n) ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use clap::Parser;

    use super::*;

    #[test]
    fn bool_literals() {
        for yes in ["true", "True", "1", "yes"] {
            assert_eq!(parse_bool_literal(yes), Ok(true), "{yes}");
        }
        for no in ["false", "False", "0", "no"] {
            assert_eq!(parse_bool_literal(no), Ok(false), "{no}");
        }
        assert!(parse_bool_literal("2").is_err());
        assert!(parse_bool_literal("").is_err());
    }

    #[test]
    fn symbols_split_on_commas() {
        assert_eq!(
            split_symbols(&["AAPL,MSFT", " GOOG ", ",,", "TSLA,"]),
            vec!["AAPL", "MSFT", "GOOG", "TSLA"]
        );
    }

    #[test]
    fn request_from_cli() {
        let cli = Cli::try_parse_from([
            "stock-compare",
            "-s",
            "AAPL,MSFT",
            "-b",
            "2024-01-01",
            "-e",
            "2024-02-01",
            "-v",
            "yes",
        ])
        .unwrap();

        let request = cli.series_request().unwrap();
        assert_eq!(request.symbols, vec!["AAPL", "MSFT"]);
        assert!(request.volume);
        assert_eq!(request.price_type, "Close");
        let range = request.range.unwrap();
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let cli = Cli::try_parse_from([
            "stock-compare",
            "-s",
            "AAPL",
            "-b",
            "2024-02-01",
            "-e",
            "2024-01-01",
        ])
        .unwrap();
        assert!(cli.series_request().is_err());
    }

    #[test]
    fn prompt_answers() {
        let mut out = Vec::new();
        assert!(prompt_save(&mut Cursor::new("y\n"), &mut out).unwrap());
        assert!(prompt_save(&mut Cursor::new(" Y \n"), &mut out).unwrap());
        assert!(!prompt_save(&mut Cursor::new("Yes\n"), &mut out).unwrap());
        assert!(!prompt_save(&mut Cursor::new("yolo\n"), &mut out).unwrap());
        assert!(!prompt_save(&mut Cursor::new("n\n"), &mut out).unwrap());
        assert!(!prompt_save(&mut Cursor::new(""), &mut out).unwrap());

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Save graph to the current folder? (y/n)"));
    }
}
