//! Which column of a daily bar gets charted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A price column of a daily bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
}

impl PriceField {
    pub const ALL: [PriceField; 4] = [
        PriceField::Open,
        PriceField::High,
        PriceField::Low,
        PriceField::Close,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "Open",
            PriceField::High => "High",
            PriceField::Low => "Low",
            PriceField::Close => "Close",
        }
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name did not match any price column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriceField(pub String);

impl fmt::Display for UnknownPriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown price type '{}' (expected one of Open, High, Low, Close)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPriceField {}

impl FromStr for PriceField {
    type Err = UnknownPriceField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PriceField::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPriceField(s.to_string()))
    }
}

/// The column extracted from every symbol's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Price(PriceField),
    Volume,
}

impl Field {
    /// Volume tables are charted raw; price tables are indexed to 100.
    pub fn is_volume(&self) -> bool {
        matches!(self, Field::Volume)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Price(p) => p.fmt(f),
            Field::Volume => f.write_str("Volume"),
        }
    }
}
