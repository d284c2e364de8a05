use std::backtrace::BacktraceStatus;
use std::fmt::Write as _;

use shared_utils::config::ConfigError;
use snafu::{Backtrace, ErrorCompat, Snafu};

use crate::io::sink::PersistError;
use crate::models::field::UnknownPriceField;
use crate::providers::{ProviderError, ProviderInitError};

/// Why a comparison table could not be built.
///
/// Every variant aborts the whole request; there are no partial tables.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BuildError {
    /// Fetching one symbol's history failed.
    #[snafu(display("Retrieval failed for {symbol}: {source}"))]
    RetrievalFailed {
        symbol: String,
        #[snafu(backtrace)]
        source: ProviderError,
    },

    /// The requested column does not exist in a daily record.
    #[snafu(display("Unknown field: {source}"))]
    UnknownField {
        source: UnknownPriceField,
        backtrace: Backtrace,
    },

    /// No date had a value for every symbol.
    #[snafu(display("No dates left after aligning {symbols} symbol(s) and dropping incomplete rows"))]
    EmptyAfterAlignment { symbols: usize, backtrace: Backtrace },

    /// The first retained value of a column is zero, so it cannot be indexed.
    #[snafu(display("Cannot index {symbol} to 100: first retained value is zero"))]
    ZeroBase { symbol: String, backtrace: Backtrace },
}

/// The unified error type for the `stock-compare` binary.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Config {
        source: ConfigError,
        backtrace: Backtrace,
    },

    #[snafu(display("{source}"))]
    ProviderSetup {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },

    #[snafu(display("{source}"))]
    Build {
        #[snafu(backtrace)]
        source: BuildError,
    },

    #[snafu(display("{source}"))]
    Persist {
        #[snafu(backtrace)]
        source: PersistError,
    },

    #[snafu(display("Failed to read answer from stdin: {source}"))]
    Prompt {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Short label for the failure class, printed ahead of the message.
    pub fn category(&self) -> &'static str {
        match self {
            Error::Config { .. } => "ConfigError",
            Error::ProviderSetup { .. } => "ProviderSetupError",
            Error::Build { source } => match source {
                BuildError::RetrievalFailed { .. } => "RetrievalFailed",
                BuildError::UnknownField { .. } => "UnknownField",
                BuildError::EmptyAfterAlignment { .. } => "EmptyAfterAlignment",
                BuildError::ZeroBase { .. } => "ZeroBase",
            },
            Error::Persist { .. } => "PersistError",
            Error::Prompt { .. } => "PromptError",
        }
    }

    /// Category, message, cause chain and (when captured) the backtrace.
    pub fn report(&self) -> String {
        let mut out = format!("{}: {}", self.category(), self);

        // wrapper variants display their source verbatim; skip the repeat
        let mut previous = self.to_string();
        for cause in self.iter_chain().skip(1) {
            let message = cause.to_string();
            if message != previous {
                let _ = write!(out, "\n  caused by: {message}");
            }
            previous = message;
        }

        match ErrorCompat::backtrace(self) {
            Some(bt) if bt.status() == BacktraceStatus::Captured => {
                let _ = write!(out, "\nTraceback:\n{bt}");
            }
            _ => out.push_str("\n(set RUST_BACKTRACE=1 for a backtrace)"),
        }

        out
    }
}
