use std::path::{Path, PathBuf};

use snafu::{Backtrace, ResultExt, Snafu};
use tracing::{info, warn};

use crate::chart::{ChartRenderer, ChartSpec};
use crate::models::date_range::DateRange;

/// Name of the directory artifacts are written into, under the output root.
pub const OUTPUT_DIR: &str = "output";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PersistError {
    /// The output directory could not be created.
    #[snafu(display("Failed to create output directory {}: {source}", path.display()))]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// Writing one artifact to disk failed.
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// This build has no static image backend.
    #[snafu(display(
        "Cannot write {}: static image export needs the `static-image` feature",
        path.display()
    ))]
    ImageExportUnavailable { path: PathBuf, backtrace: Backtrace },
}

/// What a save step left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedChart {
    /// Absolute path of the output directory.
    pub dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Deterministic file stem for a chart request.
///
/// `{symbols}_{price_type}_{start}-{end}_log-{bool}_vol-{bool}`, with symbols
/// concatenated (commas stripped), absent dates as `None` and booleans as
/// `True`/`False`.
pub fn artifact_stem(
    symbols: &[String],
    price_type: &str,
    range: Option<DateRange>,
    log_scale: bool,
    volume: bool,
) -> String {
    let joined: String = symbols.iter().flat_map(|s| s.chars()).filter(|c| *c != ',').collect();
    let (start, end) = match range {
        Some(range) => (range.start().to_string(), range.end().to_string()),
        None => ("None".to_string(), "None".to_string()),
    };
    format!(
        "{joined}_{price_type}_{start}-{end}_log-{}_vol-{}",
        title_bool(log_scale),
        title_bool(volume)
    )
}

fn title_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Writes `{stem}.png` and `{stem}.html` into `{root}/output`.
///
/// Does nothing when `confirmed` is false. A missing image backend is logged
/// and skipped once the HTML is on disk; every other failure is returned.
pub fn save_chart<R: ChartRenderer + ?Sized>(
    renderer: &R,
    spec: &ChartSpec,
    stem: &str,
    root: &Path,
    confirmed: bool,
) -> Result<Option<SavedChart>, PersistError> {
    if !confirmed {
        info!("chart not saved");
        return Ok(None);
    }

    let dir = root.join(OUTPUT_DIR);
    std::fs::create_dir_all(&dir).context(CreateDirSnafu { path: &dir })?;
    let dir = dir.canonicalize().context(CreateDirSnafu { path: &dir })?;

    let mut written = Vec::with_capacity(2);

    let png = dir.join(format!("{stem}.png"));
    let png_result = renderer.write_png(spec, &png);

    let html = dir.join(format!("{stem}.html"));
    renderer.write_html(spec, &html)?;
    written.push(html);

    match png_result {
        Ok(()) => written.insert(0, png),
        Err(err @ PersistError::ImageExportUnavailable { .. }) => warn!("{err}"),
        Err(err) => return Err(err),
    }

    info!(dir = %dir.display(), files = written.len(), "chart saved");
    Ok(Some(SavedChart { dir, written }))
}
