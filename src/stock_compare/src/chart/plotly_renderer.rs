use std::path::Path;

use plotly::common::{Mode, Title};
use plotly::layout::themes::PLOTLY_WHITE;
use plotly::layout::{Axis, AxisType, HoverMode};
use plotly::{Layout, Plot, Scatter};
use snafu::ResultExt;
use tracing::debug;

use crate::chart::{ChartRenderer, ChartSpec};
use crate::config::ChartSettings;
use crate::io::sink::{PersistError, WriteArtifactSnafu};

/// Renders charts with plotly.js: a browser tab for display, a self-contained
/// HTML page on disk, and PNG through kaleido when built with `static-image`.
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    image_scale: f64,
}

impl PlotlyRenderer {
    pub fn new(settings: &ChartSettings) -> Self {
        Self {
            image_scale: settings.image_scale,
        }
    }

    pub fn build_plot(&self, spec: &ChartSpec) -> Plot {
        let mut plot = Plot::new();
        for trace in &spec.traces {
            plot.add_trace(
                Scatter::new(trace.x.clone(), trace.y.clone())
                    .name(&trace.name)
                    .mode(Mode::Lines),
            );
        }

        let mut y_axis = Axis::new().title(Title::with_text(&spec.y_axis_label));
        if spec.log_scale {
            y_axis = y_axis.type_(AxisType::Log);
        }

        let layout = Layout::new()
            .template(&*PLOTLY_WHITE)
            .title(Title::with_text(spec.title_markup()).x(0.5))
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(y_axis)
            .hover_mode(HoverMode::XUnified)
            .width(spec.width)
            .height(spec.height);
        plot.set_layout(layout);

        plot
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn display(&self, spec: &ChartSpec) -> Result<(), PersistError> {
        debug!(traces = spec.traces.len(), "opening chart in browser");
        self.build_plot(spec).show();
        Ok(())
    }

    fn write_html(&self, spec: &ChartSpec, path: &Path) -> Result<(), PersistError> {
        let html = self.build_plot(spec).to_html();
        std::fs::write(path, html).context(WriteArtifactSnafu { path })
    }

    #[cfg(feature = "static-image")]
    fn write_png(&self, spec: &ChartSpec, path: &Path) -> Result<(), PersistError> {
        self.build_plot(spec).write_image(
            path,
            plotly::ImageFormat::PNG,
            spec.width,
            spec.height,
            self.image_scale,
        );
        Ok(())
    }

    #[cfg(not(feature = "static-image"))]
    fn write_png(&self, _spec: &ChartSpec, path: &Path) -> Result<(), PersistError> {
        debug!(scale = self.image_scale, "static image export not compiled in");
        crate::io::sink::ImageExportUnavailableSnafu { path }.fail()
    }
}
