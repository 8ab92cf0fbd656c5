use eframe::egui::Color32;

use crate::analysis::{Analysis, STAR_RANGE};
use crate::color::sample_colors;
use crate::report::STATISTICS;

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// Axis and title settings handed to the plotting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_bounds: (f64, f64),
    pub y_bounds: Option<(f64, f64)>,
    /// Grid spacing along the value axis.
    pub tick_step: f64,
}

/// One named series with its colour.
#[derive(Debug, Clone)]
pub struct Series<T> {
    pub name: String,
    pub color: Color32,
    pub data: T,
}

// ---------------------------------------------------------------------------
// Plot state
// ---------------------------------------------------------------------------

/// Everything the window draws, prepared once from an [`Analysis`].
pub struct PlotState {
    pub density_chart: ChartConfig,
    pub densities: Vec<Series<Vec<[f64; 2]>>>,
    pub summary_chart: ChartConfig,
    /// Mean, median and mode per sample, in [`STATISTICS`] order.
    pub summaries: Vec<Series<[f64; 3]>>,
    pub analysis: Analysis,
}

impl PlotState {
    pub fn new(analysis: Analysis) -> Self {
        let colors = sample_colors(analysis.samples.len());
        let [first, second] = &analysis.comparison.labels;

        let densities = analysis
            .samples
            .iter()
            .zip(&colors)
            .filter_map(|(sample, &color)| {
                Some(Series {
                    name: sample.label.clone(),
                    color,
                    data: sample.density.clone()?,
                })
            })
            .collect();

        let summaries = (0..analysis.samples.len())
            .zip(&colors)
            .map(|(i, &color)| Series {
                name: analysis.comparison.labels[i].clone(),
                color,
                data: analysis.comparison.values(i),
            })
            .collect();

        PlotState {
            density_chart: ChartConfig {
                title: format!("Comparing distribution shapes for Fandango's ratings ({first} vs {second})"),
                x_label: "Stars".into(),
                y_label: "Density".into(),
                x_bounds: STAR_RANGE,
                y_bounds: None,
                tick_step: 0.5,
            },
            densities,
            summary_chart: ChartConfig {
                title: format!("Comparing summary statistics: {first} vs {second}"),
                x_label: String::new(),
                y_label: "Stars".into(),
                x_bounds: (-0.5, STATISTICS.len() as f64 - 0.5),
                y_bounds: Some((0.0, 5.5)),
                tick_step: 0.5,
            },
            summaries,
            analysis,
        }
    }

    /// Status line for the top bar.
    pub fn status(&self) -> String {
        self.analysis
            .samples
            .iter()
            .map(|s| format!("{}: {} movies", s.label, s.ratings.len()))
            .collect::<Vec<_>>()
            .join("   ")
    }
}
