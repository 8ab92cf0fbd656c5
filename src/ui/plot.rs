use eframe::egui::Ui;
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::report::STATISTICS;
use crate::state::{ChartConfig, PlotState, Series};

/// Width of one bar; the two samples sit side by side around each tick.
const BAR_WIDTH: f64 = 0.25;

fn base_plot(id: &str, config: &ChartConfig, height: f32) -> Plot<'static> {
    let step = config.tick_step;
    let mut plot = Plot::new(id.to_owned())
        .legend(Legend::default())
        .height(height)
        .x_axis_label(config.x_label.clone())
        .y_axis_label(config.y_label.clone())
        .include_x(config.x_bounds.0)
        .include_x(config.x_bounds.1)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false);
    if let Some((lo, hi)) = config.y_bounds {
        plot = plot
            .include_y(lo)
            .include_y(hi)
            .y_grid_spacer(uniform_grid_spacer(move |_| [step / 5.0, step, step * 2.0]));
    } else {
        plot = plot.x_grid_spacer(uniform_grid_spacer(move |_| [step / 5.0, step, step * 2.0]));
    }
    plot
}

// ---------------------------------------------------------------------------
// Density plot
// ---------------------------------------------------------------------------

/// Kernel density curves of each sample over the star scale.
pub fn density_plot(ui: &mut Ui, config: &ChartConfig, series: &[Series<Vec<[f64; 2]>>], height: f32) {
    ui.strong(config.title.as_str());
    base_plot("density_plot", config, height).show(ui, |plot_ui| {
        for s in series {
            let points: PlotPoints = s.data.iter().copied().collect();
            plot_ui.line(Line::new(points).name(&s.name).color(s.color).width(2.0));
        }
    });
}

// ---------------------------------------------------------------------------
// Summary bar chart
// ---------------------------------------------------------------------------

/// Mean, median and mode grouped per statistic, one bar per sample.
pub fn summary_plot(ui: &mut Ui, config: &ChartConfig, series: &[Series<[f64; 3]>], height: f32) {
    ui.strong(config.title.as_str());
    let offset = (series.len() as f64 - 1.0) * BAR_WIDTH / 2.0;
    base_plot("summary_plot", config, height)
        .x_axis_formatter(|mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 {
                STATISTICS.get(i as usize).map(|s| s.to_string()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (k, s) in series.iter().enumerate() {
                let bars = s
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| {
                        Bar::new(i as f64 + k as f64 * BAR_WIDTH - offset, value)
                            .width(BAR_WIDTH)
                            .name(format!("{} {}", s.name, STATISTICS[i]))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(&s.name).color(s.color));
            }
        });
}

/// Both charts, stacked.
pub fn comparison_plots(ui: &mut Ui, state: &PlotState) {
    let height = (ui.available_height() / 2.0 - 30.0).max(120.0);
    density_plot(ui, &state.density_chart, &state.densities, height);
    ui.add_space(8.0);
    summary_plot(ui, &state.summary_chart, &state.summaries, height);
}
