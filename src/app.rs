use eframe::egui;

use crate::state::PlotState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Read-only window showing the finished comparison.
pub struct RatingsApp {
    pub state: PlotState,
}

impl RatingsApp {
    pub fn new(state: PlotState) -> Self {
        Self { state }
    }
}

impl eframe::App for RatingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: sample sizes ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: tables ----
        egui::SidePanel::left("table_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_plots(ui, &self.state);
        });
    }
}
