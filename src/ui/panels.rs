use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::report::STATISTICS;
use crate::state::PlotState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Left side panel – frequency and summary tables
// ---------------------------------------------------------------------------

/// Render the left panel with the numbers behind the charts.
pub fn side_panel(ui: &mut Ui, state: &PlotState) {
    let analysis = &state.analysis;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Summary");
            ui.separator();
            let labels = &analysis.comparison.labels;
            TableBuilder::new(ui)
                .vscroll(false)
                .columns(Column::auto().at_least(60.0), 3)
                .header(ROW_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("");
                    });
                    for label in labels {
                        header.col(|ui| {
                            ui.strong(label.as_str());
                        });
                    }
                })
                .body(|mut body| {
                    for (i, name) in STATISTICS.iter().enumerate() {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.label(*name);
                            });
                            for sample in 0..labels.len() {
                                let value = analysis.comparison.values(sample)[i];
                                row.col(|ui| {
                                    ui.monospace(format!("{value:.3}"));
                                });
                            }
                        });
                    }
                });

            if let Some(d) = analysis.comparison.relative_differences()[0] {
                ui.label(format!("Mean change: {:+.1}%", -d * 100.0));
            }
            ui.add_space(8.0);

            for sample in &analysis.samples {
                egui::CollapsingHeader::new(
                    RichText::new(format!("{} frequencies (%)", sample.label)).strong(),
                )
                .id_salt(&sample.label)
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    TableBuilder::new(ui)
                        .vscroll(false)
                        .columns(Column::auto().at_least(60.0), 2)
                        .header(ROW_HEIGHT, |mut header| {
                            header.col(|ui| {
                                ui.strong("Stars");
                            });
                            header.col(|ui| {
                                ui.strong("%");
                            });
                        })
                        .body(|mut body| {
                            for (stars, percent) in &sample.frequencies {
                                body.row(ROW_HEIGHT, |mut row| {
                                    row.col(|ui| {
                                        ui.monospace(format!("{stars:.1}"));
                                    });
                                    row.col(|ui| {
                                        ui.monospace(format!("{percent:.2}"));
                                    });
                                });
                            }
                        });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar.
pub fn top_bar(ui: &mut Ui, state: &PlotState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.status());
        ui.separator();
        let unpopular = state.analysis.unpopular;
        let text = format!(
            "{unpopular} movies below {} votes",
            state.analysis.min_votes
        );
        if unpopular > 0 {
            ui.label(RichText::new(text).color(egui::Color32::RED));
        } else {
            ui.label(text);
        }
    });
}
