use anyhow::{Context, Result};
use eframe::egui;

use fandango_ratings::app::RatingsApp;
use fandango_ratings::state::PlotState;
use fandango_ratings::AnalysisConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = AnalysisConfig::from_args(std::env::args_os().skip(1));
    let analysis = fandango_ratings::run(&config)
        .with_context(|| {
            format!(
                "comparing {} with {}",
                config.previous_path.display(),
                config.after_path.display()
            )
        })
        .inspect_err(|e| log::error!("{e:#}"))?;

    println!("{analysis}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = PlotState::new(analysis);
    // Headless runs still succeed with the console report.
    if let Err(e) = eframe::run_native(
        "Fandango Ratings – 2015 vs 2016",
        options,
        Box::new(move |_cc| Ok(Box::new(RatingsApp::new(state)))),
    ) {
        log::warn!("could not open plot window: {e}");
    }
    Ok(())
}
