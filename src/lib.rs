//! Compares Fandango's ratings of popular movies released in 2015, sampled
//! before Walt Hickey's FiveThirtyEight analysis, with those released in
//! 2016, sampled after it.

pub mod analysis;
pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod state;
pub mod stats;
pub mod ui;

pub use analysis::{run, Analysis};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
