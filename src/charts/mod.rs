//! Charts module - egui_plot renderings

mod plotter;

pub use plotter::{ChartPlotter, ScatterPoint, SCATTER_COLOR};
