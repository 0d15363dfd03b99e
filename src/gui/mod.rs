//! GUI module - application shell and views

mod app;
mod dashboard;
mod filter_panel;

pub use app::StayScopeApp;
pub use dashboard::{Dashboard, DashboardData};
pub use filter_panel::{FilterPanel, FilterPanelAction};
