//! StayScope Main Application
//! Window shell: left filter panel, central dashboard, and background
//! dataset loading.

use crate::data::{self, apply_filters, unique_amenities, DataBounds, Hotel};
use crate::gui::{Dashboard, DashboardData, FilterPanel, FilterPanelAction};
use egui::{Color32, SidePanel};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Dataset loading result from the background thread
enum LoadResult {
    Progress(String),
    Complete { hotels: Vec<Hotel>, path: PathBuf },
    Error(String),
}

/// Main application window.
pub struct StayScopeApp {
    hotels: Vec<Hotel>,
    filtered: Vec<usize>,
    view: DashboardData,
    filter_panel: FilterPanel,
    dashboard: Dashboard,

    // Async dataset loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
    needs_refresh: bool,
}

impl StayScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, initial_dataset: Option<PathBuf>) -> Self {
        Self::apply_theme(&cc.egui_ctx);

        let mut app = Self {
            hotels: Vec::new(),
            filtered: Vec::new(),
            view: DashboardData::default(),
            filter_panel: FilterPanel::new(),
            dashboard: Dashboard::new(),
            load_rx: None,
            is_loading: false,
            needs_refresh: false,
        };

        if let Some(path) = initial_dataset {
            app.start_load(path);
        }
        app
    }

    /// Dark palette matching the scraped-dashboard look.
    fn apply_theme(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = Color32::from_rgb(38, 50, 56);
        visuals.window_fill = Color32::from_rgb(38, 50, 56);
        visuals.extreme_bg_color = Color32::from_rgb(30, 39, 44);
        visuals.faint_bg_color = Color32::from_rgb(46, 59, 66);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(30, 39, 44);
        ctx.set_visuals(visuals);
    }

    /// Handle dataset file selection.
    fn handle_browse(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Hotel datasets", &["csv", "json"])
            .pick_file()
        {
            self.start_load(path);
        }
    }

    /// Load a dataset in a background thread.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.filter_panel.loading = true;
        self.filter_panel.set_status("Loading dataset...");

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress(format!(
                "Reading {}...",
                path.display()
            )));
            match data::load_dataset(&path) {
                Ok(hotels) => {
                    let _ = tx.send(LoadResult::Complete { hotels, path });
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for dataset loading results
    fn check_load_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.filter_panel.set_status(&status);
                    }
                    LoadResult::Complete { hotels, path } => {
                        self.install_dataset(hotels, path);
                        self.is_loading = false;
                        self.filter_panel.loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        tracing::warn!(error = %error, "Dataset load failed");
                        self.filter_panel.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        self.filter_panel.loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    fn install_dataset(&mut self, hotels: Vec<Hotel>, path: PathBuf) {
        let bounds = DataBounds::from_hotels(&hotels);
        let amenities = unique_amenities(&hotels);
        tracing::info!(rows = hotels.len(), path = %path.display(), "Dataset ready");

        self.filter_panel.update_dataset(path, bounds, amenities);
        self.filter_panel
            .set_status(&format!("Loaded {} hotels", hotels.len()));
        self.hotels = hotels;
        self.needs_refresh = true;
    }

    /// Re-run the filter and rebuild the derived dashboard data.
    fn refresh_view(&mut self) {
        self.filtered = apply_filters(&self.hotels, &self.filter_panel.filter);
        self.view = DashboardData::compute(&self.hotels, &self.filtered);
    }
}

impl eframe::App for StayScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        if self.needs_refresh {
            self.refresh_view();
            self.needs_refresh = false;
        }

        // Left panel - filters
        SidePanel::left("filter_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.filter_panel.show(ui);

                    match action {
                        FilterPanelAction::BrowseData => self.handle_browse(),
                        FilterPanelAction::FiltersChanged => self.needs_refresh = true,
                        FilterPanelAction::ResetFilters => {
                            self.filter_panel.reset_filters();
                            self.needs_refresh = true;
                        }
                        FilterPanelAction::None => {}
                    }
                });
            });

        // Central panel - dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard
                .show(ui, &self.hotels, &self.filtered, &self.view);
        });
    }
}
