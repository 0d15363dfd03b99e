//! Filter Panel Widget
//! Left side panel with data source selection and the hotel filters.

use crate::data::{DataBounds, FilterState};
use egui::{Color32, RichText, ScrollArea};
use std::path::PathBuf;

/// Left side panel with the data source picker and filter controls.
pub struct FilterPanel {
    pub data_path: Option<PathBuf>,
    pub bounds: DataBounds,
    pub filter: FilterState,
    pub amenities: Vec<String>,
    pub selected_amenities: Vec<bool>,
    pub status: String,
    pub loading: bool,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            data_path: None,
            bounds: DataBounds::default(),
            filter: FilterState::default(),
            amenities: Vec::new(),
            selected_amenities: Vec::new(),
            status: "Ready".to_string(),
            loading: false,
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded dataset: slider bounds, amenity list, and a
    /// reset filter.
    pub fn update_dataset(&mut self, path: PathBuf, bounds: DataBounds, amenities: Vec<String>) {
        self.data_path = Some(path);
        self.bounds = bounds;
        self.selected_amenities = vec![false; amenities.len()];
        self.amenities = amenities;
        self.filter = FilterState::from_bounds(&bounds);
    }

    /// Widen the filter back to the full dataset.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::from_bounds(&self.bounds);
        self.selected_amenities.iter_mut().for_each(|v| *v = false);
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn sync_required_amenities(&mut self) {
        self.filter.required_amenities = self
            .amenities
            .iter()
            .zip(&self.selected_amenities)
            .filter(|(_, &selected)| selected)
            .map(|(amenity, _)| amenity.clone())
            .collect();
    }

    /// Draw the panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏨 StayScope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Hotel Analysis Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .data_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.data_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = FilterPanelAction::BrowseData;
                        }
                    });
                });
            });

        if self.loading {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(RichText::new("Loading dataset...").size(11.0).color(Color32::GRAY));
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filter Section =====
        ui.label(RichText::new("🔧 Filter Hotels").size(14.0).strong());
        ui.add_space(8.0);

        ui.label("Price Range (₹):");
        if let (Some((lo_bound, hi_bound)), Some(range)) =
            (self.bounds.price, self.filter.price_range.as_mut())
        {
            let mut changed = false;
            changed |= ui
                .add(
                    egui::Slider::new(&mut range.0, lo_bound..=hi_bound)
                        .text("Min")
                        .fixed_decimals(0),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut range.1, lo_bound..=hi_bound)
                        .text("Max")
                        .fixed_decimals(0),
                )
                .changed();
            if changed {
                if range.1 < range.0 {
                    range.1 = range.0;
                }
                action = FilterPanelAction::FiltersChanged;
            }
        } else {
            ui.label(
                RichText::new("No price data in this dataset")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(8.0);

        ui.label("Rating Range:");
        if let (Some((lo_bound, hi_bound)), Some(range)) =
            (self.bounds.rating, self.filter.rating_range.as_mut())
        {
            let mut changed = false;
            changed |= ui
                .add(
                    egui::Slider::new(&mut range.0, lo_bound..=hi_bound)
                        .text("Min")
                        .step_by(0.1)
                        .fixed_decimals(1),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut range.1, lo_bound..=hi_bound)
                        .text("Max")
                        .step_by(0.1)
                        .fixed_decimals(1),
                )
                .changed();
            if changed {
                if range.1 < range.0 {
                    range.1 = range.0;
                }
                action = FilterPanelAction::FiltersChanged;
            }
        } else {
            ui.label(
                RichText::new("No rating data in this dataset")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(10.0);

        ui.label("Required Amenities:");
        if self.amenities.is_empty() {
            ui.label(
                RichText::new("No amenity data in this dataset")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        } else {
            let mut amenities_changed = false;
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(5.0)
                .show(ui, |ui| {
                    ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                        for (i, amenity) in self.amenities.iter().enumerate() {
                            if i < self.selected_amenities.len()
                                && ui
                                    .checkbox(&mut self.selected_amenities[i], amenity)
                                    .changed()
                            {
                                amenities_changed = true;
                            }
                        }
                    });
                });

            ui.add_space(5.0);
            if ui.small_button("Clear Amenities").clicked() {
                self.selected_amenities.iter_mut().for_each(|v| *v = false);
                amenities_changed = true;
            }

            if amenities_changed {
                self.sync_required_amenities();
                action = FilterPanelAction::FiltersChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("↺ Reset Filters").size(14.0))
                .min_size(egui::vec2(160.0, 30.0));
            if ui.add(button).clicked() {
                action = FilterPanelAction::ResetFilters;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Status =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    BrowseData,
    FiltersChanged,
    ResetFilters,
}
