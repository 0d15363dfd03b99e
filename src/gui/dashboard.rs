//! Dashboard View
//! Central panel: metric tiles, hotel search, top rated table, and the two
//! charts. Lays charts out side by side when the window is wide enough.

use crate::charts::{ChartPlotter, ScatterPoint, SCATTER_COLOR};
use crate::data::{search_by_name, Hotel};
use crate::stats::{self, Correlation, Summary};
use egui::{Color32, RichText, ScrollArea};

const TOP_RATED_COUNT: usize = 5;
const MAX_SEARCH_RESULTS: usize = 20;
const SIDE_BY_SIDE_MIN_WIDTH: f32 = 980.0;

/// Everything the dashboard renders, recomputed when the filter changes.
#[derive(Default)]
pub struct DashboardData {
    pub summary: Summary,
    pub amenity_counts: Vec<(String, usize)>,
    pub top_rated: Vec<usize>,
    pub scatter: Vec<ScatterPoint>,
    pub correlation: Option<Correlation>,
}

impl DashboardData {
    pub fn compute(hotels: &[Hotel], filtered: &[usize]) -> Self {
        let scatter = filtered
            .iter()
            .filter_map(|&i| {
                let hotel = &hotels[i];
                Some(ScatterPoint {
                    name: hotel.name.clone(),
                    rating: hotel.rating?,
                    price: hotel.price?,
                })
            })
            .collect();

        Self {
            summary: stats::compute_summary(hotels, filtered),
            amenity_counts: stats::count_amenities(hotels, filtered),
            top_rated: stats::top_rated(hotels, filtered, TOP_RATED_COUNT),
            scatter,
            correlation: stats::price_rating_correlation(hotels, filtered),
        }
    }
}

/// Central dashboard view. Owns only the search box state; all derived data
/// comes in as `DashboardData`.
#[derive(Default)]
pub struct Dashboard {
    pub search_query: String,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        hotels: &[Hotel],
        filtered: &[usize],
        view: &DashboardData,
    ) {
        if hotels.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new("No Data — load a hotel dataset to begin")
                        .size(20.0)
                        .color(Color32::GRAY),
                );
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.search_section(ui, hotels, filtered);
                Self::stats_section(ui, &view.summary);
                Self::top_rated_section(ui, hotels, &view.top_rated);
                Self::charts_section(ui, view);
                ui.add_space(20.0);
            });
    }

    fn section_heading(ui: &mut egui::Ui, text: &str) {
        ui.add_space(14.0);
        ui.label(RichText::new(text).size(16.0).strong());
        ui.add_space(6.0);
    }

    fn search_section(&mut self, ui: &mut egui::Ui, hotels: &[Hotel], filtered: &[usize]) {
        Self::section_heading(ui, "🔍 Search Hotels");

        ui.add(
            egui::TextEdit::singleline(&mut self.search_query)
                .hint_text("Enter hotel name")
                .desired_width(320.0),
        );

        let query = self.search_query.trim();
        if query.is_empty() {
            return;
        }

        let matches = search_by_name(hotels, filtered, query);
        if matches.is_empty() {
            ui.add_space(5.0);
            ui.label(
                RichText::new("No hotels found matching your search.")
                    .size(12.0)
                    .color(Color32::GRAY),
            );
            return;
        }

        ui.add_space(5.0);
        ui.label(format!(
            "Found {} hotels matching '{}':",
            matches.len(),
            query
        ));

        for (i, &idx) in matches.iter().take(MAX_SEARCH_RESULTS).enumerate() {
            Self::search_result(ui, i, &hotels[idx]);
        }

        if matches.len() > MAX_SEARCH_RESULTS {
            ui.label(
                RichText::new(format!(
                    "Showing first {} of {} matches",
                    MAX_SEARCH_RESULTS,
                    matches.len()
                ))
                .size(11.0)
                .color(Color32::GRAY),
            );
        }
    }

    fn search_result(ui: &mut egui::Ui, row: usize, hotel: &Hotel) {
        let rating_text = hotel
            .rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "—".to_string());
        let header = format!("🏨 {} — ⭐ {}", hotel.name, rating_text);

        egui::CollapsingHeader::new(RichText::new(header).size(13.0))
            .id_salt(row)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let price = if hotel.price_display.is_empty() {
                            "N/A"
                        } else {
                            hotel.price_display.as_str()
                        };
                        ui.label(format!("Price: {price}"));

                        let reviews = hotel
                            .reviews
                            .map(|n| stats::format_count(n as usize))
                            .unwrap_or_else(|| "N/A".to_string());
                        ui.label(format!("Reviews: {reviews}"));

                        if hotel.amenities.is_empty() {
                            ui.label("Amenities: —");
                        } else {
                            ui.label(format!("Amenities: {}", hotel.amenities.join(", ")));
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if let Some(link) = &hotel.link {
                            if ui.button("🔗 View Details").clicked() {
                                if let Err(e) = open::that(link) {
                                    tracing::warn!(error = %e, link = %link, "Failed to open hotel link");
                                }
                            }
                        }
                    });
                });
            });
    }

    fn stats_section(ui: &mut egui::Ui, summary: &Summary) {
        Self::section_heading(ui, "📊 Quick Stats");

        let rating_text = summary
            .mean_rating
            .map(|r| format!("{r:.1} / 5.0 ⭐"))
            .unwrap_or_else(|| "N/A".to_string());

        ui.horizontal(|ui| {
            Self::metric_tile(ui, "Average Rating", &rating_text);
            Self::metric_tile(ui, "Total Hotels", &stats::format_count(summary.total));
            Self::metric_tile(ui, "Median Price", &stats::format_inr(summary.median_price));
        });
    }

    fn metric_tile(ui: &mut egui::Ui, label: &str, value: &str) {
        egui::Frame::none()
            .fill(ui.visuals().faint_bg_color)
            .rounding(5.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_min_width(170.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(20.0).strong());
                });
            });
        ui.add_space(10.0);
    }

    fn top_rated_section(ui: &mut egui::Ui, hotels: &[Hotel], top: &[usize]) {
        Self::section_heading(ui, "🏆 Top Rated Hotels");

        if top.is_empty() {
            ui.label(
                RichText::new("No rated hotels in the current selection.")
                    .size(12.0)
                    .color(Color32::GRAY),
            );
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("top_rated_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([16.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Hotel Name").strong().size(12.0));
                        ui.label(RichText::new("Rating").strong().size(12.0));
                        ui.label(RichText::new("Price").strong().size(12.0));
                        ui.end_row();

                        for &idx in top {
                            let hotel = &hotels[idx];
                            ui.label(RichText::new(&hotel.name).size(12.0));
                            let rating = hotel
                                .rating
                                .map(|r| format!("⭐ {r:.1}"))
                                .unwrap_or_else(|| "—".to_string());
                            ui.label(RichText::new(rating).size(12.0));
                            let price = if hotel.price_display.is_empty() {
                                "N/A".to_string()
                            } else {
                                hotel.price_display.clone()
                            };
                            ui.label(RichText::new(price).size(12.0));
                            ui.end_row();
                        }
                    });
            });
    }

    fn charts_section(ui: &mut egui::Ui, view: &DashboardData) {
        if ui.available_width() >= SIDE_BY_SIDE_MIN_WIDTH {
            ui.columns(2, |cols| {
                Self::amenity_chart(&mut cols[0], view);
                Self::scatter_chart(&mut cols[1], view);
            });
        } else {
            Self::amenity_chart(ui, view);
            Self::scatter_chart(ui, view);
        }
    }

    fn amenity_chart(ui: &mut egui::Ui, view: &DashboardData) {
        Self::section_heading(ui, "🎯 Popular Amenities");
        ChartPlotter::draw_amenity_chart(ui, &view.amenity_counts);
    }

    fn scatter_chart(ui: &mut egui::Ui, view: &DashboardData) {
        Self::section_heading(ui, "💰 Price vs Rating");

        if let Some(corr) = &view.correlation {
            let color = if corr.is_significant {
                SCATTER_COLOR
            } else {
                Color32::GRAY
            };
            ui.label(
                RichText::new(format!(
                    "Pearson r = {:.2} (p = {:.4}, n = {})",
                    corr.r, corr.p_value, corr.n
                ))
                .size(11.0)
                .color(color),
            );
        }

        ChartPlotter::draw_price_rating_chart(ui, &view.scatter);
    }
}
