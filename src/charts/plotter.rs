//! Chart Plotter Module
//! Interactive dashboard charts using egui_plot: amenity frequency bars and
//! the price-vs-rating scatter.

use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

/// Marker color for the scatter plot (matches the dashboard accent).
pub const SCATTER_COLOR: Color32 = Color32::from_rgb(191, 54, 12);

/// Bar fill for the amenity chart.
pub const BAR_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

/// Only the most common amenities are charted.
const MAX_AMENITY_BARS: usize = 10;

const CHART_HEIGHT: f32 = 280.0;

/// One hotel in the price-vs-rating scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub name: String,
    pub rating: f64,
    pub price: f64,
}

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Horizontal bar chart of the most common amenities, largest on top.
    ///
    /// `counts` must already be sorted descending (the stats module's
    /// ordering); only the first `MAX_AMENITY_BARS` entries are drawn.
    pub fn draw_amenity_chart(ui: &mut egui::Ui, counts: &[(String, usize)]) {
        if counts.is_empty() {
            Self::empty_state(ui, "No amenity data for the current selection");
            return;
        }

        let bars_data = Self::chart_order(counts);
        let labels: Vec<String> = bars_data.iter().map(|(name, _)| name.clone()).collect();

        Plot::new("amenity_bars")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Hotels")
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 0.3 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = bars_data
                    .iter()
                    .enumerate()
                    .map(|(i, (name, count))| {
                        Bar::new(i as f64, *count as f64)
                            .name(name)
                            .width(0.6)
                            .fill(BAR_COLOR)
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).horizontal());
            });
    }

    /// Price-vs-rating scatter; hovering a marker names the hotel.
    pub fn draw_price_rating_chart(ui: &mut egui::Ui, points: &[ScatterPoint]) {
        if points.is_empty() {
            Self::empty_state(ui, "Insufficient data for price vs rating analysis");
            return;
        }

        Plot::new("price_vs_rating")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Rating")
            .y_axis_label("Price (₹)")
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("rating {:.1}\n₹{:.0}", value.x, value.y)
                } else {
                    format!("{}\nrating {:.1}\n₹{:.0}", name, value.x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for point in points {
                    let marker: PlotPoints = vec![[point.rating, point.price]].into();
                    plot_ui.points(
                        Points::new(marker)
                            .radius(4.0)
                            .color(SCATTER_COLOR.gamma_multiply(0.8))
                            .name(&point.name),
                    );
                }
            });
    }

    /// Truncate to the charted amenities and flip to ascending so the most
    /// common bar lands on top of the horizontal chart.
    fn chart_order(counts: &[(String, usize)]) -> Vec<(String, usize)> {
        let mut top: Vec<(String, usize)> =
            counts.iter().take(MAX_AMENITY_BARS).cloned().collect();
        top.reverse();
        top
    }

    fn empty_state(ui: &mut egui::Ui, message: &str) {
        ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).size(13.0).color(Color32::GRAY));
        });
        ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_order_truncates_then_flips() {
        let counts: Vec<(String, usize)> = (0..12)
            .map(|i| (format!("a{i:02}"), 100 - i))
            .collect();
        let ordered = ChartPlotter::chart_order(&counts);

        assert_eq!(ordered.len(), 10);
        // Least common of the kept ten comes first (bottom bar)
        assert_eq!(ordered.first().unwrap().1, 91);
        // Most common comes last (top bar)
        assert_eq!(ordered.last().unwrap().1, 100);
    }
}
