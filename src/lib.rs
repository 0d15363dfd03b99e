//! StayScope - Hotel Dataset Analysis & Interactive Dashboard
//!
//! Loads a pre-scraped hotel dataset (CSV or JSON), applies price, rating,
//! and amenity filters, and renders summary metrics, charts, and tables in
//! an egui desktop window.

pub mod charts;
pub mod data;
pub mod gui;
pub mod stats;
