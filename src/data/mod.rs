//! Data module - dataset loading, hotel records, and filtering

mod filter;
mod loader;
mod model;

pub use filter::{apply_filters, search_by_name, FilterState};
pub use loader::{load_dataset, LoaderError};
pub use model::{unique_amenities, DataBounds, Hotel};
