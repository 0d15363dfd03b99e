//! Stats module - aggregate metrics over the filtered set

mod summary;

pub use summary::{
    compute_summary, count_amenities, format_count, format_inr, percentile,
    price_rating_correlation, top_rated, Correlation, Summary, SIGNIFICANCE_THRESHOLD,
};
