//! Hotel Record Model
//! The cleaned in-memory representation of one scraped hotel row.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One hotel record after field cleaning.
///
/// `price_display` keeps the raw scraped text (e.g. "₹7,850") for display;
/// `price` is the numeric value derived from it. Fields that failed to parse
/// are `None` rather than a sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    pub price_display: String,
    pub price: Option<f64>,
    pub amenities: Vec<String>,
    pub link: Option<String>,
}

impl Hotel {
    /// Exact amenity membership test.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// Observed min/max of the numeric fields across a dataset.
///
/// `None` means the dataset has no usable values for that field, in which
/// case the corresponding range filter stays inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DataBounds {
    pub price: Option<(f64, f64)>,
    pub rating: Option<(f64, f64)>,
}

impl DataBounds {
    pub fn from_hotels(hotels: &[Hotel]) -> Self {
        let mut bounds = Self::default();
        for hotel in hotels {
            if let Some(p) = hotel.price {
                bounds.price = Some(match bounds.price {
                    Some((lo, hi)) => (lo.min(p), hi.max(p)),
                    None => (p, p),
                });
            }
            if let Some(r) = hotel.rating {
                bounds.rating = Some(match bounds.rating {
                    Some((lo, hi)) => (lo.min(r), hi.max(r)),
                    None => (r, r),
                });
            }
        }
        bounds
    }
}

/// All distinct amenities across the dataset, sorted.
pub fn unique_amenities(hotels: &[Hotel]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for hotel in hotels {
        for amenity in &hotel.amenities {
            set.insert(amenity.clone());
        }
    }
    set.into_iter().collect()
}
