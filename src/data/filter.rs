//! Hotel Filter Module
//! AND-combined range and amenity filters over the loaded records.
//! Pure logic, no I/O or UI dependencies.

use crate::data::model::{DataBounds, Hotel};

/// Complete filter state. All active fields are AND-combined when applied.
///
/// A range is `None` when the dataset has no values for that field, in which
/// case it does not constrain anything. When a range is active, records
/// missing that field are excluded even at the full default range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Inclusive price range in the dataset currency.
    pub price_range: Option<(f64, f64)>,

    /// Inclusive rating range.
    pub rating_range: Option<(f64, f64)>,

    /// A hotel must carry every listed amenity.
    pub required_amenities: Vec<String>,
}

impl FilterState {
    /// The widest filter the dataset supports: full observed ranges, no
    /// required amenities.
    pub fn from_bounds(bounds: &DataBounds) -> Self {
        Self {
            price_range: bounds.price,
            rating_range: bounds.rating,
            required_amenities: Vec::new(),
        }
    }
}

/// Apply filters to the hotel slice, returning indices of matching records.
///
/// Indices preserve dataset order and avoid copying records; the aggregate
/// view works off this index set.
pub fn apply_filters(hotels: &[Hotel], filter: &FilterState) -> Vec<usize> {
    hotels
        .iter()
        .enumerate()
        .filter(|(_, hotel)| matches_all(hotel, filter))
        .map(|(idx, _)| idx)
        .collect()
}

fn matches_all(hotel: &Hotel, filter: &FilterState) -> bool {
    if let Some((lo, hi)) = filter.price_range {
        match hotel.price {
            Some(p) if p >= lo && p <= hi => {}
            _ => return false,
        }
    }

    if let Some((lo, hi)) = filter.rating_range {
        match hotel.rating {
            Some(r) if r >= lo && r <= hi => {}
            _ => return false,
        }
    }

    filter
        .required_amenities
        .iter()
        .all(|a| hotel.has_amenity(a))
}

/// Case-insensitive substring search over an already-filtered index set.
///
/// Searching narrows only the results section; the aggregate view keeps
/// using the unsearched filter output.
pub fn search_by_name(hotels: &[Hotel], indices: &[usize], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return indices.to_vec();
    }

    indices
        .iter()
        .copied()
        .filter(|&i| hotels[i].name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_hotel(
        name: &str,
        rating: Option<f64>,
        price: Option<f64>,
        amenities: &[&str],
    ) -> Hotel {
        Hotel {
            name: name.to_string(),
            rating,
            reviews: None,
            price_display: String::new(),
            price,
            amenities: amenities.iter().map(|s| s.to_string()).collect(),
            link: None,
        }
    }

    fn sample() -> Vec<Hotel> {
        vec![
            make_hotel("The Grand", Some(4.5), Some(7850.0), &["Pool", "Spa"]),
            make_hotel("Seaside Inn", Some(4.1), Some(3200.0), &["Pool"]),
            make_hotel("Budget Stay", Some(3.2), None, &["Parking"]),
            make_hotel("Hilltop Retreat", None, Some(5100.0), &[]),
        ]
    }

    #[test]
    fn inactive_filter_keeps_everything() {
        let hotels = sample();
        let result = apply_filters(&hotels, &FilterState::default());
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn full_range_still_excludes_missing_fields() {
        let hotels = sample();
        let bounds = DataBounds::from_hotels(&hotels);
        let result = apply_filters(&hotels, &FilterState::from_bounds(&bounds));
        // Budget Stay has no price, Hilltop Retreat has no rating
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let hotels = sample();
        let filter = FilterState {
            price_range: Some((3200.0, 7850.0)),
            ..Default::default()
        };
        assert_eq!(apply_filters(&hotels, &filter), vec![0, 1, 3]);

        let narrower = FilterState {
            price_range: Some((3200.0, 7849.0)),
            ..Default::default()
        };
        assert_eq!(apply_filters(&hotels, &narrower), vec![1, 3]);
    }

    #[test]
    fn rating_range_excludes_outside() {
        let hotels = sample();
        let filter = FilterState {
            rating_range: Some((4.0, 5.0)),
            ..Default::default()
        };
        assert_eq!(apply_filters(&hotels, &filter), vec![0, 1]);
    }

    #[test]
    fn amenities_all_required() {
        let hotels = sample();
        let filter = FilterState {
            required_amenities: vec!["Pool".to_string(), "Spa".to_string()],
            ..Default::default()
        };
        assert_eq!(apply_filters(&hotels, &filter), vec![0]);

        let single = FilterState {
            required_amenities: vec!["Pool".to_string()],
            ..Default::default()
        };
        assert_eq!(apply_filters(&hotels, &single), vec![0, 1]);
    }

    #[test]
    fn combined_filters_are_anded() {
        let hotels = sample();
        let filter = FilterState {
            price_range: Some((3000.0, 8000.0)),
            rating_range: Some((4.0, 5.0)),
            required_amenities: vec!["Spa".to_string()],
        };
        assert_eq!(apply_filters(&hotels, &filter), vec![0]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let hotels = sample();
        let all: Vec<usize> = (0..hotels.len()).collect();
        assert_eq!(search_by_name(&hotels, &all, "grand"), vec![0]);
        assert_eq!(search_by_name(&hotels, &all, "  INN "), vec![1]);
        assert!(search_by_name(&hotels, &all, "nowhere").is_empty());
    }

    #[test]
    fn search_scopes_to_filtered_indices() {
        let hotels = sample();
        // "Seaside Inn" is outside the index set, so it cannot match
        assert_eq!(search_by_name(&hotels, &[0, 2], "inn"), Vec::<usize>::new());
        assert_eq!(search_by_name(&hotels, &[0, 2], ""), vec![0, 2]);
    }
}
