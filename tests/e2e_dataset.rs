// StayScope - tests/e2e_dataset.rs
//
// End-to-end tests for the dataset pipeline: real files on disk, real
// Polars CSV scan, real JSON parsing, real field cleaning, and the
// filter/stats path the dashboard drives per interaction.

use stayscope::data::{
    apply_filters, load_dataset, search_by_name, DataBounds, FilterState, LoaderError,
};
use stayscope::stats;
use std::io::Write;
use std::path::PathBuf;

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn e2e_csv_fixture_loads_and_cleans() {
    let hotels = load_dataset(&fixture("hotels_sample.csv")).unwrap();

    // Six raw rows, one without a name
    assert_eq!(hotels.len(), 5);

    let grand = &hotels[0];
    assert_eq!(grand.name, "The Grand Meridian");
    assert_eq!(grand.rating, Some(4.5));
    assert_eq!(grand.reviews, Some(2341));
    assert_eq!(grand.price_display, "₹7,850");
    assert_eq!(grand.price, Some(7850.0));
    assert_eq!(grand.amenities, vec!["Free Wi-Fi", "Pool", "Spa"]);
    assert_eq!(
        grand.link.as_deref(),
        Some("https://example.com/grand-meridian")
    );

    // Missing price cell
    let budget = &hotels[2];
    assert_eq!(budget.name, "Budget Stay Express");
    assert_eq!(budget.price, None);
    assert_eq!(budget.price_display, "");
    assert_eq!(budget.link, None);

    // Price range string keeps the lower bound
    assert_eq!(hotels[3].price, Some(12400.0));

    // Missing rating and amenities
    let hilltop = &hotels[4];
    assert_eq!(hilltop.rating, None);
    assert!(hilltop.amenities.is_empty());
}

#[test]
fn e2e_json_fixture_matches_csv() {
    let from_csv = load_dataset(&fixture("hotels_sample.csv")).unwrap();
    let from_json = load_dataset(&fixture("hotels_sample.json")).unwrap();
    assert_eq!(from_csv, from_json);
}

#[test]
fn e2e_default_filter_excludes_rows_missing_ranged_fields() {
    let hotels = load_dataset(&fixture("hotels_sample.csv")).unwrap();
    let bounds = DataBounds::from_hotels(&hotels);
    assert_eq!(bounds.price, Some((3200.0, 12400.0)));
    assert_eq!(bounds.rating, Some((3.2, 4.8)));

    let filtered = apply_filters(&hotels, &FilterState::from_bounds(&bounds));
    // Budget Stay Express has no price, Hilltop Retreat has no rating
    assert_eq!(filtered, vec![0, 1, 3]);
}

#[test]
fn e2e_filtered_summary_and_charts_data() {
    let hotels = load_dataset(&fixture("hotels_sample.csv")).unwrap();
    let bounds = DataBounds::from_hotels(&hotels);

    let filter = FilterState {
        price_range: Some((3000.0, 8000.0)),
        ..FilterState::from_bounds(&bounds)
    };
    let filtered = apply_filters(&hotels, &filter);
    assert_eq!(filtered, vec![0, 1]);

    let summary = stats::compute_summary(&hotels, &filtered);
    assert_eq!(summary.total, 2);
    assert!((summary.mean_rating.unwrap() - 4.3).abs() < 1e-9);
    assert_eq!(summary.median_price, Some(5525.0));
    assert_eq!(stats::format_inr(summary.median_price), "₹5,525.00");

    // Widest filter: amenity counts and top-rated ordering
    let all = apply_filters(&hotels, &FilterState::from_bounds(&bounds));
    let counts = stats::count_amenities(&hotels, &all);
    assert_eq!(
        counts,
        vec![
            ("Free Wi-Fi".to_string(), 3),
            ("Pool".to_string(), 2),
            ("Spa".to_string(), 2),
            ("Breakfast".to_string(), 1),
            ("Gym".to_string(), 1),
        ]
    );

    assert_eq!(stats::top_rated(&hotels, &all, 5), vec![3, 0, 1]);

    let corr = stats::price_rating_correlation(&hotels, &all).unwrap();
    assert_eq!(corr.n, 3);
    assert!(corr.r > 0.9, "expected strong positive correlation, got {}", corr.r);
}

#[test]
fn e2e_amenity_filter_requires_full_set() {
    let hotels = load_dataset(&fixture("hotels_sample.csv")).unwrap();
    let bounds = DataBounds::from_hotels(&hotels);

    let filter = FilterState {
        required_amenities: vec!["Pool".to_string(), "Gym".to_string()],
        ..FilterState::from_bounds(&bounds)
    };
    assert_eq!(apply_filters(&hotels, &filter), vec![3]);
}

#[test]
fn e2e_search_scopes_to_filtered_set() {
    let hotels = load_dataset(&fixture("hotels_sample.csv")).unwrap();
    let bounds = DataBounds::from_hotels(&hotels);
    let filtered = apply_filters(&hotels, &FilterState::from_bounds(&bounds));

    assert_eq!(search_by_name(&hotels, &filtered, "INN"), vec![1]);
    // Hilltop Retreat is excluded by the rating filter, so it cannot match
    assert!(search_by_name(&hotels, &filtered, "hilltop").is_empty());
}

#[test]
fn e2e_missing_file_is_io_error() {
    let err = load_dataset(&fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, LoaderError::Io { .. }), "got {err:?}");
}

#[test]
fn e2e_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hotels.txt");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"not a dataset")
        .unwrap();

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, LoaderError::UnsupportedFormat(ext) if ext == "txt"));
}

#[test]
fn e2e_empty_dataset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, LoaderError::Empty), "got {err:?}");
}
