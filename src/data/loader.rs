//! Dataset Loader Module
//! Loads scraped hotel datasets (CSV via Polars, JSON via serde_json) and
//! cleans the raw fields into `Hotel` records.

use crate::data::model::Hotel;
use polars::prelude::*;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Unsupported dataset format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
    #[error("Dataset contains no hotel records")]
    Empty,
}

/// Load and clean a hotel dataset, dispatching on the file extension.
///
/// Rows without a name are dropped; every other field degrades to `None` or
/// empty rather than failing the load.
pub fn load_dataset(path: &Path) -> Result<Vec<Hotel>, LoaderError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let hotels = match ext.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        other => {
            return Err(LoaderError::UnsupportedFormat(
                other.unwrap_or("none").to_string(),
            ))
        }
    };

    if hotels.is_empty() {
        return Err(LoaderError::Empty);
    }
    tracing::debug!(rows = hotels.len(), path = %path.display(), "Dataset loaded");
    Ok(hotels)
}

fn load_csv(path: &Path) -> Result<Vec<Hotel>, LoaderError> {
    // Lazy scan with inference, then collect; unparseable cells become nulls
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    Ok(hotels_from_dataframe(&df))
}

fn load_json(path: &Path) -> Result<Vec<Hotel>, LoaderError> {
    let text = fs::read_to_string(path).map_err(|e| LoaderError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let records: Vec<RawRecord> = serde_json::from_str(&text)?;
    Ok(records.into_iter().filter_map(hotel_from_record).collect())
}

/// One record as it appears in the scraped JSON. Scrapers emit numbers and
/// strings interchangeably, so the loosely typed fields stay `Value` until
/// cleaning.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    reviews: Option<Value>,
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    amenities: Option<Value>,
    #[serde(default)]
    link: Option<String>,
}

fn hotel_from_record(raw: RawRecord) -> Option<Hotel> {
    let name = raw.name?.trim().to_string();
    if name.is_empty() {
        return None;
    }

    let rating = raw
        .rating
        .as_ref()
        .and_then(value_text)
        .as_deref()
        .and_then(parse_rating);
    let reviews = raw
        .reviews
        .as_ref()
        .and_then(value_text)
        .as_deref()
        .and_then(parse_reviews);
    let price_display = raw.price.as_ref().and_then(value_text).unwrap_or_default();
    let price = parse_price(&price_display);

    let amenities = match raw.amenities {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => split_amenities(&s),
        _ => Vec::new(),
    };

    let link = raw.link.filter(|s| !s.trim().is_empty());

    Some(Hotel {
        name,
        rating,
        reviews,
        price_display,
        price,
        amenities,
        link,
    })
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn hotels_from_dataframe(df: &DataFrame) -> Vec<Hotel> {
    (0..df.height())
        .filter_map(|i| {
            let name = cell_text(df, "name", i)?.trim().to_string();
            if name.is_empty() {
                return None;
            }

            let rating = cell_text(df, "rating", i).as_deref().and_then(parse_rating);
            let reviews = cell_text(df, "reviews", i)
                .as_deref()
                .and_then(parse_reviews);
            let price_display = cell_text(df, "price", i).unwrap_or_default();
            let price = parse_price(&price_display);
            let amenities = cell_text(df, "amenities", i)
                .map(|s| split_amenities(&s))
                .unwrap_or_default();
            let link = cell_text(df, "link", i).filter(|s| !s.trim().is_empty());

            Some(Hotel {
                name,
                rating,
                reviews,
                price_display,
                price,
                amenities,
                link,
            })
        })
        .collect()
}

/// Get one cell as text, regardless of the inferred column dtype.
fn cell_text(df: &DataFrame, column: &str, row: usize) -> Option<String> {
    let col = df.column(column).ok()?;
    let val = col.get(row).ok()?;
    if val.is_null() {
        None
    } else {
        Some(val.to_string().trim_matches('"').to_string())
    }
}

fn price_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9][0-9.]*").expect("literal pattern"))
}

/// Extract the first numeric run from a scraped price string.
///
/// Handles currency symbols, thousands separators, and range strings like
/// "₹2,100 - ₹3,000" (the lower bound wins).
pub(crate) fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('₹', "").replace(',', "");
    let m = price_regex().find(&cleaned)?;
    m.as_str().parse::<f64>().ok().filter(|p| p.is_finite())
}

pub(crate) fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Review counts arrive as "1,234" or as plain numbers (sometimes "95.0"
/// after a float round-trip in the scraper).
pub(crate) fn parse_reviews(raw: &str) -> Option<u64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u64)
}

/// CSV cells carry amenities as one `;`-separated string.
pub(crate) fn split_amenities(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_strips_currency_and_separators() {
        assert_eq!(parse_price("₹4,500"), Some(4500.0));
        assert_eq!(parse_price("₹12,400.50"), Some(12400.5));
        assert_eq!(parse_price("$1,200"), Some(1200.0));
    }

    #[test]
    fn parse_price_takes_lower_bound_of_ranges() {
        assert_eq!(parse_price("₹2,100 - ₹3,000"), Some(2100.0));
    }

    #[test]
    fn parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("Contact hotel"), None);
        assert_eq!(parse_price("..."), None);
    }

    #[test]
    fn parse_reviews_strips_thousands_separators() {
        assert_eq!(parse_reviews("2,341"), Some(2341));
        assert_eq!(parse_reviews("95"), Some(95));
        assert_eq!(parse_reviews("95.0"), Some(95));
        assert_eq!(parse_reviews(""), None);
        assert_eq!(parse_reviews("many"), None);
    }

    #[test]
    fn parse_rating_coerces_or_drops() {
        assert_eq!(parse_rating("4.5"), Some(4.5));
        assert_eq!(parse_rating(" 3 "), Some(3.0));
        assert_eq!(parse_rating("N/A"), None);
    }

    #[test]
    fn split_amenities_trims_and_drops_empties() {
        assert_eq!(
            split_amenities("Free Wi-Fi; Pool ;; Spa"),
            vec!["Free Wi-Fi", "Pool", "Spa"]
        );
        assert!(split_amenities("").is_empty());
        assert!(split_amenities(" ; ").is_empty());
    }

    #[test]
    fn dataframe_rows_without_name_are_dropped() {
        let df = DataFrame::new(vec![
            Column::new("name".into(), &["The Grand", "", "Seaside Inn"]),
            Column::new("rating".into(), &["4.5", "3.9", "bad"]),
            Column::new("price".into(), &["₹7,850", "₹100", ""]),
        ])
        .unwrap();

        let hotels = hotels_from_dataframe(&df);
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].name, "The Grand");
        assert_eq!(hotels[0].rating, Some(4.5));
        assert_eq!(hotels[0].price, Some(7850.0));
        assert_eq!(hotels[1].name, "Seaside Inn");
        assert_eq!(hotels[1].rating, None);
        assert_eq!(hotels[1].price, None);
        // No amenities/link columns at all: fields default to empty
        assert!(hotels[0].amenities.is_empty());
        assert_eq!(hotels[0].link, None);
    }

    #[test]
    fn json_records_clean_like_csv_rows() {
        let raw = r#"[
            {"name": "The Grand", "rating": 4.5, "reviews": "2,341",
             "price": "₹7,850", "amenities": ["Pool", " Spa "],
             "link": "https://example.com/grand"},
            {"rating": 5.0, "price": "₹1"},
            {"name": "Plain", "amenities": "Parking; Breakfast"}
        ]"#;
        let records: Vec<RawRecord> = serde_json::from_str(raw).unwrap();
        let hotels: Vec<Hotel> = records.into_iter().filter_map(hotel_from_record).collect();

        assert_eq!(hotels.len(), 2); // nameless record dropped
        assert_eq!(hotels[0].rating, Some(4.5));
        assert_eq!(hotels[0].reviews, Some(2341));
        assert_eq!(hotels[0].amenities, vec!["Pool", "Spa"]);
        assert_eq!(hotels[1].amenities, vec!["Parking", "Breakfast"]);
        assert_eq!(hotels[1].price, None);
        assert_eq!(hotels[1].price_display, "");
    }
}
