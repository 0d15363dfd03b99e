//! Summary Statistics Module
//! Aggregate metrics over the filtered hotel set: headline numbers, amenity
//! frequencies, top-rated ordering, and the price/rating correlation.

use crate::data::Hotel;
use rayon::prelude::*;
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Significance threshold for the correlation test
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.05;

/// Headline metrics for the metric tiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub mean_rating: Option<f64>,
    pub median_price: Option<f64>,
}

/// Pearson correlation between price and rating over the filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    pub r: f64,
    pub p_value: f64,
    pub n: usize,
    pub is_significant: bool,
}

/// Compute the headline metrics. Mean ignores missing ratings, median
/// ignores missing prices.
pub fn compute_summary(hotels: &[Hotel], indices: &[usize]) -> Summary {
    let ratings: Vec<f64> = indices.iter().filter_map(|&i| hotels[i].rating).collect();
    let mut prices: Vec<f64> = indices.iter().filter_map(|&i| hotels[i].price).collect();
    prices.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mean_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    let median_price = if prices.is_empty() {
        None
    } else {
        Some(percentile(&prices, 50.0))
    };

    Summary {
        total: indices.len(),
        mean_rating,
        median_price,
    }
}

/// Percentile over pre-sorted values using linear interpolation.
pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// Amenity frequency across the filtered set, descending with name
/// tiebreak. Counting fans out across records with rayon.
pub fn count_amenities(hotels: &[Hotel], indices: &[usize]) -> Vec<(String, usize)> {
    let counts: HashMap<String, usize> = indices
        .par_iter()
        .fold(HashMap::new, |mut acc, &i| {
            for amenity in &hotels[i].amenities {
                *acc.entry(amenity.clone()).or_insert(0) += 1;
            }
            acc
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (amenity, count) in partial {
                *merged.entry(amenity).or_insert(0) += count;
            }
            merged
        });

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Indices of the n highest-rated hotels, rating descending with review
/// count as tiebreak. Records without a rating are excluded.
pub fn top_rated(hotels: &[Hotel], indices: &[usize], n: usize) -> Vec<usize> {
    let mut rated: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&i| hotels[i].rating.is_some())
        .collect();

    rated.sort_by(|&a, &b| {
        hotels[b]
            .rating
            .partial_cmp(&hotels[a].rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                hotels[b]
                    .reviews
                    .unwrap_or(0)
                    .cmp(&hotels[a].reviews.unwrap_or(0))
            })
    });

    rated.truncate(n);
    rated
}

/// Pearson correlation between rating and price with a two-tailed p-value
/// from the t distribution. Needs at least 3 paired points and non-constant
/// data in both fields.
pub fn price_rating_correlation(hotels: &[Hotel], indices: &[usize]) -> Option<Correlation> {
    let pairs: Vec<(f64, f64)> = indices
        .iter()
        .filter_map(|&i| Some((hotels[i].rating?, hotels[i].price?)))
        .collect();

    let n = pairs.len();
    if n < 3 {
        return None;
    }

    let nf = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);

    // t statistic with n-2 degrees of freedom
    let df = nf - 2.0;
    let denom = 1.0 - r * r;
    let p_value = if denom <= f64::EPSILON {
        0.0
    } else {
        let t = r * (df / denom).sqrt();
        let dist = StudentsT::new(0.0, 1.0, df).ok()?;
        2.0 * (1.0 - dist.cdf(t.abs()))
    };

    Some(Correlation {
        r,
        p_value,
        n,
        is_significant: p_value <= SIGNIFICANCE_THRESHOLD,
    })
}

/// Format a price in the dataset currency: "₹7,850.00"; missing -> "N/A".
pub fn format_inr(amount: Option<f64>) -> String {
    let Some(v) = amount else {
        return "N/A".to_string();
    };
    if !v.is_finite() {
        return "N/A".to_string();
    }

    let sign = if v < 0.0 { "-" } else { "" };
    let text = format!("{:.2}", v.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("₹{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Format a count with thousands separators: 12345 -> "12,345".
pub fn format_count(count: usize) -> String {
    group_thousands(&count.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(ch);
    }
    reversed.chars().rev().collect()
}
