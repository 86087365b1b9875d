//! Multi-criteria ordering of a product's store offers.
//!
//! Offers can be ranked by distance, by price, or by an equal-weight blend
//! of both. The blend min-max normalizes each axis to `[0, 1]` across the
//! exact set being sorted, so bounds are recomputed on every call rather
//! than carried over from a previous catalog.

use crate::product::Offer;

const DISTANCE_WEIGHT: f64 = 0.5;
const PRICE_WEIGHT: f64 = 0.5;

/// Returns a sorted copy of `offers`; the input order is never mutated, so
/// clearing both criteria recovers the backend's original ordering.
///
/// - Neither criterion: the input order, unchanged.
/// - One criterion: ascending by that attribute; offers missing the value
///   sort last (treated as infinitely far / expensive).
/// - Both: ascending by `0.5 × distance + 0.5 × price` after min-max
///   normalization. A missing value normalizes to 1 (worst); when every
///   offer shares the same value on an axis, that axis normalizes to 0 for
///   all of them rather than dividing by zero.
///
/// All sorts are stable, so ties keep the input order.
#[must_use]
pub fn sort_offers(offers: &[Offer], by_distance: bool, by_price: bool) -> Vec<Offer> {
    let mut sorted = offers.to_vec();
    match (by_distance, by_price) {
        (false, false) => {}
        (true, false) => {
            sorted.sort_by(|a, b| or_infinite(a.distance_km).total_cmp(&or_infinite(b.distance_km)));
        }
        (false, true) => {
            sorted.sort_by(|a, b| or_infinite(sort_price(a)).total_cmp(&or_infinite(sort_price(b))));
        }
        (true, true) => {
            let distance_bounds = bounds(offers.iter().filter_map(|o| o.distance_km));
            let price_bounds = bounds(offers.iter().filter_map(sort_price));
            let score = |offer: &Offer| {
                DISTANCE_WEIGHT * normalize(offer.distance_km, distance_bounds)
                    + PRICE_WEIGHT * normalize(sort_price(offer), price_bounds)
            };
            sorted.sort_by(|a, b| score(a).total_cmp(&score(b)));
        }
    }
    sorted
}

/// Price attribute used for ordering; absent when the offer has neither a
/// minimum price nor a cost.
#[allow(clippy::cast_precision_loss)]
fn sort_price(offer: &Offer) -> Option<f64> {
    offer.min_price.or(offer.cost).map(|p| p as f64)
}

fn or_infinite(value: Option<f64>) -> f64 {
    value.unwrap_or(f64::INFINITY)
}

/// Min and max over the values present in the set; `None` when no offer
/// carries the attribute at all.
fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Min-max scaling into `[0, 1]`. Missing values are worst (1); a
/// degenerate range maps every present value to 0.
fn normalize(value: Option<f64>, bounds: Option<(f64, f64)>) -> f64 {
    match (value, bounds) {
        (Some(v), Some((lo, hi))) => {
            if (hi - lo).abs() < f64::EPSILON {
                0.0
            } else {
                (v - lo) / (hi - lo)
            }
        }
        _ => 1.0,
    }
}
