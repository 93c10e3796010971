//! Assembly of a [`CanonicalDoctorRecord`] from raw field values.
//!
//! Text cleanup is delegated to [`crate::text`], titles to [`crate::title`]
//! and price consensus to [`crate::price`]; this module owns the numeric and
//! boolean coercions. All coercions are total and fall back to zero values.

use drdb_core::{CanonicalDoctorRecord, PriceObservations};
use serde_json::Value;

use crate::fields::RawFieldMap;
use crate::price::resolve_price;
use crate::text::{clean_text, clean_value};
use crate::title::normalize_name;

/// Builds the canonical record for one profile.
///
/// An explicit `price` in `fields` is taken as already resolved; otherwise
/// the price is resolved from `prices`.
#[must_use]
pub fn assemble(fields: &RawFieldMap, prices: &PriceObservations) -> CanonicalDoctorRecord {
    let price = match fields.price.as_ref() {
        Some(value) => clean_value(Some(value)),
        None => clean_text(&resolve_price(&prices.numeric, &prices.textual)),
    };

    CanonicalDoctorRecord {
        doctor_id: convert_doctor_id(fields.doctor_id.as_ref()),
        name1: normalize_name(&clean_value(fields.name1.as_ref())),
        name2: normalize_name(&clean_value(fields.name2.as_ref())),
        city1: clean_value(fields.city1.as_ref()),
        city2: clean_value(fields.city2.as_ref()),
        region: clean_value(fields.region.as_ref()),
        specialization: clean_value(fields.specialization.as_ref()),
        reviews: convert_reviews(fields.reviews.as_ref()),
        newest_review_date: clean_value(fields.newest_review_date.as_ref()),
        telemedicine: convert_telemedicine(fields.telemedicine.as_ref()),
        price,
        url: clean_value(fields.url.as_ref()),
        fetch_time: clean_value(fields.fetch_time.as_ref()),
    }
}

/// Coerces a doctor identifier to an integer, `0` when absent or unusable.
///
/// Accepts integers, integer text, and finite floats or float text (truncated
/// toward zero). Booleans map to `0`/`1`.
#[must_use]
pub fn convert_doctor_id(value: Option<&Value>) -> i64 {
    let id = match value {
        None | Some(Value::Null) => return 0,
        Some(Value::Bool(b)) => Some(i64::from(*b)),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(truncate_f64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return 0;
            }
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_f64))
        }
        Some(Value::Array(_) | Value::Object(_)) => None,
    };

    id.unwrap_or_else(|| {
        tracing::debug!(raw = ?value, "discarding unusable doctor_id");
        0
    })
}

/// Coerces a review count to a non-negative float, `0.0` on any failure.
#[must_use]
pub fn convert_reviews(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Coerces a telemedicine flag to `1` or `0`.
///
/// Text is compared case-insensitively against `1`, `sim`, `yes` and `true`;
/// numbers and booleans use their truthiness.
#[must_use]
pub fn convert_telemedicine(value: Option<&Value>) -> u8 {
    let enabled = match value {
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "sim" | "yes" | "true"
        ),
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    };
    u8::from(enabled)
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_f64(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (v.is_finite() && v > -LIMIT && v < LIMIT).then(|| v.trunc() as i64)
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
