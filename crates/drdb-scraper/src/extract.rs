//! Tolerant field extraction from a page's embedded script segments.
//!
//! The segments are JavaScript, not JSON, so each field is located with a
//! single regex and only the first match is used. A field whose pattern does
//! not match is recorded as the empty string; extraction never fails.

use std::sync::LazyLock;

use drdb_core::RawProfilePage;
use regex::Regex;
use serde_json::Value;

use crate::fields::RawFieldMap;

// App-config segment (`ZLApp.AppConfig`).
static DOCTOR_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DOCTOR_ID:\s(\d+)").expect("valid regex"));
static FULLNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FULLNAME:\s'(.*?)'").expect("valid regex"));
// `\b` keeps `FULLNAME:` from matching as the city name.
static CITY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bNAME:\s'(.*?)'").expect("valid regex"));

// Tag-manager segment (`dataLayer['key'] = 'value'` assignments).
static GTM_DOCTOR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"doctor-name'\]\s=\s'(.*?)'").expect("valid regex"));
static GTM_CITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"city'\]\s=\s'(.*?)'").expect("valid regex"));
static GTM_REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"region'\]\s=\s'(.*?)'").expect("valid regex"));
static GTM_SPECIALIZATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"specialization'\]\s=\s'(.*?)'").expect("valid regex"));
static GTM_TELEMEDICINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"virtual-consultation-profile'\]\s=\s'(.*?)'").expect("valid regex")
});
static GTM_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\['gtm-url'\]\s=\s'(.*?)'").expect("valid regex"));

/// Pulls the raw field values out of `page`.
///
/// Every slot except `price` is populated (possibly with `""`); the price is
/// resolved separately from the page's price observations.
#[must_use]
pub fn extract_fields(page: &RawProfilePage) -> RawFieldMap {
    let primary = page.primary_blob.as_str();
    let secondary = page.secondary_blob.as_str();

    RawFieldMap {
        doctor_id: Some(first_capture(&DOCTOR_ID_RE, primary)),
        name1: Some(first_capture(&FULLNAME_RE, primary)),
        name2: Some(first_capture(&GTM_DOCTOR_NAME_RE, secondary)),
        city1: Some(Value::String(
            capture_str(&CITY_NAME_RE, primary).trim().to_string(),
        )),
        city2: Some(first_capture(&GTM_CITY_RE, secondary)),
        region: Some(first_capture(&GTM_REGION_RE, secondary)),
        specialization: Some(first_capture(&GTM_SPECIALIZATION_RE, secondary)),
        reviews: Some(Value::String(
            page.review_count_raw.clone().unwrap_or_default(),
        )),
        newest_review_date: Some(Value::String(newest_review_date(&page.review_dates_raw))),
        telemedicine: Some(first_capture(&GTM_TELEMEDICINE_RE, secondary)),
        price: None,
        url: Some(first_capture(&GTM_URL_RE, secondary)),
        fetch_time: Some(Value::String(page.fetched_at.clone())),
    }
}

/// Latest of the given ISO-8601 timestamps, or `""` when there are none.
///
/// ISO-8601 strings in a common format sort chronologically, so a plain
/// lexicographic maximum is sufficient.
#[must_use]
pub fn newest_review_date(dates: &[String]) -> String {
    dates.iter().max().cloned().unwrap_or_default()
}

fn first_capture(re: &Regex, haystack: &str) -> Value {
    Value::String(capture_str(re, haystack).to_string())
}

fn capture_str<'h>(re: &Regex, haystack: &'h str) -> &'h str {
    re.captures(haystack)
        .and_then(|cap| cap.get(1))
        .map_or("", |m| m.as_str())
}
