use chrono::{Local, NaiveDateTime};

/// Timestamp format used for `fetched_at` / `fetch_time`.
pub const FETCH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One visited doctor page as handed over by the crawler.
///
/// The two blobs are the raw contents of the page's embedded script segments;
/// they are searched with tolerant patterns rather than parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProfilePage {
    /// App-config segment carrying `DOCTOR_ID`, `FULLNAME` and the city `NAME`.
    pub primary_blob: String,
    /// Tag-manager segment carrying the alternate name, city, region,
    /// specialization, telemedicine flag and canonical URL.
    pub secondary_blob: String,
    pub price_observations: PriceObservations,
    /// Content of the page's `reviewCount` annotation, if any.
    pub review_count_raw: Option<String>,
    /// Every ISO-8601 review timestamp found on the page.
    pub review_dates_raw: Vec<String>,
    pub fetched_at: String,
}

impl RawProfilePage {
    /// Builds a page stamped with the current local time.
    #[must_use]
    pub fn new(primary_blob: impl Into<String>, secondary_blob: impl Into<String>) -> Self {
        Self {
            primary_blob: primary_blob.into(),
            secondary_blob: secondary_blob.into(),
            fetched_at: format_fetch_time(Local::now().naive_local()),
            ..Self::default()
        }
    }
}

/// Formats a timestamp the way `fetched_at` is recorded, e.g. `2024-03-01T14:05:09`.
#[must_use]
pub fn format_fetch_time(at: NaiveDateTime) -> String {
    at.format(FETCH_TIME_FORMAT).to_string()
}

/// Parallel price readings taken from a page's service list.
///
/// `numeric` holds amounts parsed from currency-formatted spans and is the
/// preferred source; `textual` keeps the raw span text as a fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceObservations {
    pub numeric: Vec<i64>,
    pub textual: Vec<String>,
}

impl PriceObservations {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.textual.is_empty()
    }
}
