/// Output column order. Every tabular export uses exactly this sequence.
pub const COLUMN_ORDER: [&str; 13] = [
    "doctor_id",
    "name1",
    "name2",
    "city1",
    "city2",
    "region",
    "specialization",
    "reviews",
    "newest_review_date",
    "telemedicine",
    "price",
    "url",
    "fetch_time",
];

/// A fully normalized doctor profile, one row of the output dataset.
///
/// No field is ever missing: absent signals are represented by `0`, `0.0`
/// or the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalDoctorRecord {
    /// `0` when the page carried no usable identifier.
    pub doctor_id: i64,
    /// Name from the app-config segment, title normalized.
    pub name1: String,
    /// Name from the tag-manager segment, title normalized.
    pub name2: String,
    pub city1: String,
    pub city2: String,
    pub region: String,
    pub specialization: String,
    /// Review count; never negative.
    pub reviews: f64,
    /// ISO-8601 timestamp of the most recent review, or empty.
    pub newest_review_date: String,
    /// `1` when the profile offers virtual consultations, else `0`.
    pub telemedicine: u8,
    pub price: String,
    pub url: String,
    /// When the page was fetched, copied verbatim from the crawl.
    pub fetch_time: String,
}

impl CanonicalDoctorRecord {
    /// Renders the record as CSV cells in [`COLUMN_ORDER`].
    #[must_use]
    pub fn to_row(&self) -> [String; 13] {
        [
            self.doctor_id.to_string(),
            self.name1.clone(),
            self.name2.clone(),
            self.city1.clone(),
            self.city2.clone(),
            self.region.clone(),
            self.specialization.clone(),
            format_reviews(self.reviews),
            self.newest_review_date.clone(),
            self.telemedicine.to_string(),
            self.price.clone(),
            self.url.clone(),
            self.fetch_time.clone(),
        ]
    }

    /// Returns the rendered value of a named column, or `None` for unknown names.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<String> {
        let idx = COLUMN_ORDER.iter().position(|c| *c == name)?;
        let row = self.to_row();
        row.into_iter().nth(idx)
    }
}

/// Formats a review count with at least one decimal place (`3` → `"3.0"`).
fn format_reviews(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
