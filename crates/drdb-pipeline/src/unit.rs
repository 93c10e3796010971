//! Shape of one JSON Lines input unit.

use drdb_core::{PriceObservations, RawProfilePage};
use drdb_scraper::{extract_fields, observations_from_spans, RawFieldMap};
use serde::Deserialize;
use serde_json::Value;

/// One line of crawler output.
///
/// A unit may carry already-extracted flat fields (`doctor_id`, `name1`, …),
/// raw page content (`primary_blob`, `secondary_blob`, price lists, review
/// metadata), or both. Every key is optional and unknown keys are ignored.
/// List keys are kept as raw JSON so a `null` or an oddly typed entry
/// degrades to an empty or shorter list instead of rejecting the unit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputUnit {
    #[serde(flatten)]
    pub fields: RawFieldMap,
    pub primary_blob: Option<String>,
    pub secondary_blob: Option<String>,
    pub price_numeric: Option<Value>,
    pub price_textual: Option<Value>,
    /// Raw currency-formatted price spans, used when neither explicit price
    /// list has entries.
    pub price_spans: Option<Value>,
    pub review_count: Option<Value>,
    pub review_dates: Option<Value>,
    pub fetched_at: Option<String>,
}

impl InputUnit {
    /// Rebuilds the crawled page carried by this unit.
    #[must_use]
    pub fn to_page(&self) -> RawProfilePage {
        let numeric: Vec<i64> = list_items(self.price_numeric.as_ref())
            .filter_map(integer_item)
            .collect();
        let textual: Vec<String> = list_items(self.price_textual.as_ref())
            .filter_map(scalar_to_string)
            .collect();

        let price_observations = if numeric.is_empty() && textual.is_empty() {
            let spans: Vec<String> = list_items(self.price_spans.as_ref())
                .filter_map(scalar_to_string)
                .collect();
            observations_from_spans(&spans)
        } else {
            PriceObservations { numeric, textual }
        };

        RawProfilePage {
            primary_blob: self.primary_blob.clone().unwrap_or_default(),
            secondary_blob: self.secondary_blob.clone().unwrap_or_default(),
            price_observations,
            review_count_raw: self.review_count.as_ref().and_then(scalar_to_string),
            review_dates_raw: list_items(self.review_dates.as_ref())
                .filter_map(scalar_to_string)
                .collect(),
            fetched_at: self.fetched_at.clone().unwrap_or_default(),
        }
    }

    /// Resolves the unit into raw field values and price observations.
    ///
    /// Explicit flat fields take precedence; values extracted from the page
    /// content fill the remaining slots.
    #[must_use]
    pub fn into_parts(self) -> (RawFieldMap, PriceObservations) {
        let page = self.to_page();
        let mut fields = self.fields;
        fields.fill_missing_from(extract_fields(&page));
        (fields, page.price_observations)
    }
}

/// Entries of a JSON list; anything other than an array yields nothing.
fn list_items(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

/// Integer reading of a list entry: JSON integers or integer text.
fn integer_item(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Scalars as text; `null`, arrays and objects are dropped.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flat_unit_keeps_its_fields() {
        let unit: InputUnit = serde_json::from_value(json!({
            "doctor_id": "77",
            "name1": "r. João",
            "price": 200,
            "fetch_time": "2024-03-01T14:05:09"
        }))
        .unwrap();
        let (fields, prices) = unit.into_parts();
        assert_eq!(fields.doctor_id, Some(json!("77")));
        assert_eq!(fields.price, Some(json!(200)));
        assert_eq!(fields.fetch_time, Some(json!("2024-03-01T14:05:09")));
        // Slots the unit lacks are filled with extracted (empty) values.
        assert_eq!(fields.city2, Some(json!("")));
        assert!(prices.is_empty());
    }

    #[test]
    fn page_unit_is_extracted() {
        let unit: InputUnit = serde_json::from_value(json!({
            "primary_blob": "DOCTOR_ID: 9, FULLNAME: 'ra. Ana', NAME: 'Recife'",
            "secondary_blob": "dataLayer['gtm-city'] = 'Recife';",
            "price_numeric": [100, 120, 100],
            "review_count": 14,
            "review_dates": ["2021-01-01T00:00:00", "2023-06-01T00:00:00"],
            "fetched_at": "2024-03-01T14:05:09"
        }))
        .unwrap();
        let (fields, prices) = unit.into_parts();
        assert_eq!(fields.doctor_id, Some(json!("9")));
        assert_eq!(fields.name1, Some(json!("ra. Ana")));
        assert_eq!(fields.city1, Some(json!("Recife")));
        assert_eq!(fields.city2, Some(json!("Recife")));
        assert_eq!(fields.reviews, Some(json!("14")));
        assert_eq!(fields.newest_review_date, Some(json!("2023-06-01T00:00:00")));
        assert_eq!(fields.fetch_time, Some(json!("2024-03-01T14:05:09")));
        assert!(fields.price.is_none());
        assert_eq!(prices.numeric, vec![100, 120, 100]);
    }

    #[test]
    fn explicit_field_overrides_extracted_value() {
        let unit: InputUnit = serde_json::from_value(json!({
            "city1": "Olinda",
            "primary_blob": "NAME: 'Recife'"
        }))
        .unwrap();
        let (fields, _) = unit.into_parts();
        assert_eq!(fields.city1, Some(json!("Olinda")));
    }

    #[test]
    fn price_spans_used_without_explicit_lists() {
        let unit: InputUnit = serde_json::from_value(json!({
            "price_spans": ["R$\u{a0}1.200", "R$\u{a0}1.200", "Consultar"]
        }))
        .unwrap();
        let page = unit.to_page();
        assert_eq!(page.price_observations.numeric, vec![1200, 1200]);
        assert_eq!(page.price_observations.textual.len(), 3);
    }

    #[test]
    fn null_lists_are_empty() {
        let unit: InputUnit = serde_json::from_value(json!({
            "doctor_id": "1",
            "price_numeric": null,
            "price_textual": null,
            "price_spans": null,
            "review_dates": null
        }))
        .unwrap();
        let page = unit.to_page();
        assert!(page.price_observations.is_empty());
        assert!(page.review_dates_raw.is_empty());
    }

    #[test]
    fn scalar_price_entries_are_stringified() {
        let unit: InputUnit = serde_json::from_value(json!({
            "price_textual": [150, "R$ 200", null, true],
            "price_numeric": "not a list"
        }))
        .unwrap();
        let page = unit.to_page();
        assert!(page.price_observations.numeric.is_empty());
        assert_eq!(page.price_observations.textual, vec!["150", "R$ 200", "true"]);
    }

    #[test]
    fn numeric_entries_accept_integer_text() {
        let unit: InputUnit = serde_json::from_value(json!({
            "price_numeric": [120, "120", "abc", 99.5]
        }))
        .unwrap();
        assert_eq!(unit.to_page().price_observations.numeric, vec![120, 120]);
    }

    #[test]
    fn rejects_non_object_lines() {
        assert!(serde_json::from_str::<InputUnit>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<InputUnit>("\"text\"").is_err());
    }
}
