use serde::Deserialize;
use serde_json::Value;

/// Loosely typed field values for one profile, before normalization.
///
/// Each slot holds whatever scalar the source provided; `None` means the
/// source did not mention the field (a JSON `null` deserializes to `None`
/// as well). Defaults per field are applied by [`crate::assemble`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFieldMap {
    pub doctor_id: Option<Value>,
    pub name1: Option<Value>,
    pub name2: Option<Value>,
    pub city1: Option<Value>,
    pub city2: Option<Value>,
    pub region: Option<Value>,
    pub specialization: Option<Value>,
    pub reviews: Option<Value>,
    pub newest_review_date: Option<Value>,
    pub telemedicine: Option<Value>,
    pub price: Option<Value>,
    pub url: Option<Value>,
    pub fetch_time: Option<Value>,
}

impl RawFieldMap {
    /// Fills every slot that is still `None` with the corresponding value
    /// from `other`. Slots already set are left untouched.
    pub fn fill_missing_from(&mut self, other: RawFieldMap) {
        fill(&mut self.doctor_id, other.doctor_id);
        fill(&mut self.name1, other.name1);
        fill(&mut self.name2, other.name2);
        fill(&mut self.city1, other.city1);
        fill(&mut self.city2, other.city2);
        fill(&mut self.region, other.region);
        fill(&mut self.specialization, other.specialization);
        fill(&mut self.reviews, other.reviews);
        fill(&mut self.newest_review_date, other.newest_review_date);
        fill(&mut self.telemedicine, other.telemedicine);
        fill(&mut self.price, other.price);
        fill(&mut self.url, other.url);
        fill(&mut self.fetch_time, other.fetch_time);
    }
}

fn fill(slot: &mut Option<Value>, other: Option<Value>) {
    if slot.is_none() {
        *slot = other;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_partial_object_and_ignores_unknown_keys() {
        let map: RawFieldMap = serde_json::from_value(json!({
            "doctor_id": "123",
            "name1": "ra. Ana",
            "telemedicine": null,
            "unrelated": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(map.doctor_id, Some(json!("123")));
        assert_eq!(map.name1, Some(json!("ra. Ana")));
        assert!(map.telemedicine.is_none());
        assert!(map.city1.is_none());
    }

    #[test]
    fn fill_missing_keeps_existing_values() {
        let mut explicit = RawFieldMap {
            name1: Some(json!("Dra. Ana")),
            ..RawFieldMap::default()
        };
        let extracted = RawFieldMap {
            name1: Some(json!("Ana (extracted)")),
            city1: Some(json!("Recife")),
            ..RawFieldMap::default()
        };
        explicit.fill_missing_from(extracted);
        assert_eq!(explicit.name1, Some(json!("Dra. Ana")));
        assert_eq!(explicit.city1, Some(json!("Recife")));
        assert!(explicit.url.is_none());
    }
}
