//! Extraction and normalization of crawled doctor profile pages.
//!
//! Every function here is total: missing or garbled input degrades to the
//! field's zero value instead of an error, so one bad field never discards
//! an otherwise usable record.

pub mod assemble;
pub mod extract;
pub mod fields;
pub mod price;
pub mod text;
pub mod title;

pub use assemble::{assemble, convert_doctor_id, convert_reviews, convert_telemedicine};
pub use extract::extract_fields;
pub use fields::RawFieldMap;
pub use price::{observations_from_spans, parse_price_span, resolve_price};
pub use text::{clean_text, clean_value};
pub use title::normalize_name;
