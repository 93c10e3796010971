//! Whitespace normalization for free-text fields.

use serde_json::Value;

/// Trims `input` and collapses every run of whitespace (newlines, tabs and
/// non-breaking spaces included) to a single ASCII space.
///
/// Idempotent: `clean_text(&clean_text(s)) == clean_text(s)`.
#[must_use]
pub fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`clean_text`] over an arbitrary JSON scalar.
///
/// Absent values and `null` become `""`; numbers and booleans are stringified
/// first. Arrays and objects are rendered as compact JSON.
#[must_use]
pub fn clean_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => clean_text(s),
        Some(other) => clean_text(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn collapses_inner_runs_and_trims() {
        assert_eq!(clean_text(" a   b \n"), "a b");
    }

    #[test]
    fn collapses_tabs_newlines_and_nbsp() {
        assert_eq!(clean_text("Dra.\u{a0}\u{a0}Ana\t\tSouza\r\n"), "Dra. Ana Souza");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn preserves_unicode_text() {
        assert_eq!(clean_text("  São   João  "), "São João");
    }

    #[test]
    fn is_idempotent() {
        for sample in [
            "",
            " ",
            "already clean",
            "  lots   of\n\nspace ",
            "\u{a0}nbsp\u{a0}",
            "Profª.  Lúcia",
        ] {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn clean_value_absent_and_null_are_empty() {
        assert_eq!(clean_value(None), "");
        assert_eq!(clean_value(Some(&Value::Null)), "");
    }

    #[test]
    fn clean_value_stringifies_scalars() {
        assert_eq!(clean_value(Some(&json!(150))), "150");
        assert_eq!(clean_value(Some(&json!(3.5))), "3.5");
        assert_eq!(clean_value(Some(&json!(true))), "true");
        assert_eq!(clean_value(Some(&json!("  Rio  de Janeiro "))), "Rio de Janeiro");
    }
}
