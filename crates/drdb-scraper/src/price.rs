//! Consensus price resolution.
//!
//! A profile lists one price per service, so the same amount usually repeats
//! and the most frequent value is taken as the consultation price. Amounts
//! parsed from currency-formatted spans are preferred over raw span text.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

use drdb_core::PriceObservations;
use regex::Regex;

static CURRENCY_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*(.*)").expect("valid regex"));

/// Resolves a single price from parallel observation lists.
///
/// 1. Mode of `numeric`, formatted as an integer, when non-empty.
/// 2. Otherwise the mode of `textual`.
/// 3. Otherwise `""`.
///
/// When several values tie for the highest count the one seen first wins.
#[must_use]
pub fn resolve_price(numeric: &[i64], textual: &[String]) -> String {
    if let Some(value) = mode(numeric) {
        return value.to_string();
    }
    mode(textual).cloned().unwrap_or_default()
}

/// Parses the amount out of a currency-formatted span such as `"R$\u{a0}1.500"`.
///
/// `.` is treated as a thousands separator. A `,` decimal part is accepted
/// only when it is all zeros (`"150,00"`); anything else yields `None`.
#[must_use]
pub fn parse_price_span(text: &str) -> Option<i64> {
    let amount = CURRENCY_AMOUNT_RE.captures(text)?.get(1)?.as_str().trim();
    let (whole, cents) = amount.split_once(',').unwrap_or((amount, ""));
    if !cents.chars().all(|c| c == '0') {
        return None;
    }
    let digits: String = whole.chars().filter(|&c| c != '.').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Builds observations from raw price spans: every span contributes its text,
/// and spans that carry a parseable amount contribute a numeric reading.
#[must_use]
pub fn observations_from_spans(spans: &[String]) -> PriceObservations {
    PriceObservations {
        numeric: spans.iter().filter_map(|s| parse_price_span(s)).collect(),
        textual: spans.iter().map(|s| s.trim().to_string()).collect(),
    }
}

/// Most frequent element of `items`; ties go to the earliest occurrence.
fn mode<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let best = counts.values().copied().max()?;
    items.iter().find(|item| counts.get(item) == Some(&best))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn numeric_mode_wins() {
        assert_eq!(resolve_price(&[150, 150, 200], &[]), "150");
    }

    #[test]
    fn numeric_takes_precedence_over_textual() {
        let textual = strings(&["R$ 300", "R$ 300"]);
        assert_eq!(resolve_price(&[200], &textual), "200");
    }

    #[test]
    fn falls_back_to_textual_mode() {
        let textual = strings(&["R$150", "R$150", "R$200"]);
        assert_eq!(resolve_price(&[], &textual), "R$150");
    }

    #[test]
    fn empty_observations_resolve_to_empty_string() {
        assert_eq!(resolve_price(&[], &[]), "");
    }

    #[test]
    fn ties_resolve_to_first_seen() {
        assert_eq!(resolve_price(&[200, 150, 150, 200], &[]), "200");
        assert_eq!(resolve_price(&[90, 120], &[]), "90");
        let textual = strings(&["a consultar", "R$ 100"]);
        assert_eq!(resolve_price(&[], &textual), "a consultar");
    }

    #[test]
    fn parse_price_span_handles_nbsp_and_thousands() {
        assert_eq!(parse_price_span("R$\u{a0}150"), Some(150));
        assert_eq!(parse_price_span("R$\u{a0}1.500"), Some(1500));
        assert_eq!(parse_price_span(" R$ 250 "), Some(250));
        assert_eq!(parse_price_span("R$\u{a0}150,00"), Some(150));
    }

    #[test]
    fn parse_price_span_rejects_non_amounts() {
        assert_eq!(parse_price_span("Consultar valor"), None);
        assert_eq!(parse_price_span("R$\u{a0}150,50"), None);
        assert_eq!(parse_price_span("R$ a partir de 100"), None);
        assert_eq!(parse_price_span("R$"), None);
    }

    #[test]
    fn observations_from_spans_keeps_text_for_unparseable_spans() {
        let spans = strings(&["R$\u{a0}150", "Consultar valor ", "R$\u{a0}150"]);
        let obs = observations_from_spans(&spans);
        assert_eq!(obs.numeric, vec![150, 150]);
        assert_eq!(obs.textual, strings(&["R$\u{a0}150", "Consultar valor", "R$\u{a0}150"]));
    }
}
