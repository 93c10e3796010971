//! Professional title normalization for doctor names.
//!
//! Profile markup truncates titles inconsistently: `"Dra."` often arrives
//! as `"ra."`, `"Prof."` as `"rof."`, and casing varies between pages. The
//! correction table below is matched in declaration order and only the first
//! hit is applied, so a corrected prefix is never corrected again.

use crate::text::clean_text;

/// Malformed or mis-cased prefixes (lower case) and their canonical title.
/// Order matters: truncated forms are tried before complete ones.
const TITLE_CORRECTIONS: [(&str, &str); 8] = [
    ("ra.", "Dra."),
    ("rof.", "Prof."),
    ("rofª.", "Profª."),
    ("r.", "Dr."),
    ("dra.", "Dra."),
    ("dr.", "Dr."),
    ("prof.", "Prof."),
    ("profª.", "Profª."),
];

/// Titles in their canonical casing. `Licença` marks profiles on leave.
const VALID_TITLES: [&str; 5] = ["Dr.", "Dra.", "Prof.", "Profª.", "Licença"];

/// Normalizes whitespace and the leading professional title of `raw`.
///
/// Names without a recognizable title are returned whitespace-normalized but
/// otherwise unchanged.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let name = clean_text(raw);
    if name.is_empty() {
        return name;
    }

    let name = correct_title(&name).unwrap_or(name);

    for title in VALID_TITLES {
        if let Some(rest) = strip_prefix_ignore_case(&name, title) {
            return join_title(title, rest);
        }
    }

    name
}

/// Applies the first matching entry of [`TITLE_CORRECTIONS`], if any.
fn correct_title(name: &str) -> Option<String> {
    TITLE_CORRECTIONS.iter().find_map(|(wrong, correct)| {
        strip_prefix_ignore_case(name, wrong).map(|rest| join_title(correct, rest))
    })
}

fn join_title(title: &str, rest: &str) -> String {
    let rest = rest.trim();
    if rest.is_empty() {
        title.to_string()
    } else {
        format!("{title} {rest}")
    }
}

/// Case-insensitive `strip_prefix`, compared per `char` so multi-byte
/// characters (`ª`, `ç`) are never split.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let rest_start = chars.next().map_or(s.len(), |(idx, _)| idx);
    Some(&s[rest_start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_truncated_dra() {
        assert_eq!(normalize_name("ra. Maria Silva"), "Dra. Maria Silva");
    }

    #[test]
    fn restores_truncated_dr() {
        assert_eq!(normalize_name("r. João"), "Dr. João");
    }

    #[test]
    fn restores_truncated_prof_variants() {
        assert_eq!(normalize_name("rof. Carlos Lima"), "Prof. Carlos Lima");
        assert_eq!(normalize_name("rofª. Lúcia Prado"), "Profª. Lúcia Prado");
    }

    #[test]
    fn fixes_title_casing() {
        assert_eq!(normalize_name("DRA. Ana"), "Dra. Ana");
        assert_eq!(normalize_name("dr. paulo"), "Dr. paulo");
        assert_eq!(normalize_name("PROFª. Lúcia"), "Profª. Lúcia");
    }

    #[test]
    fn inserts_space_after_title() {
        assert_eq!(normalize_name("Dra.Ana Souza"), "Dra. Ana Souza");
    }

    #[test]
    fn bare_title_has_no_trailing_space() {
        assert_eq!(normalize_name("  dra.  "), "Dra.");
        assert_eq!(normalize_name("r."), "Dr.");
    }

    #[test]
    fn licenca_marker_gets_canonical_casing() {
        assert_eq!(normalize_name("LICENÇA médica"), "Licença médica");
        assert_eq!(normalize_name("licença"), "Licença");
    }

    #[test]
    fn only_first_correction_applies() {
        assert_eq!(normalize_name("r. dr. João"), "Dr. dr. João");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn names_without_title_are_unchanged() {
        assert_eq!(normalize_name("Ana Souza"), "Ana Souza");
        assert_eq!(normalize_name("Rafael  Costa"), "Rafael Costa");
        assert_eq!(normalize_name("Dr Ana"), "Dr Ana");
    }

    #[test]
    fn strip_prefix_ignore_case_handles_multibyte() {
        assert_eq!(strip_prefix_ignore_case("Profª. X", "profª."), Some(" X"));
        assert_eq!(strip_prefix_ignore_case("Pro", "prof."), None);
        assert_eq!(strip_prefix_ignore_case("dr.", "dr."), Some(""));
    }
}
