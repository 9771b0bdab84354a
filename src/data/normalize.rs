use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{RawRecord, Record};

// ---------------------------------------------------------------------------
// Column cleaning
// ---------------------------------------------------------------------------

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit-run pattern"));

/// Recover a number from a contaminated cell: strip grouping commas, then
/// parse the first maximal run of decimal digits found anywhere in the
/// string. `"1,234W"` → 1234, `"12.5"` → 12 (everything after the decimal
/// point is dropped), `"abc"` → `None`. A run too large for `u64` counts
/// as unparseable.
pub fn extract_number(raw: &str) -> Option<u64> {
    let cleaned = raw.replace(',', "");
    DIGIT_RUN.find(&cleaned)?.as_str().parse().ok()
}

/// Remove every whitespace character, so atomic purpose tokens match
/// compound values by plain substring containment.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Rewrite every lowercase `o` to `O`. A targeted fix for inconsistent
/// orbit-class casing in the source (`"LEo"` → `"LEO"`); all other
/// characters keep their case.
pub fn canonicalize_orbit(s: &str) -> String {
    s.replace('o', "O")
}

/// Clean one raw row. Missing text cells become empty strings (and show up
/// as a blank category); numeric cells that yield no digit run stay `None`.
pub fn normalize(raw: RawRecord) -> Record {
    Record {
        country: raw.country.unwrap_or_default(),
        purpose: strip_whitespace(raw.purpose.as_deref().unwrap_or("")),
        orbit_class: canonicalize_orbit(raw.orbit_class.as_deref().unwrap_or("")),
        launch_mass: raw.launch_mass.as_deref().and_then(extract_number),
        power: raw.power.as_deref().and_then(extract_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_digit_run() {
        assert_eq!(extract_number("1,234W"), Some(1234));
        assert_eq!(extract_number("5,500 (BOL)"), Some(5500));
        assert_eq!(extract_number("approx 750 kg"), Some(750));
        assert_eq!(extract_number("abc"), None);
        assert_eq!(extract_number(""), None);
    }

    #[test]
    fn truncates_at_decimal_point() {
        assert_eq!(extract_number("12.5"), Some(12));
        assert_eq!(extract_number("0.75"), Some(0));
    }

    #[test]
    fn overflowing_run_is_no_value() {
        assert_eq!(extract_number("99999999999999999999999"), None);
    }

    #[test]
    fn strips_all_whitespace() {
        assert_eq!(
            strip_whitespace("Earth Observation / Technology Development"),
            "EarthObservation/TechnologyDevelopment"
        );
        assert_eq!(strip_whitespace("Communications"), "Communications");
    }

    #[test]
    fn orbit_rewrite_targets_lowercase_o_only() {
        assert_eq!(canonicalize_orbit("LEo"), "LEO");
        assert_eq!(canonicalize_orbit("Leo"), "LeO");
        assert_eq!(canonicalize_orbit("GEO"), "GEO");
        assert_eq!(canonicalize_orbit("Elliptical"), "Elliptical");
    }

    #[test]
    fn normalizes_a_full_row() {
        let rec = normalize(RawRecord {
            country: Some("USA".to_string()),
            purpose: Some("Comm / Nav".to_string()),
            orbit_class: Some("LEo".to_string()),
            launch_mass: Some("1,234 (BOL)".to_string()),
            power: None,
        });
        assert_eq!(rec.country, "USA");
        assert_eq!(rec.purpose, "Comm/Nav");
        assert_eq!(rec.orbit_class, "LEO");
        assert_eq!(rec.launch_mass, Some(1234));
        assert_eq!(rec.power, None);
    }

    #[test]
    fn missing_text_cells_become_blank_categories() {
        let rec = normalize(RawRecord::default());
        assert_eq!(rec.country, "");
        assert_eq!(rec.purpose, "");
        assert_eq!(rec.orbit_class, "");
        assert_eq!(rec.launch_mass, None);
    }
}
