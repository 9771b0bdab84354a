use std::collections::BTreeSet;

use super::model::Record;

// ---------------------------------------------------------------------------
// Purpose expansion: compound values → atomic filter options
// ---------------------------------------------------------------------------

/// Recursively split a compound purpose value on `/`, trimming each
/// segment. A segment without `/` is atomic and returned as-is; empty
/// segments (from leading, trailing, or doubled delimiters) are kept.
pub fn split_options(option: &str) -> Vec<String> {
    if option.contains('/') {
        option
            .split('/')
            .map(str::trim)
            .flat_map(split_options)
            .collect()
    } else {
        vec![option.to_string()]
    }
}

/// The flat list of selectable purpose tokens: each distinct raw purpose
/// value (first-appearance order) is expanded and the results concatenated.
/// Duplicate tokens arising from different raw values are preserved.
pub fn purpose_options(records: &[Record]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut options = Vec::new();
    for rec in records {
        if !seen.insert(rec.purpose.as_str()) {
            continue;
        }
        options.extend(split_options(&rec.purpose));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(purpose: &str) -> Record {
        Record {
            country: "USA".to_string(),
            purpose: purpose.to_string(),
            orbit_class: "LEO".to_string(),
            launch_mass: None,
            power: None,
        }
    }

    #[test]
    fn splits_compound_values() {
        assert_eq!(split_options("A/B/C"), ["A", "B", "C"]);
        assert_eq!(split_options("A"), ["A"]);
    }

    #[test]
    fn trims_segment_whitespace() {
        assert_eq!(split_options("A / B"), ["A", "B"]);
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(split_options("A//B"), ["A", "", "B"]);
    }

    #[test]
    fn expands_distinct_raw_values_once_keeping_duplicates() {
        let records = vec![
            rec("Comm/Nav"),
            rec("Nav"),
            rec("Comm/Nav"),
            rec("EarthObservation"),
        ];
        // "Comm/Nav" counted once as a raw value, but "Nav" appears twice
        // because two distinct raw values decompose to it.
        assert_eq!(
            purpose_options(&records),
            ["Comm", "Nav", "Nav", "EarthObservation"]
        );
    }
}
