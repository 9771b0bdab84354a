use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Column keys – cleaning is keyed by exact source column name
// ---------------------------------------------------------------------------

pub const COL_COUNTRY: &str = "Country of Operator/Owner";
pub const COL_PURPOSE: &str = "Purpose";
pub const COL_ORBIT_CLASS: &str = "Class of Orbit";
pub const COL_LAUNCH_MASS: &str = "Launch Mass (kg.)";
pub const COL_POWER: &str = "Power (watts)";

/// The columns every source must provide, in display order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_COUNTRY,
    COL_PURPOSE,
    COL_ORBIT_CLASS,
    COL_LAUNCH_MASS,
    COL_POWER,
];

// ---------------------------------------------------------------------------
// RawRecord – one source row before cleaning
// ---------------------------------------------------------------------------

/// A source row as read from the file. `None` is a genuinely absent cell
/// (empty or NA-marked in the source), never an empty string or zero.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub country: Option<String>,
    pub purpose: Option<String>,
    pub orbit_class: Option<String>,
    pub launch_mass: Option<String>,
    pub power: Option<String>,
}

// ---------------------------------------------------------------------------
// Record – one cleaned row
// ---------------------------------------------------------------------------

/// A cleaned catalogue row. `purpose` is whitespace-stripped and
/// `orbit_class` has the `o`→`O` rewrite applied; missing numeric cells
/// stay `None` all the way through filtering and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub country: String,
    pub purpose: String,
    pub orbit_class: String,
    pub launch_mass: Option<u64>,
    pub power: Option<u64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded catalogue
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed filter option sets.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in source order.
    pub records: Vec<Record>,
    /// Sorted unique countries.
    pub countries: BTreeSet<String>,
    /// Sorted unique orbit classes.
    pub orbit_classes: BTreeSet<String>,
    /// Atomic purpose tokens from all distinct raw purpose values, in
    /// first-appearance order. Duplicates from different raw values are kept.
    pub purpose_options: Vec<String>,
    /// Largest observed launch mass (0 when the column has no value).
    pub mass_max: u64,
    /// Largest observed power (0 when the column has no value).
    pub power_max: u64,
}

impl Dataset {
    /// Build the option sets and observed maxima from the cleaned rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut countries = BTreeSet::new();
        let mut orbit_classes = BTreeSet::new();
        let mut mass_max = 0u64;
        let mut power_max = 0u64;

        for rec in &records {
            countries.insert(rec.country.clone());
            orbit_classes.insert(rec.orbit_class.clone());
            if let Some(m) = rec.launch_mass {
                mass_max = mass_max.max(m);
            }
            if let Some(p) = rec.power {
                power_max = power_max.max(p);
            }
        }

        let purpose_options = super::expand::purpose_options(&records);

        Dataset {
            records,
            countries,
            orbit_classes,
            purpose_options,
            mass_max,
            power_max,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, purpose: &str, orbit: &str, mass: Option<u64>, power: Option<u64>) -> Record {
        Record {
            country: country.to_string(),
            purpose: purpose.to_string(),
            orbit_class: orbit.to_string(),
            launch_mass: mass,
            power,
        }
    }

    #[test]
    fn from_records_collects_option_sets_and_maxima() {
        let ds = Dataset::from_records(vec![
            rec("USA", "Communications", "LEO", Some(500), None),
            rec("China", "Navigation", "GEO", Some(4000), Some(9000)),
            rec("USA", "Communications", "LEO", None, Some(1200)),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.countries.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["China", "USA"]
        );
        assert_eq!(
            ds.orbit_classes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["GEO", "LEO"]
        );
        assert_eq!(ds.mass_max, 4000);
        assert_eq!(ds.power_max, 9000);
    }

    #[test]
    fn maxima_default_to_zero_without_values() {
        let ds = Dataset::from_records(vec![rec("UK", "EarthScience", "MEO", None, None)]);
        assert_eq!(ds.mass_max, 0);
        assert_eq!(ds.power_max, 0);
    }
}
