use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// RangeFilter – inclusive numeric bounds
// ---------------------------------------------------------------------------

/// Inclusive `[min, max]` bounds for a numeric column. "Unbounded" has no
/// sentinel value: a range equal to the dataset's full observed range means
/// no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: u64,
    pub max: u64,
}

impl RangeFilter {
    /// The full observed range of a column. The lower bound is fixed at 0,
    /// matching the slider minimum.
    pub fn full(max: u64) -> Self {
        RangeFilter { min: 0, max }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// FilterSpec – one snapshot of user intent
// ---------------------------------------------------------------------------

/// All filter dimensions, rebuilt from widget state on every interaction.
/// An empty or full categorical selection means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub countries: BTreeSet<String>,
    pub purposes: BTreeSet<String>,
    pub orbit_classes: BTreeSet<String>,
    pub mass_range: RangeFilter,
    pub power_range: RangeFilter,
}

impl FilterSpec {
    /// A spec with every option selected and both ranges at the full
    /// observed range: every row passes, including rows with missing
    /// numeric values.
    pub fn unconstrained(dataset: &Dataset) -> Self {
        FilterSpec {
            countries: dataset.countries.clone(),
            purposes: dataset.purpose_options.iter().cloned().collect(),
            orbit_classes: dataset.orbit_classes.clone(),
            mass_range: RangeFilter::full(dataset.mass_max),
            power_range: RangeFilter::full(dataset.power_max),
        }
    }
}

// ---------------------------------------------------------------------------
// Predicate evaluation
// ---------------------------------------------------------------------------

fn member_or_unconstrained(
    selected: &BTreeSet<String>,
    all: &BTreeSet<String>,
    value: &str,
) -> bool {
    selected.is_empty() || selected.len() == all.len() || selected.contains(value)
}

/// A purpose passes when it contains any selected token as a substring, so
/// a compound value matches whenever one of its parts is selected.
fn purpose_matches(selected: &BTreeSet<String>, purpose: &str) -> bool {
    selected.is_empty() || selected.iter().any(|token| purpose.contains(token.as_str()))
}

/// Missing values pass only the full range: any narrowing excludes them.
fn range_passes(range: RangeFilter, full: RangeFilter, value: Option<u64>) -> bool {
    if range == full {
        return true;
    }
    value.map(|v| range.contains(v)).unwrap_or(false)
}

/// Return indices of records that pass every active filter dimension.
/// Pure over `(dataset, spec)`; an empty result is a valid outcome.
pub fn filtered_indices(dataset: &Dataset, spec: &FilterSpec) -> Vec<usize> {
    let full_mass = RangeFilter::full(dataset.mass_max);
    let full_power = RangeFilter::full(dataset.power_max);

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            member_or_unconstrained(&spec.countries, &dataset.countries, &rec.country)
                && purpose_matches(&spec.purposes, &rec.purpose)
                && member_or_unconstrained(
                    &spec.orbit_classes,
                    &dataset.orbit_classes,
                    &rec.orbit_class,
                )
                && range_passes(spec.mass_range, full_mass, rec.launch_mass)
                && range_passes(spec.power_range, full_power, rec.power)
        })
        .map(|(i, _)| i)
        .collect()
}
