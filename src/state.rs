use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, FilterSpec};
use crate::data::loader;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Facets – the three categorical filter dimensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Country,
    Purpose,
    OrbitClass,
}

impl Facet {
    pub fn title(self) -> &'static str {
        match self {
            Facet::Country => "Country",
            Facet::Purpose => "Purpose",
            Facet::OrbitClass => "Class of Orbit",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state – the session context
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering. Holds the one loaded
/// dataset, the current filter spec, and the cached filtered indices;
/// everything the filter engine needs is passed from here explicitly.
pub struct AppState {
    /// Loaded dataset (None until a source is loaded).
    pub dataset: Option<Dataset>,

    /// Where the dataset came from; repeated loads of the same source are
    /// served from memory.
    pub source: Option<String>,

    /// Current filter selections and ranges.
    pub spec: FilterSpec,

    /// Indices of records passing the current spec (cached).
    pub visible_indices: Vec<usize>,

    /// Orbit-class colour mapping for the UI.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a load is in progress.
    pub loading: bool,

    /// URL entry buffer for the top bar.
    pub url_input: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source: None,
            spec: FilterSpec::default(),
            visible_indices: Vec::new(),
            color_map: None,
            status_message: None,
            loading: false,
            url_input: String::new(),
        }
    }
}

impl AppState {
    /// Load a catalogue from a path or URL, memoized per source string so
    /// repeated requests do not re-fetch. Failures are reported in the
    /// status line; the session keeps whatever dataset it had.
    pub fn load_source(&mut self, source: &str) {
        if self.dataset.is_some() && self.source.as_deref() == Some(source) {
            return;
        }
        self.loading = true;
        match loader::load_source(source) {
            Ok(dataset) => {
                log::info!("Loaded {} satellites from {source}", dataset.len());
                self.source = Some(source.to_string());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {source}: {e}");
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Ingest a newly loaded dataset: reset the spec to unconstrained and
    /// make every row visible.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.spec = FilterSpec::unconstrained(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.color_map = Some(ColorMap::new(&dataset.orbit_classes));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_indices` after a spec change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.spec);
        }
    }

    /// The selectable options for a facet. Purposes keep duplicates from
    /// compound values; the other facets are sorted unique sets.
    pub fn facet_options(&self, facet: Facet) -> Vec<String> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        match facet {
            Facet::Country => ds.countries.iter().cloned().collect(),
            Facet::Purpose => ds.purpose_options.clone(),
            Facet::OrbitClass => ds.orbit_classes.iter().cloned().collect(),
        }
    }

    fn facet_selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Country => &mut self.spec.countries,
            Facet::Purpose => &mut self.spec.purposes,
            Facet::OrbitClass => &mut self.spec.orbit_classes,
        }
    }

    pub fn facet_selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Country => &self.spec.countries,
            Facet::Purpose => &self.spec.purposes,
            Facet::OrbitClass => &self.spec.orbit_classes,
        }
    }

    /// Toggle a single value in a facet's selection.
    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) {
        let selected = self.facet_selected_mut(facet);
        if !selected.remove(value) {
            selected.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every option of a facet.
    pub fn select_all(&mut self, facet: Facet) {
        let all: BTreeSet<String> = self.facet_options(facet).into_iter().collect();
        *self.facet_selected_mut(facet) = all;
        self.refilter();
    }

    /// Deselect every option of a facet.
    pub fn select_none(&mut self, facet: Facet) {
        self.facet_selected_mut(facet).clear();
        self.refilter();
    }

    /// Launch masses of the visible rows, missing cells skipped.
    pub fn visible_masses(&self) -> Vec<u64> {
        self.visible_values(|rec| rec.launch_mass)
    }

    /// Power values of the visible rows, missing cells skipped.
    pub fn visible_powers(&self) -> Vec<u64> {
        self.visible_values(|rec| rec.power)
    }

    fn visible_values(
        &self,
        field: impl Fn(&crate::data::model::Record) -> Option<u64>,
    ) -> Vec<u64> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        self.visible_indices
            .iter()
            .filter_map(|&i| field(&ds.records[i]))
            .collect()
    }
}
