use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::RangeFilter;
use crate::data::stats;
use crate::state::{AppState, Facet};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Please Filter Here");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No catalogue loaded.");
        return;
    };

    // Copy the slider bounds so the widgets below can mutate the spec.
    let mass_max = dataset.mass_max;
    let power_max = dataset.power_max;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            range_sliders(ui, "Launch Mass (kg.)", mass_max, &mut state.spec.mass_range);
            ui.separator();
            range_sliders(ui, "Power (watts)", power_max, &mut state.spec.power_range);
            ui.separator();

            facet_section(ui, state, Facet::OrbitClass);
            facet_section(ui, state, Facet::Purpose);
            facet_section(ui, state, Facet::Country);
        });

    // Recompute visible indices after any widget changes.
    state.refilter();
}

/// Min/max slider pair for one numeric column.
fn range_sliders(ui: &mut Ui, label: &str, bound: u64, range: &mut RangeFilter) {
    ui.strong(label);
    ui.add(egui::Slider::new(&mut range.min, 0..=bound).text("min"));
    ui.add(egui::Slider::new(&mut range.max, 0..=bound).text("max"));
    // Keep the pair ordered; the sliders are independent widgets.
    if range.min > range.max {
        range.max = range.min;
    }
}

/// Collapsible checkbox group for one categorical facet.
fn facet_section(ui: &mut Ui, state: &mut AppState, facet: Facet) {
    let options = state.facet_options(facet);
    let selected = state.facet_selected(facet).clone();

    let header_text = format!("{}  ({}/{})", facet.title(), selected.len(), options.len());

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(facet.title())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all(facet);
                }
                if ui.small_button("None").clicked() {
                    state.select_none(facet);
                }
            });

            for option in &options {
                let mut checked = selected.contains(option);
                let mut text = RichText::new(option.as_str());
                if option.is_empty() {
                    text = RichText::new("(blank)").italics();
                }
                // Orbit classes get their swatch colour.
                if facet == Facet::OrbitClass {
                    if let Some(cm) = &state.color_map {
                        text = text.color(cm.color_for(option));
                    }
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_facet_value(facet, option);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("URL:");
        ui.add(
            egui::TextEdit::singleline(&mut state.url_input)
                .hint_text("https://…/catalogue.csv")
                .desired_width(260.0),
        );
        if ui.button("Load").clicked() && !state.url_input.is_empty() {
            let url = state.url_input.clone();
            state.load_source(&url);
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} satellites loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Summary stats row
// ---------------------------------------------------------------------------

/// Mean launch mass and mean power over the filtered rows, one decimal.
pub fn summary_row(ui: &mut Ui, state: &AppState) {
    let mean_label = |values: &[u64], unit: &str| match stats::mean(values) {
        Some(m) => format!("{m:.1}{unit}"),
        None => "–".to_string(),
    };

    ui.columns(2, |cols| {
        cols[0].vertical_centered(|ui: &mut Ui| {
            ui.strong("Average Launch Mass");
            ui.heading(mean_label(&state.visible_masses(), "kg"));
        });
        cols[1].vertical_centered(|ui: &mut Ui| {
            ui.strong("Average Power");
            ui.heading(mean_label(&state.visible_powers(), "W"));
        });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open satellite catalogue")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_source(&path.display().to_string());
    }
}
