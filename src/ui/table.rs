use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{Dataset, Record, REQUIRED_COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw and filtered tables (central panel)
// ---------------------------------------------------------------------------

/// Render the full catalogue and the filtered selection underneath it.
pub fn dataset_tables(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    if dataset.is_empty() {
        ui.label("The catalogue has no rows.");
        return;
    }

    ui.strong(format!("Full catalogue ({} rows)", dataset.len()));
    record_table(ui, "raw_table", dataset, None, state);
    ui.separator();

    ui.strong(format!("Selection ({} rows)", state.visible_indices.len()));
    record_table(ui, "filtered_table", dataset, Some(&state.visible_indices), state);
}

/// One table. `indices` of `None` shows every row in source order.
fn record_table(
    ui: &mut Ui,
    id: &str,
    dataset: &Dataset,
    indices: Option<&Vec<usize>>,
    state: &AppState,
) {
    let n_rows = indices.map_or(dataset.len(), |idx| idx.len());

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .columns(Column::auto().resizable(true), REQUIRED_COLUMNS.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(220.0)
            .header(20.0, |mut header| {
                for name in REQUIRED_COLUMNS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, n_rows, |mut row| {
                    let record_idx = indices.map_or(row.index(), |idx| idx[row.index()]);
                    let rec = &dataset.records[record_idx];
                    record_row(&mut row, rec, state);
                });
            });
    });
}

fn record_row(row: &mut egui_extras::TableRow<'_, '_>, rec: &Record, state: &AppState) {
    row.col(|ui| {
        ui.label(&rec.country);
    });
    row.col(|ui| {
        ui.label(&rec.purpose);
    });
    row.col(|ui| {
        let mut text = RichText::new(&rec.orbit_class);
        if let Some(cm) = &state.color_map {
            text = text.color(cm.color_for(&rec.orbit_class));
        }
        ui.label(text);
    });
    row.col(|ui| {
        ui.label(fmt_opt(rec.launch_mass));
    });
    row.col(|ui| {
        ui.label(fmt_opt(rec.power));
    });
}

/// Missing numeric cells render blank, never as a stand-in number.
fn fmt_opt(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
