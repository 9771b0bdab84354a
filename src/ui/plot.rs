use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::color::generate_palette;
use crate::data::stats::{histogram, DEFAULT_MAX_BINS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Binned-count histograms (central panel)
// ---------------------------------------------------------------------------

/// Render the two histograms over the filtered rows, side by side.
pub fn histogram_row(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a catalogue to explore it  (File → Open…)");
        });
        return;
    }

    let colors = generate_palette(2);

    ui.columns(2, |cols| {
        histogram_plot(
            &mut cols[0],
            "mass_histogram",
            "Launch Mass (kg.)",
            &state.visible_masses(),
            colors[0],
        );
        histogram_plot(
            &mut cols[1],
            "power_histogram",
            "Power (watts)",
            &state.visible_powers(),
            colors[1],
        );
    });
}

fn histogram_plot(
    ui: &mut Ui,
    id: &str,
    label: &str,
    values: &[u64],
    color: eframe::egui::Color32,
) {
    let hist = histogram(values, DEFAULT_MAX_BINS);

    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|bin| {
            Bar::new((bin.lo + bin.hi) / 2.0, bin.count as f64).width(bin.hi - bin.lo)
        })
        .collect();

    Plot::new(id)
        .x_axis_label(label)
        .y_axis_label("count")
        .height(220.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(label).color(color));
        });
}
