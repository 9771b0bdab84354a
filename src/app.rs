use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct OrbitScopeApp {
    pub state: AppState,
}

impl Default for OrbitScopeApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl OrbitScopeApp {
    /// Start with a catalogue already loaded from `source`.
    pub fn with_source(source: &str) -> Self {
        let mut app = Self::default();
        app.state.load_source(source);
        app
    }
}

impl eframe::App for OrbitScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: stats, histograms, tables ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                plot::histogram_row(ui, &self.state);
                return;
            }
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Satellite Info");
                    ui.add_space(6.0);
                    panels::summary_row(ui, &self.state);
                    ui.separator();
                    plot::histogram_row(ui, &self.state);
                    ui.separator();
                    table::dataset_tables(ui, &self.state);
                });
        });
    }
}
