mod app;
mod color;
mod data;
mod state;
mod ui;

use app::OrbitScopeApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([700.0, 400.0]),
        ..Default::default()
    };

    // Optional catalogue path or URL on the command line.
    let source = std::env::args().nth(1);

    eframe::run_native(
        "Orbit Scope – Satellite Explorer",
        options,
        Box::new(move |_cc| {
            let app = match &source {
                Some(src) => OrbitScopeApp::with_source(src),
                None => OrbitScopeApp::default(),
            };
            Ok(Box::new(app))
        }),
    )
}
