/// Rendering layer: panels, histograms, and tables over [`crate::state::AppState`].
pub mod panels;
pub mod plot;
pub mod table;
