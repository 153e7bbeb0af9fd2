use std::path::Path;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels};

/// CSV consulted once at startup; File → Open… can replace it later.
pub const DEFAULT_DATA_PATH: &str = "data/publications.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PubQualApp {
    pub state: AppState,
}

impl Default for PubQualApp {
    fn default() -> Self {
        let mut state = AppState::default();
        // One-shot startup load; a missing file leaves the dashboard empty
        // with a status message, never a failed launch.
        state.load_from(Path::new(DEFAULT_DATA_PATH));
        Self { state }
    }
}

impl eframe::App for PubQualApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: pie chart + average ----
        egui::SidePanel::left("summary_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                chart::summary_panel(ui, &self.state);
            });

        // ---- Central panel: detail list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::detail_list(ui, &mut self.state);
        });
    }
}
