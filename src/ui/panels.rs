use eframe::egui::{self, Button, Color32, RichText, ScrollArea, Ui};

use crate::color;
use crate::data::model::QualityLabel;
use crate::state::AppState;

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

        ui.label(format!("{} publicaciones cargadas", state.records.len()));
        if let Some(path) = &state.source_path {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                ui.label(RichText::new(name).weak());
            }
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Detail list (central panel)
// ---------------------------------------------------------------------------

/// Render the five per-label sections in fixed canonical order, with the
/// expanded section's links underneath its header.
pub fn detail_list(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Detalle de Publicaciones");
    ui.add_space(8.0);

    let mut clicked: Option<QualityLabel> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for label in QualityLabel::ALL {
                let group = state.view.group(label);
                let expanded = state.expanded == Some(label);

                let chevron = if expanded { "⏶" } else { "⏷" };
                let header = format!(
                    "{chevron}  {label}  ({} publicaciones)",
                    group.len()
                );
                let button = Button::new(
                    RichText::new(header)
                        .strong()
                        .color(color::label_text_color(label)),
                )
                .fill(color::label_color(label))
                .min_size(egui::vec2(ui.available_width(), 36.0));

                if ui.add(button).clicked() {
                    clicked = Some(label);
                }

                if expanded {
                    ui.indent(label.as_str(), |ui: &mut Ui| {
                        for rec in group {
                            ui.horizontal(|ui: &mut Ui| {
                                ui.label("🔗");
                                ui.hyperlink(&rec.link);
                            });
                        }
                    });
                }

                ui.add_space(6.0);
            }
        });

    if let Some(label) = clicked {
        state.toggle_section(label);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open publication data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}
