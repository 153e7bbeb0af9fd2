use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Polygon};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie chart + average readout (side panel)
// ---------------------------------------------------------------------------

/// Render the distribution pie chart and the average-score card.
pub fn summary_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Distribución de Calidades");
    ui.add_space(4.0);
    quality_pie(ui, state);

    ui.separator();

    ui.heading("Puntuación Promedio");
    ui.add_space(8.0);
    average_card(ui, state);
}

/// One polygon slice per entry in `counts`, legend in first-seen order.
fn quality_pie(ui: &mut Ui, state: &AppState) {
    let view = &state.view;
    let height = ui.available_width().min(320.0);

    Plot::new("quality_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .height(height)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            if view.total == 0 {
                return;
            }
            // Start at 12 o'clock, run clockwise.
            let mut angle = TAU / 4.0;
            for (quality, count) in &view.counts {
                let fraction = *count as f64 / view.total as f64;
                let sweep = fraction * TAU;
                let slice = pie_slice(angle, sweep);
                let fill = color::quality_color(quality);

                plot_ui.polygon(
                    Polygon::new(slice)
                        .name(format!("{quality} ({count})"))
                        .fill_color(fill)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                angle -= sweep;
            }
        });
}

/// Points of a pie slice: the centre plus an arc from `start` sweeping
/// `sweep` radians clockwise. A single slice covering everything becomes a
/// plain disc.
fn pie_slice(start: f64, sweep: f64) -> PlotPoints<'static> {
    let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    if sweep < TAU - f64::EPSILON {
        points.push([0.0, 0.0]);
    }
    for i in 0..=steps {
        let a = start - sweep * (i as f64 / steps as f64);
        points.push([a.cos(), a.sin()]);
    }
    PlotPoints::from(points)
}

/// The big numeric readout: average to two decimals, `0.00` with no data.
fn average_card(ui: &mut Ui, state: &AppState) {
    let view = &state.view;
    let average = view.average.unwrap_or(0.0);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!("{average:.2}"))
                .size(56.0)
                .strong()
                .color(Color32::from_rgb(0x25, 0x63, 0xeb)),
        );
        ui.add_space(4.0);
        ui.label(RichText::new("de 5 puntos").color(Color32::GRAY));
        ui.label(
            RichText::new(format!("Basado en {} publicaciones", view.total))
                .small()
                .color(Color32::DARK_GRAY),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_slice_is_anchored_at_the_centre() {
        let points = pie_slice(TAU / 4.0, TAU / 2.0).points().to_vec();
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 0.0);
        // arc starts at 12 o'clock and ends at 6 o'clock
        assert!((points[1].y - 1.0).abs() < 1e-9);
        let last = points.last().unwrap();
        assert!((last.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_sweep_becomes_a_disc() {
        let points = pie_slice(TAU / 4.0, TAU).points().to_vec();
        // no centre anchor, every point stays on the unit circle
        for p in &points {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }
}
