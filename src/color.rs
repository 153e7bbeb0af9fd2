use eframe::egui::Color32;

use crate::data::model::QualityLabel;

// ---------------------------------------------------------------------------
// Fixed quality palette (green → red)
// ---------------------------------------------------------------------------

/// Swatch colour for a canonical label.
pub fn label_color(label: QualityLabel) -> Color32 {
    match label {
        QualityLabel::MuyBien => Color32::from_rgb(0x1b, 0x5e, 0x20), // dark green
        QualityLabel::Bien => Color32::from_rgb(0x4c, 0xaf, 0x50),    // light green
        QualityLabel::Regular => Color32::from_rgb(0xff, 0xc1, 0x07), // yellow
        QualityLabel::Mala => Color32::from_rgb(0xef, 0x53, 0x50),    // light red
        QualityLabel::MuyMala => Color32::from_rgb(0xd3, 0x2f, 0x2f), // strong red
    }
}

/// Swatch colour for a raw quality string; non-canonical strings share a
/// neutral gray.
pub fn quality_color(quality: &str) -> Color32 {
    QualityLabel::parse(quality).map_or(Color32::from_rgb(0xe0, 0xe0, 0xe0), label_color)
}

/// Readable text colour on top of the label's swatch.
pub fn label_text_color(label: QualityLabel) -> Color32 {
    match label {
        QualityLabel::MuyBien | QualityLabel::Bien | QualityLabel::MuyMala => Color32::WHITE,
        QualityLabel::Regular | QualityLabel::Mala => Color32::from_rgb(0x21, 0x21, 0x21),
    }
}
