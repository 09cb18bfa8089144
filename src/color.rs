use eframe::egui::Color32;

use crate::data::forecast::ModelKind;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Color of the "Actual Data" line.
pub const ACTUAL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

/// Status notice colors.
pub const NOTICE_INFO: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const NOTICE_ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

/// Fixed per-model line color. The model set is static, so the palette is
/// static as well.
pub fn model_color(model: ModelKind) -> Color32 {
    match model {
        ModelKind::LinearRegression => Color32::from_rgb(0x10, 0xb9, 0x81),
        ModelKind::Arima => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        ModelKind::Prophet => Color32::from_rgb(0xef, 0x44, 0x44),
        ModelKind::ExponentialSmoothing => Color32::from_rgb(0x8b, 0x5c, 0xf6),
    }
}
