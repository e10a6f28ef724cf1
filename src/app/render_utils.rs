use eframe::egui::Color32;

use crate::field::DOT_ALPHA_SCALE;

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(super) fn link_color(accent: Color32, alpha: f32) -> Color32 {
    with_alpha(accent, alpha)
}

// Dot fill compounds the particle's own alpha with the fixed dot scale;
// the per-particle alpha acts as a weight, not a direct opacity.
pub(super) fn dot_color(accent: Color32, particle_alpha: f32) -> Color32 {
    with_alpha(accent, particle_alpha * DOT_ALPHA_SCALE)
}
