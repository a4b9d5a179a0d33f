//! Widget styling for the countdown window.
//!
//! The window itself is fully transparent; only the time text, the minutes
//! field and the round white buttons are drawn.

use egui::{Color32, Rounding, Stroke};

use crate::models::color::RgbaColor;

/// Background of the round command buttons.
pub const BUTTON_FILL: Color32 = Color32::WHITE;
pub const BUTTON_HOVER_FILL: Color32 = Color32::from_rgb(0xF0, 0xF0, 0xF0);
pub const BUTTON_PRESSED_FILL: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xE6);
/// Glyph colour on the round command buttons.
pub const BUTTON_TEXT: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);

/// Minutes field background (white, slightly see-through).
pub const EDIT_FILL: Color32 = Color32::from_rgba_premultiplied(230, 230, 230, 230);
pub const EDIT_BORDER: Color32 = Color32::from_rgb(0xAA, 0xAA, 0xAA);
pub const EDIT_TEXT: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
pub const EDIT_ROUNDING: f32 = 6.0;

/// Diameter of the always-visible start/pause button.
pub const PRIMARY_BUTTON_SIZE: f32 = 40.0;
pub const PRIMARY_BUTTON_FONT: f32 = 18.0;
/// Diameter of the hover tray buttons.
pub const TRAY_BUTTON_SIZE: f32 = 32.0;
pub const TRAY_BUTTON_FONT: f32 = 14.0;

pub fn rgba_to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Install the countdown look on the context: transparent panels, white
/// borderless buttons, a light minutes field.
pub fn apply_widget_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    let visuals = &mut style.visuals;
    *visuals = egui::Visuals::light();

    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.window_fill = Color32::TRANSPARENT;
    visuals.extreme_bg_color = EDIT_FILL;
    visuals.override_text_color = None;
    visuals.selection.stroke = Stroke::new(1.0, EDIT_BORDER);

    let widgets = &mut visuals.widgets;
    for (state, fill) in [
        (&mut widgets.inactive, BUTTON_FILL),
        (&mut widgets.hovered, BUTTON_HOVER_FILL),
        (&mut widgets.active, BUTTON_PRESSED_FILL),
    ] {
        state.weak_bg_fill = fill;
        state.bg_fill = fill;
        state.bg_stroke = Stroke::NONE;
        state.fg_stroke = Stroke::new(1.0, BUTTON_TEXT);
        state.expansion = 0.0;
    }
    widgets.inactive.bg_stroke = Stroke::new(1.0, EDIT_BORDER);

    style.spacing.item_spacing = egui::vec2(8.0, 0.0);
    style.interaction.selectable_labels = false;

    ctx.set_style(style);
}

/// Scale every button colour in `ui` by `opacity`, for the fading tray.
pub fn fade_widget_visuals(ui: &mut egui::Ui, opacity: f32) {
    let widgets = &mut ui.visuals_mut().widgets;
    for state in [
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        state.weak_bg_fill = state.weak_bg_fill.gamma_multiply(opacity);
        state.bg_fill = state.bg_fill.gamma_multiply(opacity);
        state.bg_stroke.color = state.bg_stroke.color.gamma_multiply(opacity);
        state.fg_stroke.color = state.fg_stroke.color.gamma_multiply(opacity);
    }
}

/// Round icon-only button.
pub fn round_button(ui: &mut egui::Ui, glyph: &str, diameter: f32, font_size: f32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(glyph).size(font_size))
            .min_size(egui::vec2(diameter, diameter))
            .rounding(Rounding::same(diameter / 2.0))
            .stroke(Stroke::NONE),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}
