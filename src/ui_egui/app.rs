mod context;
mod edit;
mod hover;
mod lifecycle;
mod render;
mod shortcuts;

pub use self::context::AppContext;
pub use self::render::viewport_builder;

use self::edit::MinutesField;
use self::hover::HoverTray;
use crate::services::clock::ClockEngine;
use crate::ui_egui::drag::GestureTracker;

/// The single controller behind the countdown window.
pub struct CountdownApp {
    /// Startup configuration and screen geometry
    context: AppContext,
    clock: ClockEngine,
    gesture: GestureTracker,
    minutes_field: MinutesField,
    hover_tray: HoverTray,
    /// Screen rect of the `MM:SS` label from the previous frame
    time_label_rect: Option<egui::Rect>,
    /// Outer window position last requested or reported
    window_origin: egui::Pos2,
    /// Inner size last sent to the viewport
    requested_size: Option<egui::Vec2>,
    /// Initial placement has been resolved against a real monitor size
    placement_settled: bool,
    closing: bool,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
