use std::time::Instant;

use egui::{Color32, CursorIcon, FontId, Margin, RichText, Vec2, ViewportCommand};

use super::edit::MINUTES_FIELD_WIDTH;
use super::{AppContext, CountdownApp};
use crate::models::settings::WidgetConfig;
use crate::ui_egui::commands::WidgetCommand;
use crate::ui_egui::theme::{
    fade_widget_visuals, rgba_to_color32, round_button, PRIMARY_BUTTON_FONT, PRIMARY_BUTTON_SIZE,
    TRAY_BUTTON_FONT, TRAY_BUTTON_SIZE,
};

const WINDOW_TITLE: &str = "PPT Countdown";

// Layout margins, outermost first
const OUTER_MARGIN: f32 = 10.0;
const ROW_SIDE_MARGIN: f32 = 12.0;
const TOP_ROW_TOP: f32 = 12.0;
const TOP_ROW_BOTTOM: f32 = 6.0;
const TRAY_ROW_BOTTOM: f32 = 10.0;
const ITEM_SPACING: f32 = 8.0;

// Monospace glyphs are roughly 0.6em wide; the label is five of them.
const MONO_GLYPH_WIDTH: f32 = 0.6;
const LABEL_LINE_HEIGHT: f32 = 1.3;

const TOGGLE_RUNNING_GLYPH: &str = "⏸";
const TOGGLE_PAUSED_GLYPH: &str = "▶";
const RESET_GLYPH: &str = "🔄";
const CLOSE_GLYPH: &str = "🗙";

/// Frameless, transparent, always-on-top tool window at the configured
/// fraction of the primary work area.
pub fn viewport_builder(context: &AppContext) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_decorations(false)
        .with_transparent(true)
        .with_always_on_top()
        .with_taskbar(false)
        .with_resizable(false)
        .with_position(context.initial_position(None))
        .with_inner_size(estimated_inner_size(context.config()))
}

/// Window size before the first frame has measured the real content.
pub(super) fn estimated_inner_size(config: &WidgetConfig) -> Vec2 {
    let label_width = config.font_size * MONO_GLYPH_WIDTH * 5.0;
    let row_width = label_width.max(MINUTES_FIELD_WIDTH) + ITEM_SPACING + PRIMARY_BUTTON_SIZE;
    let row_height = (config.font_size * LABEL_LINE_HEIGHT).max(PRIMARY_BUTTON_SIZE);
    let tray_height = if config.show_hover_controls {
        TRAY_BUTTON_SIZE + TRAY_ROW_BOTTOM
    } else {
        0.0
    };

    egui::vec2(
        2.0 * (OUTER_MARGIN + ROW_SIDE_MARGIN) + row_width,
        2.0 * OUTER_MARGIN + TOP_ROW_TOP + row_height + TOP_ROW_BOTTOM + tray_height,
    )
    .ceil()
}

fn toggle_glyph(running: bool) -> &'static str {
    if running {
        TOGGLE_RUNNING_GLYPH
    } else {
        TOGGLE_PAUSED_GLYPH
    }
}

/// Pause/reset/close buttons of the hover tray, faded to `opacity`.
fn tray_row(
    ui: &mut egui::Ui,
    toggle_glyph: &'static str,
    opacity: f32,
) -> Vec<(WidgetCommand, egui::Response)> {
    ui.horizontal(|ui| {
        fade_widget_visuals(ui, opacity);
        [
            (toggle_glyph, WidgetCommand::ToggleRun),
            (RESET_GLYPH, WidgetCommand::Reset),
            (CLOSE_GLYPH, WidgetCommand::Close),
        ]
        .into_iter()
        .map(|(glyph, command)| {
            let response = round_button(ui, glyph, TRAY_BUTTON_SIZE, TRAY_BUTTON_FONT)
                .on_hover_text(command.hover_text());
            (command, response)
        })
        .collect()
    })
    .inner
}

impl CountdownApp {
    /// Draw the widget and return the commands its buttons produced.
    pub(super) fn render_panel(&mut self, ctx: &egui::Context, now: Instant) -> Vec<WidgetCommand> {
        let mut commands = Vec::new();
        let mut commit_minutes = false;
        let mut label_rect = None;

        let display = self.clock.display();
        let glyph = toggle_glyph(self.clock.is_running());
        let font_size = self.context.config().font_size;
        let show_tray = self.context.config().show_hover_controls;
        let tray_hidden = self.hover_tray.is_hidden(now);
        let tray_opacity = self.hover_tray.opacity(now);
        let minutes_field = &mut self.minutes_field;

        let content_size = egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Color32::TRANSPARENT)
                    .inner_margin(Margin::same(OUTER_MARGIN)),
            )
            .show(ctx, |ui| {
                egui::Frame::none()
                    .inner_margin(Margin {
                        left: ROW_SIDE_MARGIN,
                        right: ROW_SIDE_MARGIN,
                        top: TOP_ROW_TOP,
                        bottom: TOP_ROW_BOTTOM,
                    })
                    .show(ui, |ui| {
                        // Only as tall as its content; the window size is measured from it
                        ui.horizontal(|ui| {
                            if minutes_field.is_active() {
                                commit_minutes = minutes_field.show(ui, font_size * 0.5);
                            } else {
                                let response = ui
                                    .add(
                                        egui::Label::new(
                                            RichText::new(&display.text)
                                                .font(FontId::monospace(font_size))
                                                .color(rgba_to_color32(display.color)),
                                        )
                                        .selectable(false)
                                        .sense(egui::Sense::hover()),
                                    )
                                    .on_hover_cursor(CursorIcon::Text);
                                label_rect = Some(response.rect);
                            }

                            let toggle = round_button(
                                ui,
                                glyph,
                                PRIMARY_BUTTON_SIZE,
                                PRIMARY_BUTTON_FONT,
                            )
                            .on_hover_text(WidgetCommand::ToggleRun.hover_text());
                            if toggle.clicked() {
                                commands.push(WidgetCommand::ToggleRun);
                            }
                        });
                    });

                if show_tray {
                    egui::Frame::none()
                        .inner_margin(Margin {
                            left: ROW_SIDE_MARGIN,
                            right: ROW_SIDE_MARGIN,
                            top: 0.0,
                            bottom: TRAY_ROW_BOTTOM,
                        })
                        .show(ui, |ui| {
                            if tray_hidden {
                                // Keep the row's space so the window does not jump
                                ui.allocate_space(egui::vec2(
                                    3.0 * TRAY_BUTTON_SIZE + 2.0 * ITEM_SPACING,
                                    TRAY_BUTTON_SIZE,
                                ));
                                return;
                            }
                            commands.extend(
                                tray_row(ui, glyph, tray_opacity)
                                    .into_iter()
                                    .filter(|(_, response)| response.clicked())
                                    .map(|(command, _)| command),
                            );
                        });
                }

                ui.min_rect().size()
            })
            .inner;

        self.time_label_rect = label_rect;
        if commit_minutes {
            self.commit_minutes_field();
        }
        self.fit_window_to_content(ctx, content_size + Vec2::splat(2.0 * OUTER_MARGIN));
        commands
    }

    /// Resize the viewport to the measured content, like a toolkit's
    /// adjust-size, without re-sending an unchanged size every frame.
    fn fit_window_to_content(&mut self, ctx: &egui::Context, desired: Vec2) {
        let desired = desired.ceil();
        let unchanged = self
            .requested_size
            .is_some_and(|size| (size - desired).length() < 0.5);
        if unchanged {
            return;
        }
        log::debug!("resizing window to {:?}", desired);
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(desired));
        self.requested_size = Some(desired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_size_grows_with_font() {
        let small = estimated_inner_size(&WidgetConfig {
            font_size: 24.0,
            ..WidgetConfig::default()
        });
        let large = estimated_inner_size(&WidgetConfig {
            font_size: 96.0,
            ..WidgetConfig::default()
        });
        assert!(large.x > small.x);
        assert!(large.y > small.y);
    }

    #[test]
    fn estimated_size_reserves_tray_row_only_when_enabled() {
        let with_tray = estimated_inner_size(&WidgetConfig::default());
        let without_tray = estimated_inner_size(&WidgetConfig {
            show_hover_controls: false,
            ..WidgetConfig::default()
        });
        assert_eq!(with_tray.x, without_tray.x);
        assert_eq!(with_tray.y - without_tray.y, TRAY_BUTTON_SIZE + TRAY_ROW_BOTTOM);
    }

    #[test]
    fn toggle_glyph_reflects_run_state() {
        assert_eq!(toggle_glyph(true), "⏸");
        assert_eq!(toggle_glyph(false), "▶");
    }

    fn tray_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
    ) -> Vec<(WidgetCommand, egui::Response)> {
        let input = egui::RawInput {
            events,
            ..egui::RawInput::default()
        };
        let mut row = Vec::new();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                row = tray_row(ui, TOGGLE_PAUSED_GLYPH, 1.0);
            });
        });
        row
    }

    fn click_tray_button(command: WidgetCommand) -> Vec<WidgetCommand> {
        let ctx = egui::Context::default();
        let center = tray_frame(&ctx, Vec::new())
            .into_iter()
            .find(|(drawn, _)| *drawn == command)
            .map(|(_, response)| response.rect.center())
            .expect("tray button drawn");

        let press = egui::Event::PointerButton {
            pos: center,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        let release = egui::Event::PointerButton {
            pos: center,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        tray_frame(&ctx, vec![egui::Event::PointerMoved(center), press]);
        tray_frame(&ctx, vec![release])
            .into_iter()
            .filter(|(_, response)| response.clicked())
            .map(|(clicked, _)| clicked)
            .collect()
    }

    #[test]
    fn tray_draws_toggle_reset_close_in_order() {
        let ctx = egui::Context::default();
        let commands: Vec<WidgetCommand> = tray_frame(&ctx, Vec::new())
            .into_iter()
            .map(|(command, _)| command)
            .collect();
        assert_eq!(
            commands,
            vec![
                WidgetCommand::ToggleRun,
                WidgetCommand::Reset,
                WidgetCommand::Close
            ]
        );
    }

    #[test]
    fn tray_reset_button_produces_reset() {
        assert_eq!(
            click_tray_button(WidgetCommand::Reset),
            vec![WidgetCommand::Reset]
        );
    }

    #[test]
    fn tray_close_button_produces_close() {
        assert_eq!(
            click_tray_button(WidgetCommand::Close),
            vec![WidgetCommand::Close]
        );
    }
}
