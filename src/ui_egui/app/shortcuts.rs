use std::time::Instant;

use super::CountdownApp;
use crate::ui_egui::commands;

impl CountdownApp {
    /// Consume shortcut keys before any widget sees them, so Space never
    /// also activates a focused button.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context, now: Instant) {
        let text_focused = self.minutes_field.is_active() && ctx.wants_keyboard_input();
        for command in commands::consume_shortcuts(ctx, text_focused) {
            self.execute(ctx, command, now);
        }
    }
}
