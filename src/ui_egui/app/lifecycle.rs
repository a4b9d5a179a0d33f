use std::time::Instant;

use egui::{PointerButton, Pos2, ViewportCommand};

use super::hover::HoverTray;
use super::render::estimated_inner_size;
use super::{AppContext, CountdownApp};
use crate::services::clock::ClockEngine;
use crate::ui_egui::commands::WidgetCommand;
use crate::ui_egui::drag::{Gesture, GestureTracker};
use crate::ui_egui::theme;

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, context: AppContext) -> Self {
        Self::with_egui_context(&cc.egui_ctx, context)
    }

    pub(super) fn with_egui_context(ctx: &egui::Context, context: AppContext) -> Self {
        theme::apply_widget_style(ctx);

        let config = context.config();
        let clock = ClockEngine::new(config.default_minutes);
        let requested_size = Some(estimated_inner_size(config));
        let window_origin = context.initial_position(None);
        let placement_settled = context.placement_known();

        log::info!(
            "countdown widget ready: {} minutes at {:?}",
            clock.total_minutes(),
            window_origin
        );

        Self {
            context,
            clock,
            gesture: GestureTracker::default(),
            minutes_field: Default::default(),
            hover_tray: HoverTray::hidden(Instant::now()),
            time_label_rect: None,
            window_origin,
            requested_size,
            placement_settled,
            closing: false,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx, Instant::now());
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.release_timers();
        log::info!("countdown widget exiting");
    }

    fn run_frame(&mut self, ctx: &egui::Context, now: Instant) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.release_timers();
            return;
        }
        if self.closing {
            return;
        }

        self.settle_initial_placement(ctx);
        self.handle_keyboard_shortcuts(ctx, now);
        if self.closing {
            return;
        }

        self.clock.poll(now);
        self.update_hover_tray(ctx, now);
        self.handle_pointer_gestures(ctx);

        for command in self.render_panel(ctx, now) {
            self.execute(ctx, command, now);
        }

        self.schedule_repaint(ctx, now);
    }

    pub(super) fn execute(&mut self, ctx: &egui::Context, command: WidgetCommand, now: Instant) {
        log::debug!("executing {:?}", command);
        match command {
            WidgetCommand::ToggleRun => {
                self.commit_open_minutes_field();
                self.clock.toggle(now);
            }
            WidgetCommand::Reset => {
                self.commit_open_minutes_field();
                self.clock.reset();
            }
            WidgetCommand::Close => {
                self.release_timers();
                self.closing = true;
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
        ctx.request_repaint();
    }

    pub(super) fn commit_minutes_field(&mut self) {
        let text = self.minutes_field.take_text();
        let minutes = self.clock.commit_duration(&text);
        log::debug!("duration committed from {:?}: {} minutes", text, minutes);
    }

    fn commit_open_minutes_field(&mut self) {
        if self.minutes_field.is_active() {
            self.commit_minutes_field();
        }
    }

    fn request_edit(&mut self) {
        if self.minutes_field.is_active() {
            return;
        }
        if !self.clock.can_edit() {
            log::debug!("click on label ignored while running");
            return;
        }
        self.minutes_field.open(self.clock.total_minutes());
    }

    fn release_timers(&mut self) {
        self.clock.shutdown();
    }

    /// On platforms without a work-area query, place the window once egui
    /// knows the monitor size.
    fn settle_initial_placement(&mut self, ctx: &egui::Context) {
        if self.placement_settled {
            return;
        }
        let Some(size) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        self.placement_settled = true;
        if self.gesture.has_moved() {
            return;
        }
        let origin = self.context.initial_position(Some((size.x, size.y)));
        log::debug!("initial placement at {:?} on {:?} monitor", origin, size);
        self.move_window(ctx, origin);
    }

    fn update_hover_tray(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.context.config().show_hover_controls {
            return;
        }
        let pointer_inside = ctx.input(|i| i.pointer.has_pointer());
        self.hover_tray
            .set_visible(pointer_inside || self.gesture.is_dragging(), now);
    }

    /// Press on the label starts a gesture. Moving past the drag threshold
    /// drags the window; releasing before it opens the editor. A
    /// double-click normally finds the editor already open from its first
    /// click and only opens it when that click was not seen as one.
    fn handle_pointer_gestures(&mut self, ctx: &egui::Context) {
        let (pointer, pressed, down, released, double_clicked) = ctx.input(|i| {
            (
                i.pointer.interact_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.button_double_clicked(PointerButton::Primary),
            )
        });

        let Some(local) = pointer else {
            if !down {
                self.gesture.cancel();
            }
            return;
        };

        let origin = self.current_window_origin(ctx);
        let global = origin + local.to_vec2();
        let over_label = !self.minutes_field.is_active()
            && self.time_label_rect.is_some_and(|rect| rect.contains(local));

        if pressed && over_label {
            self.gesture.press(global, origin);
        } else if down && self.gesture.is_dragging() {
            if let Some(new_origin) = self.gesture.drag_to(global) {
                self.move_window(ctx, new_origin);
            }
        }

        let clicked = if released {
            self.gesture.release() == Some(Gesture::Click)
        } else {
            if !down && self.gesture.is_dragging() {
                self.gesture.cancel();
            }
            false
        };

        if (clicked || double_clicked) && over_label {
            self.request_edit();
        }
    }

    /// Window position in screen coordinates, as reported by the
    /// platform when available.
    fn current_window_origin(&self, ctx: &egui::Context) -> Pos2 {
        ctx.input(|i| i.viewport().outer_rect)
            .map_or(self.window_origin, |rect| rect.min)
    }

    fn move_window(&mut self, ctx: &egui::Context, origin: Pos2) {
        self.window_origin = origin;
        ctx.send_viewport_cmd(ViewportCommand::OuterPosition(origin));
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if self.hover_tray.is_animating(now) {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.clock.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}
