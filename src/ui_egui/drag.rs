use egui::{Pos2, Vec2};

/// Manhattan distance the pointer must travel before a press becomes a drag.
pub const DRAG_THRESHOLD: f32 = 3.0;

/// How a completed press/release cycle on the time label is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Released without ever exceeding the drag threshold.
    Click,
    /// The window followed the pointer at some point during the gesture.
    Drag,
}

/// Transient press/move/release state for moving the frameless window.
///
/// All positions are global screen points. Once the threshold has been
/// exceeded the gesture stays a drag even if the pointer returns to the
/// press point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    dragging: bool,
    press_point: Pos2,
    drag_offset: Vec2,
    moved: bool,
}

impl GestureTracker {
    pub fn press(&mut self, pointer: Pos2, window_origin: Pos2) {
        self.dragging = true;
        self.press_point = pointer;
        self.drag_offset = pointer - window_origin;
        self.moved = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Feed a pointer position while the button is held. Returns the window
    /// origin that keeps the grab point under the pointer, once moving.
    pub fn drag_to(&mut self, pointer: Pos2) -> Option<Pos2> {
        if !self.dragging {
            return None;
        }

        if !self.moved && manhattan_length(pointer - self.press_point) > DRAG_THRESHOLD {
            self.moved = true;
        }

        self.moved.then(|| pointer - self.drag_offset)
    }

    pub fn release(&mut self) -> Option<Gesture> {
        if !self.dragging {
            return None;
        }

        let gesture = if self.moved {
            Gesture::Drag
        } else {
            Gesture::Click
        };
        *self = Self::default();
        Some(gesture)
    }

    /// Abandon the gesture without producing a click, e.g. when the button
    /// was released outside the window and no release event arrived.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

fn manhattan_length(delta: Vec2) -> f32 {
    delta.x.abs() + delta.y.abs()
}
