use egui::text::{CCursor, CCursorRange};

/// Width of the minutes field in points.
pub(super) const MINUTES_FIELD_WIDTH: f32 = 120.0;

/// State of the minutes entry that replaces the time label while editing.
#[derive(Debug, Default)]
pub(super) struct MinutesField {
    text: String,
    active: bool,
    /// Focus and select-all still have to be applied on the next render
    focus_pending: bool,
}

impl MinutesField {
    pub(super) fn open(&mut self, minutes: u32) {
        self.text = minutes.to_string();
        self.active = true;
        self.focus_pending = true;
    }

    /// Close the field and hand back its text for committing.
    pub(super) fn take_text(&mut self) -> String {
        self.active = false;
        self.focus_pending = false;
        std::mem::take(&mut self.text)
    }

    pub(super) fn is_active(&self) -> bool {
        self.active
    }

    /// Draw the field. Returns true when editing finished (Enter or focus
    /// loss) and the text should be committed.
    pub(super) fn show(&mut self, ui: &mut egui::Ui, font_size: f32) -> bool {
        let output = egui::TextEdit::singleline(&mut self.text)
            .desired_width(MINUTES_FIELD_WIDTH)
            .horizontal_align(egui::Align::Center)
            .font(egui::FontId::proportional(font_size))
            .text_color(crate::ui_egui::theme::EDIT_TEXT)
            .margin(egui::vec2(4.0, 4.0))
            .show(ui);

        if self.focus_pending {
            self.focus_pending = false;
            output.response.request_focus();
            let mut state = output.state;
            let end = CCursor::new(self.text.chars().count());
            state
                .cursor
                .set_char_range(Some(CCursorRange::two(CCursor::new(0), end)));
            state.store(ui.ctx(), output.response.id);
            return false;
        }

        output.response.lost_focus()
    }
}
