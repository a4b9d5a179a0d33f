// Widget command surface
//
// Every on-screen button and keyboard shortcut resolves to one of these
// commands, so both input paths share a single dispatcher.

use egui::{Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Start the countdown when paused, pause it when running.
    ToggleRun,
    /// Pause and restore the full duration.
    Reset,
    /// Stop all timers and close the window.
    Close,
}

/// Every command, in the order shortcuts are checked.
const ALL_COMMANDS: [WidgetCommand; 3] = [
    WidgetCommand::Close,
    WidgetCommand::ToggleRun,
    WidgetCommand::Reset,
];

impl WidgetCommand {
    pub fn shortcut_key(self) -> Key {
        match self {
            WidgetCommand::ToggleRun => Key::Space,
            WidgetCommand::Reset => Key::R,
            WidgetCommand::Close => Key::Escape,
        }
    }

    /// Whether the shortcut still fires while a text field has focus, i.e.
    /// its key cannot be typed into the field.
    pub fn fires_while_editing(self) -> bool {
        match self {
            WidgetCommand::Close => true,
            WidgetCommand::ToggleRun | WidgetCommand::Reset => false,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WidgetCommand::ToggleRun => "Start / pause",
            WidgetCommand::Reset => "Reset",
            WidgetCommand::Close => "Close",
        }
    }

    /// Tooltip text naming the command and its shortcut.
    pub fn hover_text(self) -> String {
        format!("{} ({})", self.description(), self.shortcut_key().name())
    }
}

/// Consume any shortcut keys pressed this frame and return their commands.
/// Keys are consumed so focused widgets never see them as well. While a
/// text field is being edited, only shortcuts that cannot be typed fire.
pub fn consume_shortcuts(ctx: &egui::Context, text_input_focused: bool) -> Vec<WidgetCommand> {
    ctx.input_mut(|input| {
        ALL_COMMANDS
            .into_iter()
            .filter(|command| command.fires_while_editing() || !text_input_focused)
            .filter(|command| input.consume_key(Modifiers::NONE, command.shortcut_key()))
            .collect()
    })
}
