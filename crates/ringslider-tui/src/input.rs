use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::App;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    StepLeft,
    StepRight,
    FlingLeft,
    FlingRight,
    Reset,
    ToggleHelp,
    ExitMode,
    /// Left button pressed on the strip at a column
    DragStart(u16),
    /// Drag moved to a column
    DragMove(u16),
    /// Left button released
    DragEnd,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Help popup swallows everything except quit; any other key closes it.
    if app.show_help {
        let binding = KeyBinding::new(key.code, key.modifiers);
        return match keymap.get(&binding) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    let binding = KeyBinding::new(key.code, key.modifiers);
    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

/// Handle a mouse event against the strip area recorded by the last draw.
///
/// The wheel steps one tick per notch; press-drag-release on the strip is
/// the primary scrolling gesture.
pub fn handle_mouse_event(mouse: MouseEvent, strip_area: Rect) -> Action {
    let position = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if strip_area.contains(position) => {
            Action::DragStart(mouse.column)
        }
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => Action::DragEnd,
        MouseEventKind::ScrollUp if strip_area.contains(position) => Action::StepRight,
        MouseEventKind::ScrollDown if strip_area.contains(position) => Action::StepLeft,
        _ => Action::None,
    }
}
