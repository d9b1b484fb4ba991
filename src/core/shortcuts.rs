//! Keyboard shortcuts for the file list.

/// Explorer action bound to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ClearSelection,
    SelectAll,
    Back,
    Forward,
    Refresh,
}

/// Modifier state of a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

/// Map a `KeyboardEvent.key` value to an action.
pub fn shortcut_for(key: &str, mods: Modifiers) -> Option<Shortcut> {
    let command = mods.ctrl || mods.meta;
    match key {
        "Escape" => Some(Shortcut::ClearSelection),
        "a" | "A" if command => Some(Shortcut::SelectAll),
        "ArrowLeft" if mods.alt => Some(Shortcut::Back),
        "ArrowRight" if mods.alt => Some(Shortcut::Forward),
        "Backspace" if !command && !mods.alt => Some(Shortcut::Back),
        "F5" => Some(Shortcut::Refresh),
        _ => None,
    }
}
