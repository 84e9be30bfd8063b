/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key, as it would be inserted (so 'A' when SHIFT is held).
    Char(char),
    /// The Tab key. Shift+Tab is `Tab` with [`Modifiers::SHIFT`].
    Tab,
    /// The Enter/Return key.
    Enter,
    /// The Backspace key.
    Backspace,
    /// The Escape key. Never handled; hosts keep their focus behaviour.
    Esc,
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// A key pressed without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    /// True when Ctrl, Alt or Meta is held. Shift alone does not count.
    pub fn has_command_modifier(&self) -> bool {
        self.mods
            .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::META)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}
