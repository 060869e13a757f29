//! USB HID keycodes plus the Fn layer keys.

/// USB HID keycodes.
/// See USB HID Usage Tables, Section 10 (Keyboard/Keypad Page 0x07).
///
/// `Fn0`..`Fn7` are not HID usages; they sit right after the modifier block
/// and mark the keys that drive layer selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Keycode {
    /// No key. Used for unwired matrix cells.
    No = 0x00,
    /// Error rollover
    RollOver = 0x01,

    // Letters
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,

    // Numbers
    N1 = 0x1E,
    N2 = 0x1F,
    N3 = 0x20,
    N4 = 0x21,
    N5 = 0x22,
    N6 = 0x23,
    N7 = 0x24,
    N8 = 0x25,
    N9 = 0x26,
    N0 = 0x27,

    // Control keys
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    LBracket = 0x2F,
    RBracket = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,

    // Function keys
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,

    // Modifiers
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,

    // Layer keys
    Fn0 = 0xE8,
    Fn1 = 0xE9,
    Fn2 = 0xEA,
    Fn3 = 0xEB,
    Fn4 = 0xEC,
    Fn5 = 0xED,
    Fn6 = 0xEE,
    Fn7 = 0xEF,
}

impl Keycode {
    /// Raw byte value of the keycode.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Check if this is one of the `Fn0`..`Fn7` layer keys.
    pub fn is_fn(self) -> bool {
        (0xE8..=0xEF).contains(&self.code())
    }

    /// Index (0-7) of a layer key, `None` for everything else.
    pub fn fn_index(self) -> Option<u8> {
        if self.is_fn() {
            Some(self.code() - 0xE8)
        } else {
            None
        }
    }

    /// Short label used by the layout printer.
    pub fn display_name(self) -> &'static str {
        match self {
            Keycode::No => "",
            Keycode::RollOver => "ERR",
            Keycode::A => "A",
            Keycode::B => "B",
            Keycode::C => "C",
            Keycode::D => "D",
            Keycode::E => "E",
            Keycode::F => "F",
            Keycode::G => "G",
            Keycode::H => "H",
            Keycode::I => "I",
            Keycode::J => "J",
            Keycode::K => "K",
            Keycode::L => "L",
            Keycode::M => "M",
            Keycode::N => "N",
            Keycode::O => "O",
            Keycode::P => "P",
            Keycode::Q => "Q",
            Keycode::R => "R",
            Keycode::S => "S",
            Keycode::T => "T",
            Keycode::U => "U",
            Keycode::V => "V",
            Keycode::W => "W",
            Keycode::X => "X",
            Keycode::Y => "Y",
            Keycode::Z => "Z",
            Keycode::N1 => "1",
            Keycode::N2 => "2",
            Keycode::N3 => "3",
            Keycode::N4 => "4",
            Keycode::N5 => "5",
            Keycode::N6 => "6",
            Keycode::N7 => "7",
            Keycode::N8 => "8",
            Keycode::N9 => "9",
            Keycode::N0 => "0",
            Keycode::Enter => "Ent",
            Keycode::Escape => "Esc",
            Keycode::Backspace => "Bksp",
            Keycode::Tab => "Tab",
            Keycode::Space => "Spc",
            Keycode::Minus => "-",
            Keycode::Equal => "=",
            Keycode::LBracket => "[",
            Keycode::RBracket => "]",
            Keycode::Backslash => "\\",
            Keycode::Semicolon => ";",
            Keycode::Quote => "'",
            Keycode::Grave => "`",
            Keycode::Comma => ",",
            Keycode::Dot => ".",
            Keycode::Slash => "/",
            Keycode::CapsLock => "Caps",
            Keycode::F1 => "F1",
            Keycode::F2 => "F2",
            Keycode::F3 => "F3",
            Keycode::F4 => "F4",
            Keycode::F5 => "F5",
            Keycode::F6 => "F6",
            Keycode::F7 => "F7",
            Keycode::F8 => "F8",
            Keycode::F9 => "F9",
            Keycode::F10 => "F10",
            Keycode::F11 => "F11",
            Keycode::F12 => "F12",
            Keycode::PrintScreen => "PScr",
            Keycode::ScrollLock => "ScrL",
            Keycode::Pause => "Paus",
            Keycode::Insert => "Ins",
            Keycode::Home => "Home",
            Keycode::PageUp => "PgUp",
            Keycode::Delete => "Del",
            Keycode::End => "End",
            Keycode::PageDown => "PgDn",
            Keycode::Right => "\u{2192}",
            Keycode::Left => "\u{2190}",
            Keycode::Down => "\u{2193}",
            Keycode::Up => "\u{2191}",
            Keycode::LCtrl => "Ctrl",
            Keycode::LShift => "Shft",
            Keycode::LAlt => "Alt",
            Keycode::LGui => "Gui",
            Keycode::RCtrl => "RCtl",
            Keycode::RShift => "RSft",
            Keycode::RAlt => "RAlt",
            Keycode::RGui => "RGui",
            Keycode::Fn0 => "Fn0",
            Keycode::Fn1 => "Fn1",
            Keycode::Fn2 => "Fn2",
            Keycode::Fn3 => "Fn3",
            Keycode::Fn4 => "Fn4",
            Keycode::Fn5 => "Fn5",
            Keycode::Fn6 => "Fn6",
            Keycode::Fn7 => "Fn7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_keys_map_to_their_index() {
        assert_eq!(Keycode::Fn0.fn_index(), Some(0));
        assert_eq!(Keycode::Fn4.fn_index(), Some(4));
        assert_eq!(Keycode::Fn7.fn_index(), Some(7));
    }

    #[test]
    fn modifiers_and_plain_keys_are_not_fn() {
        assert_eq!(Keycode::RGui.fn_index(), None);
        assert_eq!(Keycode::Slash.fn_index(), None);
        assert!(!Keycode::No.is_fn());
    }
}
