/// Usages of the HID keyboard/keypad page.
///
/// The low byte is the usage ID. Shifted symbols such as `{` carry the
/// modifier's usage in the high byte, so `LeftCurlyBracket` is
/// `LeftShift << 8 | LeftBracket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Keycode {
    A = 0x04,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit1 = 0x1e,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Enter = 0x28,
    Escape,
    Backspace,
    Tab,
    Space,
    Minus,
    Equal,
    LeftBracket,
    RightBracket,
    Backslash,
    NonUsHash,
    Semicolon,
    Quote,
    Grave,
    Comma,
    Period,
    Slash,
    CapsLock,
    F1 = 0x3a,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen = 0x46,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    DeleteForward,
    End,
    PageDown,
    RightArrow,
    LeftArrow,
    DownArrow,
    UpArrow,
    KeypadNumLock = 0x53,
    KeypadSlash,
    KeypadAsterisk,
    KeypadMinus,
    KeypadPlus,
    KeypadEnter,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    Keypad0,
    KeypadPeriod,
    NonUsBackslash = 0x64,
    Application,
    Power,
    KeypadEqual,
    F13 = 0x68,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    Execute = 0x74,
    Help,
    Menu,
    Select,
    Stop,
    Again,
    Undo,
    Cut,
    Copy,
    Paste,
    Find,
    Mute,
    VolumeUp,
    VolumeDown,
    LeftControl = 0xe0,
    LeftShift,
    LeftAlt,
    LeftGui,
    RightControl,
    RightShift,
    RightAlt,
    RightGui,
    Exclamation = 0xe11e,
    At,
    Hash,
    Dollar,
    Percent,
    Caret,
    Ampersand,
    Asterisk,
    LeftParenthesis,
    RightParenthesis,
    Underscore = 0xe12d,
    Plus,
    LeftCurlyBracket,
    RightCurlyBracket,
    Pipe,
    Colon = 0xe133,
    DoubleQuote,
    Tilde,
    LessThan,
    GreaterThan,
    Question,
}

impl Keycode {
    /// Usage ID sent in the key array of a boot keyboard report.
    pub const fn usage_id(self) -> u8 {
        (self as u16 & 0xff) as u8
    }

    pub const fn is_modifier(self) -> bool {
        let code = self as u16;
        code >= 0xe0 && code <= 0xe7
    }

    /// A symbol that needs a modifier held with its base key.
    pub const fn is_shifted(self) -> bool {
        let modifier = self as u16 >> 8;
        modifier >= 0xe0 && modifier <= 0xe7
    }

    /// Bits this key sets in the modifier byte of a keyboard report.
    pub const fn modifier_flags(self) -> u8 {
        if self.is_modifier() {
            1 << (self as u16 - 0xe0)
        } else if self.is_shifted() {
            1 << ((self as u16 >> 8) - 0xe0)
        } else {
            0x00
        }
    }
}
