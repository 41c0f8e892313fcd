use super::Keycode;

/// What a key does while its layer is the one being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Use the same position of the next lower active layer.
    Transparent,
    /// Emit nothing.
    NoOp,
    Primary(Keycode),
    Mouse(MouseAction),
    Consumer(ConsumerAction),
    System(SystemKey),
    /// Momentarily shift to the given layer while held.
    LayerShift(u8),
}

impl KeyAction {
    pub const fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    pub const fn is_noop(&self) -> bool {
        matches!(self, KeyAction::NoOp)
    }

    /// Anything other than `Transparent` and `NoOp`.
    pub const fn is_binding(&self) -> bool {
        !self.is_transparent() && !self.is_noop()
    }

    /// The keyboard-page usage for the keyboard report, if any.
    pub const fn keycode(&self) -> Option<Keycode> {
        match self {
            KeyAction::Primary(keycode) => Some(*keycode),
            KeyAction::System(key) => Some(key.keycode()),
            _ => None,
        }
    }

    /// The consumer-page usage for the media report, if any.
    pub const fn consumer_usage(&self) -> Option<u16> {
        match self {
            KeyAction::Consumer(action) => Some(action.usage_id()),
            _ => None,
        }
    }

    pub const fn mouse(&self) -> Option<MouseAction> {
        match self {
            KeyAction::Mouse(action) => Some(*action),
            _ => None,
        }
    }
}

impl From<Keycode> for KeyAction {
    fn from(keycode: Keycode) -> Self {
        KeyAction::Primary(keycode)
    }
}

impl From<MouseAction> for KeyAction {
    fn from(action: MouseAction) -> Self {
        KeyAction::Mouse(action)
    }
}

impl From<ConsumerAction> for KeyAction {
    fn from(action: ConsumerAction) -> Self {
        KeyAction::Consumer(action)
    }
}

impl From<SystemKey> for KeyAction {
    fn from(key: SystemKey) -> Self {
        KeyAction::System(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseAction {
    /// Move the pointer one step per report while held.
    Move(MouseDirection),
    /// Jump the pointer into a region of the screen.
    Warp(WarpTarget),
    Button(MouseButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Screen regions for pointer warping.
///
/// Warping repeatedly halves the remaining area toward the chosen region;
/// `End` stops the sequence and leaves the pointer where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WarpTarget {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Bit in the button byte of a mouse report.
    pub const fn flag(self) -> u8 {
        match self {
            MouseButton::Left => 0b001,
            MouseButton::Right => 0b010,
            MouseButton::Middle => 0b100,
        }
    }
}

/// Usages of the HID consumer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ConsumerAction {
    ScanNextTrack = 0xb5,
    ScanPreviousTrack = 0xb6,
    Stop = 0xb7,
    PlayPause = 0xcd,
    Mute = 0xe2,
    VolumeIncrement = 0xe9,
    VolumeDecrement = 0xea,
}

impl ConsumerAction {
    pub const fn usage_id(self) -> u16 {
        self as u16
    }
}

/// Keys handled by the operating system rather than typed into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemKey {
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    /// Delete forward, not backspace.
    Delete,
    /// The PC application (menu) key.
    Application,
    Power,
}

impl SystemKey {
    pub const fn keycode(self) -> Keycode {
        match self {
            SystemKey::PrintScreen => Keycode::PrintScreen,
            SystemKey::ScrollLock => Keycode::ScrollLock,
            SystemKey::Pause => Keycode::Pause,
            SystemKey::Insert => Keycode::Insert,
            SystemKey::Delete => Keycode::DeleteForward,
            SystemKey::Application => Keycode::Application,
            SystemKey::Power => Keycode::Power,
        }
    }
}
