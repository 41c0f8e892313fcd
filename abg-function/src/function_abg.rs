use stackkbd::{
    keyboard::{
        ConsumerAction, KeyAction, Keycode, MouseAction, MouseButton, MouseDirection, SystemKey,
        WarpTarget,
    },
    keymap::{LayerTable, StackedHand},
};

const ___: KeyAction = KeyAction::Transparent;
const XXX: KeyAction = KeyAction::NoOp;

const fn k(keycode: Keycode) -> KeyAction {
    KeyAction::Primary(keycode)
}

const fn sys(key: SystemKey) -> KeyAction {
    KeyAction::System(key)
}

const fn cc(action: ConsumerAction) -> KeyAction {
    KeyAction::Consumer(action)
}

const fn mouse(direction: MouseDirection) -> KeyAction {
    KeyAction::Mouse(MouseAction::Move(direction))
}

const fn button(button: MouseButton) -> KeyAction {
    KeyAction::Mouse(MouseAction::Button(button))
}

const fn warp(target: WarpTarget) -> KeyAction {
    KeyAction::Mouse(MouseAction::Warp(target))
}

pub const FUNCTION_ABG: LayerTable = LayerTable::stacked(
    StackedHand {
        function_row: [
            ___,
            k(Keycode::F1),
            k(Keycode::F2),
            k(Keycode::F3),
            k(Keycode::F4),
            k(Keycode::F5),
            XXX,
        ],
        top_row: [
            k(Keycode::Tab),
            ___,
            mouse(MouseDirection::Up),
            k(Keycode::PageUp),
            button(MouseButton::Right),
            warp(WarpTarget::End),
            warp(WarpTarget::NorthEast),
        ],
        home_row: [
            k(Keycode::Home),
            mouse(MouseDirection::Left),
            mouse(MouseDirection::Down),
            mouse(MouseDirection::Right),
            button(MouseButton::Left),
            warp(WarpTarget::NorthWest),
        ],
        bottom_row: [
            k(Keycode::End),
            sys(SystemKey::PrintScreen),
            sys(SystemKey::Insert),
            k(Keycode::PageDown),
            button(MouseButton::Middle),
            warp(WarpTarget::SouthWest),
            warp(WarpTarget::SouthEast),
        ],
        thumb: [___, sys(SystemKey::Delete), ___, ___],
        palm: ___,
    },
    StackedHand {
        function_row: [
            cc(ConsumerAction::ScanPreviousTrack),
            k(Keycode::F6),
            k(Keycode::F7),
            k(Keycode::F8),
            k(Keycode::F9),
            k(Keycode::F10),
            k(Keycode::F11),
        ],
        top_row: [
            cc(ConsumerAction::PlayPause),
            cc(ConsumerAction::ScanNextTrack),
            k(Keycode::LeftCurlyBracket),
            k(Keycode::RightCurlyBracket),
            k(Keycode::LeftBracket),
            k(Keycode::RightBracket),
            k(Keycode::F12),
        ],
        home_row: [
            k(Keycode::LeftArrow),
            k(Keycode::DownArrow),
            k(Keycode::UpArrow),
            k(Keycode::RightArrow),
            ___,
            k(Keycode::KeypadNumLock),
        ],
        bottom_row: [
            sys(SystemKey::Application),
            k(Keycode::Mute),
            cc(ConsumerAction::VolumeDecrement),
            cc(ConsumerAction::VolumeIncrement),
            ___,
            k(Keycode::Backslash),
            k(Keycode::Pipe),
        ],
        thumb: [___, ___, k(Keycode::Enter), ___],
        palm: ___,
    },
);
