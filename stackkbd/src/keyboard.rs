mod action;
mod keycode;
mod layer;
mod layout;

pub use action::{
    ConsumerAction, KeyAction, MouseAction, MouseButton, MouseDirection, SystemKey, WarpTarget,
};
pub use keycode::Keycode;
pub use layer::Layer;
pub use layout::{KeySwitchIdentifier, Layout};
