//! Stacked keymap layers for split keyboards.
//!
//! A layer is a [`LayerTable`](keymap::LayerTable): one [`KeyAction`](keyboard::KeyAction)
//! per physical key, authored in stacked order (left hand, then right hand) and
//! addressed by [`PositionIndex`](keymap::PositionIndex). The firmware runtime
//! that stacks layers and talks HID lives elsewhere and reads tables through
//! [`Layout`](keyboard::Layout).

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod error;
pub mod keyboard;
pub mod keymap;
mod log;

pub use error::Error;
pub use heapless::Vec;
pub use stackkbd_macros::stacked_layer;
