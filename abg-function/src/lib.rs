//! Function layer for keymaps that enable the ABG multilingual layer.
//!
//! The ABG layer has no Page Up, Page Down or Num Lock keys, so this layer
//! carries them on positions the standard function layer leaves free. Every
//! other position matches the standard function layer.

#![no_std]

mod function_abg;
mod layout;

pub use function_abg::FUNCTION_ABG;
pub use layout::{Keymap, Layer};
