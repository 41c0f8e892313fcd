use stackkbd::{
    keyboard::{self, KeyAction},
    keymap::KeyPosition,
};

use crate::FUNCTION_ABG;

#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Keymap {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, keyboard::Layer)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    FunctionAbg,
}

impl Default for Layer {
    fn default() -> Self {
        Self::FunctionAbg
    }
}

impl keyboard::Layout<2> for Keymap {
    type Identifier = KeyPosition;
    type Layer = Layer;

    /// Switches outside the matrix have no action.
    fn key(&self, layer: Layer, switch: &KeyPosition) -> KeyAction {
        match layer {
            Layer::FunctionAbg => FUNCTION_ABG.key_at(*switch).unwrap_or(KeyAction::NoOp),
        }
    }
}
