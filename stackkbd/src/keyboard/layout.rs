use core::hash::Hash;

use crate::keyboard::{KeyAction, Layer};

/// A physical switch, serializable to `SZ` bytes.
pub trait KeySwitchIdentifier<const SZ: usize>:
    Copy + Eq + From<[u8; SZ]> + Into<[u8; SZ]> + Hash
{
}

/// What a keymap hands to the layer-stacking engine.
///
/// `key` answers for one layer only; falling through `Transparent` entries is
/// the engine's job.
pub trait Layout<const SZ: usize> {
    type Identifier: KeySwitchIdentifier<SZ>;
    type Layer: Layer;

    fn key(&self, layer: Self::Layer, switch: &Self::Identifier) -> KeyAction;
}
