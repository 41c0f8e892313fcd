pub use stackkbd_macros::Layer;

/// The layers of a keymap, in priority order.
///
/// `below` names the layer a [`KeyAction::Transparent`](super::KeyAction::Transparent)
/// entry falls through to; the lowest layer returns `None`. Deriving `Layer`
/// on a fieldless enum takes the order from the declaration, first variant
/// lowest.
pub trait Layer: Copy + Eq + Default {
    fn below(&self) -> Option<Self>;
}
