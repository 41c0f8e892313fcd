//! Layer tables in stacked order and their place on the scan matrix.
//!
//! Layers are written hand by hand: function row, top row, home row, bottom
//! row, thumb arc and palm key of the left hand, then the same for the right
//! hand. [`STACKED_POSITIONS`] maps each stacked index to the switch it
//! denotes on the 4 x 16 matrix. Every layer shares that map, which is what
//! lets the firmware overlay layers index by index.

mod position;
mod table;

pub use position::{KeyPosition, PositionIndex, STACKED_POSITIONS};
pub use table::{LayerTable, StackedHand};

pub const ROWS: usize = 4;
pub const COLS: usize = 16;
/// Keys per hand: 7 + 7 + 6 + 7 finger keys, 4 thumb keys and the palm key.
pub const HAND_POSITIONS: usize = 32;
pub const POSITIONS: usize = HAND_POSITIONS * 2;

/// Capacity of the vectors returned by the binding audit.
pub const MAX_REPORTED: usize = POSITIONS;
