use snafu::Snafu;

use crate::keymap::PositionIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Position index {index} is outside the stacked layout"))]
    PositionOutOfRange { index: usize },
    #[snafu(display("No key at row {row}, column {col}"))]
    UnknownPosition { row: u8, col: u8 },
    #[snafu(display("Positions {first} and {second} are bound to the same action"))]
    ConflictingBinding {
        first: PositionIndex,
        second: PositionIndex,
    },
}
