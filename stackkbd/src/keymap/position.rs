use core::fmt;

use snafu::{ensure, OptionExt};

use super::{COLS, HAND_POSITIONS, POSITIONS, ROWS};
use crate::{
    error::{PositionOutOfRangeSnafu, UnknownPositionSnafu},
    keyboard, Error,
};

/// A switch on the scan matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPosition {
    pub row: u8,
    pub col: u8,
}

impl KeyPosition {
    pub const fn new(row: u8, col: u8) -> Self {
        KeyPosition { row, col }
    }

    /// Where this switch sits in stacked order.
    pub fn index(&self) -> Result<PositionIndex, Error> {
        let (row, col) = (self.row, self.col);
        MATRIX_INDEX
            .get(row as usize)
            .and_then(|cols| cols.get(col as usize))
            .copied()
            .flatten()
            .context(UnknownPositionSnafu { row, col })
    }
}

impl From<[u8; 2]> for KeyPosition {
    fn from(value: [u8; 2]) -> Self {
        KeyPosition {
            row: value[0],
            col: value[1],
        }
    }
}

impl From<KeyPosition> for [u8; 2] {
    fn from(value: KeyPosition) -> Self {
        [value.row, value.col]
    }
}

impl keyboard::KeySwitchIdentifier<2> for KeyPosition {}

const fn rc(row: u8, col: u8) -> KeyPosition {
    KeyPosition::new(row, col)
}

/// Matrix coordinate of each stacked index.
///
/// Column 6 and 9 of row 2 sit at the end (left) or start (right) of the
/// bottom finger row; columns 7 and 8 form the thumb arcs, read outward to
/// inward on the left and inward to outward on the right.
#[rustfmt::skip]
pub const STACKED_POSITIONS: [KeyPosition; POSITIONS] = [
    rc(0, 0), rc(0, 1), rc(0, 2), rc(0, 3), rc(0, 4), rc(0, 5), rc(0, 6),
    rc(1, 0), rc(1, 1), rc(1, 2), rc(1, 3), rc(1, 4), rc(1, 5), rc(1, 6),
    rc(2, 0), rc(2, 1), rc(2, 2), rc(2, 3), rc(2, 4), rc(2, 5),
    rc(3, 0), rc(3, 1), rc(3, 2), rc(3, 3), rc(3, 4), rc(3, 5), rc(2, 6),
    rc(0, 7), rc(1, 7), rc(2, 7), rc(3, 7),
    rc(3, 6),

    rc(0, 9), rc(0, 10), rc(0, 11), rc(0, 12), rc(0, 13), rc(0, 14), rc(0, 15),
    rc(1, 9), rc(1, 10), rc(1, 11), rc(1, 12), rc(1, 13), rc(1, 14), rc(1, 15),
              rc(2, 10), rc(2, 11), rc(2, 12), rc(2, 13), rc(2, 14), rc(2, 15),
    rc(2, 9), rc(3, 10), rc(3, 11), rc(3, 12), rc(3, 13), rc(3, 14), rc(3, 15),
    rc(3, 8), rc(2, 8), rc(1, 8), rc(0, 8),
    rc(3, 9),
];

/// Stacked index of each matrix cell, the inverse of [`STACKED_POSITIONS`].
const MATRIX_INDEX: [[Option<PositionIndex>; COLS]; ROWS] = {
    let mut matrix = [[None; COLS]; ROWS];
    let mut i = 0;
    while i < POSITIONS {
        let position = STACKED_POSITIONS[i];
        matrix[position.row as usize][position.col as usize] = Some(PositionIndex(i as u8));
        i += 1;
    }
    matrix
};

/// An index into a [`LayerTable`](super::LayerTable), always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionIndex(u8);

impl PositionIndex {
    pub fn new(index: usize) -> Result<Self, Error> {
        ensure!(index < POSITIONS, PositionOutOfRangeSnafu { index });
        Ok(PositionIndex(index as u8))
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    pub const fn position(self) -> KeyPosition {
        STACKED_POSITIONS[self.0 as usize]
    }

    pub const fn is_left(self) -> bool {
        (self.0 as usize) < HAND_POSITIONS
    }

    /// Every index, in stacked order.
    pub fn all() -> impl Iterator<Item = PositionIndex> + Clone {
        (0..POSITIONS as u8).map(PositionIndex)
    }
}

impl TryFrom<usize> for PositionIndex {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Error> {
        PositionIndex::new(index)
    }
}

impl From<PositionIndex> for usize {
    fn from(index: PositionIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for PositionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
