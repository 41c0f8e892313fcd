use heapless::Vec;

use super::{
    KeyPosition, PositionIndex, COLS, HAND_POSITIONS, MAX_REPORTED, POSITIONS, ROWS,
    STACKED_POSITIONS,
};
use crate::{
    keyboard::KeyAction,
    log::{debug, warn},
    Error,
};

/// One hand of a stacked layer, row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackedHand {
    pub function_row: [KeyAction; 7],
    pub top_row: [KeyAction; 7],
    pub home_row: [KeyAction; 6],
    pub bottom_row: [KeyAction; 7],
    /// Outermost key first on the left hand, innermost first on the right.
    pub thumb: [KeyAction; 4],
    pub palm: KeyAction,
}

impl StackedHand {
    pub const fn transparent() -> Self {
        StackedHand {
            function_row: [KeyAction::Transparent; 7],
            top_row: [KeyAction::Transparent; 7],
            home_row: [KeyAction::Transparent; 6],
            bottom_row: [KeyAction::Transparent; 7],
            thumb: [KeyAction::Transparent; 4],
            palm: KeyAction::Transparent,
        }
    }

    const fn to_stacked(&self) -> [KeyAction; HAND_POSITIONS] {
        let mut keys = [KeyAction::Transparent; HAND_POSITIONS];
        let mut i = 0;
        while i < 7 {
            keys[i] = self.function_row[i];
            keys[7 + i] = self.top_row[i];
            keys[20 + i] = self.bottom_row[i];
            i += 1;
        }
        let mut i = 0;
        while i < 6 {
            keys[14 + i] = self.home_row[i];
            i += 1;
        }
        let mut i = 0;
        while i < 4 {
            keys[27 + i] = self.thumb[i];
            i += 1;
        }
        keys[31] = self.palm;
        keys
    }

    fn from_stacked(keys: &[KeyAction]) -> Self {
        let mut hand = StackedHand::transparent();
        hand.function_row.copy_from_slice(&keys[0..7]);
        hand.top_row.copy_from_slice(&keys[7..14]);
        hand.home_row.copy_from_slice(&keys[14..20]);
        hand.bottom_row.copy_from_slice(&keys[20..27]);
        hand.thumb.copy_from_slice(&keys[27..31]);
        hand.palm = keys[31];
        hand
    }
}

/// A complete layer: one action per position, in stacked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerTable {
    keys: [KeyAction; POSITIONS],
}

impl LayerTable {
    pub const fn stacked(left: StackedHand, right: StackedHand) -> Self {
        let left = left.to_stacked();
        let right = right.to_stacked();
        let mut keys = [KeyAction::Transparent; POSITIONS];
        let mut i = 0;
        while i < HAND_POSITIONS {
            keys[i] = left[i];
            keys[HAND_POSITIONS + i] = right[i];
            i += 1;
        }
        LayerTable { keys }
    }

    pub const fn from_keys(keys: [KeyAction; POSITIONS]) -> Self {
        LayerTable { keys }
    }

    /// A layer that defers every position to the layer below.
    pub const fn transparent() -> Self {
        LayerTable {
            keys: [KeyAction::Transparent; POSITIONS],
        }
    }

    pub const fn keys(&self) -> &[KeyAction; POSITIONS] {
        &self.keys
    }

    pub const fn lookup(&self, position: PositionIndex) -> KeyAction {
        self.keys[position.get()]
    }

    pub fn get(&self, index: usize) -> Option<KeyAction> {
        self.keys.get(index).copied()
    }

    pub fn key_at(&self, position: KeyPosition) -> Option<KeyAction> {
        position.index().ok().map(|index| self.lookup(index))
    }

    /// The layer as the scan matrix sees it, `[row][col]`.
    pub fn to_matrix(&self) -> [[KeyAction; COLS]; ROWS] {
        let mut matrix = [[KeyAction::NoOp; COLS]; ROWS];
        for (key, position) in self.keys.iter().zip(STACKED_POSITIONS.iter()) {
            matrix[position.row as usize][position.col as usize] = *key;
        }
        matrix
    }

    pub fn left(&self) -> StackedHand {
        StackedHand::from_stacked(&self.keys[..HAND_POSITIONS])
    }

    pub fn right(&self) -> StackedHand {
        StackedHand::from_stacked(&self.keys[HAND_POSITIONS..])
    }

    pub fn iter(&self) -> impl Iterator<Item = (PositionIndex, KeyAction)> + '_ {
        PositionIndex::all().zip(self.keys.iter().copied())
    }

    /// Positions where this layer and `other` assign different actions.
    pub fn differences(&self, other: &LayerTable) -> Vec<PositionIndex, MAX_REPORTED> {
        self.iter()
            .zip(other.keys.iter())
            .filter(|((_, ours), theirs)| ours != *theirs)
            .map(|((index, _), _)| index)
            .collect()
    }

    /// Pairs of positions bound to the same action.
    ///
    /// Each later position is paired with the first position carrying its
    /// action, so a position appears at most once as the second element.
    /// `Transparent` and `NoOp` are never reported.
    pub fn conflicting_bindings(&self) -> Vec<(PositionIndex, PositionIndex), MAX_REPORTED> {
        self.iter()
            .filter(|(_, key)| key.is_binding())
            .filter_map(|(index, key)| {
                self.iter()
                    .take(index.get())
                    .find(|(_, earlier)| *earlier == key)
                    .map(|(first, _)| (first, index))
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), Error> {
        let conflicts = self.conflicting_bindings();
        for (first, second) in &conflicts {
            warn!(
                "positions {:?} and {:?} are both bound to {:?}",
                first,
                second,
                self.lookup(*first)
            );
        }
        match conflicts.first() {
            Some(&(first, second)) => Err(Error::ConflictingBinding { first, second }),
            None => {
                debug!(
                    "layer has {:?} bindings, no conflicts",
                    self.keys.iter().filter(|key| key.is_binding()).count()
                );
                Ok(())
            }
        }
    }
}

impl Default for LayerTable {
    fn default() -> Self {
        LayerTable::transparent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::{ConsumerAction, Keycode, MouseAction, MouseDirection};

    fn numbered() -> LayerTable {
        let mut keys = [KeyAction::NoOp; POSITIONS];
        for (i, key) in keys.iter_mut().enumerate() {
            *key = KeyAction::LayerShift(i as u8);
        }
        LayerTable::from_keys(keys)
    }

    fn index(i: usize) -> PositionIndex {
        PositionIndex::new(i).unwrap()
    }

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn stacked_order_round_trips_through_hands() {
        let table = numbered();
        let rebuilt = LayerTable::stacked(table.left(), table.right());
        assert_eq!(rebuilt, table);

        let left = table.left();
        assert_eq!(left.function_row[0], KeyAction::LayerShift(0));
        assert_eq!(left.home_row[5], KeyAction::LayerShift(19));
        assert_eq!(left.bottom_row[6], KeyAction::LayerShift(26));
        assert_eq!(left.thumb, [27, 28, 29, 30].map(KeyAction::LayerShift));
        assert_eq!(left.palm, KeyAction::LayerShift(31));
        assert_eq!(table.right().function_row[0], KeyAction::LayerShift(32));
        assert_eq!(table.right().palm, KeyAction::LayerShift(63));
    }

    #[test]
    fn matrix_view_agrees_with_lookup() {
        let table = numbered();
        let matrix = table.to_matrix();
        for (index, key) in table.iter() {
            let position = index.position();
            assert_eq!(matrix[position.row as usize][position.col as usize], key);
            assert_eq!(table.key_at(position), Some(key));
        }
        // Butterfly keys and palm keys.
        assert_eq!(matrix[2][6], KeyAction::LayerShift(26));
        assert_eq!(matrix[2][9], KeyAction::LayerShift(52));
        assert_eq!(matrix[3][6], KeyAction::LayerShift(31));
        assert_eq!(matrix[3][9], KeyAction::LayerShift(63));
        assert_eq!(table.key_at(KeyPosition::new(4, 0)), None);
    }

    #[test]
    fn get_is_bounded() {
        let table = numbered();
        assert_eq!(table.get(0), Some(KeyAction::LayerShift(0)));
        assert_eq!(table.get(63), Some(KeyAction::LayerShift(63)));
        assert_eq!(table.get(64), None);
    }

    #[test]
    fn differences_list_changed_positions() {
        let base = LayerTable::transparent();
        let mut keys = *base.keys();
        keys[3] = KeyAction::Primary(Keycode::PageUp);
        keys[40] = KeyAction::NoOp;
        let changed = LayerTable::from_keys(keys);

        assert_eq!(changed.differences(&base).as_slice(), &[index(3), index(40)]);
        assert!(base.differences(&base).is_empty());
    }

    #[test]
    fn duplicate_bindings_are_reported() {
        init_logger();
        let mut keys = [KeyAction::Transparent; POSITIONS];
        keys[2] = KeyAction::Primary(Keycode::Enter);
        keys[5] = KeyAction::NoOp;
        keys[6] = KeyAction::NoOp;
        keys[10] = KeyAction::Mouse(MouseAction::Move(MouseDirection::Up));
        keys[33] = KeyAction::Primary(Keycode::Enter);
        keys[50] = KeyAction::Primary(Keycode::Enter);
        keys[51] = KeyAction::Consumer(ConsumerAction::Mute);
        keys[52] = KeyAction::Primary(Keycode::Mute);
        let table = LayerTable::from_keys(keys);

        assert_eq!(
            table.conflicting_bindings().as_slice(),
            &[(index(2), index(33)), (index(2), index(50))]
        );
        assert_eq!(
            table.validate(),
            Err(Error::ConflictingBinding {
                first: index(2),
                second: index(33),
            })
        );
    }

    #[test]
    fn markers_never_conflict() {
        init_logger();
        assert!(LayerTable::transparent().validate().is_ok());
        let table = LayerTable::from_keys([KeyAction::NoOp; POSITIONS]);
        assert!(table.conflicting_bindings().is_empty());
    }
}
