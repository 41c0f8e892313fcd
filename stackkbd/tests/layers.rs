use stackkbd::{
    keyboard::{self, KeyAction, Keycode, Layer as _, Layout},
    keymap::{KeyPosition, LayerTable, PositionIndex, StackedHand},
    stacked_layer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, keyboard::Layer)]
enum Layer {
    Base,
    Function,
    Numpad,
}

impl Default for Layer {
    fn default() -> Self {
        Self::Base
    }
}

const BASE: LayerTable = stacked_layer!(
    "
    | Esc  | 1    | 2    | 3    | 4    | 5    | XXX   |
    | `    | Q    | W    | E    | R    | T    | Tab   |
    | PgUp | A    | S    | D    | F    | G    |
    | PgDn | Z    | X    | C    | V    | B    | Esc   |
    | LCtl | Bspc | LGui | LSft |
    | MO(1) |
    // right hand
    | XXX  | 6    | 7    | 8    | 9    | 0    | NumLk |
    | Enter | Y   | U    | I    | O    | P    | =     |
           | H    | J    | K    | L    | ;    | '     |
    | RAlt | N    | M    | ,    | .    | /    | -     |
    | RSft | LAlt | Space | RCtl |
    | MO(1) |
    "
);

const FUNCTION: LayerTable = stacked_layer!(
    "
    | ___ | F1 | F2 | F3 | F4 | F5 | ___ |
    | ___ | ___ | ___ | ___ | ___ | ___ | ___ |
    | ___ | ___ | ___ | ___ | ___ | ___ |
    | ___ | ___ | ___ | ___ | ___ | ___ | ___ |
    | ___ | ___ | ___ | ___ |
    | ___ |
    | ___ | F6 | F7 | F8 | F9 | F10 | F11 |
    | ___ | ___ | ___ | ___ | ___ | ___ | F12 |
    | ___ | ___ | ___ | ___ | ___ | ___ |
    | ___ | ___ | ___ | ___ | ___ | ___ | ___ |
    | ___ | ___ | ___ | ___ |
    | ___ |
    "
);

struct Keymap;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

impl Layout<2> for Keymap {
    type Identifier = KeyPosition;
    type Layer = Layer;

    fn key(&self, layer: Layer, switch: &KeyPosition) -> KeyAction {
        let table = match layer {
            Layer::Base => &BASE,
            Layer::Function => &FUNCTION,
            Layer::Numpad => return KeyAction::NoOp,
        };
        table.key_at(*switch).unwrap_or(KeyAction::NoOp)
    }
}

#[test]
fn derived_layers_fall_back_in_declaration_order() {
    assert_eq!(Layer::Numpad.below(), Some(Layer::Function));
    assert_eq!(Layer::Function.below(), Some(Layer::Base));
    assert_eq!(Layer::Base.below(), None);
}

#[test]
fn rows_with_leading_whitespace_and_comments() {
    // The right home row above is indented past the `|`; trimming keeps it a row.
    let right = BASE.right();
    assert_eq!(right.home_row[0], KeyAction::Primary(Keycode::H));
    assert_eq!(right.bottom_row[0], KeyAction::Primary(Keycode::RightAlt));
    assert_eq!(right.palm, KeyAction::LayerShift(1));
    assert_eq!(BASE.left().palm, KeyAction::LayerShift(1));
}

#[test]
fn layers_share_positions() {
    let keymap = Keymap;
    let f1 = KeyPosition::new(0, 1);
    assert_eq!(
        keymap.key(Layer::Base, &f1),
        KeyAction::Primary(Keycode::Digit1)
    );
    assert_eq!(
        keymap.key(Layer::Function, &f1),
        KeyAction::Primary(Keycode::F1)
    );

    // Everything the function layer leaves transparent comes from the base.
    let changed = FUNCTION.differences(&LayerTable::transparent());
    assert_eq!(changed.len(), 12);
    for index in changed {
        assert!(BASE.lookup(index).is_binding());
    }
}

#[test]
fn hand_built_table_matches_macro() {
    let mut left = StackedHand::transparent();
    left.function_row[1] = KeyAction::Primary(Keycode::F1);
    left.function_row[2] = KeyAction::Primary(Keycode::F2);
    left.function_row[3] = KeyAction::Primary(Keycode::F3);
    left.function_row[4] = KeyAction::Primary(Keycode::F4);
    left.function_row[5] = KeyAction::Primary(Keycode::F5);
    let mut right = StackedHand::transparent();
    right.function_row[1..].copy_from_slice(
        &[Keycode::F6, Keycode::F7, Keycode::F8, Keycode::F9, Keycode::F10, Keycode::F11]
            .map(KeyAction::Primary),
    );
    right.top_row[6] = KeyAction::Primary(Keycode::F12);

    assert_eq!(LayerTable::stacked(left, right), FUNCTION);
}

#[test]
fn base_layer_bindings() {
    init_logger();
    // Both palm keys shift to the function layer; that is the only repeat
    // besides Escape.
    let conflicts = BASE.conflicting_bindings();
    let pairs: Vec<(usize, usize)> = conflicts
        .iter()
        .map(|(first, second)| (first.get(), second.get()))
        .collect();
    assert_eq!(pairs, vec![(0, 26), (31, 63)]);
    assert!(BASE.validate().is_err());
    assert_eq!(
        BASE.lookup(PositionIndex::new(51).unwrap()),
        KeyAction::Primary(Keycode::Quote)
    );
}
