use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, TokenStreamExt};
use syn::{parse_macro_input, Data, DeriveInput, LitStr};

#[proc_macro_derive(Layer)]
pub fn derive_layer(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = ast.ident;
    let variants = match ast.data {
        Data::Enum(ref data) => data.variants.iter().map(|v| &v.ident),
        _ => {
            return syn::Error::new(name.span(), "Layer can only be derived for enums")
                .to_compile_error()
                .into()
        }
    }
    .map(|v| {
        quote! {
            #name::#v,
        }
    })
    .reduce(|mut acc, v| {
        acc.append_all(v);
        acc
    });

    let expanded = quote! {
        impl stackkbd::keyboard::Layer for #name {
            fn below(&self) -> Option<Self> {
                let layers = [#variants];
                layers
                    .iter()
                    .position(|l| l == self)
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| layers.get(i))
                    .copied()
            }
        }
    };

    proc_macro::TokenStream::from(expanded)
}

macro_rules! key {
    ($n:tt, $i:ident) => {
        ($n, quote!(stackkbd::keyboard::KeyAction::Primary(stackkbd::keyboard::Keycode::$i)))
    };
    ($i:ident) => {
        (stringify!($i), quote!(stackkbd::keyboard::KeyAction::Primary(stackkbd::keyboard::Keycode::$i)))
    };
}

macro_rules! system {
    ($n:tt, $i:ident) => {
        ($n, quote!(stackkbd::keyboard::KeyAction::System(stackkbd::keyboard::SystemKey::$i)))
    };
}

macro_rules! consumer {
    ($n:tt, $i:ident) => {
        ($n, quote!(stackkbd::keyboard::KeyAction::Consumer(stackkbd::keyboard::ConsumerAction::$i)))
    };
}

macro_rules! mouse {
    ($n:tt, $kind:ident, $arg:ident, $i:ident) => {
        (
            $n,
            quote!(stackkbd::keyboard::KeyAction::Mouse(
                stackkbd::keyboard::MouseAction::$kind(stackkbd::keyboard::$arg::$i)
            )),
        )
    };
}

fn symbols() -> HashMap<&'static str, TokenStream> {
    [
        ("___", quote!(stackkbd::keyboard::KeyAction::Transparent)),
        ("XXX", quote!(stackkbd::keyboard::KeyAction::NoOp)),
        key!(A),
        key!(B),
        key!(C),
        key!(D),
        key!(E),
        key!(F),
        key!(G),
        key!(H),
        key!(I),
        key!(J),
        key!(K),
        key!(L),
        key!(M),
        key!(N),
        key!(O),
        key!(P),
        key!(Q),
        key!(R),
        key!(S),
        key!(T),
        key!(U),
        key!(V),
        key!(W),
        key!(X),
        key!(Y),
        key!(Z),
        key!("1", Digit1),
        key!("2", Digit2),
        key!("3", Digit3),
        key!("4", Digit4),
        key!("5", Digit5),
        key!("6", Digit6),
        key!("7", Digit7),
        key!("8", Digit8),
        key!("9", Digit9),
        key!("0", Digit0),
        key!(Enter),
        key!("Esc", Escape),
        key!("Bspc", Backspace),
        key!(Tab),
        key!(Space),
        key!("-", Minus),
        key!("=", Equal),
        key!("[", LeftBracket),
        key!("]", RightBracket),
        key!("\\", Backslash),
        key!(";", Semicolon),
        key!("'", Quote),
        key!("`", Grave),
        key!(",", Comma),
        key!(".", Period),
        key!("/", Slash),
        key!("Caps", CapsLock),
        key!(F1),
        key!(F2),
        key!(F3),
        key!(F4),
        key!(F5),
        key!(F6),
        key!(F7),
        key!(F8),
        key!(F9),
        key!(F10),
        key!(F11),
        key!(F12),
        key!(Home),
        key!(End),
        key!("PgUp", PageUp),
        key!("PgDn", PageDown),
        key!("Left", LeftArrow),
        key!("Down", DownArrow),
        key!("Up", UpArrow),
        key!("Right", RightArrow),
        key!("NumLk", KeypadNumLock),
        key!(Mute),
        key!("LCtl", LeftControl),
        key!("LSft", LeftShift),
        key!("LAlt", LeftAlt),
        key!("LGui", LeftGui),
        key!("RCtl", RightControl),
        key!("RSft", RightShift),
        key!("RAlt", RightAlt),
        key!("RGui", RightGui),
        key!("!", Exclamation),
        key!("@", At),
        key!("#", Hash),
        key!("$", Dollar),
        key!("%", Percent),
        key!("^", Caret),
        key!("&", Ampersand),
        key!("*", Asterisk),
        key!("(", LeftParenthesis),
        key!(")", RightParenthesis),
        key!("_", Underscore),
        key!("+", Plus),
        key!("{", LeftCurlyBracket),
        key!("}", RightCurlyBracket),
        key!("Pipe", Pipe),
        key!(":", Colon),
        key!("\"", DoubleQuote),
        key!("~", Tilde),
        key!("<", LessThan),
        key!(">", GreaterThan),
        key!("?", Question),
        system!("PrScr", PrintScreen),
        system!("ScLck", ScrollLock),
        system!("Pause", Pause),
        system!("Ins", Insert),
        system!("Del", Delete),
        system!("App", Application),
        system!("Power", Power),
        consumer!("Prev", ScanPreviousTrack),
        consumer!("Next", ScanNextTrack),
        consumer!("PlPs", PlayPause),
        consumer!("Stop", Stop),
        consumer!("VolUp", VolumeIncrement),
        consumer!("VolDn", VolumeDecrement),
        consumer!("CMute", Mute),
        mouse!("MsUp", Move, MouseDirection, Up),
        mouse!("MsDn", Move, MouseDirection, Down),
        mouse!("MsL", Move, MouseDirection, Left),
        mouse!("MsR", Move, MouseDirection, Right),
        mouse!("BtnL", Button, MouseButton, Left),
        mouse!("BtnR", Button, MouseButton, Right),
        mouse!("BtnM", Button, MouseButton, Middle),
        mouse!("WarpNW", Warp, WarpTarget, NorthWest),
        mouse!("WarpN", Warp, WarpTarget, North),
        mouse!("WarpNE", Warp, WarpTarget, NorthEast),
        mouse!("WarpW", Warp, WarpTarget, West),
        mouse!("WarpE", Warp, WarpTarget, East),
        mouse!("WarpSW", Warp, WarpTarget, SouthWest),
        mouse!("WarpS", Warp, WarpTarget, South),
        mouse!("WarpSE", Warp, WarpTarget, SouthEast),
        mouse!("WarpEnd", Warp, WarpTarget, End),
    ]
    .into_iter()
    .collect()
}

/// Rows per hand in stacked order, with their widths.
const ROWS: [(&str, usize); 6] = [
    ("function_row", 7),
    ("top_row", 7),
    ("home_row", 6),
    ("bottom_row", 7),
    ("thumb", 4),
    ("palm", 1),
];

/// Builds a `LayerTable` from a grid of key symbols.
///
/// Twelve rows, six per hand, each written as `| sym | sym | ... |`. `___` is
/// transparent, `XXX` is no-op and `MO(n)` shifts to layer `n`. Blank lines
/// and lines starting with `//` are skipped.
#[proc_macro]
pub fn stacked_layer(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LitStr);
    match expand_stacked_layer(&input.value(), input.span()) {
        Ok(expanded) => proc_macro::TokenStream::from(expanded),
        Err(error) => proc_macro::TokenStream::from(error.to_compile_error()),
    }
}

fn expand_stacked_layer(input: &str, span: Span) -> syn::Result<TokenStream> {
    let table = symbols();
    let rows = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .collect::<Vec<_>>();
    if rows.len() != ROWS.len() * 2 {
        let message = format!(
            "stacked_layer: expected {} rows, found {}",
            ROWS.len() * 2,
            rows.len()
        );
        return Err(syn::Error::new(span, message));
    }

    let left = expand_hand(&rows[..ROWS.len()], &table, span)?;
    let right = expand_hand(&rows[ROWS.len()..], &table, span)?;
    Ok(quote! {
        stackkbd::keymap::LayerTable::stacked(#left, #right)
    })
}

fn expand_hand(
    rows: &[&str],
    table: &HashMap<&'static str, TokenStream>,
    span: Span,
) -> syn::Result<TokenStream> {
    let fields = rows
        .iter()
        .zip(ROWS)
        .map(|(row, (field, width))| {
            let actions = row
                .strip_prefix('|')
                .and_then(|row| row.strip_suffix('|'))
                .ok_or_else(|| {
                    let message = format!("stacked_layer: row must be enclosed in `|`: {}", row);
                    syn::Error::new(span, message)
                })?
                .split('|')
                .map(str::trim)
                .map(|symbol| action(symbol, table, span))
                .collect::<syn::Result<Vec<_>>>()?;
            if actions.len() != width {
                let message = format!(
                    "stacked_layer: {} needs {} keys, found {}",
                    field,
                    width,
                    actions.len()
                );
                return Err(syn::Error::new(span, message));
            }

            let ident = format_ident!("{}", field);
            Ok(if width == 1 {
                let action = &actions[0];
                quote!(#ident: #action)
            } else {
                quote!(#ident: [#(#actions),*])
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        stackkbd::keymap::StackedHand { #(#fields),* }
    })
}

fn action(
    symbol: &str,
    table: &HashMap<&'static str, TokenStream>,
    span: Span,
) -> syn::Result<TokenStream> {
    if let Some(layer) = symbol
        .strip_prefix("MO(")
        .and_then(|s| s.strip_suffix(')'))
    {
        let layer = layer.trim().parse::<u8>().map_err(|_| {
            let message = format!(
                "stacked_layer: layer in {} must be a number from 0 to 255",
                symbol
            );
            syn::Error::new(span, message)
        })?;
        return Ok(quote!(stackkbd::keyboard::KeyAction::LayerShift(#layer)));
    }
    table.get(symbol).cloned().ok_or_else(|| {
        let message = "stacked_layer: Unknown symbol: ".to_string() + symbol;
        syn::Error::new(span, message)
    })
}
