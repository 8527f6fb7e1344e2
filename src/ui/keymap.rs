//! Keyboard mapping.
//!
//! Translates raw key presses (browser-style key names plus modifiers) into
//! calculator input events, including the memory shortcut table:
//! `m` recalls, `Shift+m` clears, `Alt+m` adds, `Alt+Shift+m` subtracts.

use crate::calculator::MemoryAction;

/// A discrete input event for the calculator core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// A raw operator symbol (`+ - * / x X` or a canonical glyph).
    Operator(char),
    Equals,
    Clear,
    SignToggle,
    Percent,
    Memory(MemoryAction),
    Backspace,
}

const OPERATOR_KEYS: &str = "+-*/xX×÷−";

/// Map a key press to an input event, or `None` for keys the calculator
/// ignores.
pub fn map_key(key: &str, shift: bool, alt: bool) -> Option<InputEvent> {
    if key.eq_ignore_ascii_case("m") {
        let action = match (shift, alt) {
            (true, true) => MemoryAction::Subtract,
            (true, false) => MemoryAction::Clear,
            (false, true) => MemoryAction::Add,
            (false, false) => MemoryAction::Recall,
        };
        return Some(InputEvent::Memory(action));
    }

    match key {
        "Enter" | "=" => return Some(InputEvent::Equals),
        "Escape" => return Some(InputEvent::Clear),
        "Backspace" => return Some(InputEvent::Backspace),
        "%" => return Some(InputEvent::Percent),
        "_" => return Some(InputEvent::SignToggle),
        _ => {}
    }

    let mut chars = key.chars();
    let (ch, rest) = (chars.next()?, chars.next());
    if rest.is_some() {
        return None;
    }
    if ch.is_ascii_digit() || ch == '.' {
        Some(InputEvent::Digit(ch))
    } else if OPERATOR_KEYS.contains(ch) {
        Some(InputEvent::Operator(ch))
    } else {
        None
    }
}
