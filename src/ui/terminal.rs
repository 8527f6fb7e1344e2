//! Line-oriented terminal surface.
//!
//! Stands in for the keypad: each input line is either a whole-line command
//! (memory and utility keys) or a stream of expression characters fed through
//! the same key mapping the keypad would use. After every line the tape and
//! value lines are reprinted.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::trace;

use crate::calculator::{DisplaySink, MemoryAction, Router};
use crate::config::Theme;

use super::keymap::{InputEvent, map_key};

/// Display sink backing the terminal: keeps the latest lines so they can be
/// reprinted together after each input line.
#[derive(Debug, Default)]
pub struct Screen {
    value: String,
    tape: String,
    memory_active: bool,
}

impl Screen {
    fn show(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "  {}", self.tape)?;
        let indicator = if self.memory_active { " [M]" } else { "" };
        writeln!(out, "> {}{}", self.value, indicator)
    }
}

impl DisplaySink for Screen {
    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
    }

    fn set_tape(&mut self, text: &str) {
        self.tape = text.to_string();
    }

    fn set_memory_indicator(&mut self, active: bool) {
        self.memory_active = active;
    }
}

fn dispatch(router: &mut Router<Screen>, event: InputEvent) {
    match event {
        InputEvent::Digit(d) => router.digit(d),
        InputEvent::Operator(op) => router.operator(&op.to_string()),
        InputEvent::Equals => router.equals(),
        InputEvent::Clear => router.clear(),
        InputEvent::SignToggle => router.toggle_sign(),
        InputEvent::Percent => router.percent(),
        InputEvent::Memory(action) => router.memory(action),
        InputEvent::Backspace => router.backspace(),
    }
}

/// Interpret one input line against the router. Returns `false` when the
/// user asked to quit.
fn handle_line(router: &mut Router<Screen>, line: &str) -> bool {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" | "exit" => return false,
        "ac" | "AC" => router.clear(),
        "mr" => router.memory(MemoryAction::Recall),
        "mc" => router.memory(MemoryAction::Clear),
        "m+" => router.memory(MemoryAction::Add),
        "m-" => router.memory(MemoryAction::Subtract),
        "+/-" => router.toggle_sign(),
        "<" => router.backspace(),
        _ => {
            for ch in trimmed.chars() {
                if ch.is_whitespace() {
                    continue;
                }
                match map_key(&ch.to_string(), false, false) {
                    Some(event) => dispatch(router, event),
                    None => trace!(key = %ch, "ignored"),
                }
            }
        }
    }
    true
}

/// Run the read-dispatch-render loop until EOF or quit.
pub fn run(theme: Theme) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "tapecalc ({theme:?} theme) — digits/operators inline, `=` evaluates,\n\
         commands: ac, mr, mc, m+, m-, +/-, <, q"
    )?;

    let mut router = Router::new(Screen::default());
    router.sink().show(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        if !handle_line(&mut router, &line) {
            break;
        }
        router.sink().show(&mut stdout)?;
    }
    Ok(())
}
