//! Input routing.
//!
//! `Router` is the single entry point for input events: one method per event
//! kind, dispatching into the expression state machine and the memory
//! register and pushing every resulting render into the display sink. It also
//! keeps a shadow copy of the displayed value text, because operator presses
//! after an evaluation reseed the expression from it and memory add/subtract
//! read it.

use tracing::{debug, trace};

use super::display::DisplaySink;
use super::format::format_value;
use super::memory::MemoryRegister;
use super::state::{Expression, Render};

/// Payload of a memory event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryAction {
    Recall,
    Clear,
    Add,
    Subtract,
}

/// Dispatches input events to the calculator core.
pub struct Router<S: DisplaySink> {
    expr: Expression,
    memory: MemoryRegister,
    value: String,
    sink: S,
}

impl<S: DisplaySink> Router<S> {
    /// Create a router in the cleared state and render it once.
    pub fn new(sink: S) -> Self {
        let mut router = Self {
            expr: Expression::new(),
            memory: MemoryRegister::new(),
            value: String::new(),
            sink,
        };
        router.clear();
        router
    }

    fn apply(&mut self, render: Render) {
        self.value = render.value;
        self.sink.set_value(&self.value);
        self.sink.set_tape(&render.tape);
    }

    /// The currently displayed value, parsed; unparsable or non-finite text
    /// (like "Error") counts as 0.
    fn display_number(&self) -> f64 {
        self.value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn digit(&mut self, d: char) {
        trace!(digit = %d, "digit");
        let render = self.expr.push_digit(d);
        self.apply(render);
    }

    pub fn operator(&mut self, raw: &str) {
        trace!(operator = raw, "operator");
        let displayed = self.value.clone();
        if let Some(render) = self.expr.push_operator(raw, &displayed) {
            self.apply(render);
        }
    }

    pub fn equals(&mut self) {
        if let Some(render) = self.expr.equals() {
            debug!(value = %render.value, tape = %render.tape, "evaluated");
            self.apply(render);
        }
    }

    /// Clear the expression (AC). Leaves the memory cell alone, but
    /// refreshes the indicator.
    pub fn clear(&mut self) {
        let render = self.expr.reset();
        self.apply(render);
        self.sink.set_memory_indicator(self.memory.is_active());
    }

    pub fn toggle_sign(&mut self) {
        if let Some(render) = self.expr.toggle_sign() {
            self.apply(render);
        }
    }

    pub fn percent(&mut self) {
        if let Some(render) = self.expr.apply_percent() {
            self.apply(render);
        }
    }

    pub fn backspace(&mut self) {
        let render = self.expr.backspace();
        self.apply(render);
    }

    pub fn memory(&mut self, action: MemoryAction) {
        debug!(?action, "memory");
        match action {
            MemoryAction::Recall => {
                let text = format_value(self.memory.recall());
                let render = self.expr.set_buffer(&text);
                self.apply(render);
            }
            MemoryAction::Clear => {
                self.memory.clear();
                self.sink.set_memory_indicator(self.memory.is_active());
            }
            MemoryAction::Add => {
                let value = self.display_number();
                self.memory.add(value);
                self.sink.set_memory_indicator(self.memory.is_active());
            }
            MemoryAction::Subtract => {
                let value = self.display_number();
                self.memory.subtract(value);
                self.sink.set_memory_indicator(self.memory.is_active());
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
