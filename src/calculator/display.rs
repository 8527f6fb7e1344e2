//! The core-facing output interface.
//!
//! The calculator core writes two strings and one flag after every mutating
//! operation; whatever surface hosts it (terminal, GUI, tests) implements
//! this trait.

/// Sink for display updates.
pub trait DisplaySink {
    /// The current value line.
    fn set_value(&mut self, text: &str);
    /// The running tape line.
    fn set_tape(&mut self, text: &str);
    /// Whether the memory indicator should be shown.
    fn set_memory_indicator(&mut self, active: bool);
}

/// Sink that records the latest updates, for driving the core from tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub value: String,
    pub tape: String,
    pub memory_active: bool,
}

#[cfg(test)]
impl DisplaySink for RecordingSink {
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
