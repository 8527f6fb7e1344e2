//! The single-cell memory register.

use super::format::clamp;

/// One numeric memory cell. Cleared only by an explicit memory-clear, never
/// by expression resets.
#[derive(Debug, Default)]
pub struct MemoryRegister {
    cell: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the given value (the currently displayed number) into the cell.
    pub fn add(&mut self, value: f64) {
        self.cell = clamp(self.cell + value);
    }

    /// Subtract the given value from the cell.
    pub fn subtract(&mut self, value: f64) {
        self.cell = clamp(self.cell - value);
    }

    /// The rounded cell value, for recall into the pending buffer.
    pub fn recall(&self) -> f64 {
        clamp(self.cell)
    }

    pub fn clear(&mut self) {
        self.cell = 0.0;
    }

    /// The memory indicator is derived, not stored: active iff non-zero.
    pub fn is_active(&self) -> bool {
        self.cell != 0.0
    }
}
