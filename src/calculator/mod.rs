//! The calculator core.
//!
//! This module is UI-toolkit independent:
//! - Build up an expression from digit/operator input events
//! - Evaluate it with standard operator precedence
//! - Render a value line and a running tape line after every mutation
//! - Keep a single memory register across expression resets

mod display;
mod eval;
mod format;
mod memory;
mod router;
mod state;
mod token;

pub use display::DisplaySink;
#[cfg(test)]
pub use display::RecordingSink;
pub use eval::{EvalError, evaluate};
pub use format::{clamp, format_value};
pub use memory::MemoryRegister;
pub use router::{MemoryAction, Router};
pub use state::{Expression, Render};
pub use token::{Operator, Token};
