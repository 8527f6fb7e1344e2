pub mod keymap;
pub mod terminal;

pub use keymap::{InputEvent, map_key};
pub use terminal::run;
