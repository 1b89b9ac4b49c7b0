pub mod keypad;

pub use keypad::{render_display, render_keypad};
