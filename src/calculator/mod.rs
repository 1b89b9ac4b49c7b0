//! Calculator engine.
//!
//! This module provides:
//! - The keypad tokens and a tokenizer for typed keystrokes
//! - The pending-operator state machine that drives the display
//! - Formatting of results for the display

mod engine;
mod format;
mod token;

pub use engine::{CalculatorState, ERROR_SENTINEL, EngineError, apply};
pub use format::{format_number, parse_number};
pub use token::{Digit, KEYPAD, Operator, Token, TokenError, tokenize};
