//! The calculator state machine.
//!
//! A [`CalculatorState`] holds everything one calculator window needs: the
//! display text, the operator waiting for its second operand, the left-hand
//! operand and whether the next digit starts a new number. Tokens are applied
//! to it one at a time and the display is read back afterwards.

use super::format::{format_number, parse_number};
use super::token::{Operator, Token};
use thiserror::Error;
use tracing::{debug, warn};

/// Display text shown for division by zero and square roots of negatives.
pub const ERROR_SENTINEL: &str = "Error";

/// A token that could not be applied because the display is not a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("display {0:?} is not a number")]
    InvalidNumber(String),
}

/// State of a single calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending_operator: Option<Operator>,
    accumulator: f64,
    awaiting_new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operator: None,
            accumulator: 0.0,
            awaiting_new_entry: true,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown to the user.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator selected but not yet applied.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// The left-hand operand of the operation in progress.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Whether the next digit replaces the display instead of extending it.
    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// Whether the display holds the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_SENTINEL
    }

    /// Apply one token, logging and ignoring a rejection.
    ///
    /// A rejected token keeps whatever it changed before the display failed
    /// to parse; see [`CalculatorState::try_apply`].
    pub fn apply(&mut self, token: Token) {
        match self.try_apply(token) {
            Ok(()) => debug!(%token, display = %self.display, "applied token"),
            Err(err) => warn!(%token, %err, "token rejected"),
        }
    }

    /// Apply a sequence of tokens in order.
    pub fn apply_all(&mut self, tokens: impl IntoIterator<Item = Token>) {
        for token in tokens {
            self.apply(token);
        }
    }

    /// Apply one token.
    ///
    /// Fails when the token has to read the display as a number and it is
    /// not one (`"Error"`, `"1..2"`). Steps of the token that ran before the
    /// failing parse are not rolled back.
    pub fn try_apply(&mut self, token: Token) -> Result<(), EngineError> {
        match token {
            Token::Digit(_) | Token::Point => self.enter(token.label()),
            Token::Operator(op) => {
                if !self.awaiting_new_entry {
                    self.calculate()?;
                    self.awaiting_new_entry = true;
                }
                // Re-read even right after another operator key, which picks
                // up a sign toggle made in between.
                self.accumulator = self.display_value()?;
                self.pending_operator = Some(op);
            }
            Token::Equals => {
                self.calculate()?;
                self.pending_operator = None;
                self.awaiting_new_entry = true;
            }
            Token::Clear => *self = Self::default(),
            Token::ClearEntry => {
                self.display = "0".to_string();
                self.awaiting_new_entry = true;
            }
            Token::Sign => {
                if let Some(stripped) = self.display.strip_prefix('-') {
                    self.display = stripped.to_string();
                } else if self.display != "0" {
                    self.display.insert(0, '-');
                }
            }
            Token::Sqrt => {
                let value = self.display_value()?;
                self.display = if value >= 0.0 {
                    format_number(value.sqrt())
                } else {
                    debug!(value, "square root of negative number");
                    ERROR_SENTINEL.to_string()
                };
                self.awaiting_new_entry = true;
            }
        }

        Ok(())
    }

    fn enter(&mut self, label: &str) {
        if self.awaiting_new_entry {
            self.display.clear();
            self.awaiting_new_entry = false;
        }
        self.display.push_str(label);
    }

    /// Resolve the pending operator against the display.
    fn calculate(&mut self) -> Result<(), EngineError> {
        let Some(op) = self.pending_operator else {
            return Ok(());
        };

        let second = self.display_value()?;
        match op.compute(self.accumulator, second) {
            Some(result) => {
                self.display = format_number(result);
                self.accumulator = result;
            }
            None => {
                debug!(accumulator = self.accumulator, "division by zero");
                self.display = ERROR_SENTINEL.to_string();
            }
        }

        Ok(())
    }

    fn display_value(&self) -> Result<f64, EngineError> {
        parse_number(&self.display)
            .ok_or_else(|| EngineError::InvalidNumber(self.display.clone()))
    }
}

/// Apply `token` to `state` and return the resulting state.
pub fn apply(token: Token, mut state: CalculatorState) -> CalculatorState {
    state.apply(token);
    state
}
