//! Calculator input tokens.
//!
//! Every button on the keypad maps to exactly one [`Token`]. Keystroke
//! strings typed on a terminal are split into tokens by [`tokenize`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Button layout of the calculator window, row by row.
pub const KEYPAD: [[&str; 4]; 5] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["C", "CE", "±", "√"],
];

/// Word aliases accepted in addition to the button labels.
/// Longer entries must come before their prefixes.
const WORD_LABELS: &[(&str, Token)] = &[
    ("sqrt", Token::Sqrt),
    ("neg", Token::Sign),
    ("ce", Token::ClearEntry),
    ("c", Token::Clear),
];

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The button label for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to `a` and `b`.
    ///
    /// Returns `None` when dividing by zero.
    pub fn compute(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// A decimal digit key, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        DIGITS[usize::from(self.0)]
    }
}

/// One discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Digit(Digit),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
    Sign,
    Sqrt,
}

impl Token {
    /// The digit key for `value`, or `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// The keypad label for this token.
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => d.label(),
            Self::Point => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::Sign => "±",
            Self::Sqrt => "√",
        }
    }

    /// Tokens that are a single character on the keypad.
    fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Self::digit(d as u8);
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Point),
            '=' => Some(Self::Equals),
            '±' => Some(Self::Sign),
            '√' => Some(Self::Sqrt),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced while turning text into tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unknown key label {0:?}")]
    Unknown(String),
    #[error("unrecognised input {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },
}

impl FromStr for Token {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(token) = Token::from_char(c)
        {
            return Ok(token);
        }

        WORD_LABELS
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(s))
            .map(|&(_, token)| token)
            .ok_or_else(|| TokenError::Unknown(s.to_string()))
    }
}

/// Split a keystroke string into tokens.
///
/// Whitespace separates nothing and is skipped. Word labels are matched
/// case-insensitively, longest first, so `"CE"` is clear-entry rather than
/// clear followed by an unknown `E`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut offset = 0;

    while let Some(c) = rest.chars().next() {
        let consumed = if c.is_whitespace() {
            c.len_utf8()
        } else if let Some(token) = Token::from_char(c) {
            tokens.push(token);
            c.len_utf8()
        } else if let Some(&(label, token)) = WORD_LABELS.iter().find(|(label, _)| {
            rest.get(..label.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(label))
        }) {
            tokens.push(token);
            label.len()
        } else {
            return Err(TokenError::Unexpected { found: c, offset });
        };

        rest = &rest[consumed..];
        offset += consumed;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Token {
        Token::digit(value).unwrap()
    }

    #[test]
    fn test_keypad_labels_parse() {
        for row in KEYPAD {
            for label in row {
                let token: Token = label.parse().unwrap();
                assert_eq!(token.label(), label);
            }
        }
    }

    #[test]
    fn test_word_aliases() {
        assert_eq!("sqrt".parse::<Token>(), Ok(Token::Sqrt));
        assert_eq!("NEG".parse::<Token>(), Ok(Token::Sign));
        assert_eq!("ce".parse::<Token>(), Ok(Token::ClearEntry));
        assert_eq!("C".parse::<Token>(), Ok(Token::Clear));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            "%".parse::<Token>(),
            Err(TokenError::Unknown("%".to_string()))
        );
        assert!("12".parse::<Token>().is_err());
        assert!("".parse::<Token>().is_err());
    }

    #[test]
    fn test_tokenize_expression() {
        let tokens = tokenize("12.5 + 3=").unwrap();
        assert_eq!(
            tokens,
            vec![
                digit(1),
                digit(2),
                Token::Point,
                digit(5),
                Token::Operator(Operator::Add),
                digit(3),
                Token::Equals,
            ]
        );
    }

    #[test]
    fn test_tokenize_prefers_clear_entry() {
        assert_eq!(tokenize("CE").unwrap(), vec![Token::ClearEntry]);
        assert_eq!(tokenize("C").unwrap(), vec![Token::Clear]);
        assert_eq!(
            tokenize("9sqrt±").unwrap(),
            vec![digit(9), Token::Sqrt, Token::Sign]
        );
    }

    #[test]
    fn test_tokenize_reports_offset() {
        assert_eq!(
            tokenize("1 + x"),
            Err(TokenError::Unexpected {
                found: 'x',
                offset: 4
            })
        );
        // Offsets are in bytes, multi-byte labels count fully.
        assert_eq!(
            tokenize("√?"),
            Err(TokenError::Unexpected {
                found: '?',
                offset: 3
            })
        );
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Token::digit(12), None);
        assert_eq!(digit(0).label(), "0");
        assert_eq!("7".parse::<Token>(), Ok(digit(7)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.compute(1.0, 0.0), None);
        assert_eq!(Operator::Divide.compute(1.0, 4.0), Some(0.25));
        assert_eq!(Operator::Subtract.compute(3.0, 5.0), Some(-2.0));
    }
}
