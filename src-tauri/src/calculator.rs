//! Keypad calculator.
//!
//! Expressions are tokenized and evaluated by a small recursive-descent
//! parser that only understands decimal numbers and `+ - * /`. Nothing typed
//! into the display is ever executed as code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown when an expression cannot be evaluated.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unsupported character '{0}'")]
    UnsupportedCharacter(char),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Unexpected operator")]
    UnexpectedOperator,

    #[error("Result is not a finite number")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let chars: Vec<char> = expression.chars().collect();
    let mut idx = 0usize;
    let mut tokens = Vec::new();

    while idx < chars.len() {
        let c = chars[idx];
        match c {
            _ if c.is_whitespace() => idx += 1,
            '+' => {
                tokens.push(Token::Plus);
                idx += 1;
            }
            '-' | '\u{2212}' => {
                tokens.push(Token::Minus);
                idx += 1;
            }
            '*' | '×' => {
                tokens.push(Token::Star);
                idx += 1;
            }
            '/' | '÷' => {
                tokens.push(Token::Slash);
                idx += 1;
            }
            _ if c.is_ascii_digit() || c == '.' => {
                let start = idx;
                while idx < chars.len() && (chars[idx].is_ascii_digit() || chars[idx] == '.') {
                    idx += 1;
                }
                let raw: String = chars[start..idx].iter().collect();
                let value = raw
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber(raw.clone()))?;
                tokens.push(Token::Number(value));
            }
            other => return Err(CalcError::UnsupportedCharacter(other)),
        }
    }

    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    fn consume(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn parse(mut self) -> Result<f64, CalcError> {
        let value = self.parse_add_sub()?;
        if self.index != self.tokens.len() {
            return Err(CalcError::UnexpectedOperator);
        }
        Ok(value)
    }

    fn parse_add_sub(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_mul_div()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.consume();
                    value += self.parse_mul_div()?;
                }
                Some(Token::Minus) => {
                    self.consume();
                    value -= self.parse_mul_div()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn parse_mul_div(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.consume();
                    value *= self.parse_unary()?;
                }
                Some(Token::Slash) => {
                    self.consume();
                    value /= self.parse_unary()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn parse_unary(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.consume();
                Ok(-self.parse_unary()?)
            }
            Some(Token::Plus) => {
                self.consume();
                self.parse_unary()
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<f64, CalcError> {
        match self.consume() {
            Some(Token::Number(value)) => Ok(value),
            Some(_) => Err(CalcError::UnexpectedOperator),
            None => Err(CalcError::UnexpectedEnd),
        }
    }
}

/// Evaluate an arithmetic expression.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let value = Parser { tokens, index: 0 }.parse()?;
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(value)
}

/// A keypad button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Clear,
    Backspace,
    Equals,
    Input(String),
}

impl Key {
    /// Map a keypad label (`C`, `B`, `=`, or anything to type) onto a key.
    pub fn from_label(label: &str) -> Self {
        match label {
            "C" => Key::Clear,
            "B" => Key::Backspace,
            "=" => Key::Equals,
            other => Key::Input(other.to_string()),
        }
    }
}

/// Next display text after pressing `key`.
pub fn press(display: &str, key: &Key) -> String {
    match key {
        Key::Clear => "0".to_string(),
        Key::Backspace => {
            let mut chars = display.chars();
            if display.chars().count() > 1 {
                chars.next_back();
                chars.as_str().to_string()
            } else {
                "0".to_string()
            }
        }
        Key::Equals => match evaluate_expression(display) {
            Ok(value) => value.to_string(),
            Err(_) => ERROR_DISPLAY.to_string(),
        },
        Key::Input(text) => {
            if display == "0" || display == ERROR_DISPLAY {
                text.clone()
            } else {
                format!("{}{}", display, text)
            }
        }
    }
}
