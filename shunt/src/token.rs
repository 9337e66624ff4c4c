//! Token model shared by the converter and the evaluator
//!
//! - `Operator` with its priority table
//! - `Token`, one entry of a postfix sequence
//! - `Postfix`, the sequence itself and its comma-joined hand-off form
//! - `Span` for pointing diagnostics at a byte range

use crate::evaluator::operations::parse_number;
use crate::{ShuntError, ShuntResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Byte range in the text a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Column of the first byte, counted from 1
    pub fn column(&self) -> usize {
        self.start + 1
    }
}

/// One of the five binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Subtract,
    Add,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Subtract,
        Operator::Add,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Subtract => '-',
            Operator::Add => '+',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Binding priority. Equal priorities associate to the left, `^` included.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Subtract | Operator::Add => 0,
            Operator::Multiply | Operator::Divide => 1,
            Operator::Power => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ShuntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_char(c).ok_or_else(|| ShuntError::UnknownOperator(s.to_string()))
            }
            _ => Err(ShuntError::UnknownOperator(s.to_string())),
        }
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single postfix entry: operand text or an operator
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Operand(String),
    Operator(Operator),
}

impl Token {
    pub fn operand(text: impl Into<String>) -> Self {
        Token::Operand(text.into())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

impl FromStr for Token {
    type Err = ShuntError;

    /// Numbers (including `Infinity`, `-Infinity` and `NaN`) become operands.
    /// Anything else must be one of the five operator symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if parse_number(s).is_some() {
            return Ok(Token::operand(s));
        }
        s.parse().map(Token::Operator)
    }
}

/// An ordered postfix token sequence
///
/// Its text form joins the tokens with commas (`3,4,2,*,+`), which is how a
/// sequence is handed between the converter, the evaluator and callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = ShuntError;

    fn from_str(s: &str) -> ShuntResult<Self> {
        if s.is_empty() {
            return Ok(Postfix::default());
        }
        let tokens = s
            .split(',')
            .map(str::parse)
            .collect::<ShuntResult<Vec<Token>>>()?;
        Ok(Postfix::new(tokens))
    }
}

impl Serialize for Postfix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
