use crate::Operator;

/// Lexical category of a single input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Open,
    Close,
    Operator(Operator),
    /// A digit or the decimal point
    Digit,
    /// Anything outside the expression alphabet
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '(' => CharClass::Open,
            ')' => CharClass::Close,
            '0'..='9' | '.' => CharClass::Digit,
            _ => Operator::from_char(c).map_or(CharClass::Other, CharClass::Operator),
        }
    }
}

/// Whether `text` is a finished numeric literal.
///
/// Accepts an optional `+` or `-` sign followed by digits containing at most
/// one decimal point and at least one digit: `7`, `-1`, `+2.5`, `.5`, `3.`.
pub fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);

    let mut digits = 0usize;
    let mut points = 0usize;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
