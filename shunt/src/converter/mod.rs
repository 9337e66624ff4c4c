//! Infix to postfix conversion
//!
//! A shunting-yard scan extended with implicit multiplication (`2(3+1)`,
//! `(1)(2)`, `(2)3`) and unary signs (`-(3+2)`, `(-4)`, `2^-3`).
//!
//! The input is scanned once, left to right, with a closing parenthesis
//! appended. The scan starts as if an opening parenthesis had just been read,
//! so the whole expression is handled as one group and the trailing `)` flushes
//! whatever is still pending.

mod lexical;

pub use lexical::{is_numeric_literal, CharClass};

use crate::{Operator, Postfix, ResourceLimits, ShuntError, ShuntResult, Span, Token};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Converts infix expressions to postfix token sequences
///
/// Holds configuration only. Every call to [`NotationConverter::convert`]
/// builds its own scan state, so one converter can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct NotationConverter {
    strict: bool,
    limits: ResourceLimits,
}

impl NotationConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom resource limits
    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            strict: false,
            limits,
        }
    }

    /// In strict mode characters outside the expression alphabet are
    /// rejected instead of skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Convert an infix expression to postfix.
    ///
    /// # Examples
    /// ```text
    /// 3+4*2     -> 3,4,2,*,+
    /// 8-3-2     -> 8,3,-,2,-
    /// 2(3+1)    -> 2,3,1,+,*
    /// -(3+2)    -> -1,3,2,+,*
    /// 2^-2      -> 2,-2,^
    /// ```
    pub fn convert(&self, infix: &str) -> ShuntResult<Postfix> {
        self.limits.check_expression_size(infix)?;

        let mut state = ScanState::new();
        let sentinel = (infix.len(), ')');

        for (offset, c) in infix.char_indices().chain(std::iter::once(sentinel)) {
            let span = Span::new(offset, offset + c.len_utf8());
            let step = match CharClass::of(c) {
                CharClass::Open => state.open(),
                CharClass::Close => state.close(),
                CharClass::Operator(op) => state.operator(op),
                CharClass::Digit => {
                    state.digit(c);
                    Ok(())
                }
                CharClass::Other if self.strict => Err(ScanError::UnexpectedCharacter(c)),
                CharClass::Other => {
                    trace!(character = %c.escape_debug(), offset, "Skipping character");
                    Ok(())
                }
            };

            if let Err(error) = step {
                let at_end = offset == infix.len();
                return Err(reject(infix, error, span, at_end));
            }
            self.limits.check_nesting_depth(state.depth)?;
        }

        if !state.stack.is_empty() {
            let span = Span::new(infix.len(), infix.len());
            return Err(reject(infix, ScanError::Unclosed, span, true));
        }

        Ok(Postfix::new(state.output))
    }
}

/// Convert with the default (lenient) converter
pub fn convert(infix: &str) -> ShuntResult<Postfix> {
    NotationConverter::new().convert(infix)
}

fn reject(infix: &str, error: ScanError, span: Span, at_end: bool) -> ShuntError {
    debug!(expression = infix, column = span.column(), reason = %error, "Malformed expression");

    let source: Arc<str> = Arc::from(infix);
    match error.suggestion(at_end) {
        Some(suggestion) => ShuntError::malformed_with_suggestion(
            error.describe(at_end),
            span,
            source,
            suggestion,
        ),
        None => ShuntError::malformed(error.describe(at_end), span, source),
    }
}

/// Why the scan stopped
#[derive(Debug, Clone, PartialEq)]
enum ScanError {
    /// The pending literal is not a number, e.g. `1.2.3` or `.`
    InvalidNumber(String),
    /// The literal is well formed but overflows a double
    NumberOutOfRange(String),
    /// Two operators that cannot follow each other, e.g. `1+*2`
    MisplacedOperator(Operator),
    /// A closing parenthesis with nothing to close
    UnmatchedClose,
    /// A group or the expression ends right after an operator or `(`
    MissingOperand,
    UnexpectedCharacter(char),
    /// Groups still open when the input ran out
    Unclosed,
}

impl ScanError {
    fn describe(&self, at_end: bool) -> String {
        match self {
            ScanError::InvalidNumber(text) => format!("'{}' is not a number", text),
            ScanError::NumberOutOfRange(text) => {
                format!("'{}' is too large to be a number", text)
            }
            ScanError::MisplacedOperator(op) => format!("operator '{}' is misplaced", op),
            ScanError::UnmatchedClose => "unmatched closing parenthesis".to_string(),
            ScanError::MissingOperand if at_end => "expression is incomplete".to_string(),
            ScanError::MissingOperand => "group is missing an operand".to_string(),
            ScanError::UnexpectedCharacter(c) => {
                format!("unexpected character '{}'", c.escape_debug())
            }
            ScanError::Unclosed => "unbalanced parentheses".to_string(),
        }
    }

    fn suggestion(&self, at_end: bool) -> Option<String> {
        match self {
            ScanError::MissingOperand if at_end => {
                Some("end the expression with a number or ')'".to_string())
            }
            ScanError::Unclosed => Some("add the missing ')'".to_string()),
            ScanError::MisplacedOperator(op) if op.priority() == 0 => {
                Some(format!("wrap the signed operand in parentheses: ({}…)", op))
            }
            _ => None,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(false))
    }
}

fn is_finite_literal(text: &str) -> bool {
    is_numeric_literal(text) && text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// What the scan read last and has not placed yet
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Open,
    Close,
    Operator(Operator),
    /// Operand text being built; may carry a leading sign
    Literal(String),
}

impl Pending {
    /// A numeric literal whose value is a finite double
    fn is_complete_literal(&self) -> bool {
        matches!(self, Pending::Literal(text) if is_finite_literal(text))
    }

    /// Append a character. A pending sign becomes the start of a literal.
    fn push_char(self, c: char) -> Pending {
        let mut text = match self {
            Pending::Literal(text) => text,
            Pending::Operator(op) => op.symbol().to_string(),
            Pending::Open => "(".to_string(),
            Pending::Close => ")".to_string(),
        };
        text.push(c);
        Pending::Literal(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Open,
    Operator(Operator),
}

/// Working state of a single conversion
struct ScanState {
    output: Vec<Token>,
    stack: Vec<StackEntry>,
    pending: Pending,
    /// Set when the pending operator is a sign rather than a binary operator
    unary: bool,
    depth: usize,
}

impl ScanState {
    fn new() -> Self {
        Self {
            output: Vec::new(),
            stack: Vec::new(),
            pending: Pending::Open,
            unary: false,
            depth: 0,
        }
    }

    fn open(&mut self) -> Result<(), ScanError> {
        if self.pending == Pending::Open {
            self.push_group();
            return Ok(());
        }

        // `-(` reads as `-1*(`
        if self.unary {
            if let Pending::Operator(op) = self.pending {
                self.pending = Pending::Literal(format!("{}1", op.symbol()));
                self.unary = false;
            }
        }

        self.emit_literal(Pending::Operator(Operator::Multiply));
        if self.pending == Pending::Close {
            self.pending = Pending::Operator(Operator::Multiply);
        }

        match self.pending {
            Pending::Operator(op) => {
                self.flush(op);
                self.pending = Pending::Open;
                Ok(())
            }
            _ => Err(self.rejected_pending()),
        }
    }

    fn close(&mut self) -> Result<(), ScanError> {
        self.emit_literal(Pending::Close);

        if self.pending == Pending::Close {
            return if self.close_group() {
                Ok(())
            } else {
                Err(ScanError::UnmatchedClose)
            };
        }

        Err(self.rejected_pending())
    }

    fn operator(&mut self, op: Operator) -> Result<(), ScanError> {
        match self.pending {
            Pending::Open => {
                self.push_group();
                self.pending = Pending::Operator(op);
                self.unary = true;
                return Ok(());
            }
            Pending::Close => {
                self.pending = Pending::Operator(op);
                return Ok(());
            }
            _ => {}
        }

        if self.emit_literal(Pending::Operator(op)) {
            return Ok(());
        }

        match self.pending {
            // a sign after `*`, `/` or `^`
            Pending::Operator(previous) if previous.priority() > 0 && op.priority() == 0 => {
                self.flush(previous);
                self.unary = true;
                self.pending = Pending::Operator(op);
                Ok(())
            }
            Pending::Operator(_) => Err(ScanError::MisplacedOperator(op)),
            _ => Err(self.rejected_pending()),
        }
    }

    fn digit(&mut self, c: char) {
        if self.pending == Pending::Open {
            self.push_group();
            self.pending = Pending::Literal(c.to_string());
            return;
        }

        if self.pending == Pending::Close {
            self.pending = Pending::Operator(Operator::Multiply);
        }

        if let Pending::Operator(op) = self.pending {
            if !self.unary {
                self.flush(op);
                self.pending = Pending::Literal(c.to_string());
                return;
            }
        }

        let pending = std::mem::replace(&mut self.pending, Pending::Open);
        self.pending = pending.push_char(c);
        self.unary = false;
    }

    /// Move a complete literal to the output and leave `next` pending.
    fn emit_literal(&mut self, next: Pending) -> bool {
        if !self.pending.is_complete_literal() {
            return false;
        }
        if let Pending::Literal(text) = std::mem::replace(&mut self.pending, next) {
            self.output.push(Token::Operand(text));
        }
        true
    }

    /// Pop operators of greater or equal priority, then push `incoming`.
    fn flush(&mut self, incoming: Operator) {
        while let Some(&StackEntry::Operator(top)) = self.stack.last() {
            if top.priority() < incoming.priority() {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.stack.push(StackEntry::Operator(incoming));
    }

    fn push_group(&mut self) {
        self.stack.push(StackEntry::Open);
        self.depth += 1;
    }

    /// Pop operators up to the innermost open marker. False when there is none.
    fn close_group(&mut self) -> bool {
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(op) => self.output.push(Token::Operator(op)),
                StackEntry::Open => {
                    self.depth -= 1;
                    return true;
                }
            }
        }
        false
    }

    fn rejected_pending(&self) -> ScanError {
        match &self.pending {
            Pending::Literal(text) if is_numeric_literal(text) => {
                ScanError::NumberOutOfRange(text.clone())
            }
            Pending::Literal(text) => ScanError::InvalidNumber(text.clone()),
            Pending::Close => ScanError::UnmatchedClose,
            Pending::Open | Pending::Operator(_) => ScanError::MissingOperand,
        }
    }
}
