//! Postfix evaluation
//!
//! A stack machine over a postfix sequence:
//! 1. Operands are pushed
//! 2. An operator pops the right operand, then the left one
//! 3. The rounded result is pushed back
//! 4. The single remaining entry is the result

pub mod operations;

use crate::{OperationRecord, Postfix, ShuntError, ShuntResult, Span, Token};
use operations::{format_number, parse_number, DEFAULT_PRECISION, MAX_PRECISION};
use std::sync::Arc;
use tracing::trace;

/// Evaluates postfix sequences with a fixed rounding precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    precision: Option<u32>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            precision: Some(DEFAULT_PRECISION),
        }
    }
}

/// Outcome of evaluating one postfix sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// One record per operator, in evaluation order
    pub steps: Vec<OperationRecord>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round every intermediate result to `places` decimal places (at most 28)
    pub fn with_precision(places: u32) -> Self {
        Self {
            precision: Some(places.min(MAX_PRECISION)),
        }
    }

    /// Keep full double precision at every step
    pub fn unrounded() -> Self {
        Self { precision: None }
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    /// Evaluate a postfix sequence
    ///
    /// Fails with `MalformedExpression` when an operator finds fewer than two
    /// operands, when an operand is not a number, or when the sequence does
    /// not reduce to exactly one value.
    pub fn evaluate(&self, postfix: &Postfix) -> ShuntResult<Evaluation> {
        let source: Arc<str> = Arc::from(postfix.to_string());
        let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
        let mut steps = Vec::new();
        let mut offset = 0;

        for token in postfix {
            let width = token.to_string().len();
            let span = Span::new(offset, offset + width);
            offset += width + 1;

            match token {
                Token::Operand(text) => {
                    let value = parse_number(text).ok_or_else(|| {
                        ShuntError::malformed(
                            format!("'{}' is not a number", text),
                            span,
                            source.clone(),
                        )
                        .in_postfix()
                    })?;
                    stack.push(value);
                }
                Token::Operator(op) => {
                    let right = stack.pop();
                    let left = stack.pop();
                    let (Some(left), Some(right)) = (left, right) else {
                        return Err(ShuntError::malformed(
                            format!("operator '{}' is missing an operand", op),
                            span,
                            source,
                        )
                        .in_postfix());
                    };

                    let result = operations::apply(*op, left, right, self.precision);
                    trace!(
                        "{} {} {} = {}",
                        format_number(left),
                        op,
                        format_number(right),
                        format_number(result)
                    );
                    steps.push(OperationRecord::new(left, *op, right, result));
                    stack.push(result);
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(Evaluation {
                value: *value,
                steps,
            }),
            [] => Err(
                ShuntError::malformed_sequence("nothing to evaluate", source).in_postfix(),
            ),
            rest => Err(ShuntError::malformed_sequence(
                format!("{} operands are left without an operator", rest.len()),
                source,
            )
            .in_postfix()),
        }
    }
}

/// Evaluate with `precision` decimal places of rounding
pub fn evaluate(postfix: &Postfix, precision: u32) -> ShuntResult<f64> {
    Evaluator::with_precision(precision)
        .evaluate(postfix)
        .map(|evaluation| evaluation.value)
}
