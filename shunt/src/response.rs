use crate::evaluator::operations::format_number;
use crate::{Operator, Postfix};
use serde::Serialize;
use std::fmt;

/// A record of a single operator application during evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    pub left: String,
    pub operator: Operator,
    pub right: String,
    pub result: String,
}

impl OperationRecord {
    pub fn new(left: f64, operator: Operator, right: f64, result: f64) -> Self {
        Self {
            left: format_number(left),
            operator,
            right: format_number(right),
            result: format_number(result),
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// Result of a full calculation
///
/// Contains the input, the postfix sequence it was converted to, the final
/// value and the operations that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub expression: String,
    pub postfix: Postfix,
    /// Text form of `value` (`Infinity`, `-Infinity` and `NaN` included)
    pub result: String,
    #[serde(skip)]
    pub value: f64,
    pub steps: Vec<OperationRecord>,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}
