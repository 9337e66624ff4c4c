//! # shunt
//!
//! **Infix in, postfix through, a number out**
//!
//! shunt converts arithmetic expressions such as `2(3+1)^2` into a postfix
//! (Reverse-Polish) token sequence with a shunting-yard scan, then evaluates
//! that sequence on an operand stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use shunt::{Engine, EngineConfig, ShuntResult};
//!
//! fn main() -> ShuntResult<()> {
//!     let engine = Engine::new();
//!
//!     let calculation = engine.calculate("3+4*2")?;
//!     assert_eq!(calculation.postfix.to_string(), "3,4,2,*,+");
//!     assert_eq!(calculation.result, "11");
//!
//!     // Round to 2 places after every operation
//!     let engine = Engine::with_config(EngineConfig::new().with_precision(2));
//!     assert_eq!(engine.calculate("1/3")?.result, "0.33");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Expression language
//!
//! Expressions are built from numbers (`12`, `0.5`, `.5`), the operators
//! `+ - * / ^` and parentheses. `*` and `/` bind tighter than `+` and `-`,
//! and `^` binds tightest. Operators of equal priority group to the left,
//! `^` included, so `2^3^2` is `64`.
//!
//! A number or group directly followed by a group multiplies: `2(3+1)` is `8`.
//! A sign right after `(` or after `*`, `/`, `^` is unary: `-(3+2)` is `-5`
//! and `2^-2` is `0.25`.
//!
//! Other characters, whitespace included, are skipped unless strict mode is
//! enabled.
//!
//! ## Numbers
//!
//! Arithmetic is IEEE-754 double precision. Division by zero produces
//! `Infinity`, `-Infinity` or `NaN` instead of an error.

pub mod converter;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod resource_limits;
pub mod response;
pub mod token;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use converter::{convert, NotationConverter};
pub use engine::{Engine, EngineConfig};
pub use error::{ErrorDetails, ShuntError, SourceKind};
pub use evaluator::{evaluate, Evaluation, Evaluator};
pub use resource_limits::ResourceLimits;
pub use response::{Calculation, OperationRecord};
pub use token::{Operator, Postfix, Span, Token};

/// Result type for shunt operations
pub type ShuntResult<T> = Result<T, ShuntError>;

#[cfg(test)]
mod tests;
