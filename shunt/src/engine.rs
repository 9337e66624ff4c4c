use crate::evaluator::operations::{format_number, DEFAULT_PRECISION, MAX_PRECISION};
use crate::{
    Calculation, Evaluator, NotationConverter, Postfix, ResourceLimits, ShuntResult,
};
use tracing::debug;

/// Configuration shared by the converter and the evaluator
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Decimal places kept after every operation. `None` disables rounding.
    pub precision: Option<u32>,
    /// Reject characters outside the expression alphabet instead of skipping them
    pub strict: bool,
    pub limits: ResourceLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precision: Some(DEFAULT_PRECISION),
            strict: false,
            limits: ResourceLimits::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, places: u32) -> Self {
        self.precision = Some(places.min(MAX_PRECISION));
        self
    }

    pub fn unrounded(mut self) -> Self {
        self.precision = None;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }
}

/// The calculator engine.
///
/// Converts infix expressions to postfix and evaluates them. The engine keeps
/// no state between calls, so it can be shared across threads as is.
#[derive(Debug, Clone)]
pub struct Engine {
    converter: NotationConverter,
    evaluator: Evaluator,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        let converter =
            NotationConverter::with_limits(config.limits.clone()).strict(config.strict);
        let evaluator = match config.precision {
            Some(places) => Evaluator::with_precision(places),
            None => Evaluator::unrounded(),
        };
        Self {
            converter,
            evaluator,
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn convert(&self, infix: &str) -> ShuntResult<Postfix> {
        self.converter.convert(infix)
    }

    /// Evaluate an already converted sequence
    pub fn evaluate(&self, postfix: &Postfix) -> ShuntResult<Calculation> {
        self.finish(postfix.to_string(), postfix.clone())
    }

    /// Convert and evaluate an infix expression
    pub fn calculate(&self, infix: &str) -> ShuntResult<Calculation> {
        let postfix = self.converter.convert(infix)?;
        debug!(expression = infix, postfix = %postfix, "Converted expression");
        self.finish(infix.to_string(), postfix)
    }

    fn finish(&self, expression: String, postfix: Postfix) -> ShuntResult<Calculation> {
        let evaluation = self.evaluator.evaluate(&postfix)?;
        Ok(Calculation {
            expression,
            postfix,
            result: format_number(evaluation.value),
            value: evaluation.value,
            steps: evaluation.steps,
        })
    }
}
