use crate::token::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with the text it refers to
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    /// Location inside `source_text`, when one can be pointed at
    pub span: Option<Span>,
    /// The infix expression or postfix sequence that was rejected
    pub source_text: Arc<str>,
    pub source_kind: SourceKind,
    pub suggestion: Option<String>,
}

/// Which notation `source_text` is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    #[default]
    Infix,
    /// Comma-joined postfix, as produced by the converter
    Postfix,
}

impl SourceKind {
    pub fn source_id(self) -> &'static str {
        match self {
            SourceKind::Infix => "expression",
            SourceKind::Postfix => "postfix",
        }
    }
}

/// Error types for the shunt engine
#[derive(Debug, Clone)]
pub enum ShuntError {
    /// The converter or the evaluator rejected the input
    MalformedExpression(Box<ErrorDetails>),

    /// A postfix token is neither a number nor one of `+ - * / ^`
    UnknownOperator(String),

    /// Input exceeded a configured resource limit
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },
}

impl ShuntError {
    /// Create a malformed-expression error pointing at `span`
    pub fn malformed(message: impl Into<String>, span: Span, source_text: Arc<str>) -> Self {
        Self::MalformedExpression(Box::new(ErrorDetails {
            message: message.into(),
            span: Some(span),
            source_text,
            source_kind: SourceKind::Infix,
            suggestion: None,
        }))
    }

    /// Create a malformed-expression error with a suggestion
    pub fn malformed_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::MalformedExpression(Box::new(ErrorDetails {
            message: message.into(),
            span: Some(span),
            source_text,
            source_kind: SourceKind::Infix,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Create a malformed-expression error that concerns the whole text
    pub fn malformed_sequence(message: impl Into<String>, source_text: Arc<str>) -> Self {
        Self::MalformedExpression(Box::new(ErrorDetails {
            message: message.into(),
            span: None,
            source_text,
            source_kind: SourceKind::Infix,
            suggestion: None,
        }))
    }

    /// Mark the source text as a postfix sequence
    pub fn in_postfix(mut self) -> Self {
        if let ShuntError::MalformedExpression(details) = &mut self {
            details.source_kind = SourceKind::Postfix;
        }
        self
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ShuntError::MalformedExpression(_))
    }

    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            ShuntError::MalformedExpression(details) => Some(details),
            _ => None,
        }
    }
}

impl fmt::Display for ShuntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuntError::MalformedExpression(details) => {
                write!(f, "Malformed expression: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                if let Some(span) = &details.span {
                    write!(f, " at column {}", span.column())?;
                }
                Ok(())
            }
            ShuntError::UnknownOperator(symbol) => write!(f, "Unknown operator: '{}'", symbol),
            ShuntError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                ..
            } => write!(
                f,
                "Resource limit exceeded: {} (limit {}, actual {})",
                limit_name, limit_value, actual_value
            ),
        }
    }
}

impl std::error::Error for ShuntError {}
