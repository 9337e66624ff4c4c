use ariadne::{Color, Label, Report, ReportKind, Source};
use shunt::{ErrorDetails, ShuntError, SourceKind, Span};

/// Format a ShuntError with fancy terminal output using Ariadne
pub fn format_error(error: &ShuntError) -> String {
    match error {
        ShuntError::MalformedExpression(details) => match details.span {
            Some(span) => format_with_source(error, details, span),
            None => format!("{}", error),
        },
        ShuntError::UnknownOperator(_) => format!("{}", error),
        ShuntError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
    }
}

fn format_with_source(error: &ShuntError, details: &ErrorDetails, span: Span) -> String {
    // a span may point one past the end, at the closing position
    let source = format!("{} ", details.source_text);
    let start = char_offset(&source, span.start);
    let end = char_offset(&source, span.end).max(start + 1);

    let source_id = details.source_kind.source_id();
    let message = match details.source_kind {
        SourceKind::Infix => format!("Malformed expression: {}", details.message),
        SourceKind::Postfix => format!(
            "Malformed expression: {} (in postfix form {})",
            details.message, details.source_text
        ),
    };

    let mut report = Report::build(ReportKind::Error, source_id, start)
        .with_message(message)
        .with_label(
            Label::new((source_id, start..end))
                .with_message(format!("at column {} of the {}", span.column(), source_id))
                .with_color(Color::Red),
        );

    if let Some(suggestion) = &details.suggestion {
        report = report.with_help(suggestion);
    }

    let mut output = Vec::new();
    match report
        .finish()
        .write((source_id, Source::from(source.as_str())), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => {
            // Fallback to simple format
            format!("{}", error)
        }
    }
}

/// Ariadne counts characters, spans count bytes
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text.get(..byte_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset)
}
