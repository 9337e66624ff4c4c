use crate::converter::{convert, NotationConverter};
use crate::{ResourceLimits, ShuntError};

fn postfix(infix: &str) -> String {
    convert(infix).unwrap().to_string()
}

fn rejection(infix: &str) -> String {
    match convert(infix) {
        Err(ShuntError::MalformedExpression(details)) => details.message,
        other => panic!("expected malformed expression for {:?}, got {:?}", infix, other),
    }
}

#[test]
fn test_precedence() {
    assert_eq!(postfix("3+4*2"), "3,4,2,*,+");
    assert_eq!(postfix("2+3*4"), "2,3,4,*,+");
    assert_eq!(postfix("2*3+4"), "2,3,*,4,+");
    assert_eq!(postfix("1+2^3*4"), "1,2,3,^,4,*,+");
}

#[test]
fn test_equal_priority_groups_left() {
    assert_eq!(postfix("8-3-2"), "8,3,-,2,-");
    assert_eq!(postfix("8/4/2"), "8,4,/,2,/");
    assert_eq!(postfix("2^3^2"), "2,3,^,2,^");
}

#[test]
fn test_parentheses() {
    assert_eq!(postfix("(3+4)*2"), "3,4,+,2,*");
    assert_eq!(postfix("((1))"), "1");
    assert_eq!(postfix("2*(3-(4+5))"), "2,3,4,5,+,-,*");
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(postfix("2(3+1)"), "2,3,1,+,*");
    assert_eq!(postfix("(1+2)(3+4)"), "1,2,+,3,4,+,*");
    assert_eq!(postfix("(2)3"), "2,3,*");
}

#[test]
fn test_unary_signs() {
    assert_eq!(postfix("-(3+2)"), "-1,3,2,+,*");
    assert_eq!(postfix("2^-2"), "2,-2,^");
    assert_eq!(postfix("2*-3"), "2,-3,*");
    assert_eq!(postfix("(-4)"), "-4");
    assert_eq!(postfix("+5"), "+5");
    assert_eq!(postfix("-2+3"), "-2,3,+");
}

#[test]
fn test_decimal_literals() {
    assert_eq!(postfix(".5+1"), ".5,1,+");
    assert_eq!(postfix("3.25*2."), "3.25,2.,*");
}

#[test]
fn test_unknown_characters_are_skipped() {
    assert_eq!(postfix(" 1 + 2 "), "1,2,+");
    assert_eq!(postfix("1a+2"), "1,2,+");
}

#[test]
fn test_unbalanced_parentheses() {
    assert_eq!(rejection("(1+2"), "unbalanced parentheses");
    assert_eq!(rejection("1+2)"), "unmatched closing parenthesis");
    assert_eq!(rejection("((1)"), "unbalanced parentheses");
}

#[test]
fn test_misplaced_operators() {
    assert_eq!(rejection("1+-2"), "operator '-' is misplaced");
    assert_eq!(rejection("1**2"), "operator '*' is misplaced");
    assert_eq!(rejection("3+"), "expression is incomplete");
    assert_eq!(rejection("(3+)"), "group is missing an operand");
}

#[test]
fn test_empty_input() {
    assert_eq!(rejection(""), "expression is incomplete");
    assert_eq!(rejection("   "), "expression is incomplete");
    assert_eq!(rejection("()"), "group is missing an operand");
}

#[test]
fn test_invalid_numbers() {
    assert_eq!(rejection("1.2.3+4"), "'1.2.3' is not a number");
    assert_eq!(rejection("."), "'.' is not a number");
    assert_eq!(rejection("(*3)"), "'*3' is not a number");
}

#[test]
fn test_literals_beyond_double_range() {
    let huge = "1".repeat(400);
    assert_eq!(
        rejection(&format!("{}+1", huge)),
        format!("'{}' is too large to be a number", huge)
    );
    assert!(convert(&format!("2({})", huge)).is_err());
    assert_eq!(postfix(&format!("{}+1", "9".repeat(300))).len(), 304);
}

#[test]
fn test_error_span_points_at_character() {
    let err = convert("1+*2").unwrap_err();
    let span = err.details().unwrap().span.unwrap();
    assert_eq!(span.start, 2);
    assert_eq!(span.column(), 3);

    let err = convert("(1+2").unwrap_err();
    assert_eq!(err.details().unwrap().span.unwrap().column(), 5);
}

#[test]
fn test_strict_mode_rejects_unknown_characters() {
    let converter = NotationConverter::new().strict(true);
    assert!(converter.is_strict());

    let err = converter.convert("1 + 2").unwrap_err();
    let details = err.details().unwrap();
    assert_eq!(details.message, "unexpected character ' '");
    assert_eq!(details.span.unwrap().column(), 2);

    assert_eq!(converter.convert("1+2").unwrap().to_string(), "1,2,+");
}

#[test]
fn test_converter_keeps_no_state_between_calls() {
    let converter = NotationConverter::new();
    assert!(converter.convert("((1+").is_err());
    assert_eq!(converter.convert("1+1").unwrap().to_string(), "1,1,+");
    assert_eq!(converter.convert("2*3").unwrap().to_string(), "2,3,*");
}

#[test]
fn test_nesting_depth_limit() {
    let limits = ResourceLimits {
        max_nesting_depth: 3,
        ..ResourceLimits::default()
    };
    let converter = NotationConverter::with_limits(limits);

    assert!(converter.convert("((1))").is_ok());
    match converter.convert("(((1)))") {
        Err(ShuntError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_nesting_depth");
        }
        other => panic!("expected resource limit error, got {:?}", other),
    }
}

#[test]
fn test_expression_size_limit() {
    let limits = ResourceLimits {
        max_expression_bytes: 4,
        ..ResourceLimits::default()
    };
    let converter = NotationConverter::with_limits(limits);

    assert!(converter.convert("1+2").is_ok());
    assert!(matches!(
        converter.convert("1+2+3"),
        Err(ShuntError::ResourceLimitExceeded { .. })
    ));
}
