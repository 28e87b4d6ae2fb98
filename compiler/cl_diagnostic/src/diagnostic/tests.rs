use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_display_without_line() {
    let diag = undefined_variable("x");
    assert_eq!(diag.to_string(), "SEM002: Undefined variable: 'x'");
}

#[test]
fn test_display_with_line() {
    let diag = used_before_init("count").with_line(Some(12));
    assert_eq!(
        diag.to_string(),
        "Line 12: SEM005: Variable 'count' used before initialization"
    );
}

#[test]
fn test_line_zero_is_unknown() {
    let diag = duplicate_variable("x").with_line(Some(0));
    assert_eq!(diag.line, None);
    assert_eq!(diag.to_string(), "SEM001: Duplicate variable declaration: 'x'");
}

#[test]
fn test_array_constructors() {
    assert_eq!(undefined_array("xs").code, ErrorCode::Sem021);
    assert_eq!(not_an_array("n").message, "Variable 'n' is not an array");
    assert_eq!(
        array_used_before_init("xs").to_string(),
        "SEM005: Array 'xs' used before initialization"
    );
    assert_eq!(
        index_not_numeric("SENTENCE").to_string(),
        "SEM023: Array index must be numeric expression, got SENTENCE"
    );
}
