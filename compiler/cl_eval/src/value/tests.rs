use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn number_display_forms() {
    let cases = [
        (5.0, "5.0"),
        (-2.0, "-2.0"),
        (0.0, "0.0"),
        (2.5, "2.5"),
        (0.1, "0.1"),
        (0.001, "0.001"),
        (1234567.0, "1234567.0"),
        (1e7, "1.0E7"),
        (12345678.9, "1.23456789E7"),
        (0.0001, "1.0E-4"),
        (-1.5e-5, "-1.5E-5"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
        (f64::NAN, "NaN"),
    ];
    for (n, expected) in cases {
        assert_eq!(format_number(n), expected, "{n:?}");
    }
}

#[test]
fn canonical_text_is_unquoted() {
    assert_eq!(Value::Letter('a').to_string(), "a");
    assert_eq!(Value::Sentence("hi there".into()).to_string(), "hi there");
    assert_eq!(Value::Logic(true).to_string(), "true");
    assert_eq!(Value::Number(3.0).to_string(), "3.0");
}

#[test]
fn literals() {
    assert_eq!(Value::from_literal("TRUE").ok(), Some(Value::Logic(true)));
    assert_eq!(Value::from_literal("-2.5").ok(), Some(Value::Number(-2.5)));
    assert_eq!(Value::from_literal("'x'").ok(), Some(Value::Letter('x')));
    assert_eq!(
        Value::from_literal("\"a b\"").ok(),
        Some(Value::Sentence("a b".into()))
    );
    assert_eq!(Value::from_literal("\"\"").ok(), Some(Value::Sentence(String::new())));
    assert!(Value::from_literal("nope").is_err());
}

#[test]
fn defaults_per_type() {
    assert_eq!(Value::default_for(Primitive::Number), Value::Number(0.0));
    assert_eq!(Value::default_for(Primitive::Letter), Value::Letter(' '));
    assert_eq!(
        Value::default_for(Primitive::Sentence),
        Value::Sentence(String::new())
    );
    assert_eq!(Value::default_for(Primitive::Logic), Value::Logic(false));
}

#[test]
fn letter_converts_to_number_only_when_digit() {
    assert_eq!(Value::Letter('7').as_number().ok(), Some(7.0));
    let err = Value::Letter('a').as_number().err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("Cannot convert 'a' to NUMBER"));
}

#[test]
fn numeric_sentence_reads_as_number() {
    assert_eq!(Value::Sentence(" 42 ".into()).as_number().ok(), Some(42.0));
    assert!(Value::Sentence("4x".into()).as_number().is_err());
}

#[test]
fn sentence_true_reads_as_logic() {
    assert_eq!(Value::Sentence("True".into()).as_logic().ok(), Some(true));
    assert!(Value::Number(1.0).as_logic().is_err());
}

#[test]
fn coercion_widens_letters() {
    assert_eq!(
        Value::Letter('b').coerce_to(Primitive::Sentence).ok(),
        Some(Value::Sentence("b".into()))
    );
    assert_eq!(
        Value::Letter('3').coerce_to(Primitive::Number).ok(),
        Some(Value::Number(3.0))
    );
    assert!(Value::Number(1.0).coerce_to(Primitive::Letter).is_err());
}

#[test]
fn equality_rules() {
    assert!(Value::Number(0.1 + 0.2).loose_eq(&Value::Number(0.3)));
    assert!(!Value::Number(1.0).loose_eq(&Value::Number(1.001)));
    assert!(Value::Letter('a').loose_eq(&Value::Sentence("a".into())));
    assert!(!Value::Sentence("A".into()).loose_eq(&Value::Sentence("a".into())));
    assert!(Value::Letter('5').loose_eq(&Value::Number(5.0)));
    assert!(Value::Logic(false).loose_eq(&Value::Logic(false)));
}

#[test]
fn switch_text_match_ignores_case() {
    assert!(Value::Sentence("Yes".into()).switch_matches(&Value::Sentence("yES".into())));
    assert!(Value::Sentence("Y".into()).switch_matches(&Value::Letter('y')));
    assert!(!Value::Letter('Y').switch_matches(&Value::Letter('y')));
    assert!(Value::Number(2.0).switch_matches(&Value::Number(2.0)));
}

proptest! {
    #[test]
    fn number_text_round_trips(n in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let text = format_number(n);
        let parsed: f64 = text.parse().map_err(|_| TestCaseError::fail(text.clone()))?;
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn integral_numbers_in_plain_range_end_in_point_zero(n in -9_999_999i32..10_000_000i32) {
        let text = format_number(f64::from(n));
        prop_assert!(text.ends_with(".0"), "{}", text);
        prop_assert!(!text.contains('E'));
    }
}
