use cl_ir::Primitive;
use proptest::prelude::*;

use super::*;

#[test]
fn test_compatible_is_reflexive_for_primitives() {
    for prim in Primitive::ALL {
        let ty = Type::from(prim);
        assert!(is_compatible(ty, ty), "{ty}");
    }
}

#[test]
fn test_compatible_is_directed() {
    assert!(is_compatible(Type::Number, Type::Letter));
    assert!(!is_compatible(Type::Letter, Type::Number));
    assert!(is_compatible(Type::Sentence, Type::Letter));
    assert!(!is_compatible(Type::Letter, Type::Sentence));
}

#[test]
fn test_compatible_is_not_transitive() {
    // NUMBER <- LETTER and SENTENCE <- LETTER, but nothing links NUMBER and SENTENCE.
    assert!(!is_compatible(Type::Number, Type::Sentence));
    assert!(!is_compatible(Type::Sentence, Type::Number));
    assert!(!is_compatible(Type::Logic, Type::Number));
}

#[test]
fn test_arrays_are_compatible_only_with_same_element() {
    let nums = Type::Array(Primitive::Number);
    let letters = Type::Array(Primitive::Letter);
    assert!(is_compatible(nums, nums));
    assert!(!is_compatible(nums, letters));
    assert!(!is_compatible(Type::Number, nums));
}

#[test]
fn test_equality_accepts_either_direction() {
    assert!(is_equality_compatible(Type::Letter, Type::Number));
    assert!(is_equality_compatible(Type::Number, Type::Letter));
    assert!(!is_equality_compatible(Type::Number, Type::Sentence));
    assert!(!is_equality_compatible(Type::Logic, Type::Letter));
}

#[test]
fn test_infer_literal_forms() {
    assert_eq!(infer_literal("TRUE"), Type::Logic);
    assert_eq!(infer_literal("false"), Type::Logic);
    assert_eq!(infer_literal("42"), Type::Number);
    assert_eq!(infer_literal("-3.25"), Type::Number);
    assert_eq!(infer_literal("'a'"), Type::Letter);
    assert_eq!(infer_literal("\"hello world\""), Type::Sentence);
    assert_eq!(infer_literal("\"\""), Type::Sentence);
    assert_eq!(infer_literal("hello"), Type::Unknown);
    assert_eq!(infer_literal("1.5e3"), Type::Unknown);
}

#[test]
fn test_check_literal_problems() {
    assert_eq!(check_literal("'ab'"), Err(LiteralProblem::LetterTooLong));
    assert_eq!(check_literal("''"), Err(LiteralProblem::EmptyLetter));
    assert_eq!(check_literal("'a"), Err(LiteralProblem::MismatchedSingle));
    assert_eq!(check_literal("\"abc"), Err(LiteralProblem::MismatchedDouble));
    assert_eq!(check_literal("abc"), Err(LiteralProblem::Invalid));
}

#[test]
fn test_numeric_literal_shape() {
    assert!(is_numeric_literal("0"));
    assert!(is_numeric_literal("-12.50"));
    assert!(!is_numeric_literal("-"));
    assert!(!is_numeric_literal("1."));
    assert!(!is_numeric_literal(".5"));
    assert!(!is_numeric_literal("+1"));
    assert!(!is_numeric_literal("1.2.3"));
}

#[test]
fn test_identifiers() {
    assert!(is_valid_identifier("x"));
    assert!(is_valid_identifier("total_2"));
    assert!(!is_valid_identifier("2x"));
    assert!(!is_valid_identifier("_x"));
    assert!(!is_valid_identifier("a-b"));
    assert!(!is_valid_identifier(""));
}

fn any_type() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::Number),
        Just(Type::Letter),
        Just(Type::Sentence),
        Just(Type::Logic),
        Just(Type::Unknown),
        Just(Type::Array(Primitive::Number)),
        Just(Type::Array(Primitive::Sentence)),
    ]
}

proptest! {
    #[test]
    fn equality_compatibility_is_symmetric(a in any_type(), b in any_type()) {
        prop_assert_eq!(is_equality_compatible(a, b), is_equality_compatible(b, a));
    }

    #[test]
    fn mutual_compatibility_implies_identity(a in any_type(), b in any_type()) {
        if is_compatible(a, b) && is_compatible(b, a) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn integer_literals_are_numbers(n in any::<i64>()) {
        prop_assert_eq!(infer_literal(&n.to_string()), Type::Number);
    }
}
