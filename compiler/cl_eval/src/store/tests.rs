use super::*;
use crate::errors::EvalErrorKind;

#[test]
fn flat_namespace() {
    let mut store = Store::new();
    assert!(store.is_empty());
    store.declare("x", Type::Number, Value::Number(1.0));
    assert!(store.contains("x"));
    assert_eq!(store.get("x").ok(), Some(&Value::Number(1.0)));
    assert_eq!(store.len(), 1);

    store.clear();
    assert!(!store.contains("x"));
}

#[test]
fn missing_names_fail_at_runtime() {
    let store = Store::new();
    assert_eq!(
        store.get("ghost").map_err(|e| e.kind),
        Err(EvalErrorKind::UndefinedVariable {
            name: "ghost".to_string()
        })
    );
}

#[test]
fn assign_coerces_to_declared_type() {
    let mut store = Store::new();
    store.declare("s", Type::Sentence, Value::Sentence(String::new()));
    store
        .assign("s", Value::Letter('q'))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(store.get("s").ok(), Some(&Value::Sentence("q".into())));

    store.declare("n", Type::Number, Value::Number(0.0));
    assert!(store.assign("n", Value::Letter('z')).is_err());
    assert_eq!(store.get("n").ok(), Some(&Value::Number(0.0)));
}

#[test]
fn put_keeps_raw_shape() {
    let mut store = Store::new();
    store.declare("flag", Type::Logic, Value::Logic(false));
    store
        .put("flag", Value::Sentence("true".into()))
        .unwrap_or_else(|e| panic!("{e}"));
    let binding = store.binding("flag").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(binding.ty, Type::Logic);
    assert_eq!(binding.value, Value::Sentence("true".into()));
}

#[test]
fn array_access() {
    let mut store = Store::new();
    store.declare(
        "xs",
        Type::Array(Primitive::Number),
        Value::Array(ArrayValue::new(Primitive::Number)),
    );
    store.declare("n", Type::Number, Value::Number(0.0));

    store
        .array_mut("xs")
        .and_then(|xs| xs.push(Value::Number(2.0)))
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(store.array("xs").map(ArrayValue::len).ok(), Some(1));
    assert_eq!(
        store.array("n").map_err(|e| e.to_string()),
        Err("Variable is not an array: n".to_string())
    );
    assert!(store.declared_primitive("xs").is_err());
}
