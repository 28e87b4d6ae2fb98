//! The runtime store.
//!
//! One flat namespace per run. Block structure exists only at validation
//! time: once a declaration executes, its name is visible and mutable for
//! the rest of the run, wherever the declaration appeared.

use rustc_hash::FxHashMap;

use cl_ir::{Primitive, Type};

use crate::array::ArrayValue;
use crate::errors::{not_an_array, type_mismatch, undefined_variable, EvalResult};
use crate::value::Value;

/// A stored name: its declared type and current value.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub ty: Type,
    pub value: Value,
}

#[derive(Debug, Default)]
pub struct Store {
    bindings: FxHashMap<String, Binding>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    /// Install (or reinstall) `name`. Re-executing a declaration, for
    /// example inside a loop body, resets the value.
    pub fn declare(&mut self, name: &str, ty: Type, value: Value) {
        self.bindings
            .insert(name.to_string(), Binding { ty, value });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn binding(&self, name: &str) -> EvalResult<&Binding> {
        self.bindings
            .get(name)
            .ok_or_else(|| undefined_variable(name))
    }

    pub fn get(&self, name: &str) -> EvalResult<&Value> {
        self.binding(name).map(|binding| &binding.value)
    }

    /// The scalar declared type of `name`.
    pub fn declared_primitive(&self, name: &str) -> EvalResult<Primitive> {
        let binding = self.binding(name)?;
        binding
            .ty
            .primitive()
            .ok_or_else(|| type_mismatch("scalar variable", binding.ty))
    }

    /// Store `value` into an existing scalar, coercing it to the declared
    /// type.
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let prim = self.declared_primitive(name)?;
        let value = value.coerce_to(prim)?;
        self.put(name, value)
    }

    /// Overwrite the raw value of an existing name, without coercion.
    pub fn put(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let binding = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| undefined_variable(name))?;
        binding.value = value;
        Ok(())
    }

    pub fn array(&self, name: &str) -> EvalResult<&ArrayValue> {
        match self.get(name)? {
            Value::Array(array) => Ok(array),
            _ => Err(not_an_array(name)),
        }
    }

    pub fn array_mut(&mut self, name: &str) -> EvalResult<&mut ArrayValue> {
        let binding = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| undefined_variable(name))?;
        match &mut binding.value {
            Value::Array(array) => Ok(array),
            _ => Err(not_an_array(name)),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Forget everything; the next run starts from an empty store.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests;
