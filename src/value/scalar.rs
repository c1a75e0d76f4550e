use std::rc::Rc;

use super::Value;

#[derive(Debug)]
/// An error value. Errors are compared by their type name and message only.
pub struct ErrorValue {
    name: Rc<str>,
    message: Rc<str>,
}

impl ErrorValue {
    /// Creates an error of the given type with the given message.
    pub fn new(name: &str, message: &str) -> ErrorValue {
        ErrorValue {name: Rc::from(name), message: Rc::from(message)}
    }

    /// Returns the type name, such as `Error` or `TypeError`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug)]
/// A host object with no structure the engine can inspect.
pub struct Opaque {
    tag: Rc<str>,
}

impl Opaque {
    /// Creates an opaque object with the given tag, such as `Promise`.
    pub fn new(tag: &str) -> Opaque {
        Opaque {tag: Rc::from(tag)}
    }

    /// Returns the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Compares two numbers by value, except that `NaN` equals itself and `0`
/// does not equal `-0`.
fn numbers_equal(x: f64, y: f64) -> bool {
    if x.is_nan() {
        y.is_nan()
    } else if x == 0.0 && y == 0.0 {
        x.is_sign_negative() == y.is_sign_negative()
    } else {
        x == y
    }
}

/// Determines whether two values are equal by value, where at least one of
/// them is primitive. Values of different kinds are never equal.
pub(crate) fn primitive_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(b1), Value::Bool(b2)) => b1 == b2,
        (Value::Number(n1), Value::Number(n2)) => numbers_equal(*n1, *n2),
        (Value::BigInt(i1), Value::BigInt(i2)) => i1 == i2,
        (Value::Str(s1), Value::Str(s2)) => s1 == s2,
        _ => false,
    }
}

/// The SameValueZero relation used for map keys and set members: primitives
/// by value with `NaN` equal to itself and `0` equal to `-0`, and everything
/// else, dates included, by reference identity.
pub(crate) fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(n1), Value::Number(n2)) => n1 == n2 || (n1.is_nan() && n2.is_nan()),
        _ if a.is_primitive() || b.is_primitive() => primitive_eq(a, b),
        _ => a.is_identical(b),
    }
}
