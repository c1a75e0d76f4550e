use std::fmt;
use std::rc::Rc;

use crate::value::{Function, Kind, ObjectKind, Value};

#[derive(Debug, Clone)]
/// The category of values matched by an `Any` matcher.
pub enum AnyType {
    /// Any number.
    Number,

    /// Any string.
    String,

    /// Any Boolean.
    Boolean,

    /// Any bigint.
    BigInt,

    /// Any function or class.
    Function,

    /// Any value which is not primitive and not a function: arrays, maps,
    /// sets, dates, regexes, errors, objects and host objects.
    Object,

    /// Any true array; captured argument lists do not match.
    Array,

    /// Any map.
    Map,

    /// Any set.
    Set,

    /// Any date.
    Date,

    /// Any regex.
    RegExp,

    /// Any error, whatever its type name.
    Error,

    /// Any instance of the given class.
    Instance(Rc<Function>),
}

impl AnyType {
    /// Indicates whether the given value belongs to this category.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            AnyType::Number => value.kind() == Kind::Number,
            AnyType::String => value.kind() == Kind::String,
            AnyType::Boolean => value.kind() == Kind::Boolean,
            AnyType::BigInt => value.kind() == Kind::BigInt,
            AnyType::Function => value.kind() == Kind::Function,
            AnyType::Object => !value.is_primitive() && value.kind() != Kind::Function,
            AnyType::Array => value.kind() == Kind::Array,
            AnyType::Map => value.kind() == Kind::Map,
            AnyType::Set => value.kind() == Kind::Set,
            AnyType::Date => value.kind() == Kind::Date,
            AnyType::RegExp => value.kind() == Kind::RegExp,
            AnyType::Error => value.kind() == Kind::Error,
            AnyType::Instance(class) => match value {
                Value::Object(o) => matches!(&o.borrow().kind, ObjectKind::Instance(c) if Rc::ptr_eq(c, class)),
                _ => false,
            },
        }
    }
}

impl PartialEq for AnyType {
    fn eq(&self, other: &AnyType) -> bool {
        match (self, other) {
            (AnyType::Instance(c1), AnyType::Instance(c2)) => Rc::ptr_eq(c1, c2),
            (t1, t2) => std::mem::discriminant(t1) == std::mem::discriminant(t2),
        }
    }
}
impl Eq for AnyType {}

impl fmt::Display for AnyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnyType::Number => "Number",
            AnyType::String => "String",
            AnyType::Boolean => "Boolean",
            AnyType::BigInt => "BigInt",
            AnyType::Function => "Function",
            AnyType::Object => "Object",
            AnyType::Array => "Array",
            AnyType::Map => "Map",
            AnyType::Set => "Set",
            AnyType::Date => "Date",
            AnyType::RegExp => "RegExp",
            AnyType::Error => "Error",
            AnyType::Instance(class) => class.name(),
        })
    }
}
