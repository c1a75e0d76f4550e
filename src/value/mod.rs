//! This module contains the dynamic value model which the equality engine
//! compares. Composite values are reference-counted with interior mutability,
//! so that callers can build self-referential structures.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;

use crate::errors::ValueError;
use crate::matchers::AsymmetricMatcher;
use crate::pretty::{DefaultPrettyPrinter, PrettyPrinter};
use crate::utils::text;

mod collections;
mod kind;
mod object;
mod regex_value;
mod scalar;

pub use collections::{ArrayKind, ArrayValue, MapValue, SetValue};
pub use kind::Kind;
pub use object::{Function, ObjectKind, ObjectValue};
pub use regex_value::RegexValue;
pub use scalar::{ErrorValue, Opaque};
pub(crate) use scalar::{primitive_eq, same_value_zero};

/// An insertion-ordered map of property names to values.
pub type PropertyMap = IndexMap<Rc<str>, Value, fxhash::FxBuildHasher>;

#[derive(Clone)]
/// A value which may be compared by the equality engine.
pub enum Value {
    /// The absence of a value.
    Undefined,

    /// The null value.
    Null,

    /// A Boolean value, either `true` or `false`.
    Bool(bool),

    /// A double-precision floating point number.
    Number(f64),

    /// An arbitrary-precision integer, limited here to 128 bits.
    BigInt(i128),

    /// A string value.
    Str(Rc<str>),

    /// An instant in time.
    Date(Rc<DateTime<Utc>>),

    /// A regular expression, with its source pattern and flags.
    Regex(Rc<RegexValue>),

    /// An error, with its type name and message.
    Error(Rc<ErrorValue>),

    /// An array, or an array-like list of captured arguments.
    Array(Rc<RefCell<ArrayValue>>),

    /// A map from keys to values, which may themselves be composite.
    Map(Rc<RefCell<MapValue>>),

    /// A set of unique values.
    Set(Rc<RefCell<SetValue>>),

    /// An object with named properties.
    Object(Rc<RefCell<ObjectValue>>),

    /// A function or class. Functions are only equal to themselves.
    Function(Rc<Function>),

    /// An asymmetric matcher, which is compared by calling its predicate on
    /// the other value.
    Matcher(Rc<AsymmetricMatcher>),

    /// A host object with no comparable structure, such as a promise. Opaque
    /// values are only equal to themselves.
    Opaque(Rc<Opaque>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(Rc::from(s))
    }
}

impl From<Rc<str>> for Value {
    fn from(s: Rc<str>) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vs: Vec<Value>) -> Value {
        Value::array(vs)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Value {
        Value::Date(Rc::new(d))
    }
}

impl From<RegexValue> for Value {
    fn from(r: RegexValue) -> Value {
        Value::Regex(Rc::new(r))
    }
}

impl From<AsymmetricMatcher> for Value {
    fn from(m: AsymmetricMatcher) -> Value {
        Value::Matcher(Rc::new(m))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DefaultPrettyPrinter::default().pp(self))
    }
}

fn property_map<K: AsRef<str>>(entries: impl IntoIterator<Item=(K, Value)>) -> PropertyMap {
    entries.into_iter()
        .map(|(k, v)| (Rc::from(k.as_ref()), v))
        .collect()
}

impl Value {
    /// Creates a new array with the given elements and no extra properties.
    pub fn array(items: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(ArrayValue::new(ArrayKind::Array, items))))
    }

    /// Creates a new array-like list of captured function arguments.
    pub fn arguments(items: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(ArrayValue::new(ArrayKind::Arguments, items))))
    }

    /// Creates a new plain object with the given properties.
    pub fn object<K: AsRef<str>>(entries: impl IntoIterator<Item=(K, Value)>) -> Value {
        Value::new_object(ObjectKind::Plain, property_map(entries))
    }

    /// Creates a new object with no prototype, and the given properties.
    pub fn null_prototype<K: AsRef<str>>(entries: impl IntoIterator<Item=(K, Value)>) -> Value {
        Value::new_object(ObjectKind::NullPrototype, property_map(entries))
    }

    /// Creates a new instance of the given class, with the given properties.
    pub fn instance<K: AsRef<str>>(class: &Rc<Function>, entries: impl IntoIterator<Item=(K, Value)>) -> Value {
        Value::new_object(ObjectKind::Instance(class.clone()), property_map(entries))
    }

    fn new_object(kind: ObjectKind, props: PropertyMap) -> Value {
        Value::Object(Rc::new(RefCell::new(ObjectValue {kind, props})))
    }

    /// Creates a new map with the given entries. Later entries replace
    /// earlier ones with the same key.
    pub fn map(entries: impl IntoIterator<Item=(Value, Value)>) -> Value {
        let mut m = MapValue::default();
        for (k, v) in entries {
            m.insert(k, v);
        }
        Value::Map(Rc::new(RefCell::new(m)))
    }

    /// Creates a new set with the given members. Duplicate members are only
    /// included once.
    pub fn set(items: impl IntoIterator<Item=Value>) -> Value {
        let mut s = SetValue::default();
        for v in items {
            s.insert(v);
        }
        Value::Set(Rc::new(RefCell::new(s)))
    }

    /// Creates a date from a number of milliseconds since the Unix epoch, or
    /// returns `None` if the instant is out of range.
    pub fn date_from_millis(millis: i64) -> Option<Value> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(Value::from)
    }

    /// Compiles a regular expression. The flags may include any of `g`, `i`,
    /// `m`, `s`, `u` and `y`.
    pub fn regex(source: &str, flags: &str) -> Result<Value, ValueError> {
        RegexValue::new(source, flags)
            .map(Value::from)
    }

    /// Creates an error of the given type, such as `TypeError`, with the given
    /// message.
    pub fn error(name: &str, message: &str) -> Value {
        Value::Error(Rc::new(ErrorValue::new(name, message)))
    }

    /// Creates a new function with the given name. Each call returns a
    /// distinct function.
    pub fn function(name: &str) -> Value {
        Value::Function(Function::new(name))
    }

    /// Creates a new opaque host object, such as a promise, identified only by
    /// its tag.
    pub fn opaque(tag: &str) -> Value {
        Value::Opaque(Rc::new(Opaque::new(tag)))
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(..) => Kind::Boolean,
            Value::Number(..) => Kind::Number,
            Value::BigInt(..) => Kind::BigInt,
            Value::Str(..) => Kind::String,
            Value::Date(..) => Kind::Date,
            Value::Regex(..) => Kind::RegExp,
            Value::Error(..) => Kind::Error,
            Value::Array(a) => match a.borrow().kind {
                ArrayKind::Array => Kind::Array,
                ArrayKind::Arguments => Kind::Arguments,
            },
            Value::Map(..) => Kind::Map,
            Value::Set(..) => Kind::Set,
            Value::Object(..) => Kind::Object,
            Value::Function(..) => Kind::Function,
            Value::Matcher(..) => Kind::Matcher,
            Value::Opaque(..) => Kind::Opaque,
        }
    }

    /// Indicates whether this value is `undefined`, `null`, a Boolean, a
    /// number, a bigint or a string.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null | Value::Bool(..) | Value::Number(..) | Value::BigInt(..) | Value::Str(..))
    }

    /// Indicates whether this value is `undefined` or `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Returns the address of this value's shared allocation, or `None` if
    /// the value has no reference identity.
    pub(crate) fn identity(&self) -> Option<usize> {
        let ptr = match self {
            Value::Date(d) => Rc::as_ptr(d) as *const (),
            Value::Regex(r) => Rc::as_ptr(r) as *const (),
            Value::Error(e) => Rc::as_ptr(e) as *const (),
            Value::Array(a) => Rc::as_ptr(a) as *const (),
            Value::Map(m) => Rc::as_ptr(m) as *const (),
            Value::Set(s) => Rc::as_ptr(s) as *const (),
            Value::Object(o) => Rc::as_ptr(o) as *const (),
            Value::Function(f) => Rc::as_ptr(f) as *const (),
            Value::Matcher(m) => Rc::as_ptr(m) as *const (),
            Value::Opaque(o) => Rc::as_ptr(o) as *const (),
            _ => return None,
        };
        Some(ptr as usize)
    }

    /// Indicates whether both values are the same shared allocation.
    pub fn is_identical(&self, other: &Value) -> bool {
        matches!((self.identity(), other.identity()), (Some(a), Some(b)) if a == b)
    }

    /// Returns the matcher if this value is an asymmetric matcher.
    pub fn as_matcher(&self) -> Option<&Rc<AsymmetricMatcher>> {
        match self {
            Value::Matcher(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the string form of a primitive value, as used when searching
    /// for it within a string; composite values have no string form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Undefined => Some("undefined".to_string()),
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(text::format_number(*n)),
            Value::BigInt(i) => Some(i.to_string()),
            Value::Str(s) => Some(s.to_string()),
            _ => None,
        }
    }

    /// Looks up a property of this value. Arrays have `length`, index and
    /// extra properties; errors have `name` and `message`; maps and sets have
    /// `size`.
    pub fn get_property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.borrow().props.get(key).cloned(),
            Value::Array(a) => a.borrow().get_property(key),
            Value::Error(e) => match key {
                "name" => Some(e.name().into()),
                "message" => Some(e.message().into()),
                _ => None,
            },
            Value::Map(m) if key == "size" => Some(m.borrow().len().into()),
            Value::Set(s) if key == "size" => Some(s.borrow().len().into()),
            _ => None,
        }
    }

    /// Returns this value's own enumerable properties, in order, if it is an
    /// object or an array. Array elements are keyed by their index.
    pub fn own_entries(&self) -> Option<Vec<(Rc<str>, Value)>> {
        match self {
            Value::Object(o) => Some(o.borrow().props.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            Value::Array(a) => {
                let a = a.borrow();
                let indices = a.items.iter()
                    .enumerate()
                    .map(|(i, v)| (Rc::<str>::from(i.to_string()), v.clone()));
                let props = a.props.iter()
                    .map(|(k, v)| (k.clone(), v.clone()));
                Some(indices.chain(props).collect())
            },
            _ => None,
        }
    }

    /// Sets a named property on an object, or an index, `length` or extra
    /// property on an array. Returns `false` if this value cannot hold
    /// properties, or an array cannot take the given index or length.
    pub fn set_property(&self, key: &str, value: Value) -> bool {
        match self {
            Value::Object(o) => { o.borrow_mut().props.insert(key.into(), value); true },
            Value::Array(a) => a.borrow_mut().set_property(key, value),
            _ => false,
        }
    }

    /// Appends an element to an array. Returns `false` if this value is not
    /// an array.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Array(a) => { a.borrow_mut().items.push(value); true },
            _ => false,
        }
    }

    /// Inserts an entry into a map. Returns `false` if this value is not a
    /// map.
    pub fn map_insert(&self, key: Value, value: Value) -> bool {
        match self {
            Value::Map(m) => { m.borrow_mut().insert(key, value); true },
            _ => false,
        }
    }

    /// Adds a member to a set. Returns `false` if this value is not a set.
    pub fn set_add(&self, value: Value) -> bool {
        match self {
            Value::Set(s) => { s.borrow_mut().insert(value); true },
            _ => false,
        }
    }
}
