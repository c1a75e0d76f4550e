use std::rc::Rc;

use super::scalar::same_value_zero;
use super::{PropertyMap, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Distinguishes true arrays from other array-like values.
pub enum ArrayKind {
    /// An ordinary array.
    Array,

    /// The list of arguments captured from a function call.
    Arguments,
}

#[derive(Debug, Clone)]
/// The contents of an array or array-like value.
pub struct ArrayValue {
    /// Whether this is a true array or a list of captured arguments.
    pub kind: ArrayKind,

    /// The indexed elements; holes are represented as `Value::Undefined`.
    pub items: Vec<Value>,

    /// Own enumerable properties other than indices and `length`.
    pub props: PropertyMap,
}

impl ArrayValue {
    /// Creates an array-like value with the given elements and no extra
    /// properties.
    pub fn new(kind: ArrayKind, items: Vec<Value>) -> ArrayValue {
        ArrayValue {kind, items, props: PropertyMap::default()}
    }

    /// Returns the length of the array.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(super) fn get_property(&self, key: &str) -> Option<Value> {
        if key == "length" {
            Some(self.items.len().into())
        } else if let Some(i) = canonical_index(key) {
            self.items.get(i).cloned()
        } else {
            self.props.get(key).cloned()
        }
    }

    /// Setting an index property beyond the end of the array fills the gap
    /// with holes; setting `length` resizes the array. Returns `false` if the
    /// length is not a valid array length, or the array cannot grow that far.
    pub(super) fn set_property(&mut self, key: &str, value: Value) -> bool {
        if key == "length" {
            let Value::Number(n) = value else { return false; };
            if !(0.0..=MAX_LENGTH as f64).contains(&n) || n.fract() != 0.0 {
                return false;
            }
            self.resize(n as usize)
        } else if let Some(i) = canonical_index(key) {
            if i >= self.items.len() && !self.resize(i + 1) {
                return false;
            }
            self.items[i] = value;
            true
        } else {
            self.props.insert(Rc::from(key), value);
            true
        }
    }

    fn resize(&mut self, len: usize) -> bool {
        let additional = len.saturating_sub(self.items.len());
        if self.items.try_reserve_exact(additional).is_err() {
            return false;
        }
        self.items.resize(len, Value::Undefined);
        true
    }
}

/// The greatest valid array length; indices range over `0..MAX_LENGTH`.
const MAX_LENGTH: usize = u32::MAX as usize;

/// Parses an array index written in canonical form, e.g. `3` but not `03`.
/// Larger numeric keys such as `4294967295` are ordinary properties.
fn canonical_index(key: &str) -> Option<usize> {
    let i: usize = key.parse().ok()?;
    (i < MAX_LENGTH && i.to_string() == key).then_some(i)
}

#[derive(Debug, Clone, Default)]
/// The entries of a map, in insertion order. Keys are unique under
/// SameValueZero, so two distinct but structurally equal objects are
/// different keys.
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    /// Inserts an entry, replacing the value of an existing entry with the
    /// same key.
    pub fn insert(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| same_value_zero(k, &key)) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value associated with the given key, compared by
    /// SameValueZero.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter()
            .find(|(k, _)| same_value_zero(k, key))
            .map(|(_, v)| v)
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Indicates whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
/// The members of a set, in insertion order, unique under SameValueZero.
pub struct SetValue {
    items: Vec<Value>,
}

impl SetValue {
    /// Adds a member, unless an identical member is already present.
    pub fn insert(&mut self, value: Value) {
        if !self.contains(&value) {
            self.items.push(value);
        }
    }

    /// Indicates whether the set has an identical member. A composite value
    /// is only contained if that same allocation was added.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|v| same_value_zero(v, value))
    }

    /// Returns the members in insertion order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
