//! This module declares the asymmetric matchers: values which, when compared
//! with another value, decide equality by testing that value instead of by
//! structural comparison.

use std::fmt;
use std::rc::Rc;

use crate::equality::Comparison;
use crate::errors::ValueError;
use crate::pretty::DefaultPrettyPrinter;
use crate::value::{Function, RegexValue, Value};

mod any;
mod containing;
mod custom;

pub use any::AnyType;
pub use custom::{CustomMatcher, DiffHint};

/// An asymmetric matcher.
pub enum AsymmetricMatcher {
    /// Matches any value of the given category.
    Any(AnyType),

    /// Matches anything except `null` and `undefined`.
    Anything,

    /// Matches any object or array having at least the sample's properties,
    /// with equal values.
    ObjectContaining(Value),

    /// Matches any array containing each element of the sample array.
    ArrayContaining(Value),

    /// Matches any map containing each entry of the sample map.
    MapContaining(Value),

    /// Matches any set containing each member of the sample set.
    SetContaining(Value),

    /// Matches any string in which the regex finds a match.
    StringMatching(Rc<RegexValue>),

    /// A user-defined matcher.
    Custom(Rc<dyn CustomMatcher>),
}

impl AsymmetricMatcher {
    /// Runs this matcher's predicate on the other side of a comparison.
    pub(crate) fn matches(&self, other: &Value, cmp: &mut Comparison) -> bool {
        match self {
            AsymmetricMatcher::Any(t) => t.matches(other),
            AsymmetricMatcher::Anything => !other.is_nullish(),
            AsymmetricMatcher::ObjectContaining(sample) => containing::object_containing(sample, other, cmp),
            AsymmetricMatcher::ArrayContaining(sample) => containing::array_containing(sample, other, cmp),
            AsymmetricMatcher::MapContaining(sample) => containing::map_containing(sample, other, cmp),
            AsymmetricMatcher::SetContaining(sample) => containing::set_containing(sample, other, cmp),
            AsymmetricMatcher::StringMatching(r) => matches!(other, Value::Str(s) if r.test(s)),
            AsymmetricMatcher::Custom(m) => m.asymmetric_match(other, cmp.util()),
        }
    }

    /// Returns the values a diff should show after this matcher rejected
    /// `other`, if they differ from the matcher and `other` themselves.
    pub(crate) fn values_for_diff(&self, other: &Value) -> Option<DiffHint> {
        match self {
            AsymmetricMatcher::ObjectContaining(sample) => containing::object_containing_hint(sample, other),
            AsymmetricMatcher::Custom(m) => m.values_for_diff(other),
            _ => None,
        }
    }

    /// Returns both samples, if the two matchers are of the same containing
    /// variant; such matchers are equal when their samples are.
    pub(crate) fn samples<'m>(&'m self, other: &'m AsymmetricMatcher) -> Option<(&'m Value, &'m Value)> {
        match (self, other) {
            (AsymmetricMatcher::ObjectContaining(s1), AsymmetricMatcher::ObjectContaining(s2))
            | (AsymmetricMatcher::ArrayContaining(s1), AsymmetricMatcher::ArrayContaining(s2))
            | (AsymmetricMatcher::MapContaining(s1), AsymmetricMatcher::MapContaining(s2))
            | (AsymmetricMatcher::SetContaining(s1), AsymmetricMatcher::SetContaining(s2)) => Some((s1, s2)),
            _ => None,
        }
    }

    /// Compares two matchers which have no samples. Custom matchers are only
    /// equal to themselves.
    pub(crate) fn same_pattern(&self, other: &AsymmetricMatcher) -> bool {
        match (self, other) {
            (AsymmetricMatcher::Any(t1), AsymmetricMatcher::Any(t2)) => t1 == t2,
            (AsymmetricMatcher::Anything, AsymmetricMatcher::Anything) => true,
            (AsymmetricMatcher::StringMatching(r1), AsymmetricMatcher::StringMatching(r2)) => r1 == r2,
            (AsymmetricMatcher::Custom(m1), AsymmetricMatcher::Custom(m2)) => Rc::ptr_eq(m1, m2),
            _ => false,
        }
    }
}

impl fmt::Debug for AsymmetricMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DefaultPrettyPrinter::default().pp_matcher(self))
    }
}

/// Creates a matcher for any value of the given category.
pub fn any(t: AnyType) -> Value {
    AsymmetricMatcher::Any(t).into()
}

/// Creates a matcher for any instance of the given class.
pub fn any_instance_of(class: &Rc<Function>) -> Value {
    any(AnyType::Instance(class.clone()))
}

/// Creates a matcher for anything except `null` and `undefined`.
pub fn anything() -> Value {
    AsymmetricMatcher::Anything.into()
}

/// Creates a matcher for any object or array with at least the properties of
/// the sample, which must be an object or an array.
pub fn object_containing(sample: Value) -> Result<Value, ValueError> {
    if sample.own_entries().is_none() {
        return Err(ValueError::SampleNotObject(sample.kind()));
    }
    Ok(AsymmetricMatcher::ObjectContaining(sample).into())
}

/// Creates a matcher for any array which contains all of the given elements,
/// in any order.
pub fn array_containing(items: Vec<Value>) -> Value {
    AsymmetricMatcher::ArrayContaining(Value::array(items)).into()
}

/// Creates a matcher for any map which contains all of the given entries.
pub fn map_containing(entries: impl IntoIterator<Item=(Value, Value)>) -> Value {
    AsymmetricMatcher::MapContaining(Value::map(entries)).into()
}

/// Creates a matcher for any set which contains all of the given members.
pub fn set_containing(items: impl IntoIterator<Item=Value>) -> Value {
    AsymmetricMatcher::SetContaining(Value::set(items)).into()
}

/// Creates a matcher for any string matching the given regex pattern.
pub fn string_matching(source: &str) -> Result<Value, ValueError> {
    let r = RegexValue::new(source, "")?;
    Ok(AsymmetricMatcher::StringMatching(Rc::new(r)).into())
}

/// Wraps a user-defined matcher as a value.
pub fn custom(m: impl CustomMatcher + 'static) -> Value {
    AsymmetricMatcher::Custom(Rc::new(m)).into()
}
