use crate::diff::NullDiffBuilder;
use crate::equality::Comparison;
use crate::value::Value;
use super::custom::DiffHint;

/// Every own property of the sample must be present on `other` with an equal
/// value; other properties of `other` are ignored.
pub(super) fn object_containing(sample: &Value, other: &Value, cmp: &mut Comparison) -> bool {
    // unlike `array_containing`, even an empty sample rejects non-objects
    if other.is_primitive() || matches!(other, Value::Function(..)) { return false; }
    let Some(entries) = sample.own_entries() else { return false; };

    entries.iter().all(|(key, expected)| {
        other.get_property(key)
            .map_or(false, |actual| cmp.eq(expected, &actual, &mut NullDiffBuilder))
    })
}

/// Shows the sample against only those properties of `other` which the
/// sample names, so the diff is not cluttered by properties which were
/// ignored.
pub(super) fn object_containing_hint(sample: &Value, other: &Value) -> Option<DiffHint> {
    if !matches!(sample, Value::Object(..)) { return None; }
    if !matches!(other, Value::Object(..) | Value::Array(..)) { return None; }

    let filtered = sample.own_entries()?
        .into_iter()
        .map(|(key, _)| {
            let v = other.get_property(&key).unwrap_or(Value::Undefined);
            (key, v)
        });
    Some(DiffHint {own: sample.clone(), other: Value::object(filtered)})
}

/// Every element of the sample must equal some element of `other`. An empty
/// sample matches anything.
pub(super) fn array_containing(sample: &Value, other: &Value, cmp: &mut Comparison) -> bool {
    let Value::Array(sample) = sample else { return false; };
    let sample = sample.borrow();
    if sample.is_empty() { return true; }
    if !matches!(other, Value::Array(..)) { return false; }

    sample.items.iter().all(|item| cmp.contains(other, item))
}

/// Every entry of the sample must have an entry in `other` with an equal key
/// and an equal value.
pub(super) fn map_containing(sample: &Value, other: &Value, cmp: &mut Comparison) -> bool {
    let (Value::Map(sample), Value::Map(other)) = (sample, other) else { return false; };
    let (sample, other) = (sample.borrow(), other.borrow());

    sample.entries().iter().all(|(key, value)| {
        other.entries().iter().any(|(other_key, other_value)| {
            cmp.eq(other_key, key, &mut NullDiffBuilder)
                && cmp.eq(other_value, value, &mut NullDiffBuilder)
        })
    })
}

/// Every member of the sample must equal some member of `other`.
pub(super) fn set_containing(sample: &Value, other: &Value, cmp: &mut Comparison) -> bool {
    let (Value::Set(sample), Value::Set(other)) = (sample, other) else { return false; };
    let (sample, other) = (sample.borrow(), other.borrow());

    sample.items().iter().all(|item| {
        other.items().iter().any(|other_item| cmp.eq(other_item, item, &mut NullDiffBuilder))
    })
}
