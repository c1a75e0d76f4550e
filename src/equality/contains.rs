use crate::diff::NullDiffBuilder;
use crate::value::Value;
use super::Comparison;

impl <'a> Comparison<'a> {
    /// Determines whether `needle` is in `haystack`. Strings are searched for
    /// the needle's text, arrays for a structurally equal element, and sets
    /// for an identical member only.
    pub(crate) fn contains(&mut self, haystack: &Value, needle: &Value) -> bool {
        match haystack {
            Value::Str(s) => needle.to_text()
                .map_or(false, |t| s.contains(t.as_str())),
            Value::Set(set) => set.borrow().contains(needle),
            Value::Array(array) => {
                let array = array.borrow();
                array.items.iter()
                    .any(|item| self.eq(item, needle, &mut NullDiffBuilder))
            },
            _ => false,
        }
    }
}
