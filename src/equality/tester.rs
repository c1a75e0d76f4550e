use crate::value::Value;

/// A caller-supplied rule which is consulted before the default comparison of
/// every pair of values, including nested ones.
pub trait CustomTester {
    /// Returns `Some(verdict)` to decide whether the values are equal, or
    /// `None` to defer to later testers and then the default rules.
    fn test(&self, a: &Value, b: &Value) -> Option<bool>;
}

impl <F: Fn(&Value, &Value) -> Option<bool>> CustomTester for F {
    fn test(&self, a: &Value, b: &Value) -> Option<bool> {
        self(a, b)
    }
}
