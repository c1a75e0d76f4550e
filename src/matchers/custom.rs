use crate::equality::MatchersUtil;
use crate::value::Value;

#[derive(Debug, Clone)]
/// The pair of values a diff should show when an asymmetric matcher fails,
/// instead of the matcher itself and the value it was compared with.
pub struct DiffHint {
    /// The value shown on the matcher's side.
    pub own: Value,

    /// The value shown on the other side.
    pub other: Value,
}

/// A user-defined asymmetric matcher.
pub trait CustomMatcher {
    /// Decides whether the matcher accepts the given value. The `util` carries
    /// the same custom testers as the comparison which invoked the matcher.
    fn asymmetric_match(&self, other: &Value, util: &MatchersUtil) -> bool;

    /// Returns the values a diff should show when this matcher rejects
    /// `other`, or `None` to show the matcher and `other` themselves.
    fn values_for_diff(&self, other: &Value) -> Option<DiffHint> {
        let _ = other;
        None
    }

    /// Describes the matcher in failure messages.
    fn describe(&self) -> String {
        "<custom asymmetric matcher>".to_string()
    }
}

impl <F: Fn(&Value) -> bool> CustomMatcher for F {
    fn asymmetric_match(&self, other: &Value, _util: &MatchersUtil) -> bool {
        self(other)
    }
}
