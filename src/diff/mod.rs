//! This module declares the interface through which the equality engine
//! reports where two values differ, and two implementations of it.

use std::rc::Rc;

use crate::value::Value;

mod path;
mod recorder;

pub use path::{Path, PathSegment};
pub use recorder::{DiffRecorder, Record};

/// Receives the mismatches found during a comparison, each at the path where
/// it was found.
pub trait DiffBuilder {
    /// Called once with the two values of a top-level comparison.
    fn set_roots(&mut self, actual: &Value, expected: &Value);

    /// Descends into a sub-value. The implementation must invoke `block`
    /// exactly once, before returning; mismatches recorded from within it
    /// belong to the extended path.
    fn with_path(&mut self, segment: PathSegment, block: &mut dyn FnMut(&mut dyn DiffBuilder));

    /// Records a mismatch at the current path.
    fn record_mismatch(&mut self, mismatch: Mismatch);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Describes why two values at some path were found to be unequal.
pub enum MismatchReason {
    /// The values differ.
    Unequal,

    /// Both values are objects, but they were constructed differently.
    ConstructorsDiffer,

    /// The values have different sets of own properties.
    KeysDiffer {
        /// Properties of the expected value which the actual value lacks.
        missing: Vec<Rc<str>>,

        /// Properties of the actual value which the expected value lacks.
        extra: Vec<Rc<str>>,
    },

    /// The actual array has an element beyond the end of the expected array.
    UnexpectedElement,

    /// An asymmetric matcher rejected the other value.
    Unmatched,
}

#[derive(Debug, Clone)]
/// A single difference found by the equality engine.
pub struct Mismatch {
    /// The value on the actual side, or what a matcher chose to show for it.
    pub actual: Value,

    /// The value on the expected side, or what a matcher chose to show for it.
    pub expected: Value,

    /// Why the values are unequal.
    pub reason: MismatchReason,
}

impl Mismatch {
    /// Creates a new mismatch.
    pub fn new(actual: Value, expected: Value, reason: MismatchReason) -> Mismatch {
        Mismatch {actual, expected, reason}
    }
}

#[derive(Debug, Default, Clone, Copy)]
/// A diff builder which ignores everything, for comparisons whose outcome is
/// all that matters.
pub struct NullDiffBuilder;

impl DiffBuilder for NullDiffBuilder {
    fn set_roots(&mut self, _actual: &Value, _expected: &Value) {}

    fn with_path(&mut self, _segment: PathSegment, block: &mut dyn FnMut(&mut dyn DiffBuilder)) {
        block(self);
    }

    fn record_mismatch(&mut self, _mismatch: Mismatch) {}
}
