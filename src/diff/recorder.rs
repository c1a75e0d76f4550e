use crate::pretty::PrettyPrinter;
use crate::value::Value;
use super::{DiffBuilder, Mismatch, MismatchReason, Path, PathSegment};

#[derive(Debug, Clone)]
/// A mismatch, together with the path at which it was recorded.
pub struct Record {
    /// Where the mismatch was found.
    pub path: Path,

    /// The mismatch itself.
    pub mismatch: Mismatch,
}

#[derive(Debug, Default)]
/// A diff builder which keeps every mismatch reported to it, and can render
/// them as a failure message.
pub struct DiffRecorder {
    roots: Option<(Value, Value)>,
    path: Path,
    records: Vec<Record>,
}

impl DiffRecorder {
    /// Creates an empty recorder.
    pub fn new() -> DiffRecorder {
        DiffRecorder::default()
    }

    /// Returns the actual and expected values of the top-level comparison,
    /// if one has started.
    pub fn roots(&self) -> Option<(&Value, &Value)> {
        self.roots.as_ref().map(|(a, b)| (a, b))
    }

    /// Returns the recorded mismatches, in the order they were found.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Indicates whether no mismatches have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders each recorded mismatch as a sentence, one per line.
    pub fn message(&self, printer: &dyn PrettyPrinter) -> String {
        self.records.iter()
            .map(|r| describe(r, printer))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DiffBuilder for DiffRecorder {
    fn set_roots(&mut self, actual: &Value, expected: &Value) {
        self.roots = Some((actual.clone(), expected.clone()));
    }

    fn with_path(&mut self, segment: PathSegment, block: &mut dyn FnMut(&mut dyn DiffBuilder)) {
        self.path.push(segment);
        block(self);
        self.path.pop();
    }

    fn record_mismatch(&mut self, mismatch: Mismatch) {
        self.records.push(Record {path: self.path.clone(), mismatch});
    }
}

fn describe(record: &Record, printer: &dyn PrettyPrinter) -> String {
    let Record {path, mismatch} = record;
    match &mismatch.reason {
        MismatchReason::Unequal | MismatchReason::Unmatched => {
            let actual = printer.pp(&mismatch.actual);
            let expected = printer.pp(&mismatch.expected);
            if path.is_root() {
                format!("Expected {actual} to equal {expected}.")
            } else {
                format!("Expected {path} = {actual} to equal {expected}.")
            }
        },
        MismatchReason::ConstructorsDiffer => {
            format!("Expected {path} to be a kind of {}, but was {}.", constructor_name(&mismatch.expected), printer.pp(&mismatch.actual))
        },
        MismatchReason::KeysDiffer {missing, extra} => {
            let mut lines = Vec::new();
            if !missing.is_empty() {
                lines.push(format!("Expected {path} to have properties {}.", missing.join(", ")));
            }
            if !extra.is_empty() {
                lines.push(format!("Expected {path} not to have properties {}.", extra.join(", ")));
            }
            lines.join("\n")
        },
        MismatchReason::UnexpectedElement => {
            format!("Unexpected {path} = {} in array.", printer.pp(&mismatch.actual))
        },
    }
}

fn constructor_name(value: &Value) -> String {
    match value {
        Value::Object(o) => o.borrow().kind.constructor_name().to_string(),
        v => v.kind().to_string(),
    }
}
