use std::fmt;
use std::rc::Rc;

use crate::utils::text::is_identifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// One step from a value to one of its sub-values.
pub enum PathSegment {
    /// A named property, such as an object key or an array's `length`.
    Key(Rc<str>),

    /// An array index.
    Index(usize),
}

impl PathSegment {
    /// Creates a segment for a named property.
    pub fn key(name: &str) -> PathSegment {
        PathSegment::Key(Rc::from(name))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) if is_identifier(k) => write!(f, ".{k}"),
            PathSegment::Key(k) => write!(f, "['{}']", k.replace('\'', "\\'")),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A path from the root of a comparison, rendered like `$.a[0]['b c']`.
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Returns the segments of this path, from the root.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Indicates whether this is the path of the root values themselves.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(super) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(super) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self.segments.iter() {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
