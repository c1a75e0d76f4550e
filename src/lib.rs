#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! This crate provides the structural equality engine behind test assertions:
//! deep comparison of possibly-cyclic values, asymmetric matchers, custom
//! testers, containment checks, mismatch diffs and failure messages.

pub mod config;
pub mod diff;
pub mod equality;
pub mod errors;
pub mod matchers;
pub mod message;
pub mod pretty;
pub mod utils;
pub mod value;

pub use config::Config;
pub use diff::{DiffBuilder, DiffRecorder, Mismatch, MismatchReason, NullDiffBuilder, PathSegment};
pub use equality::{CustomTester, MatchersUtil};
pub use matchers::{AnyType, AsymmetricMatcher, CustomMatcher, DiffHint};
pub use pretty::{DefaultPrettyPrinter, PrettyPrinter};
pub use value::{Function, Kind, Value};
