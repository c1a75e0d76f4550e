//! This module contains the equality and containment engines, and the
//! `MatchersUtil` through which callers configure and invoke them.

use tracing::debug_span;

use crate::config::Config;
use crate::diff::{DiffBuilder, NullDiffBuilder};
use crate::message;
use crate::pretty::{DefaultPrettyPrinter, PrettyPrinter};
use crate::value::Value;

mod comparison;
mod contains;
mod stack;
mod tester;

pub(crate) use comparison::Comparison;
pub use tester::CustomTester;

/// Compares values structurally, consulting the registered custom testers for
/// every pair, and renders values for failure messages.
pub struct MatchersUtil {
    config: Config,
    printer: Option<Box<dyn PrettyPrinter>>,
    testers: Vec<Box<dyn CustomTester>>,
}

impl Default for MatchersUtil {
    fn default() -> MatchersUtil {
        MatchersUtil::new()
    }
}

impl MatchersUtil {
    /// Creates a `MatchersUtil` with the default configuration, the default
    /// pretty-printer and no custom testers.
    pub fn new() -> MatchersUtil {
        MatchersUtil::with_config(Config::default())
    }

    /// Creates a `MatchersUtil` whose default pretty-printer uses the given
    /// limits.
    pub fn with_config(config: Config) -> MatchersUtil {
        MatchersUtil {config, printer: None, testers: Vec::new()}
    }

    /// Replaces the pretty-printer used for failure messages.
    pub fn with_pretty_printer(mut self, printer: impl PrettyPrinter + 'static) -> MatchersUtil {
        self.printer = Some(Box::new(printer));
        self
    }

    /// Registers a custom tester. Testers are consulted in the order they
    /// were registered, and the first to return a verdict decides.
    pub fn with_custom_tester(mut self, tester: impl CustomTester + 'static) -> MatchersUtil {
        self.testers.push(Box::new(tester));
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn testers(&self) -> &[Box<dyn CustomTester>] {
        &self.testers
    }

    /// Renders a value with the configured pretty-printer.
    pub fn pp(&self, value: &Value) -> String {
        match &self.printer {
            Some(printer) => printer.pp(value),
            None => DefaultPrettyPrinter::new(self.config).pp(value),
        }
    }

    /// Determines whether `a` and `b` are structurally equal.
    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        self.equals_with_diff(a, b, &mut NullDiffBuilder)
    }

    /// Determines whether `actual` and `expected` are structurally equal,
    /// reporting every difference found to `diff`.
    pub fn equals_with_diff(&self, actual: &Value, expected: &Value, diff: &mut dyn DiffBuilder) -> bool {
        let _span = debug_span!("equals").entered();
        diff.set_roots(actual, expected);
        Comparison::new(self).eq(actual, expected, diff)
    }

    /// Determines whether `needle` is in `haystack`: a substring of a string,
    /// an equal element of an array, or an identical member of a set.
    pub fn contains(&self, haystack: &Value, needle: &Value) -> bool {
        let _span = debug_span!("contains").entered();
        Comparison::new(self).contains(haystack, needle)
    }

    /// Builds the failure message for a matcher, such as
    /// `Expected 'foo' not to bar 'quux'.`
    pub fn build_failure_message(&self, matcher_name: &str, is_not: bool, actual: &Value, expected: &[Value]) -> String {
        message::build_failure_message(self, matcher_name, is_not, actual, expected)
    }
}
