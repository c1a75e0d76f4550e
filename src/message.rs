//! This module builds the one-line failure messages reported by matchers.

use crate::equality::MatchersUtil;
use crate::utils::text::englishy;
use crate::value::Value;

/// Builds a message of the form `Expected <actual> [not] <verb phrase>
/// <expected>, ...`, where the verb phrase is the camel-case matcher name
/// split into words, and every value is rendered by the util's
/// pretty-printer.
pub fn build_failure_message(util: &MatchersUtil, matcher_name: &str, is_not: bool, actual: &Value, expected: &[Value]) -> String {
    let mut message = format!("Expected {}", util.pp(actual));
    if is_not {
        message.push_str(" not");
    }
    message.push(' ');
    message.push_str(&englishy(matcher_name));

    if !expected.is_empty() {
        let rendered: Vec<String> = expected.iter()
            .map(|v| util.pp(v))
            .collect();
        message.push(' ');
        message.push_str(&rendered.join(", "));
    }
    message.push('.');
    message
}
