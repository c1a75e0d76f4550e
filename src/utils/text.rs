//! This module contains helper functions for text or string operations.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static UPPERCASE_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[A-Z]")
        .expect("Failed to compile uppercase regex")
});

/// Indicates whether the given string is a valid name, matching `[a-zA-Z_$][a-zA-Z0-9_$]*`.
/// Such keys are rendered in paths as `.key` rather than `['key']`.
pub fn is_identifier(s: &str) -> bool {
    let mut s_chars = s.chars();
    matches!(s_chars.next(), Some('a'..='z' | 'A'..='Z' | '_' | '$'))
        && s_chars.all(|c| matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '$'))
}

/// Splits a camel-case name into lower-case words separated by single spaces,
/// so that `toHaveBeenCalledWith` becomes `to have been called with`.
pub fn englishy(name: &str) -> String {
    UPPERCASE_LETTER.replace_all(name, |caps: &Captures| format!(" {}", caps[0].to_lowercase()))
        .into_owned()
}

/// Formats a number the way a JavaScript engine converts it to a string:
/// integral values have no fractional part, very large or small magnitudes use
/// exponent notation, and the special values are `NaN`, `Infinity` and
/// `-Infinity`. Negative zero is `0`; use `format_number_signed` to keep its
/// sign.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        let magnitude = n.abs();
        if (1e-6..1e21).contains(&magnitude) {
            n.to_string()
        } else {
            let s = format!("{n:e}");
            match s.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
                _ => s,
            }
        }
    }
}

/// Formats a number like `format_number`, except that negative zero is
/// written as `-0`.
pub fn format_number_signed(n: f64) -> String {
    if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        format_number(n)
    }
}

/// Truncates the string to at most `max_chars` characters, appending ` ...`
/// if anything was removed.
pub fn truncate(s: &mut String, max_chars: usize) {
    if let Some((i, _)) = s.char_indices().nth(max_chars) {
        s.truncate(i);
        s.push_str(" ...");
    }
}
