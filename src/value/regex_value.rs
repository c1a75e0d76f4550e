use std::rc::Rc;

use crate::errors::ValueError;

#[derive(Debug)]
/// A compiled regular expression, remembering the source pattern and flags it
/// was written with. Two regexes are equal when both of those are equal.
pub struct RegexValue {
    regex: regex::Regex,
    source: Rc<str>,
    flags: Rc<str>,
}

impl RegexValue {
    /// Compiles a regular expression. The flags `i`, `m` and `s` change how
    /// the pattern matches; `g`, `u` and `y` are accepted and remembered but
    /// do not affect matching. Flags are normalised, so `gi` and `ig` are the
    /// same.
    pub fn new(source: &str, flags: &str) -> Result<RegexValue, ValueError> {
        let mut sorted: Vec<char> = flags.chars().collect();
        if let Some(&c) = sorted.iter().find(|&&c| !matches!(c, 'g' | 'i' | 'm' | 's' | 'u' | 'y')) {
            return Err(ValueError::InvalidRegexFlag(c));
        }
        sorted.sort_unstable();
        sorted.dedup();

        let regex = regex::RegexBuilder::new(source)
            .case_insensitive(sorted.contains(&'i'))
            .multi_line(sorted.contains(&'m'))
            .dot_matches_new_line(sorted.contains(&'s'))
            .build()?;

        let flags: String = sorted.into_iter().collect();
        Ok(RegexValue {regex, source: Rc::from(source), flags: Rc::from(flags)})
    }

    /// Returns the source pattern.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the normalised flags.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Indicates whether this regex matches anywhere in the given string.
    pub fn test(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }
}

impl PartialEq for RegexValue {
    fn eq(&self, other: &RegexValue) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}
impl Eq for RegexValue {}
