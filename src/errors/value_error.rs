use thiserror::Error;

use crate::value::Kind;

#[derive(Debug, Error)]
/// Represents an error which occurs when constructing a value or an
/// asymmetric matcher from invalid parts.
pub enum ValueError {
    /// The regex source could not be compiled.
    #[error("regex syntax error ({0})")]
    RegexSyntax(#[from] regex::Error),

    /// The regex flags contained a character other than `g`, `i`, `m`, `s`,
    /// `u` or `y`.
    #[error("invalid regex flag '{0}'")]
    InvalidRegexFlag(char),

    /// `object_containing` was given a sample which has no properties to
    /// look for.
    #[error("you must provide an object to objectContaining, not {0}")]
    SampleNotObject(Kind),
}
