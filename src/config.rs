//! Limits for rendering values, with defaults and environment overrides.

use std::env;

use crate::errors::ConfigError;

const DEFAULT_MAX_DEPTH: usize = 8;
const DEFAULT_MAX_ARRAY_LENGTH: usize = 50;
const DEFAULT_MAX_CHARS: usize = 1000;

const MAX_DEPTH_VAR: &str = "DEEPMATCH_MAX_DEPTH";
const MAX_ARRAY_LENGTH_VAR: &str = "DEEPMATCH_MAX_ARRAY_LENGTH";
const MAX_CHARS_VAR: &str = "DEEPMATCH_MAX_CHARS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Limits applied by the default pretty-printer when rendering values in
/// failure messages and diffs.
pub struct Config {
    /// Composite values nested deeper than this are rendered by kind name
    /// only, e.g. `Object`.
    pub max_depth: usize,

    /// At most this many array elements, map entries or set members are
    /// rendered; the rest are elided as `...`.
    pub max_array_length: usize,

    /// Rendered output longer than this many characters is truncated.
    pub max_chars: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl Config {
    /// Returns the default configuration, with each limit overridden by its
    /// environment variable if that variable is set.
    pub fn from_env() -> Result<Config, ConfigError> {
        let defaults = Config::default();
        Ok(Config {
            max_depth: read_var(MAX_DEPTH_VAR, defaults.max_depth)?,
            max_array_length: read_var(MAX_ARRAY_LENGTH_VAR, defaults.max_array_length)?,
            max_chars: read_var(MAX_CHARS_VAR, defaults.max_chars)?,
        })
    }
}

fn read_var(var: &'static str, default: usize) -> Result<usize, ConfigError> {
    let Ok(value) = env::var(var) else { return Ok(default); };
    value.trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber {var, value: value.clone(), source})
}
