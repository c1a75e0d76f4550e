use thiserror::Error;

#[derive(Debug, Error)]
/// Represents an error which occurs when reading configuration from the
/// environment.
pub enum ConfigError {
    /// An environment variable was set, but not to a non-negative integer.
    #[error("environment variable {var} must be a non-negative integer, was \"{value}\"")]
    InvalidNumber {
        /// The name of the environment variable.
        var: &'static str,
        /// The value it was set to.
        value: String,
        /// The underlying parse error.
        source: std::num::ParseIntError,
    },
}
