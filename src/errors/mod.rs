//! Errors which can occur while constructing values, matchers or configuration.
//! Comparisons themselves never fail; they always produce a `bool`.

mod config_error;
mod value_error;
pub use config_error::ConfigError;
pub use value_error::ValueError;

/// Reports an internal error, indicating a bug in the comparison engine
/// rather than a problem with the values being compared.
pub fn ice(msg: &str) -> ! {
    panic!("Internal error: {msg}");
}
