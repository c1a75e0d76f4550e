use std::env;

use deepmatch::errors::ConfigError;
use deepmatch::Config;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(8, config.max_depth);
    assert_eq!(50, config.max_array_length);
    assert_eq!(1000, config.max_chars);
}

// The environment is shared by every test in this file, so all of the
// environment cases run in sequence here.
#[test]
fn from_env() {
    env::remove_var("DEEPMATCH_MAX_DEPTH");
    env::remove_var("DEEPMATCH_MAX_ARRAY_LENGTH");
    env::remove_var("DEEPMATCH_MAX_CHARS");
    assert_eq!(Config::default(), Config::from_env().unwrap());

    env::set_var("DEEPMATCH_MAX_DEPTH", "3");
    env::set_var("DEEPMATCH_MAX_CHARS", " 200 ");
    let config = Config::from_env().unwrap();
    assert_eq!(Config {max_depth: 3, max_array_length: 50, max_chars: 200}, config);

    env::set_var("DEEPMATCH_MAX_ARRAY_LENGTH", "many");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber {var: "DEEPMATCH_MAX_ARRAY_LENGTH", ..}));
    assert_eq!(
        "environment variable DEEPMATCH_MAX_ARRAY_LENGTH must be a non-negative integer, was \"many\"",
        err.to_string(),
    );

    env::remove_var("DEEPMATCH_MAX_DEPTH");
    env::remove_var("DEEPMATCH_MAX_ARRAY_LENGTH");
    env::remove_var("DEEPMATCH_MAX_CHARS");
}
