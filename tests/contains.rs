mod common;

use common::*;
use deepmatch::matchers::any;
use deepmatch::{AnyType, MatchersUtil, Value};

macro_rules! assert_contains {
    ($($name: ident ($haystack: expr, $needle: expr, $expected: expr$(,)?);)*) => {
        $(
            #[test]
            fn $name() {
                let (haystack, needle) = ($haystack, $needle);
                assert_eq!($expected, MatchersUtil::new().contains(&haystack, &needle), "{haystack:?} contains {needle:?}");
            }
        )*
    }
}

assert_contains! {
    substring(s("foobar"), s("oba"), true);
    missing_substring(s("foobar"), s("baz"), false);
    empty_substring(s("foo"), s(""), true);
    number_in_string(s("a1b"), num(1.0), true);
    object_in_string(s("Object"), obj([]), false);

    undefined_haystack(Value::Undefined, Value::Undefined, false);
    null_haystack(Value::Null, Value::Null, false);

    array_element(arr([num(1.0), num(2.0)]), num(2.0), true);
    array_missing_element(arr([num(1.0), num(2.0)]), num(3.0), false);
    array_deep_element(arr([obj([("a", num(1.0))])]), obj([("a", num(1.0))]), true);
    array_deep_mismatch(arr([obj([("a", num(1.0))])]), obj([("a", num(2.0))]), false);
    array_matcher_needle(arr([num(1.0), s("x")]), any(AnyType::String), true);
    empty_array(arr([]), Value::Undefined, false);
    arguments_haystack(Value::arguments(vec![s("a")]), s("a"), true);

    set_primitive(Value::set([num(1.0), num(2.0)]), num(2.0), true);
    set_nan(Value::set([num(f64::NAN)]), num(f64::NAN), true);
    set_negative_zero(Value::set([num(0.0)]), num(-0.0), true);
    set_distinct_composite(Value::set([obj([("a", num(1.0))])]), obj([("a", num(1.0))]), false);

    number_haystack(num(12.0), num(1.0), false);
    object_haystack(obj([("a", num(1.0))]), s("a"), false);
    map_haystack(Value::map([(s("a"), num(1.0))]), s("a"), false);
}

#[test]
fn set_identical_composite() {
    let member = obj([("a", num(1.0))]);
    let set = Value::set([member.clone()]);
    assert!(MatchersUtil::new().contains(&set, &member));
}

#[test]
fn set_dates_by_identity() {
    let util = MatchersUtil::new();
    let epoch = Value::date_from_millis(0).unwrap();
    let set = Value::set([epoch.clone()]);
    assert!(util.contains(&set, &epoch));
    assert!(!util.contains(&set, &Value::date_from_millis(0).unwrap()));
}
