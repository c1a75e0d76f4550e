mod common;

use common::*;
use deepmatch::Value;

assert_equal! {
    undefined_undefined(Value::Undefined, Value::Undefined);
    null_null(Value::Null, Value::Null);
    same_bools(Value::from(true), Value::from(true));
    same_numbers(num(1.5), num(1.5));
    same_integers_from_different_types(Value::from(3), Value::from(3usize));
    nan_nan(num(f64::NAN), num(f64::NAN));
    infinity_infinity(num(f64::INFINITY), num(f64::INFINITY));
    negative_zeros(num(-0.0), num(-0.0));
    same_bigints(Value::BigInt(5), Value::BigInt(5));
    same_strings(s("foo"), s("foo"));
    empty_strings(s(""), Value::from(String::new()));
}

assert_not_equal! {
    undefined_null(Value::Undefined, Value::Null);
    different_bools(Value::from(true), Value::from(false));
    different_numbers(num(1.0), num(2.0));
    zero_negative_zero(num(0.0), num(-0.0));
    nan_zero(num(f64::NAN), num(0.0));
    infinities(num(f64::INFINITY), num(f64::NEG_INFINITY));
    number_string(num(1.0), s("1"));
    number_bigint(num(5.0), Value::BigInt(5));
    bool_number(Value::from(true), num(1.0));
    empty_string_undefined(s(""), Value::Undefined);
    zero_null(num(0.0), Value::Null);
    different_strings(s("foo"), s("bar"));
    string_case(s("foo"), s("Foo"));
    null_empty_object(Value::Null, obj([]));
    number_array(num(1.0), arr([num(1.0)]));
    string_array(s("a"), arr([s("a")]));
}
