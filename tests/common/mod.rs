#![allow(dead_code)]

use deepmatch::Value;

pub fn num(n: f64) -> Value {
    Value::Number(n)
}

pub fn s(text: &str) -> Value {
    Value::from(text)
}

pub fn arr<const N: usize>(items: [Value; N]) -> Value {
    Value::array(items.into())
}

pub fn obj<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::object(entries)
}

/// An array with one extra, non-index property.
pub fn arr_with<const N: usize>(items: [Value; N], key: &str, value: Value) -> Value {
    let a = arr(items);
    a.set_property(key, value);
    a
}

#[macro_export]
macro_rules! assert_equal {
    ($($name: ident ($a: expr, $b: expr$(,)?);)*) => {
        $(
            #[test]
            fn $name() {
                let (a, b) = ($a, $b);
                let util = deepmatch::MatchersUtil::new();
                assert!(util.equals(&a, &b), "expected {a:?} to equal {b:?}");
                assert!(util.equals(&b, &a), "expected {b:?} to equal {a:?}");
            }
        )*
    }
}

#[macro_export]
macro_rules! assert_not_equal {
    ($($name: ident ($a: expr, $b: expr$(,)?);)*) => {
        $(
            #[test]
            fn $name() {
                let (a, b) = ($a, $b);
                let util = deepmatch::MatchersUtil::new();
                assert!(!util.equals(&a, &b), "expected {a:?} not to equal {b:?}");
                assert!(!util.equals(&b, &a), "expected {b:?} not to equal {a:?}");
            }
        )*
    }
}

#[macro_export]
macro_rules! assert_pp {
    ($($name: ident ($val: expr, $expected: expr$(,)?);)*) => {
        $(
            #[test]
            fn $name() {
                use deepmatch::PrettyPrinter;
                let val = $val;
                assert_eq!($expected, deepmatch::DefaultPrettyPrinter::default().pp(&val));
            }
        )*
    }
}

#[macro_export]
macro_rules! assert_diff {
    ($($name: ident ($actual: expr, $expected: expr, $message: expr$(,)?);)*) => {
        $(
            #[test]
            fn $name() {
                let (actual, expected) = ($actual, $expected);
                let util = deepmatch::MatchersUtil::new();
                let mut recorder = deepmatch::DiffRecorder::new();
                assert!(!util.equals_with_diff(&actual, &expected, &mut recorder));
                assert_eq!($message, recorder.message(&deepmatch::DefaultPrettyPrinter::default()));
            }
        )*
    }
}
