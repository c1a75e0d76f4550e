mod common;

use common::*;
use deepmatch::matchers::anything;
use deepmatch::{MatchersUtil, Value};

assert_equal! {
    empty_maps(Value::map([]), Value::map([]));
    same_map_entries(
        Value::map([(s("a"), num(1.0)), (s("b"), num(2.0))]),
        Value::map([(s("a"), num(1.0)), (s("b"), num(2.0))]),
    );
    map_order_irrelevant(
        Value::map([(s("a"), num(1.0)), (s("b"), num(2.0))]),
        Value::map([(s("b"), num(2.0)), (s("a"), num(1.0))]),
    );
    map_keys_compared_deeply(
        Value::map([(obj([("id", num(1.0))]), s("one"))]),
        Value::map([(obj([("id", num(1.0))]), s("one"))]),
    );
    map_values_compared_deeply(
        Value::map([(num(1.0), arr([num(1.0)]))]),
        Value::map([(num(1.0), arr([num(1.0)]))]),
    );
    empty_sets(Value::set([]), Value::set([]));
    set_order_irrelevant(
        Value::set([num(1.0), num(2.0), num(3.0)]),
        Value::set([num(3.0), num(1.0), num(2.0)]),
    );
    set_members_compared_deeply(
        Value::set([arr([num(1.0)]), obj([("a", num(2.0))])]),
        Value::set([obj([("a", num(2.0))]), arr([num(1.0)])]),
    );
    set_multiset_semantics(
        Value::set([arr([num(1.0)]), arr([num(1.0)])]),
        Value::set([arr([num(1.0)]), arr([num(1.0)])]),
    );
    set_pairing_revises_choices(
        Value::set([anything(), num(1.0)]),
        Value::set([num(1.0), num(2.0)]),
    );
}

assert_not_equal! {
    map_sizes_differ(Value::map([(s("a"), num(1.0))]), Value::map([]));
    map_values_differ(Value::map([(s("a"), num(1.0))]), Value::map([(s("a"), num(2.0))]));
    map_keys_differ(Value::map([(s("a"), num(1.0))]), Value::map([(s("b"), num(1.0))]));
    map_vs_set(Value::map([]), Value::set([]));
    map_vs_object(Value::map([(s("a"), num(1.0))]), obj([("a", num(1.0))]));
    set_sizes_differ(Value::set([num(1.0)]), Value::set([num(1.0), num(2.0)]));
    set_members_differ(Value::set([num(1.0)]), Value::set([num(2.0)]));
    set_member_counts_differ(
        Value::set([arr([num(1.0)]), arr([num(1.0)])]),
        Value::set([arr([num(1.0)]), arr([num(2.0)])]),
    );
    set_vs_array(Value::set([num(1.0)]), arr([num(1.0)]));
}

#[test]
fn map_insert_replaces_same_key() {
    let m = Value::map([(s("a"), num(1.0))]);
    assert!(m.map_insert(s("a"), num(2.0)));
    assert!(MatchersUtil::new().equals(&m, &Value::map([(s("a"), num(2.0))])));
}

#[test]
fn set_add_deduplicates_primitives() {
    let set = Value::set([num(f64::NAN), num(0.0)]);
    assert!(set.set_add(num(f64::NAN)));
    assert!(set.set_add(num(-0.0)));
    assert!(matches!(set.get_property("size"), Some(Value::Number(n)) if n == 2.0));
}

#[test]
fn distinct_dates_are_distinct_members() {
    let epoch = || Value::date_from_millis(0).unwrap();
    let set = Value::set([epoch(), epoch()]);
    assert!(matches!(set.get_property("size"), Some(Value::Number(n)) if n == 2.0));

    let map = Value::map([(epoch(), num(1.0)), (epoch(), num(2.0))]);
    assert!(matches!(map.get_property("size"), Some(Value::Number(n)) if n == 2.0));

    let util = MatchersUtil::new();
    assert!(util.equals(&set, &Value::set([epoch(), epoch()])));
    assert!(!util.equals(&set, &Value::set([epoch()])));
}
