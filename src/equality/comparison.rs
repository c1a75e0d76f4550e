use tracing::{debug, trace};

use crate::diff::{DiffBuilder, Mismatch, MismatchReason, NullDiffBuilder, PathSegment};
use crate::matchers::{AsymmetricMatcher, DiffHint};
use crate::utils::matching::has_perfect_matching;
use crate::value::{primitive_eq, ArrayValue, MapValue, ObjectValue, PropertyMap, SetValue, Value};
use super::stack::PairStack;
use super::MatchersUtil;

/// The state of one top-level comparison: the configured testers, and the
/// pairs of composite values currently being compared.
pub(crate) struct Comparison<'a> {
    util: &'a MatchersUtil,
    stack: PairStack,
}

/// Records an `Unequal` mismatch between `a` and `b` unless `ok` holds.
fn check(ok: bool, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
    if !ok {
        diff.record_mismatch(Mismatch::new(a.clone(), b.clone(), MismatchReason::Unequal));
    }
    ok
}

impl <'a> Comparison<'a> {
    pub(crate) fn new(util: &'a MatchersUtil) -> Comparison<'a> {
        Comparison {util, stack: PairStack::default()}
    }

    pub(crate) fn util(&self) -> &'a MatchersUtil {
        self.util
    }

    /// Compares `a` (actual) with `b` (expected), reporting each difference
    /// to `diff` at the path where it was found.
    pub(crate) fn eq(&mut self, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        let util = self.util;
        for tester in util.testers() {
            if let Some(verdict) = tester.test(a, b) {
                debug!(verdict, "custom tester decided");
                return check(verdict, a, b, diff);
            }
        }

        if a.is_identical(b) { return true; }

        match (a.as_matcher(), b.as_matcher()) {
            (Some(m1), Some(m2)) => return self.matchers_eq(m1, m2, a, b, diff),
            (Some(m), None) => return self.dispatch(m, b, true, a, b, diff),
            (None, Some(m)) => return self.dispatch(m, a, false, a, b, diff),
            (None, None) => {},
        }

        if a.is_primitive() || b.is_primitive() {
            return check(primitive_eq(a, b), a, b, diff);
        }

        let pair = a.identity().zip(b.identity());
        if let Some(pair) = pair {
            if self.stack.contains(pair) {
                trace!("cycle detected; assuming equal");
                return true;
            }
            self.stack.push(pair);
        }
        let result = self.structural_eq(a, b, diff);
        if let Some(pair) = pair {
            self.stack.pop(pair);
        }
        result
    }

    /// Runs the matcher on the other operand. `matcher_is_actual` tells which
    /// side of the comparison the matcher was on, which determines how its
    /// diff hint is oriented.
    fn dispatch(&mut self, matcher: &AsymmetricMatcher, other: &Value, matcher_is_actual: bool, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        let result = matcher.matches(other, self);
        trace!(result, ?matcher, "asymmetric match");
        if !result {
            let (actual, expected) = match matcher.values_for_diff(other) {
                Some(DiffHint {own, other}) if matcher_is_actual => (own, other),
                Some(DiffHint {own, other}) => (other, own),
                None => (a.clone(), b.clone()),
            };
            diff.record_mismatch(Mismatch::new(actual, expected, MismatchReason::Unmatched));
        }
        result
    }

    fn matchers_eq(&mut self, m1: &AsymmetricMatcher, m2: &AsymmetricMatcher, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        match m1.samples(m2) {
            Some((s1, s2)) => self.eq(s1, s2, diff),
            None => check(m1.same_pattern(m2), a, b, diff),
        }
    }

    fn structural_eq(&mut self, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        match (a, b) {
            (Value::Date(d1), Value::Date(d2)) => check(d1 == d2, a, b, diff),
            (Value::Regex(r1), Value::Regex(r2)) => check(r1 == r2, a, b, diff),
            (Value::Error(e1), Value::Error(e2)) => {
                check(e1.name() == e2.name() && e1.message() == e2.message(), a, b, diff)
            },
            (Value::Array(x), Value::Array(y)) => self.arrays_eq(&x.borrow(), &y.borrow(), a, b, diff),
            (Value::Map(x), Value::Map(y)) => self.maps_eq(&x.borrow(), &y.borrow(), a, b, diff),
            (Value::Set(x), Value::Set(y)) => self.sets_eq(&x.borrow(), &y.borrow(), a, b, diff),
            (Value::Object(x), Value::Object(y)) => self.objects_eq(&x.borrow(), &y.borrow(), a, b, diff),

            // functions, host objects, and values of different kinds
            _ => check(false, a, b, diff),
        }
    }

    fn arrays_eq(&mut self, x: &ArrayValue, y: &ArrayValue, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        if x.kind != y.kind { return check(false, a, b, diff); }

        let mut result = true;
        let (len_a, len_b) = (Value::from(x.len()), Value::from(y.len()));
        diff.with_path(PathSegment::key("length"), &mut |d: &mut dyn DiffBuilder| {
            result = check(x.len() == y.len(), &len_a, &len_b, d);
        });

        let undefined = Value::Undefined;
        for i in 0..x.len().max(y.len()) {
            diff.with_path(PathSegment::Index(i), &mut |d: &mut dyn DiffBuilder| {
                match y.items.get(i) {
                    None => {
                        d.record_mismatch(Mismatch::new(x.items[i].clone(), Value::Undefined, MismatchReason::UnexpectedElement));
                        result = false;
                    },
                    Some(item_b) => {
                        let item_a = x.items.get(i).unwrap_or(&undefined);
                        result = self.eq(item_a, item_b, d) && result;
                    },
                }
            });
        }

        self.props_eq(&x.props, &y.props, a, b, diff) && result
    }

    fn objects_eq(&mut self, x: &ObjectValue, y: &ObjectValue, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        if !x.kind.same_kind(&y.kind) {
            diff.record_mismatch(Mismatch::new(a.clone(), b.clone(), MismatchReason::ConstructorsDiffer));
            return false;
        }
        self.props_eq(&x.props, &y.props, a, b, diff)
    }

    /// Compares own properties by key, regardless of order. A difference in
    /// the key sets is recorded once, and the common keys are still compared.
    fn props_eq(&mut self, props_a: &PropertyMap, props_b: &PropertyMap, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        let mut result = true;

        let missing: Vec<_> = props_b.keys()
            .filter(|k| !props_a.contains_key(*k))
            .cloned()
            .collect();
        let extra: Vec<_> = props_a.keys()
            .filter(|k| !props_b.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() || !extra.is_empty() {
            diff.record_mismatch(Mismatch::new(a.clone(), b.clone(), MismatchReason::KeysDiffer {missing, extra}));
            result = false;
        }

        for (key, value_a) in props_a.iter() {
            let Some(value_b) = props_b.get(key) else { continue; };
            diff.with_path(PathSegment::Key(key.clone()), &mut |d: &mut dyn DiffBuilder| {
                result = self.eq(value_a, value_b, d) && result;
            });
        }
        result
    }

    /// Maps are equal when their entries can be paired one-to-one, each pair
    /// having equal keys and equal values.
    fn maps_eq(&mut self, x: &MapValue, y: &MapValue, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        if x.len() != y.len() { return check(false, a, b, diff); }

        let (entries_a, entries_b) = (x.entries(), y.entries());
        let matched = has_perfect_matching(entries_a.len(), |i, j| {
            let ((key_a, value_a), (key_b, value_b)) = (&entries_a[i], &entries_b[j]);
            self.eq(key_a, key_b, &mut NullDiffBuilder)
                && self.eq(value_a, value_b, &mut NullDiffBuilder)
        });
        trace!(matched, size = x.len(), "map entries paired");
        check(matched, a, b, diff)
    }

    /// Sets are equal when their members can be paired one-to-one with equal
    /// members.
    fn sets_eq(&mut self, x: &SetValue, y: &SetValue, a: &Value, b: &Value, diff: &mut dyn DiffBuilder) -> bool {
        if x.len() != y.len() { return check(false, a, b, diff); }

        let (items_a, items_b) = (x.items(), y.items());
        let matched = has_perfect_matching(items_a.len(), |i, j| {
            self.eq(&items_a[i], &items_b[j], &mut NullDiffBuilder)
        });
        trace!(matched, size = x.len(), "set members paired");
        check(matched, a, b, diff)
    }
}
