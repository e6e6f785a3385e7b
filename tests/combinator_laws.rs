//! Property-based tests for the sequence combinators.
//!
//! Inputs are optional sequences, so every law is checked for absent,
//! empty and populated inputs alike:
//!
//! - **Identity**: `map(xs, |x| x) == xs`
//! - **Composition**: `map(map(xs, f), g) == map(xs, |x| g(f(x)))`
//! - **Absence**: every combinator maps an absent input to an absent output
//! - **Filter-map**: `filter_map(xs, f)` agrees with `map` then dropping `None`
//! - **Fold**: `fold` over a sequence agrees with `Iterator::fold`

use proptest::prelude::*;
use satchel::optional::Optional;
use satchel::slices::{filter, filter_indexed, filter_map, fold, map, try_fold, try_map};

fn optional_sequence() -> impl Strategy<Value = Optional<Vec<i32>>> {
    proptest::option::of(prop::collection::vec(any::<i32>(), 0..32)).prop_map(Optional::from)
}

proptest! {
    /// Identity Law: mapping the identity returns the input unchanged
    #[test]
    fn prop_map_identity_law(sequence in optional_sequence()) {
        prop_assert_eq!(map(sequence.clone(), |value| value), sequence);
    }

    /// Composition Law: mapping twice equals mapping the composed function
    #[test]
    fn prop_map_composition_law(sequence in optional_sequence()) {
        let function1 = |value: i32| value.wrapping_add(1);
        let function2 = |value: i32| i64::from(value) * 2;

        let left = map(map(sequence.clone(), function1), function2);
        let right = map(sequence, |value| function2(function1(value)));

        prop_assert_eq!(left, right);
    }

    /// Absence is preserved by every combinator
    #[test]
    fn prop_absent_stays_absent(threshold in any::<i32>()) {
        let absent = Optional::<Vec<i32>>::none;

        prop_assert!(map(absent(), |value| value).is_none());
        prop_assert!(filter(absent(), |value| *value > threshold).is_none());
        prop_assert!(filter_map(absent(), |value| Optional::some(value)).is_none());
        prop_assert_eq!(try_map(absent(), |value| Ok::<_, ()>(value)), Ok(Optional::none()));
        prop_assert_eq!(fold(absent(), threshold, |total, _| total), threshold);
    }

    /// Presence is preserved: a present input never becomes absent
    #[test]
    fn prop_present_stays_present(values in prop::collection::vec(any::<i32>(), 0..16)) {
        prop_assert!(filter(values.clone(), |_| false).is_some());
        prop_assert!(filter_map(values, |_| Optional::<i32>::none()).is_some());
    }

    /// Filter keeps exactly the matching elements, in order
    #[test]
    fn prop_filter_agrees_with_iterator(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected: Vec<i32> = values.iter().copied().filter(|value| value % 3 == 0).collect();
        prop_assert_eq!(filter(values, |value| value % 3 == 0), Optional::some(expected));
    }

    /// Indexed filter sees positions, not values
    #[test]
    fn prop_filter_indexed_keeps_even_positions(
        values in prop::collection::vec(any::<i32>(), 0..32),
    ) {
        let expected: Vec<i32> = values.iter().copied().step_by(2).collect();
        prop_assert_eq!(
            filter_indexed(values, |index, _| index % 2 == 0),
            Optional::some(expected)
        );
    }

    /// Filter-map equals map followed by dropping absent results
    #[test]
    fn prop_filter_map_law(sequence in optional_sequence()) {
        let function = |value: i32| {
            if value % 2 == 0 { Optional::some(value / 2) } else { Optional::none() }
        };

        let left = filter_map(sequence.clone(), function);
        let right = map(sequence, function).map(|results: Vec<Optional<i32>>| {
            results.into_iter().filter_map(Optional::into_option).collect()
        });

        prop_assert_eq!(left, right);
    }

    /// Fold agrees with the standard left fold
    #[test]
    fn prop_fold_agrees_with_iterator(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected = values.iter().fold(0_i64, |total, value| total + i64::from(*value));
        prop_assert_eq!(fold(values, 0_i64, |total, value| total + i64::from(value)), expected);
    }

    /// A failing fold reports the accumulator from just before the failure
    #[test]
    fn prop_try_fold_reports_prefix_sum(
        values in prop::collection::vec(0_i64..100, 1..32),
        position in any::<prop::sample::Index>(),
    ) {
        let failing = position.index(values.len());
        let mut input = values.clone();
        input[failing] = -1;

        let outcome = try_fold(input, 0_i64, |total, value| {
            if value < 0 { Err("negative") } else { Ok(*total + value) }
        });

        let failure = outcome.expect_err("one element is negative");
        prop_assert_eq!(failure.accumulator, values[..failing].iter().sum::<i64>());
        prop_assert_eq!(failure.error, "negative");
    }
}
