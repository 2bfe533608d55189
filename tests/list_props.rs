//! Property tests for ordered lists

use listtree::OrderedList;
use proptest::prelude::*;

fn widened(values: Vec<i32>) -> Vec<i64> {
    values.into_iter().map(i64::from).collect()
}

proptest! {
    #[test]
    fn any_insertion_order_yields_sorted_sequence(
        values in proptest::collection::vec(any::<i32>(), 1..64),
    ) {
        let values = widened(values);
        let list = OrderedList::from_values(&values).expect("input is non-empty");

        let materialized: Vec<i64> = list.iter().collect();
        let mut expected = values.clone();
        expected.sort_unstable();

        prop_assert_eq!(&materialized, &expected, "sequence must be the sorted input");
        prop_assert_eq!(list.count(), values.len(), "count must equal the length");
        prop_assert_eq!(list.total(), values.iter().sum::<i64>(), "total must equal the sum");
    }

    #[test]
    fn sorted_at_every_observable_point(
        values in proptest::collection::vec(any::<i16>(), 2..32),
    ) {
        let mut remaining = values.iter();
        let seed = i64::from(*remaining.next().expect("at least two values"));
        let mut list = OrderedList::seeded(seed);

        for &value in remaining {
            list.insert(i64::from(value)).expect("list is seeded");

            let snapshot: Vec<i64> = list.iter().collect();
            prop_assert!(
                snapshot.windows(2).all(|pair| pair[0] <= pair[1]),
                "sequence must be non-decreasing after each insertion: {:?}",
                snapshot
            );
        }
    }

    #[test]
    fn iteration_is_restartable(
        values in proptest::collection::vec(any::<i32>(), 1..32),
    ) {
        let list = OrderedList::from_values(&widened(values)).expect("input is non-empty");

        let first: Vec<i64> = list.iter().collect();
        let second: Vec<i64> = list.iter().collect();

        prop_assert_eq!(first, second, "a fresh cursor must replay the same sequence");
    }

    #[test]
    fn ordering_agrees_with_equality(
        a in proptest::collection::vec(-50i64..50, 1..8),
        b in proptest::collection::vec(-50i64..50, 1..8),
    ) {
        let a = OrderedList::from_values(&a).expect("input is non-empty");
        let b = OrderedList::from_values(&b).expect("input is non-empty");

        prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }
}
