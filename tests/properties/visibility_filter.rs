//! Property tests for visibility filters and dense index mapping.

use proptest::prelude::*;

use dexview::VisibilityFilter;

fn mask() -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `true_count` equals the number of set slots.
    #[test]
    fn property_true_count_matches_mask(slots in mask()) {
        let expected = slots.iter().filter(|v| **v).count();
        let filter = VisibilityFilter::from_mask(slots);

        prop_assert_eq!(filter.true_count(), expected);
    }

    /// PROPERTY: `set_all` makes the count either zero or the full length.
    #[test]
    fn property_set_all_counts(slots in mask(), visible in any::<bool>()) {
        let mut filter = VisibilityFilter::from_mask(slots);
        filter.set_all(visible);

        let expected = if visible { filter.len() } else { 0 };
        prop_assert_eq!(filter.true_count(), expected);
    }

    /// PROPERTY: every dense index below `true_count` maps to a visible slot,
    /// strictly increasing; the first index past it maps to nothing.
    #[test]
    fn property_dense_index_is_monotone_and_valid(slots in mask()) {
        let filter = VisibilityFilter::from_mask(slots);
        let mut previous: Option<usize> = None;

        for dense in 0..filter.true_count() {
            let index = filter.map_dense_index(dense);
            prop_assert!(index.is_some());
            let index = index.unwrap_or_default();

            prop_assert!(index < filter.len());
            prop_assert!(filter.is_visible(index));
            if let Some(prev) = previous {
                prop_assert!(index > prev);
            }
            prop_assert_eq!(filter.dense_index_of(index), Some(dense));
            previous = Some(index);
        }

        prop_assert_eq!(filter.map_dense_index(filter.true_count()), None);
        prop_assert!(filter.try_map_dense_index(filter.true_count()).is_err());
    }

    /// PROPERTY: out-of-range `set` fails and leaves the filter untouched.
    #[test]
    fn property_set_out_of_range_is_rejected(slots in mask(), extra in 0usize..8) {
        let mut filter = VisibilityFilter::from_mask(slots.clone());
        let index = filter.len() + extra;

        prop_assert!(filter.set(index, true).is_err());
        prop_assert_eq!(filter.as_slice(), slots.as_slice());
    }
}
