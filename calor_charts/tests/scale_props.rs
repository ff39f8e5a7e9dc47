// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the linear and quantile scales.

use calor_charts::{ScaleLinear, ScaleQuantile};
use proptest::prelude::*;

fn population() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-20.0_f64..40.0, 1..300)
}

proptest! {
    #[test]
    fn buckets_are_ascending_and_cover_the_domain(values in population(), k in 1_usize..16) {
        let q = ScaleQuantile::new(values.iter().copied(), k).unwrap();
        let bounds: Vec<f64> = q.lower_bounds().collect();
        let (min, max) = q.domain();

        prop_assert_eq!(bounds.len(), k);
        prop_assert_eq!(bounds[0], min);
        prop_assert!(bounds.windows(2).all(|w| w[0] <= w[1]), "bounds not ascending: {:?}", bounds);
        prop_assert!(bounds.iter().all(|b| (min..=max).contains(b)));
        for v in &values {
            prop_assert!(q.classify(*v) < k);
        }
    }

    #[test]
    fn extremes_land_in_first_and_last_bucket(values in population(), k in 1_usize..16) {
        let q = ScaleQuantile::new(values.iter().copied(), k).unwrap();
        let (min, max) = q.domain();
        prop_assume!(min < max);
        prop_assert_eq!(q.classify(min), 0);
        prop_assert_eq!(q.classify(max), k - 1);
    }

    #[test]
    fn distinct_values_split_into_near_equal_buckets(
        values in prop::collection::btree_set(-2000_i32..4000, 1..300),
        k in 1_usize..16,
    ) {
        let values: Vec<f64> = values.into_iter().map(|v| f64::from(v) / 100.0).collect();
        let n = values.len();
        let q = ScaleQuantile::new(values.iter().copied(), k).unwrap();

        let mut counts = vec![0_usize; k];
        for v in &values {
            counts[q.classify(*v)] += 1;
        }
        let ideal = n as f64 / k as f64;
        for (i, c) in counts.iter().enumerate() {
            prop_assert!((*c as f64 - ideal).abs() < 1.0 + 1e-9, "bucket {} has {} of {}", i, c, n);
            if n >= k {
                prop_assert!(*c > 0, "bucket {} is empty", i);
            }
        }
    }

    #[test]
    fn equal_values_never_straddle_buckets(
        values in prop::collection::vec(0_u8..6, 1..120),
        k in 1_usize..12,
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let q = ScaleQuantile::new(values.iter().copied(), k).unwrap();
        for v in &values {
            let b = q.classify(*v);
            prop_assert!(values.iter().filter(|w| *w == v).all(|w| q.classify(*w) == b));
        }
        let classes: Vec<usize> = values.iter().map(|v| q.classify(*v)).collect();
        let mut pairs: Vec<(f64, usize)> = values.iter().copied().zip(classes).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        prop_assert!(pairs.windows(2).all(|w| w[0].1 <= w[1].1), "classes must be monotonic in value");
    }

    #[test]
    fn year_axis_is_monotonic_with_fixed_endpoints(
        first in 1700_i32..2100,
        len in 1_i32..400,
        width in 1.0_f64..2000.0,
    ) {
        let last = first + len;
        let s = ScaleLinear::new((f64::from(first), f64::from(last)), (0.0, width));
        prop_assert_eq!(s.map(f64::from(first)), 0.0);
        prop_assert!((s.map(f64::from(last)) - width).abs() < 1e-9);
        let mut prev = f64::NEG_INFINITY;
        for year in first..=last {
            let x = s.map(f64::from(year));
            prop_assert!(x > prev);
            prev = x;
        }
    }
}
