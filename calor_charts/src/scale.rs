// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales.
//!
//! - [`ScaleLinear`] maps a continuous domain onto a continuous range.
//! - [`ScaleQuantile`] classifies a continuous value into one of `K` equal-population buckets.

extern crate alloc;

use alloc::vec::Vec;

use crate::math;

/// The domain of a scale has no (finite) values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("cannot build a scale over an empty domain")]
pub struct EmptyDomainError;

/// Errors returned when building a scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScaleError {
    /// No finite values were provided.
    #[error(transparent)]
    EmptyDomain(#[from] EmptyDomainError),
    /// A quantile scale was requested with zero buckets.
    #[error("a quantile scale needs at least one bucket")]
    NoBuckets,
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps every value to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the same domain mapped onto another range.
    pub fn with_range(self, range: (f64, f64)) -> Self {
        Self { range, ..self }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values covering the domain.
    ///
    /// The first and last ticks may fall outside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Returns ticks at a 1/2/5 × 10ⁿ step covering `[min, max]` with roughly `count` intervals.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = math::floor(min / step) * step;
    let stop = math::ceil(max / step) * step;

    let n_f = math::round((stop - start) / step);
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = math::floor(math::log10(step));
    let base = math::exp10(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A quantile classifier over a sample population.
///
/// The sorted population is split into `K` groups of (nearly) equal size. Group `i` starts at
/// index `ceil(i * n / K)`; if that split falls inside a run of equal values, it moves past the
/// run so every copy of the value stays in the lower group. A split that reaches the end of the
/// population is pinned to the maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleQuantile {
    min: f64,
    max: f64,
    thresholds: Vec<f64>,
}

impl ScaleQuantile {
    /// Builds a classifier with `buckets` groups from the finite values of `values`.
    pub fn new(values: impl IntoIterator<Item = f64>, buckets: usize) -> Result<Self, ScaleError> {
        if buckets == 0 {
            return Err(ScaleError::NoBuckets);
        }
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return Err(EmptyDomainError.into());
        }
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let min = sorted[0];
        let max = sorted[n - 1];
        let thresholds = (1..buckets)
            .map(|i| {
                let mut split = (i * n).div_ceil(buckets);
                while split < n && sorted[split] == sorted[split - 1] {
                    split += 1;
                }
                sorted.get(split).copied().unwrap_or(max)
            })
            .collect();

        Ok(Self {
            min,
            max,
            thresholds,
        })
    }

    /// Number of buckets (`K`).
    pub fn bucket_count(&self) -> usize {
        self.thresholds.len() + 1
    }

    /// The `K - 1` interior thresholds, ascending.
    ///
    /// Threshold `i` is the lower bound of bucket `i + 1`.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// The `(min, max)` of the population.
    pub fn domain(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Lower bound of every bucket, ascending: the minimum followed by the thresholds.
    pub fn lower_bounds(&self) -> impl Iterator<Item = f64> + '_ {
        core::iter::once(self.min).chain(self.thresholds.iter().copied())
    }

    /// Returns the bucket index of `v`, in `0..K`.
    ///
    /// Values at or below the minimum map to `0`, values at or above the maximum to `K - 1`.
    /// When the whole population is a single value, everything maps to `0`. NaN maps to `0`.
    pub fn classify(&self, v: f64) -> usize {
        if v.is_nan() || v <= self.min {
            return 0;
        }
        if v >= self.max {
            return self.thresholds.len();
        }
        self.thresholds.partition_point(|&t| t <= v)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((2000.0, 2001.0), (0.0, 810.0));
        assert_eq!(s.map(2000.0), 0.0);
        assert_eq!(s.map(2001.0), 810.0);
    }

    #[test]
    fn degenerate_linear_domain_maps_to_range_start() {
        let s = ScaleLinear::new((1999.0, 1999.0), (0.0, 810.0));
        assert_eq!(s.map(1999.0), 0.0);
        assert_eq!(s.map(2020.0), 0.0);
    }

    #[test]
    fn nice_ticks_cover_year_domain() {
        let ticks = nice_ticks(1753.0, 2015.0, 10);
        assert!(ticks.first().is_some_and(|t| *t <= 1753.0), "{ticks:?}");
        assert!(ticks.last().is_some_and(|t| *t >= 2015.0), "{ticks:?}");
        assert!(ticks.contains(&1800.0), "{ticks:?}");
    }

    #[test]
    fn two_samples_two_buckets() {
        let q = ScaleQuantile::new([6.5, 8.5], 2).unwrap();
        assert_eq!(q.lower_bounds().collect::<Vec<_>>(), vec![6.5, 8.5]);
        assert_eq!(q.classify(6.5), 0);
        assert_eq!(q.classify(8.5), 1);
    }

    #[test]
    fn equal_values_at_a_split_stay_in_the_lower_bucket() {
        let q = ScaleQuantile::new([1.0, 2.0, 2.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(q.thresholds(), &[3.0]);
        assert_eq!(q.classify(2.0), 0);
        assert_eq!(q.classify(3.0), 1);
    }

    #[test]
    fn fewer_samples_than_buckets_pins_thresholds_to_max() {
        let q = ScaleQuantile::new([1.0, 5.0], 4).unwrap();
        assert_eq!(q.bucket_count(), 4);
        assert_eq!(q.thresholds(), &[5.0, 5.0, 5.0]);
        assert_eq!(q.classify(1.0), 0);
        assert_eq!(q.classify(5.0), 3);
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let q = ScaleQuantile::new([1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(q.classify(-100.0), 0);
        assert_eq!(q.classify(100.0), 3);
        assert_eq!(q.classify(f64::NAN), 0);
    }

    #[test]
    fn single_value_population_maps_to_bucket_zero() {
        let q = ScaleQuantile::new([5.0, 5.0, 5.0], 3).unwrap();
        assert_eq!(q.classify(5.0), 0);
        assert_eq!(q.bucket_count(), 3);
    }

    #[test]
    fn empty_population_is_an_error() {
        assert_eq!(
            ScaleQuantile::new(core::iter::empty(), 11),
            Err(ScaleError::EmptyDomain(EmptyDomainError))
        );
        assert_eq!(
            ScaleQuantile::new([f64::NAN], 11),
            Err(ScaleError::EmptyDomain(EmptyDomainError))
        );
        assert_eq!(ScaleQuantile::new([1.0], 0), Err(ScaleError::NoBuckets));
    }
}
