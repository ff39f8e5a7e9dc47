// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed, validated samples and their cached extent.

use crate::error::{DatasetError, MalformedDatasetError};
use crate::raw::{RawDataset, RawSample};

/// One (year, month, variance) observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Calendar year.
    pub year: i32,
    /// Calendar month in `1..=12`.
    pub month: u8,
    /// Offset from the dataset's base value.
    pub variance: f64,
}

impl Sample {
    /// The absolute value of this sample for a base value.
    pub fn absolute(&self, base_value: f64) -> f64 {
        base_value + self.variance
    }
}

/// Summary statistics of a dataset, computed once at load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Smallest absolute value.
    pub min_value: f64,
    /// Largest absolute value.
    pub max_value: f64,
    /// Earliest year.
    pub first_year: i32,
    /// Latest year.
    pub last_year: i32,
}

impl Extent {
    /// Number of calendar years covered, counting both ends.
    ///
    /// Wider than `i32` so that the full year range still fits.
    pub fn year_span(&self) -> u64 {
        u64::from(self.last_year.abs_diff(self.first_year)) + 1
    }
}

/// A validated dataset. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    base_value: f64,
    samples: Vec<Sample>,
    extent: Extent,
}

impl Dataset {
    /// Parses and validates a JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, DatasetError> {
        Self::from_json_slice(s.as_bytes())
    }

    /// Validates an already-deserialized document.
    pub fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        let base_value = raw
            .base_temperature
            .ok_or(MalformedDatasetError::MissingBaseValue)?;
        let entries = raw
            .monthly_variance
            .ok_or(MalformedDatasetError::MissingEntries)?;
        let samples = entries
            .iter()
            .enumerate()
            .map(|(index, raw)| validate(index, raw, base_value))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(base_value, samples)
    }

    /// Builds a dataset from typed samples, computing the extent in one pass.
    ///
    /// Samples keep their order. Months must already be in `1..=12`.
    pub fn new(base_value: f64, samples: Vec<Sample>) -> Result<Self, DatasetError> {
        let Some(first) = samples.first() else {
            return Err(DatasetError::EmptyDomain);
        };
        let v0 = first.absolute(base_value);
        let mut extent = Extent {
            min_value: v0,
            max_value: v0,
            first_year: first.year,
            last_year: first.year,
        };
        for (index, s) in samples.iter().enumerate() {
            if !(1..=12).contains(&s.month) {
                return Err(MalformedDatasetError::MonthOutOfRange {
                    index,
                    month: i64::from(s.month),
                }
                .into());
            }
            let v = s.absolute(base_value);
            if !v.is_finite() {
                return Err(MalformedDatasetError::NonFinite { index }.into());
            }
            extent.min_value = extent.min_value.min(v);
            extent.max_value = extent.max_value.max(v);
            extent.first_year = extent.first_year.min(s.year);
            extent.last_year = extent.last_year.max(s.year);
        }

        tracing::debug!(
            samples = samples.len(),
            min = extent.min_value,
            max = extent.max_value,
            first_year = extent.first_year,
            last_year = extent.last_year,
            "dataset normalized"
        );

        Ok(Self {
            base_value,
            samples,
            extent,
        })
    }

    /// The base value every variance is relative to.
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Samples in source order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples (always at least one).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: a dataset has at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Cached summary statistics.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Absolute values (`base + variance`) in sample order.
    pub fn absolute_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.absolute(self.base_value))
    }

    /// Looks up the sample for a year and month.
    pub fn sample(&self, year: i32, month: u8) -> Option<&Sample> {
        self.samples
            .iter()
            .find(|s| s.year == year && s.month == month)
    }
}

fn validate(index: usize, raw: &RawSample, base_value: f64) -> Result<Sample, MalformedDatasetError> {
    let year = raw.year.ok_or(MalformedDatasetError::MissingField {
        index,
        field: "year",
    })?;
    let month = raw.month.ok_or(MalformedDatasetError::MissingField {
        index,
        field: "month",
    })?;
    let variance = raw.variance.ok_or(MalformedDatasetError::MissingField {
        index,
        field: "variance",
    })?;
    let month = u8::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or(MalformedDatasetError::MonthOutOfRange { index, month })?;
    if !(base_value + variance).is_finite() {
        return Err(MalformedDatasetError::NonFinite { index });
    }
    Ok(Sample {
        year,
        month,
        variance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sample_document_normalizes_with_extent() {
        let ds = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [
                {"year": 2000, "month": 1, "variance": -1.5},
                {"year": 2001, "month": 1, "variance": 0.5}
            ]}"#,
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            *ds.extent(),
            Extent {
                min_value: 6.5,
                max_value: 8.5,
                first_year: 2000,
                last_year: 2001,
            }
        );
        assert_eq!(ds.extent().year_span(), 2);
        assert_eq!(ds.absolute_values().collect::<Vec<_>>(), vec![6.5, 8.5]);
    }

    #[test]
    fn full_year_range_span_does_not_overflow() {
        let ds = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [
                {"year": -2147483648, "month": 1, "variance": 0.0},
                {"year": 2147483647, "month": 12, "variance": 1.0}
            ]}"#,
        )
        .unwrap();
        assert_eq!(ds.extent().year_span(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn month_thirteen_is_malformed() {
        let err = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 13, "variance": 1}]}"#,
        )
        .unwrap_err();
        assert!(
            matches!(
                err,
                DatasetError::Malformed(MalformedDatasetError::MonthOutOfRange {
                    index: 0,
                    month: 13
                })
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn month_zero_and_negative_are_malformed() {
        for month in ["0", "-3"] {
            let doc = format!(
                r#"{{"baseTemperature": 1, "monthlyVariance": [{{"year": 1, "month": {month}, "variance": 0}}]}}"#
            );
            let err = Dataset::from_json_str(&doc).unwrap_err();
            assert!(
                matches!(
                    err,
                    DatasetError::Malformed(MalformedDatasetError::MonthOutOfRange { .. })
                ),
                "month {month}: got {err:?}"
            );
        }
    }

    #[test]
    fn missing_fields_are_named() {
        let err = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [
                {"year": 2000, "month": 1, "variance": 0.1},
                {"year": 2000, "month": 2}
            ]}"#,
        )
        .unwrap_err();
        assert!(
            matches!(
                err,
                DatasetError::Malformed(MalformedDatasetError::MissingField {
                    index: 1,
                    field: "variance"
                })
            ),
            "got {err:?}"
        );

        let err = Dataset::from_json_str(r#"{"monthlyVariance": []}"#).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Malformed(MalformedDatasetError::MissingBaseValue)
        ));

        let err = Dataset::from_json_str(r#"{"baseTemperature": 8.0}"#).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Malformed(MalformedDatasetError::MissingEntries)
        ));
    }

    #[test]
    fn fractional_year_and_bad_json_are_malformed() {
        let err = Dataset::from_json_str(
            r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000.5, "month": 1, "variance": 0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Malformed(MalformedDatasetError::Json(_))
        ));

        let err = Dataset::from_json_slice(b"{not json").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Malformed(MalformedDatasetError::Json(_))
        ));
    }

    #[test]
    fn empty_entry_list_is_an_empty_domain() {
        let err =
            Dataset::from_json_str(r#"{"baseTemperature": 8.0, "monthlyVariance": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::EmptyDomain), "got {err:?}");
    }

    #[test]
    fn samples_keep_source_order_and_extent_uses_extremal_years() {
        let ds = Dataset::new(
            0.0,
            vec![
                Sample {
                    year: 1999,
                    month: 12,
                    variance: 1.0,
                },
                Sample {
                    year: 1990,
                    month: 1,
                    variance: -1.0,
                },
            ],
        )
        .unwrap();
        assert_eq!(ds.samples()[0].year, 1999, "no re-sorting");
        assert_eq!(ds.extent().first_year, 1990);
        assert_eq!(ds.extent().last_year, 1999);
        assert_eq!(ds.sample(1990, 1).map(|s| s.variance), Some(-1.0));
        assert!(ds.sample(1990, 2).is_none());
    }
}
