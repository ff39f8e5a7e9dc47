// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset validation errors.

/// The input does not match the expected schema.
#[derive(Debug, thiserror::Error)]
pub enum MalformedDatasetError {
    /// The document is not valid JSON, or a field has the wrong type.
    #[error("invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),
    /// `baseTemperature` is absent or null.
    #[error("missing field `baseTemperature`")]
    MissingBaseValue,
    /// `monthlyVariance` is absent or null.
    #[error("missing field `monthlyVariance`")]
    MissingEntries,
    /// An entry lacks a required field.
    #[error("entry {index} is missing field `{field}`")]
    MissingField {
        /// Position of the entry in `monthlyVariance`.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },
    /// An entry's month is outside `1..=12`.
    #[error("entry {index} has month {month}, expected 1..=12")]
    MonthOutOfRange {
        /// Position of the entry in `monthlyVariance`.
        index: usize,
        /// The offending month.
        month: i64,
    },
    /// An entry's absolute value is not finite.
    #[error("entry {index} has a non-finite value")]
    NonFinite {
        /// Position of the entry in `monthlyVariance`.
        index: usize,
    },
}

/// Errors returned when normalizing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The input does not match the schema.
    #[error(transparent)]
    Malformed(#[from] MalformedDatasetError),
    /// The input is well-formed but has no samples.
    #[error("dataset has no samples")]
    EmptyDomain,
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.into())
    }
}
