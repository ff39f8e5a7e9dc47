// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use calor_charts::ScaleError;
use calor_data::{DatasetError, MalformedDatasetError};

/// Boxed transport error carried by [`HeatmapError::Fetch`].
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Failure of one load attempt. Nothing is rendered when any of these occur.
#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    /// The dataset could not be retrieved.
    #[error("failed to fetch dataset")]
    Fetch(#[source] BoxError),
    /// The payload did not describe a valid dataset.
    #[error("malformed dataset")]
    Malformed(#[from] MalformedDatasetError),
    /// The dataset contains no samples.
    #[error("dataset contains no samples")]
    EmptyDomain,
    /// A scale could not be built from the dataset.
    #[error("failed to build scales")]
    Scale(#[source] ScaleError),
}

impl HeatmapError {
    /// Wraps a transport error.
    pub fn fetch(err: impl Into<BoxError>) -> Self {
        Self::Fetch(err.into())
    }
}

impl From<DatasetError> for HeatmapError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Malformed(e) => Self::Malformed(e),
            DatasetError::EmptyDomain => Self::EmptyDomain,
        }
    }
}

impl From<ScaleError> for HeatmapError {
    fn from(err: ScaleError) -> Self {
        match err {
            ScaleError::EmptyDomain(_) => Self::EmptyDomain,
            other => Self::Scale(other),
        }
    }
}
