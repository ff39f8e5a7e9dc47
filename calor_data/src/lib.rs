// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset ingestion for `calor`.
//!
//! The input is a JSON document with a base value and a list of monthly variances:
//!
//! ```json
//! { "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }] }
//! ```
//!
//! [`Dataset::from_json_slice`] validates it into typed [`Sample`]s and computes the
//! [`Extent`] once, in a single pass.

mod dataset;
mod error;
mod raw;

pub use dataset::{Dataset, Extent, Sample};
pub use error::{DatasetError, MalformedDatasetError};
pub use raw::{RawDataset, RawSample};
