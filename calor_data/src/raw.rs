// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire format of the input document.
//!
//! Every field is optional here so that validation can name exactly what is missing.

use serde::Deserialize;

/// The input document as received.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    /// Base value every variance is relative to.
    pub base_temperature: Option<f64>,
    /// Per-month entries, in source order.
    pub monthly_variance: Option<Vec<RawSample>>,
}

/// One entry of `monthlyVariance` as received.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RawSample {
    /// Calendar year.
    pub year: Option<i32>,
    /// Calendar month, expected in `1..=12`.
    pub month: Option<i64>,
    /// Offset from the base value.
    pub variance: Option<f64>,
}
