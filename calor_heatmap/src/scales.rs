// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The year axis scale and the quantile color classifier of a dataset.

use calor_charts::{ScaleError, ScaleLinear, ScaleQuantile};
use calor_data::Dataset;
use peniko::Color;

/// One color class: values from `lower_bound` up to the next bucket's bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBucket {
    /// Smallest value in the bucket.
    pub lower_bound: f64,
    /// Fill color of the bucket.
    pub color: Color,
}

/// Scales derived from a dataset for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapScales {
    axis: ScaleLinear,
    classifier: ScaleQuantile,
    buckets: Vec<ColorBucket>,
}

impl HeatmapScales {
    /// Builds the axis scale on `[0, plot_width]` and one bucket per palette color.
    pub fn build(dataset: &Dataset, plot_width: f64, palette: &[Color]) -> Result<Self, ScaleError> {
        let extent = dataset.extent();
        let axis = ScaleLinear::new(
            (f64::from(extent.first_year), f64::from(extent.last_year)),
            (0.0, plot_width),
        );
        let classifier = ScaleQuantile::new(dataset.absolute_values(), palette.len())?;
        let buckets: Vec<_> = classifier
            .lower_bounds()
            .zip(palette.iter().copied())
            .map(|(lower_bound, color)| ColorBucket { lower_bound, color })
            .collect();
        tracing::debug!(
            buckets = buckets.len(),
            thresholds = ?classifier.thresholds(),
            "built heat map scales"
        );
        Ok(Self {
            axis,
            classifier,
            buckets,
        })
    }

    /// Year to plot-relative x, `first_year -> 0`, `last_year -> plot_width`.
    pub fn axis(&self) -> &ScaleLinear {
        &self.axis
    }

    /// The quantile classifier of absolute values.
    pub fn classifier(&self) -> &ScaleQuantile {
        &self.classifier
    }

    /// Buckets in ascending order.
    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    /// Bucket index of an absolute value.
    pub fn bucket_index(&self, value: f64) -> usize {
        self.classifier.classify(value)
    }

    /// Fill color of an absolute value.
    pub fn color(&self, value: f64) -> Color {
        let index = self.bucket_index(value).min(self.buckets.len().saturating_sub(1));
        self.buckets[index].color
    }

    /// Boundaries shown by the legend: `0.0` followed by the interior thresholds.
    pub fn legend_boundaries(&self) -> Vec<f64> {
        core::iter::once(0.0)
            .chain(self.classifier.thresholds().iter().copied())
            .collect()
    }
}
