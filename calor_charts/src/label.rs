// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared styling for text marks.

extern crate alloc;

use alloc::string::String;

use calor_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use crate::z_order;

/// Typography and paint for one family of labels (tick labels, legend labels, titles).
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation around the anchor point, in degrees.
    pub angle: f64,
    /// Paint order of the labels.
    pub z_index: i32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl LabelStyle {
    /// Black, start-anchored, alphabetic-baseline labels at `font_size`.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            fill: css::BLACK.into(),
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            angle: 0.0,
            z_index: z_order::TITLES,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the paint order.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// A text mark with this style.
    pub fn place(&self, id: MarkId, pos: Point, text: impl Into<String>) -> Mark {
        Mark::builder(id)
            .text()
            .z_index(self.z_index)
            .x(pos.x)
            .y(pos.y)
            .content(text)
            .font_size(self.font_size)
            .angle(self.angle)
            .text_anchor(self.anchor)
            .text_baseline(self.baseline)
            .fill(self.fill.clone())
            .build()
    }
}
