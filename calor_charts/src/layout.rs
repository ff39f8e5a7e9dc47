// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-margin chart layout: a view rectangle split into margins and a plot rectangle.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot for guides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot.
    pub bottom: f64,
    /// Space left of the plot.
    pub left: f64,
}

impl Margins {
    /// Creates margins in CSS order (top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds, with the origin at `(0, 0)`.
    pub view: Rect,
    /// The plot rectangle (the data area) inside the margins.
    pub plot: Rect,
}

impl ChartLayout {
    /// Places the plot inside `view` after removing `margins`.
    ///
    /// Negative margins count as zero; the plot never has a negative size.
    pub fn arrange(view: Size, margins: Margins) -> Self {
        let left = margins.left.max(0.0);
        let top = margins.top.max(0.0);
        let width = (view.width - left - margins.right.max(0.0)).max(0.0);
        let height = (view.height - top - margins.bottom.max(0.0)).max(0.0);
        Self {
            view: Rect::new(0.0, 0.0, view.width.max(0.0), view.height.max(0.0)),
            plot: Rect::new(left, top, left + width, top + height),
        }
    }

    /// Plot size.
    pub fn plot_size(&self) -> Size {
        Size::new(self.plot.width(), self.plot.height())
    }
}
