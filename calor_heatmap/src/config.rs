// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart constants: canvas, margins, palette and interaction styling.

use calor_charts::{Margins, Size};
use kurbo::Vec2;
use peniko::Color;

/// Cool-to-warm reference palette (`0xRRGGBB`), one color per bucket.
pub const REFERENCE_PALETTE: [u32; 11] = [
    0x4B0082, 0x8A2BE2, 0x3399FF, 0x339900, 0x99FF00, 0xFFFF99, 0xFFDD00, 0xFFBB11, 0xFF7700,
    0xFF4400, 0xAA1100,
];

/// Month labels along the vertical axis.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month names used in tooltips.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the full English name of a month in `1..=12`.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

fn rgb(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

/// Heat map configuration. [`Default`] is the reference chart.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapConfig {
    /// Outer canvas size.
    pub canvas: Size,
    /// Margins around the plot.
    pub margins: Margins,
    /// Bucket colors, lowest bucket first. The bucket count is the palette length.
    pub palette: Vec<Color>,
    /// Opacity of a hovered cell.
    pub emphasis_opacity: f64,
    /// Opacity of a visible tooltip.
    pub tooltip_opacity: f64,
    /// Tooltip offset from the pointer position.
    pub tooltip_offset: Vec2,
    /// Font size of month labels, axis labels and legend labels.
    pub label_font_size: f64,
    /// Font size of the axis titles.
    pub title_font_size: f64,
    /// Approximate number of year ticks.
    pub year_tick_count: usize,
    /// Distance from the plot bottom to the legend swatches.
    pub legend_offset: f64,
    /// Distance from the plot bottom to the legend labels, before adding half a cell height.
    pub legend_label_offset: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(900.0, 550.0),
            margins: Margins::new(30.0, 10.0, 85.0, 80.0),
            palette: REFERENCE_PALETTE.iter().copied().map(rgb).collect(),
            emphasis_opacity: 0.5,
            tooltip_opacity: 0.9,
            tooltip_offset: Vec2::new(5.0, -28.0),
            label_font_size: 10.0,
            title_font_size: 12.0,
            year_tick_count: 10,
            legend_offset: 55.0,
            legend_label_offset: 65.0,
        }
    }
}

impl HeatmapConfig {
    /// Sets the canvas size.
    pub fn with_canvas(mut self, canvas: Size) -> Self {
        self.canvas = canvas;
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the palette (and with it the bucket count).
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Color>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    /// Sets the opacity of a hovered cell.
    pub fn with_emphasis_opacity(mut self, opacity: f64) -> Self {
        self.emphasis_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Number of color buckets.
    pub fn bucket_count(&self) -> usize {
        self.palette.len()
    }
}
