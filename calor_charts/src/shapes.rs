// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled rectangles and axis-aligned rules.
//!
//! Surfaces only draw filled rects and text, so a rule (domain line, tick) is a thin rect
//! centered on its segment.

use calor_core::{Mark, MarkId};
use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;

/// Paint and width of a rule.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// A solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// A filled rectangle.
pub fn fill_rect(id: MarkId, rect: Rect, fill: impl Into<Brush>, z_index: i32) -> Mark {
    Mark::builder(id)
        .rect()
        .z_index(z_index)
        .rect_geometry(rect.abs())
        .fill(fill)
        .build()
}

/// A horizontal rule at `y` between `x0` and `x1` (either order).
pub fn hrule(id: MarkId, y: f64, x0: f64, x1: f64, stroke: &StrokeStyle, z_index: i32) -> Mark {
    let half = stroke.stroke_width.max(0.0) * 0.5;
    let rect = Rect::new(x0.min(x1), y - half, x0.max(x1), y + half);
    fill_rect(id, rect, stroke.brush.clone(), z_index)
}

/// A vertical rule at `x` between `y0` and `y1` (either order).
pub fn vrule(id: MarkId, x: f64, y0: f64, y1: f64, stroke: &StrokeStyle, z_index: i32) -> Mark {
    let half = stroke.stroke_width.max(0.0) * 0.5;
    let rect = Rect::new(x - half, y0.min(y1), x + half, y0.max(y1));
    fill_rect(id, rect, stroke.brush.clone(), z_index)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn horizontal_rule_is_centered_on_its_line() {
        let mark = hrule(MarkId(1), 10.0, 0.0, 50.0, &StrokeStyle::solid(css::RED, 2.0), 0);
        assert_eq!(mark.payload.bounds(), Some(Rect::new(0.0, 9.0, 50.0, 11.0)));
    }

    #[test]
    fn vertical_rule_accepts_reversed_endpoints() {
        let mark = vrule(MarkId(1), 4.0, 20.0, 10.0, &StrokeStyle::default(), 0);
        assert_eq!(mark.payload.bounds(), Some(Rect::new(3.5, 10.0, 4.5, 20.0)));
    }

    #[test]
    fn fill_rect_normalizes_flipped_geometry() {
        let mark = fill_rect(MarkId(2), Rect::new(10.0, 10.0, 0.0, 0.0), css::BLUE, 5);
        assert_eq!(mark.z_index, 5);
        assert_eq!(mark.payload.bounds(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }
}
