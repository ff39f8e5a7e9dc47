// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: stable ids plus materialized geometry and paint.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Brush;

/// Stable identity of a mark across render passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from its raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The kind of a mark payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A filled rectangle.
    Rect,
    /// A single run of unshaped text.
    Text,
}

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor position.
    #[default]
    Start,
    /// Text is centered on the anchor position.
    Middle,
    /// Text ends at the anchor position.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor position is the vertical middle of the text.
    Middle,
    /// The anchor position is the alphabetic baseline.
    #[default]
    Alphabetic,
    /// The anchor position is the hanging baseline (top).
    Hanging,
    /// The anchor position is the ideographic baseline.
    Ideographic,
}

/// Rectangle payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Text payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Materialized mark contents.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// A text run.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns exact bounds when they are known without text shaping.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
        }
    }
}

/// A keyed visual element.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Contents.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark with the given id. Marks are rectangles unless
    /// [`MarkBuilder::text`] is called.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the payload kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

/// Builder for [`Mark`].
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: String,
    font_size: f64,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    fill: Brush,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            text: String::new(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
            fill: Brush::default(),
        }
    }

    /// Produces a rectangle mark.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Produces a text mark.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the x position (rectangle origin or text anchor).
    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets the y position (rectangle origin or text anchor).
    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rectangle width.
    pub fn w(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rectangle height.
    pub fn h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets rectangle geometry in one call.
    pub fn rect_geometry(self, rect: Rect) -> Self {
        self.x(rect.x0)
            .y(rect.y0)
            .w(rect.width())
            .h(rect.height())
    }

    /// Sets the text content.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text rotation in degrees.
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}
