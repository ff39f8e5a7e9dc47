// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A horizontal row of equal-width swatches, right-aligned to an edge, each with a label
//! underneath. Swatch `i` of `n` starts at `right - (n - i) * swatch_width`, so the row
//! reads left to right in item order.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use calor_core::{Mark, MarkId};
use kurbo::{Point, Rect};
use peniko::{Brush, Color};

use crate::label::LabelStyle;
use crate::shapes::fill_rect;
use crate::z_order;

/// Id offset between a swatch and its label.
const LABEL_ID_OFFSET: u64 = 1000;

/// A legend item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label shown under the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// A solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A right-aligned row of swatches with labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Stable-id base; swatch `i` uses `id_base + i`, its label `id_base + 1000 + i`.
    pub id_base: u64,
    /// The x coordinate the last swatch ends at.
    pub right: f64,
    /// Top of the swatches.
    pub y: f64,
    /// Width of each swatch.
    pub swatch_width: f64,
    /// Height of each swatch.
    pub swatch_height: f64,
    /// Vertical distance from the swatch top to the label baseline.
    pub label_dy: f64,
    /// Label styling.
    pub label: LabelStyle,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendRow {
    /// A row of 20x10 swatches with 10px labels 20px below their tops.
    pub fn new(id_base: u64, right: f64, y: f64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            right,
            y,
            swatch_width: 20.0,
            swatch_height: 10.0,
            label_dy: 20.0,
            label: LabelStyle::new(10.0).with_z_index(z_order::LEGEND_LABELS),
            items,
        }
    }

    /// Sets swatch width and height.
    pub fn with_swatch_size(mut self, width: f64, height: f64) -> Self {
        self.swatch_width = width.max(0.0);
        self.swatch_height = height.max(0.0);
        self
    }

    /// Sets the label offset below the swatch top.
    pub fn with_label_dy(mut self, label_dy: f64) -> Self {
        self.label_dy = label_dy;
        self
    }

    /// Sets the label styling.
    pub fn with_label_style(mut self, label: LabelStyle) -> Self {
        self.label = label;
        self
    }

    /// Moves the whole row by `(dx, dy)`.
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.right += dx;
        self.y += dy;
        self
    }

    /// Id of the swatch mark for item `index`.
    pub fn swatch_id(&self, index: usize) -> MarkId {
        MarkId::from_raw(self.id_base + index as u64)
    }

    /// Id of the label mark for item `index`.
    pub fn label_id(&self, index: usize) -> MarkId {
        MarkId::from_raw(self.id_base + LABEL_ID_OFFSET + index as u64)
    }

    /// Geometry of the swatch for item `index`.
    pub fn swatch_rect(&self, index: usize) -> Rect {
        let slots_from_right = self.items.len().saturating_sub(index) as f64;
        let x = self.right - slots_from_right * self.swatch_width;
        Rect::new(x, self.y, x + self.swatch_width, self.y + self.swatch_height)
    }

    /// Swatch and label marks, paired per item.
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(self.items.len() * 2);
        for (i, item) in self.items.iter().enumerate() {
            let rect = self.swatch_rect(i);
            out.push(fill_rect(
                self.swatch_id(i),
                rect,
                item.fill.clone(),
                z_order::LEGEND_SWATCHES,
            ));
            out.push(self.label.place(
                self.label_id(i),
                Point::new(rect.x0, self.y + self.label_dy),
                item.label.clone(),
            ));
        }
        out
    }
}
