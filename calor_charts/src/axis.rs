// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bottom axis mark generation.
//!
//! An axis is a domain rule along the bottom plot edge, one tick and label per nice tick
//! value, and an optional centered title below the labels.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use calor_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};

use crate::format::format_fixed;
use crate::label::LabelStyle;
use crate::math;
use crate::scale::ScaleLinear;
use crate::shapes::{StrokeStyle, hrule, vrule};
use crate::z_order;

const TICK_ID_OFFSET: u64 = 1;
const LABEL_ID_OFFSET: u64 = 1000;
const TITLE_ID_OFFSET: u64 = 9000;

/// Rules, tick labels and title styling of an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Domain rule and ticks.
    pub rule: StrokeStyle,
    /// Tick labels. Anchor is forced to the middle and the baseline follows the orientation.
    pub label: LabelStyle,
    /// Title.
    pub title: LabelStyle,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            label: LabelStyle::new(10.0).with_z_index(z_order::AXIS_LABELS),
            title: LabelStyle::new(11.0)
                .with_anchor(TextAnchor::Middle)
                .with_z_index(z_order::AXIS_TITLES),
        }
    }
}

impl AxisStyle {
    /// Sets the tick label and title font sizes.
    pub fn with_font_sizes(mut self, label: f64, title: f64) -> Self {
        self.label.font_size = label;
        self.title.font_size = title;
        self
    }
}

/// A horizontal axis below a plot.
///
/// Ids: the domain rule uses `id_base`, tick `i` uses `id_base + 1 + i`, its label
/// `id_base + 1000 + i`, and the title `id_base + 9000`.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Data domain shown along the plot width.
    pub domain: (f64, f64),
    /// Approximate tick count.
    pub tick_count: usize,
    /// Tick length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Drop ticks that are not whole numbers.
    pub integer_ticks: bool,
    /// Fractional digits of tick labels.
    pub tick_precision: usize,
    /// Styling.
    pub style: AxisStyle,
    /// Optional title.
    pub title: Option<String>,
    /// Distance from the plot edge to the title.
    pub title_offset: f64,
}

impl AxisSpec {
    /// An axis with 10 ticks of size 6, padding 3, whole-number labels and no title.
    pub fn bottom(id_base: u64, domain: (f64, f64)) -> Self {
        Self {
            id_base,
            domain,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            integer_ticks: false,
            tick_precision: 0,
            style: AxisStyle::default(),
            title: None,
            title_offset: 45.0,
        }
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Only keeps whole-number ticks.
    pub fn with_integer_ticks(mut self, integer_ticks: bool) -> Self {
        self.integer_ticks = integer_ticks;
        self
    }

    /// Sets the styling.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the distance between the plot edge and the title.
    pub fn with_title_offset(mut self, title_offset: f64) -> Self {
        self.title_offset = title_offset;
        self
    }

    /// The domain mapped on the plot's horizontal extent.
    pub fn scale(&self, plot: Rect) -> ScaleLinear {
        ScaleLinear::new(self.domain, (plot.x0, plot.x1))
    }

    /// Tick values inside the domain.
    pub fn tick_values(&self) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (lo, hi) = (d0.min(d1), d0.max(d1));
        let eps = 1.0e-9;
        ScaleLinear::new(self.domain, (0.0, 1.0))
            .ticks(self.tick_count)
            .into_iter()
            .filter(|t| *t >= lo - eps && *t <= hi + eps)
            .filter(|t| !self.integer_ticks || (*t - math::round(*t)).abs() <= eps)
            .collect()
    }

    /// Marks of the axis for a plot rectangle, in scene coordinates.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let ticks = self.tick_values();
        let edge = plot.y1;
        let label_style = self
            .style
            .label
            .clone()
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Hanging);
        let id = |offset: u64| MarkId::from_raw(self.id_base + offset);

        let mut out = Vec::with_capacity(ticks.len() * 2 + 2);
        out.push(hrule(
            id(0),
            edge,
            plot.x0,
            plot.x1,
            &self.style.rule,
            z_order::AXIS_RULES,
        ));

        let tick_end = edge + self.tick_size;
        for (i, v) in (0_u64..).zip(ticks.iter().copied()) {
            let x = scale.map(v);
            out.push(vrule(
                id(TICK_ID_OFFSET + i),
                x,
                edge,
                tick_end,
                &self.style.rule,
                z_order::AXIS_RULES,
            ));
            out.push(label_style.place(
                id(LABEL_ID_OFFSET + i),
                Point::new(x, tick_end + self.tick_padding),
                format_fixed(v, self.tick_precision),
            ));
        }

        if let Some(title) = &self.title {
            out.push(self.style.title.place(
                id(TITLE_ID_OFFSET),
                Point::new(plot.center().x, edge + self.title_offset),
                title.clone(),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use calor_core::{MarkPayload, TextPayload};

    use super::*;

    fn plot() -> Rect {
        Rect::new(80.0, 30.0, 890.0, 465.0)
    }

    fn texts(marks: &[Mark]) -> Vec<&TextPayload> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                MarkPayload::Rect(_) => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_places_labels_below_the_plot() {
        let axis = AxisSpec::bottom(500, (1753.0, 2015.0)).with_integer_ticks(true);
        let marks = axis.marks(plot());
        let labels = texts(&marks);
        assert!(!labels.is_empty(), "expected tick labels");
        assert!(labels.iter().all(|t| t.pos.y > 465.0), "labels sit below the plot");
        assert!(labels.iter().any(|t| t.text == "1800"), "nice year ticks");
        assert!(labels.iter().all(|t| t.anchor == TextAnchor::Middle));
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let axis = AxisSpec::bottom(1, (1753.0, 2015.0));
        let ticks = axis.tick_values();
        assert!(ticks.iter().all(|t| (1753.0..=2015.0).contains(t)), "{ticks:?}");
    }

    #[test]
    fn integer_ticks_drop_fractions() {
        let axis = AxisSpec::bottom(1, (2000.0, 2001.0)).with_integer_ticks(true);
        assert_eq!(axis.tick_values(), vec![2000.0, 2001.0]);
    }

    #[test]
    fn endpoints_map_to_the_plot_edges() {
        let axis = AxisSpec::bottom(1, (2000.0, 2001.0)).with_integer_ticks(true);
        let marks = axis.marks(plot());
        let xs: Vec<f64> = texts(&marks).iter().map(|t| t.pos.x).collect();
        assert_eq!(xs, vec![80.0, 890.0]);
    }

    #[test]
    fn title_sits_below_the_labels() {
        let mut axis = AxisSpec::bottom(1, (0.0, 10.0)).with_title("Years");
        axis.tick_precision = 1;
        let marks = axis.marks(plot());
        let title = marks.iter().find(|m| m.id == MarkId(9001));
        let Some(MarkPayload::Text(t)) = title.map(|m| &m.payload) else {
            panic!("expected a title mark");
        };
        assert_eq!(t.text, "Years");
        assert_eq!(t.pos, Point::new(485.0, 465.0 + 45.0));
        assert!(texts(&marks).iter().any(|t| t.text == "5.0"));
    }
}
