// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `calor_core`.
//!
//! This crate is a small, reusable layer above `calor_core`:
//! - **Scales** map data values into screen coordinates ([`ScaleLinear`]) or into discrete
//!   classes ([`ScaleQuantile`]).
//! - **Guides** (axes, legends) are built by generating `calor_core::Mark`s with stable ids.
//! - **Layout** splits a view into margins and a plot rectangle.
//!
//! Text shaping is out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod format;
mod label;
mod layout;
mod legend;
mod math;
mod scale;
mod shapes;
mod z_order;

pub use axis::{AxisSpec, AxisStyle};
pub use format::format_fixed;
pub use label::LabelStyle;
pub use layout::{ChartLayout, Margins, Size};
pub use legend::{LegendItem, LegendRow};
pub use scale::{EmptyDomainError, ScaleError, ScaleLinear, ScaleQuantile, nice_ticks};
pub use shapes::{StrokeStyle, fill_rect, hrule, vrule};
pub use z_order::*;
