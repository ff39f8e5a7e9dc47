// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint order of chart-generated marks, lowest first.
//!
//! Surfaces sort by `(z_index, MarkId)` so equal layers still paint deterministically.

/// Data cells.
pub const SERIES_FILL: i32 = 0;

/// Axis domain rules and ticks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels and category labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;

/// Chart titles and free-standing annotations.
pub const TITLES: i32 = 80;
