// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A year-by-month heat map built on `calor_core` and `calor_charts`.
//!
//! The pipeline runs once per load:
//!
//! 1. [`calor_data::Dataset`] validates the payload.
//! 2. [`HeatmapScales`] maps years to x and absolute values to one of K quantile buckets.
//! 3. [`HeatmapLayout`] positions one cell per `(year, month)` plus the legend swatches.
//! 4. [`HeatmapModel::marks`] emits keyed marks; [`HeatmapView`] reconciles them against the
//!    previous render through a [`calor_core::Scene`].
//!
//! Pointer events reach the view through [`calor_core::PointerHandler`] and produce
//! [`HoverEffect`]s for a [`HoverSurface`].
//!
//! ```
//! use calor_heatmap::{CellKey, HeatmapConfig, HeatmapModel, HeatmapView};
//! use kurbo::Point;
//!
//! let json = br#"{"baseTemperature": 8.0, "monthlyVariance": [
//!     {"year": 2000, "month": 1, "variance": -1.5},
//!     {"year": 2001, "month": 1, "variance": 0.5}]}"#;
//! let model = HeatmapModel::from_json_slice(json, HeatmapConfig::default())?;
//! let mut view = HeatmapView::new();
//! let diffs = view.render(model);
//! assert!(!diffs.is_empty());
//!
//! let effects = view.pointer_enter(CellKey::new(2000, 1), Point::new(120.0, 40.0));
//! assert_eq!(effects.len(), 2);
//! # Ok::<(), calor_heatmap::HeatmapError>(())
//! ```

mod chart;
mod config;
mod error;
mod interaction;
mod keys;
mod layout;
mod scales;
mod view;

pub use chart::HeatmapModel;
pub use config::{HeatmapConfig, MONTH_LABELS, MONTH_NAMES, REFERENCE_PALETTE, month_name};
pub use error::{BoxError, HeatmapError};
pub use interaction::{
    HoverEffect, HoverEffects, HoverState, HoverSurface, InteractionController, Tooltip,
};
pub use keys::{CellKey, LEGEND_ID_BASE, MONTH_LABEL_ID_BASE, MONTHS_TITLE_ID, YEAR_AXIS_ID_BASE};
pub use layout::{Cell, CellGeometry, HeatmapLayout};
pub use scales::{ColorBucket, HeatmapScales};
pub use view::HeatmapView;
