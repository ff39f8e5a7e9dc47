// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover handling: one emphasized cell and its tooltip.
//!
//! Each cell is either idle or hovered, and at most one cell is hovered at a time. Pointer
//! events never touch the model; they only update [`HoverState`] and return the
//! [`HoverEffect`]s a surface has to apply.

use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use crate::chart::HeatmapModel;
use crate::keys::CellKey;

/// Tooltip content for one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// The hovered cell.
    pub key: CellKey,
    /// Full English month name.
    pub month_name: &'static str,
    /// Absolute value with three decimals.
    pub absolute: String,
    /// Raw variance of the sample.
    pub variance: f64,
}

impl Tooltip {
    /// `"{year} - {month_name}"`.
    pub fn heading(&self) -> String {
        format!("{} - {}", self.key.year, self.month_name)
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        writeln!(f, "{} °C", self.absolute)?;
        write!(f, "{} °C", self.variance)
    }
}

/// A change a hover surface has to apply.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEffect {
    /// Show (or move) the tooltip.
    ShowTooltip {
        /// Content.
        tooltip: Tooltip,
        /// Page position of the tooltip's corner.
        at: Point,
        /// Tooltip opacity.
        opacity: f64,
    },
    /// Hide the tooltip.
    HideTooltip,
    /// Set the opacity of a cell.
    SetOpacity {
        /// The cell.
        key: CellKey,
        /// New opacity.
        opacity: f64,
    },
}

/// Effects of one pointer event.
pub type HoverEffects = SmallVec<[HoverEffect; 4]>;

/// A surface that can show a tooltip and dim cells.
pub trait HoverSurface {
    /// Shows the tooltip at a page position.
    fn show_tooltip(&mut self, tooltip: &Tooltip, at: Point, opacity: f64);

    /// Hides the tooltip.
    fn hide_tooltip(&mut self);

    /// Sets the opacity of a cell.
    fn set_opacity(&mut self, key: CellKey, opacity: f64);

    /// Applies effects in order.
    fn apply_effects(&mut self, effects: &[HoverEffect]) {
        for effect in effects {
            match effect {
                HoverEffect::ShowTooltip {
                    tooltip,
                    at,
                    opacity,
                } => self.show_tooltip(tooltip, *at, *opacity),
                HoverEffect::HideTooltip => self.hide_tooltip(),
                HoverEffect::SetOpacity { key, opacity } => self.set_opacity(*key, *opacity),
            }
        }
    }
}

/// The hovered cell and the last pointer position over it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    active: Option<CellKey>,
    pointer: Point,
}

impl HoverState {
    /// The hovered cell, if any.
    pub fn active(&self) -> Option<CellKey> {
        self.active
    }

    /// Last page position reported for the hovered cell.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Whether `key` is the hovered cell.
    pub fn is_hovered(&self, key: CellKey) -> bool {
        self.active == Some(key)
    }
}

/// Drives [`HoverState`] from pointer events.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: HoverState,
}

impl InteractionController {
    /// Creates a controller with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hover state.
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    /// The pointer entered the cell `key` at page position `page`.
    ///
    /// A previously hovered cell is released first. Re-entering the hovered cell only moves
    /// the tooltip. Keys without a cell in `model` are ignored.
    pub fn pointer_enter(&mut self, model: &HeatmapModel, key: CellKey, page: Point) -> HoverEffects {
        let mut effects = HoverEffects::new();
        let Some(tooltip) = model.tooltip(key) else {
            tracing::debug!(year = key.year, month = key.month, "ignoring hover on unknown cell");
            return effects;
        };
        let config = model.config();

        if self.state.active == Some(key) {
            self.state.pointer = page;
            effects.push(HoverEffect::ShowTooltip {
                tooltip,
                at: page + config.tooltip_offset,
                opacity: config.tooltip_opacity,
            });
            return effects;
        }

        if let Some(previous) = self.state.active.take() {
            release(&mut effects, previous);
        }
        self.state = HoverState {
            active: Some(key),
            pointer: page,
        };
        tracing::debug!(year = key.year, month = key.month, "hover enter");
        effects.push(HoverEffect::ShowTooltip {
            tooltip,
            at: page + config.tooltip_offset,
            opacity: config.tooltip_opacity,
        });
        effects.push(HoverEffect::SetOpacity {
            key,
            opacity: config.emphasis_opacity,
        });
        effects
    }

    /// The pointer left the cell `key`. Leaves of cells that are not hovered are ignored.
    pub fn pointer_leave(&mut self, key: CellKey) -> HoverEffects {
        let mut effects = HoverEffects::new();
        if self.state.active != Some(key) {
            return effects;
        }
        self.state = HoverState::default();
        tracing::debug!(year = key.year, month = key.month, "hover leave");
        release(&mut effects, key);
        effects
    }

    /// Releases the hovered cell, if any.
    pub fn reset(&mut self) -> HoverEffects {
        match self.state.active {
            Some(key) => self.pointer_leave(key),
            None => HoverEffects::new(),
        }
    }

    /// Re-checks the hover against a freshly rendered model.
    ///
    /// A hovered cell that no longer exists hides the tooltip; one that survived gets its
    /// tooltip refreshed in place.
    pub fn revalidate(&mut self, model: &HeatmapModel) -> HoverEffects {
        let mut effects = HoverEffects::new();
        let Some(key) = self.state.active else {
            return effects;
        };
        match model.tooltip(key) {
            Some(tooltip) => {
                let config = model.config();
                effects.push(HoverEffect::ShowTooltip {
                    tooltip,
                    at: self.state.pointer + config.tooltip_offset,
                    opacity: config.tooltip_opacity,
                });
            }
            None => {
                tracing::debug!(year = key.year, month = key.month, "hovered cell removed");
                self.state = HoverState::default();
                effects.push(HoverEffect::HideTooltip);
            }
        }
        effects
    }
}

fn release(effects: &mut HoverEffects, key: CellKey) {
    effects.push(HoverEffect::HideTooltip);
    effects.push(HoverEffect::SetOpacity { key, opacity: 1.0 });
}
