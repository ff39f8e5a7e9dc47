// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained heat map: the scene of the last render and the hover state over it.

use calor_core::{MarkDiff, MarkId, PointerHandler, Scene};
use kurbo::Point;

use crate::chart::HeatmapModel;
use crate::interaction::{HoverEffect, HoverEffects, HoverState, InteractionController};
use crate::keys::CellKey;

/// Owns the retained scene of a heat map and routes pointer events to the hover state.
///
/// Effects produced by [`PointerHandler`] calls and by re-renders are queued and drained
/// with [`HeatmapView::take_effects`].
#[derive(Debug, Default)]
pub struct HeatmapView {
    scene: Scene,
    hover: InteractionController,
    model: Option<HeatmapModel>,
    pending: Vec<HoverEffect>,
}

impl HeatmapView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `model`, returning the diffs against the previous render.
    pub fn render(&mut self, model: HeatmapModel) -> Vec<MarkDiff> {
        let diffs = self.scene.tick(model.marks());
        let effects = self.hover.revalidate(&model);
        self.pending.extend(effects);
        self.model = Some(model);
        diffs
    }

    /// Removes everything, releasing any hover.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let effects = self.hover.reset();
        self.pending.extend(effects);
        self.model = None;
        self.scene.clear()
    }

    /// The model of the last render.
    pub fn model(&self) -> Option<&HeatmapModel> {
        self.model.as_ref()
    }

    /// The retained scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current hover state.
    pub fn hover(&self) -> &HoverState {
        self.hover.state()
    }

    /// The pointer entered a cell.
    pub fn pointer_enter(&mut self, key: CellKey, page: Point) -> HoverEffects {
        match &self.model {
            Some(model) => self.hover.pointer_enter(model, key, page),
            None => HoverEffects::new(),
        }
    }

    /// The pointer left a cell.
    pub fn pointer_leave(&mut self, key: CellKey) -> HoverEffects {
        self.hover.pointer_leave(key)
    }

    /// Drains queued hover effects.
    pub fn take_effects(&mut self) -> Vec<HoverEffect> {
        core::mem::take(&mut self.pending)
    }
}

impl PointerHandler for HeatmapView {
    fn on_pointer_enter(&mut self, id: MarkId, page: Point) {
        if let Some(key) = CellKey::from_mark_id(id) {
            let effects = self.pointer_enter(key, page);
            self.pending.extend(effects);
        }
    }

    fn on_pointer_leave(&mut self, id: MarkId) {
        if let Some(key) = CellKey::from_mark_id(id) {
            let effects = self.pointer_leave(key);
            self.pending.extend(effects);
        }
    }
}
