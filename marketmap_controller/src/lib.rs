// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap Controller: the single-threaded event funnel tying the
//! building-block crates together.
//!
//! [`MapController`] owns the viewport, the gesture machine, the laid-out
//! tile tree with its cached leaf list, and the current selection. Hosts
//! deliver resize and input events; the controller
//!
//! - recomputes the layout through the injected [`LayoutEngine`] when the
//!   screen size or dataset changes (never on pan/zoom),
//! - feeds input through the [`GestureMachine`], which mutates the viewport,
//! - resolves activates via inverse-transform hit testing and pushes the hit
//!   leaf's fields to the [`DetailOverlay`],
//! - drives the cursor affordance from hover hit tests, and
//! - repaints through [`marketmap_render::render`] after every event so the
//!   surface stays consistent with the transform.
//!
//! All state mutation happens synchronously inside these calls; hosts with
//! multiple input threads must serialize delivery. There is no background
//! work, no suspension, and no locking.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use marketmap_gesture::{GestureEffect, GestureMachine, InputEvent};
use marketmap_hit::locate;
use marketmap_render::{Cursor, Surface, render};
use marketmap_scene::{LayoutEngine, LeafTile, TileNode, TileTree};
use marketmap_view::Viewport;

/// The host's detail widget, consumed via a display/hide contract.
///
/// Dismissal (a close affordance or a tap on the overlay's scrim) lives on
/// the host side; the host reports it through
/// [`MapController::dismiss_detail`].
pub trait DetailOverlay {
    /// Fills the overlay's three text slots and shows it.
    fn show_detail(&mut self, name: &str, value: f64, change: f64);

    /// Hides the overlay.
    fn hide_detail(&mut self);
}

/// Owns and wires the interactive market map.
///
/// Generic over the external collaborators: the layout algorithm `L`, the
/// drawing surface `S`, and the detail overlay `O`.
#[derive(Debug)]
pub struct MapController<L, S, O> {
    layout: L,
    surface: S,
    overlay: O,
    padding: f64,
    data: TileNode,
    viewport: Viewport,
    gestures: GestureMachine,
    tree: TileTree,
    leaves: Vec<LeafTile>,
    selection: Option<LeafTile>,
}

impl<L, S, O> MapController<L, S, O>
where
    L: LayoutEngine,
    S: Surface,
    O: DetailOverlay,
{
    /// Builds a controller over a `width` x `height` screen, runs the first
    /// layout pass, and paints the initial frame.
    pub fn new(
        data: TileNode,
        layout: L,
        surface: S,
        overlay: O,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let viewport = Viewport::new(width, height);
        let tree = layout.layout(&data, viewport.screen_size(), padding);
        let leaves = tree.leaves();
        let mut controller = Self {
            layout,
            surface,
            overlay,
            padding,
            data,
            viewport,
            gestures: GestureMachine::new(),
            tree,
            leaves,
            selection: None,
        };
        controller.repaint();
        controller
    }

    /// Returns the current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the leaf currently shown in the detail overlay, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&LeafTile> {
        self.selection.as_ref()
    }

    /// Returns the laid-out tile tree from the latest layout pass.
    #[must_use]
    pub fn tree(&self) -> &TileTree {
        &self.tree
    }

    /// Returns the drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the detail overlay.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// The screen was resized: re-clamp the viewport, rerun the layout for
    /// the new extent, and repaint.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
        self.relayout();
    }

    /// Replaces the dataset, rebuilding the layout from scratch.
    pub fn set_data(&mut self, data: TileNode) {
        self.data = data;
        self.relayout();
    }

    /// Feeds one host input event through the gesture machine and repaints.
    ///
    /// An activate that hits a leaf selects it and shows the overlay; an
    /// activate over empty space does nothing. Hover moves only steer the
    /// cursor affordance.
    pub fn on_event(&mut self, event: &InputEvent) {
        match self.gestures.handle(event, &mut self.viewport) {
            Some(GestureEffect::Activate(pos)) => {
                let world = self.viewport.screen_to_world(pos);
                if let Some(leaf) = locate(world, &self.leaves) {
                    self.overlay.show_detail(&leaf.name, leaf.weight, leaf.change);
                    self.selection = Some(leaf.clone());
                }
            }
            Some(GestureEffect::Hover(pos)) => {
                let world = self.viewport.screen_to_world(pos);
                let cursor = if locate(world, &self.leaves).is_some() {
                    Cursor::Pointer
                } else {
                    Cursor::Default
                };
                self.surface.set_cursor(cursor);
            }
            None => {}
        }
        self.repaint();
    }

    /// The host dismissed the overlay: clear the selection and hide it.
    pub fn dismiss_detail(&mut self) {
        self.selection = None;
        self.overlay.hide_detail();
    }

    fn relayout(&mut self) {
        self.tree = self
            .layout
            .layout(&self.data, self.viewport.screen_size(), self.padding);
        self.leaves = self.tree.leaves();
        self.repaint();
    }

    fn repaint(&mut self) {
        render(&mut self.surface, &self.viewport, &self.tree);
    }
}
