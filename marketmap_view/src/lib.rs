// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap View: the clamped, zoom-anchored viewport transform.
//!
//! [`Viewport`] owns the zoom scale and pan offset that map world (layout)
//! coordinates onto the screen, and maintains two invariants at all times:
//!
//! - `zoom >= 1`: the view never zooms out past the fit-to-screen level.
//! - The scaled world always covers the full screen rectangle:
//!   `offset_x` stays in `[width * (1 - zoom), 0]`, and likewise for
//!   `offset_y`. At `zoom == 1` this forces the offset to `(0, 0)`.
//!
//! All mutation happens through [`Viewport::zoom_at`], [`Viewport::pan_by`],
//! [`Viewport::zoom_to_anchor`], and [`Viewport::resize`]; each re-clamps
//! before returning, so the invariants hold between any two operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use marketmap_view::Viewport;
//!
//! let mut view = Viewport::new(800.0, 600.0);
//! view.zoom_at(Point::new(400.0, 300.0), 1.1);
//!
//! // The world point under the anchor stays put.
//! let world = view.screen_to_world(Point::new(400.0, 300.0));
//! assert!((world.x - 400.0).abs() < 1e-9);
//! assert!((world.y - 300.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Floor for the zoom scale; zooming out never passes fit-to-screen.
///
/// There is deliberately no ceiling: unbounded zoom-in is allowed.
pub const MIN_ZOOM: f64 = 1.0;

/// Pan/zoom transform between world (layout) space and screen space.
///
/// World space is the fixed coordinate space tile rectangles are laid out in;
/// screen space is the pixel space of the drawing surface and of host input
/// events. A screen point `s` corresponds to the world point
/// `(s - offset) / zoom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    zoom: f64,
    offset: Vec2,
}

impl Viewport {
    /// Creates a viewport over a `width` x `height` screen at zoom 1,
    /// offset `(0, 0)`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: MIN_ZOOM,
            offset: Vec2::ZERO,
        }
    }

    /// Returns the current zoom scale, always `>= 1`.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the screen size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the screen rectangle `(0, 0)..(width, height)`.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns the world-to-screen transform
    /// `translate(offset) * scale(zoom)`.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.offset.x) / self.zoom,
            (pt.y - self.offset.y) / self.zoom,
        )
    }

    /// Converts a world point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.zoom + self.offset.x,
            pt.y * self.zoom + self.offset.y,
        )
    }

    /// Updates the screen size, keeping zoom and re-clamping the offset.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    /// Zooms by `factor` around a screen-space anchor.
    ///
    /// The world point currently under `anchor` stays under `anchor` after
    /// the zoom change, up to the clamping-induced shift when the unclamped
    /// offset would uncover the screen edge. Non-positive factors are
    /// ignored; results below [`MIN_ZOOM`] are clamped to it.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let new_zoom = (self.zoom * factor).max(MIN_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }
        let world = self.screen_to_world(anchor);
        self.zoom = new_zoom;
        self.offset = anchor.to_vec2() - world.to_vec2() * self.zoom;
        self.clamp_offset();
    }

    /// Sets the zoom scale directly and repositions so that `world` lands
    /// under `screen`.
    ///
    /// This is the pinch primitive: the anchor is the world point captured
    /// when the pinch began, and `screen` is the current finger midpoint.
    pub fn zoom_to_anchor(&mut self, zoom: f64, world: Point, screen: Point) {
        self.zoom = zoom.max(MIN_ZOOM);
        self.offset = screen.to_vec2() - world.to_vec2() * self.zoom;
        self.clamp_offset();
    }

    /// Pans by a screen-space delta, then clamps.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
        self.clamp_offset();
    }

    // Offsets are clamped independently per axis so the scaled world keeps
    // covering the screen rectangle.
    fn clamp_offset(&mut self) {
        let min_x = self.width * (1.0 - self.zoom);
        let min_y = self.height * (1.0 - self.zoom);
        self.offset.x = self.offset.x.clamp(min_x, 0.0);
        self.offset.y = self.offset.y.clamp(min_y, 0.0);
    }
}
