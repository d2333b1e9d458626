// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap Render: the repaint pipeline over a minimal surface contract.
//!
//! [`render`] is a pure function of `(viewport, tile tree)` that replays the
//! whole scene into a [`Surface`]: resize to the screen, clear, fill every
//! leaf rectangle with a color bucketed from its change percentage, and draw
//! labels for tiles that are large enough on screen to stay legible.
//!
//! The pipeline works entirely in screen space. World rectangles are mapped
//! through the viewport's affine transform (`translate(offset) * scale(zoom)`)
//! before they reach the surface, and text is drawn at a constant size in
//! screen pixels, which is exactly the zoom-compensated `1/zoom` world font
//! size the design calls for.
//!
//! Concrete backends implement [`Surface`] (a web canvas, an SVG writer, a
//! GPU scene builder); [`recording::RecordingSurface`] is a reference backend
//! that captures the command stream for tests and debugging.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod recording;

mod color;
mod pipeline;

use kurbo::{Point, Rect, Size};
use peniko::Color;

pub use color::change_color;
pub use pipeline::{LABEL_FONT_PX, MIN_LABEL_HEIGHT_PX, MIN_LABEL_WIDTH_PX, render};

/// Pointer affordance requested from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// The regular arrow cursor.
    #[default]
    Default,
    /// The "clickable" hand cursor, shown while hovering a tile.
    Pointer,
}

/// The drawing surface contract.
///
/// All coordinates are screen pixels; the render pipeline has already applied
/// the viewport transform. Implementations are expected to be cheap enough to
/// replay the full scene on every repaint.
pub trait Surface {
    /// Resizes the backing surface to the given screen size.
    fn resize(&mut self, size: Size);

    /// Clears the whole surface.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws one line of text centered (horizontally and vertically) on
    /// `center`, at `size_px` screen pixels.
    fn fill_text(&mut self, text: &str, center: Point, size_px: f64, color: Color);

    /// Updates the pointer affordance.
    fn set_cursor(&mut self, cursor: Cursor);
}
