// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The repaint walk over the laid-out tile tree.

use alloc::format;
use kurbo::{Affine, Point, Rect, Vec2};
use marketmap_scene::{PlacedTile, TileTree};
use marketmap_view::Viewport;
use peniko::Color;

use crate::{Surface, color::change_color};

/// Minimum on-screen tile width, in pixels, for labels to be drawn.
pub const MIN_LABEL_WIDTH_PX: f64 = 40.0;

/// Minimum on-screen tile height, in pixels, for labels to be drawn.
pub const MIN_LABEL_HEIGHT_PX: f64 = 20.0;

/// Label font size in screen pixels, independent of zoom.
pub const LABEL_FONT_PX: f64 = 12.0;

// Vertical distance from a leaf's center to each of its two label lines.
const LABEL_LINE_OFFSET_PX: f64 = 7.0;

// Gap between a group rectangle's top edge and its label baseline center.
const GROUP_LABEL_GAP_PX: f64 = 8.0;

const LEAF_TEXT: Color = Color::from_rgb8(255, 255, 255);
const GROUP_TEXT: Color = Color::from_rgb8(190, 193, 200);

/// Repaints the whole scene.
///
/// Resizes the surface to the viewport's screen size, clears it, and walks
/// the tree: every leaf rectangle is filled with its change-bucket color;
/// leaves whose on-screen size exceeds the legibility minimums get their
/// name and signed change as two centered lines, and groups clearing the
/// same threshold get their label drawn once above their rectangle. Labels
/// that would be too small are simply omitted.
pub fn render<S: Surface + ?Sized>(surface: &mut S, view: &Viewport, tree: &TileTree) {
    surface.resize(view.screen_size());
    surface.clear();
    paint_tile(surface, view.transform(), tree.root());
}

fn paint_tile<S: Surface + ?Sized>(surface: &mut S, transform: Affine, tile: &PlacedTile) {
    let screen = transform.transform_rect_bbox(tile.rect);
    match &tile.leaf {
        Some(leaf) => {
            surface.fill_rect(screen, change_color(leaf.change));
            if legible(screen) {
                let center = screen.center();
                surface.fill_text(
                    &tile.name,
                    center - Vec2::new(0.0, LABEL_LINE_OFFSET_PX),
                    LABEL_FONT_PX,
                    LEAF_TEXT,
                );
                surface.fill_text(
                    &format!("{:+.2}%", leaf.change),
                    center + Vec2::new(0.0, LABEL_LINE_OFFSET_PX),
                    LABEL_FONT_PX,
                    LEAF_TEXT,
                );
            }
        }
        None => {
            if !tile.children.is_empty() && legible(screen) {
                let anchor = Point::new(screen.center().x, screen.y0 - GROUP_LABEL_GAP_PX);
                surface.fill_text(&tile.name, anchor, LABEL_FONT_PX, GROUP_TEXT);
            }
            for child in &tile.children {
                paint_tile(surface, transform, child);
            }
        }
    }
}

// On-screen size is world size scaled by zoom; the transform has already
// applied that, so the screen rect is checked directly. Both axes must
// clear their minimum independently.
fn legible(screen: Rect) -> bool {
    screen.width() > MIN_LABEL_WIDTH_PX && screen.height() > MIN_LABEL_HEIGHT_PX
}
