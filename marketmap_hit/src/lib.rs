// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap Hit: point hit testing over the flattened leaf list.
//!
//! Callers convert a screen point into world space with
//! `marketmap_view::Viewport::screen_to_world` and pass it to [`locate`]
//! together with the cached leaf list from the current layout pass. A miss
//! is "no selection", not an error.
//!
//! Sibling tiles are non-overlapping by construction of the layout
//! algorithm, so returning the first containing rectangle in layout order is
//! equivalent to an exact match; order only matters for degenerate
//! zero-area tiles.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use marketmap_scene::LeafTile;

/// Returns the first leaf in layout order whose rectangle contains `world`.
///
/// Containment is closed on all four edges: a point exactly on a shared
/// boundary hits the earlier of the adjacent tiles.
#[must_use]
pub fn locate(world: Point, leaves: &[LeafTile]) -> Option<&LeafTile> {
    leaves.iter().find(|leaf| contains(leaf, world))
}

fn contains(leaf: &LeafTile, pt: Point) -> bool {
    let r = leaf.rect;
    r.x0 <= pt.x && pt.x <= r.x1 && r.y0 <= pt.y && pt.y <= r.y1
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Point, Rect};
    use marketmap_scene::LeafTile;

    use super::locate;

    fn leaves() -> Vec<LeafTile> {
        vec![
            LeafTile {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                name: "A".to_string(),
                weight: 1.0,
                change: 0.5,
            },
            LeafTile {
                rect: Rect::new(10.0, 0.0, 20.0, 10.0),
                name: "B".to_string(),
                weight: 2.0,
                change: -0.5,
            },
        ]
    }

    #[test]
    fn interior_points_hit_their_tile() {
        let leaves = leaves();
        assert_eq!(locate(Point::new(5.0, 5.0), &leaves).map(|l| l.name.as_str()), Some("A"));
        assert_eq!(locate(Point::new(15.0, 5.0), &leaves).map(|l| l.name.as_str()), Some("B"));
    }

    #[test]
    fn outside_points_miss() {
        let leaves = leaves();
        assert!(locate(Point::new(25.0, 25.0), &leaves).is_none());
        assert!(locate(Point::new(-1.0, 5.0), &leaves).is_none());
    }

    #[test]
    fn shared_edge_hits_the_earlier_tile() {
        let leaves = leaves();
        // x = 10 lies on both rectangles; first match wins.
        assert_eq!(locate(Point::new(10.0, 5.0), &leaves).map(|l| l.name.as_str()), Some("A"));
    }

    #[test]
    fn corners_are_inside() {
        let leaves = leaves();
        assert_eq!(locate(Point::new(0.0, 0.0), &leaves).map(|l| l.name.as_str()), Some("A"));
        assert_eq!(locate(Point::new(20.0, 10.0), &leaves).map(|l| l.name.as_str()), Some("B"));
    }

    #[test]
    fn empty_list_always_misses() {
        assert!(locate(Point::new(0.0, 0.0), &[]).is_none());
    }
}
