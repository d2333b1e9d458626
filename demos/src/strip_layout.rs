// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple stand-in for the external tiling algorithm.
//!
//! Real deployments plug a squarified-treemap implementation into
//! [`LayoutEngine`]; the demos use alternating-direction strips, which is
//! trivial to verify by eye and exercises the whole pipeline. Leaf areas
//! follow the square root of the size metric, matching the weighting the
//! original market map feeds its treemap.

use kurbo::{Rect, Size};
use marketmap_scene::{LayoutEngine, PlacedTile, TileNode, TileTree};

/// Alternating horizontal/vertical proportional strips.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct StripLayout;

impl LayoutEngine for StripLayout {
    fn layout(&self, root: &TileNode, size: Size, padding: f64) -> TileTree {
        let rect = Rect::new(0.0, 0.0, size.width, size.height);
        TileTree::new(place(root, rect, padding, true))
    }
}

fn scaled_weight(node: &TileNode) -> f64 {
    match node.leaf_data() {
        Some(data) => data.weight.sqrt(),
        None => node.children().iter().map(scaled_weight).sum(),
    }
}

fn place(node: &TileNode, rect: Rect, padding: f64, horizontal: bool) -> PlacedTile {
    if let Some(data) = node.leaf_data() {
        return PlacedTile {
            rect,
            name: node.name().to_string(),
            leaf: Some(*data),
            children: vec![],
        };
    }

    let inner = rect.inset(-padding);
    let weights: Vec<f64> = node.children().iter().map(scaled_weight).collect();
    let sum: f64 = weights.iter().sum();
    let extent = if horizontal { inner.width() } else { inner.height() };
    let mut cursor = if horizontal { inner.x0 } else { inner.y0 };

    let children = node
        .children()
        .iter()
        .zip(&weights)
        .map(|(child, weight)| {
            let share = if sum > 0.0 {
                weight / sum
            } else {
                1.0 / weights.len() as f64
            };
            let span = extent * share;
            let child_rect = if horizontal {
                Rect::new(cursor, inner.y0, cursor + span, inner.y1)
            } else {
                Rect::new(inner.x0, cursor, inner.x1, cursor + span)
            };
            cursor += span;
            place(child, child_rect, padding, !horizontal)
        })
        .collect();

    PlacedTile {
        rect,
        name: node.name().to_string(),
        leaf: None,
        children,
    }
}
