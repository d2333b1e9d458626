// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The laid-out tree: world-space rectangles mirroring the input tree shape.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Rect, Size};

use crate::tree::TileNode;

/// The external tiling algorithm.
///
/// Given an input tree and a world-space extent, an engine partitions the
/// extent into non-overlapping rectangles, one per node, mirroring the input
/// tree's shape. Implementations must be pure and deterministic: the same
/// tree and size always produce the same [`TileTree`].
///
/// Callers invoke this once per dataset or viewport-size change, never per
/// pan/zoom frame.
pub trait LayoutEngine {
    /// Partitions `(0, 0)..(width, height)` among the nodes of `root`.
    ///
    /// `padding` is the world-space gap the engine should leave between
    /// sibling rectangles.
    fn layout(&self, root: &TileNode, size: Size, padding: f64) -> TileTree;
}

/// One laid-out tile: a world-space rectangle joined with the node fields
/// rendering and hit testing need.
///
/// Exactly one of the following holds, mirroring [`TileNode`]: `children` is
/// non-empty (a group) or `leaf` is present (a leaf).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTile {
    /// World-space rectangle, `x0 <= x1`, `y0 <= y1`.
    pub rect: Rect,
    /// Display name copied from the input node.
    pub name: String,
    /// Leaf data copied from the input node, `None` for groups.
    pub leaf: Option<crate::LeafData>,
    /// Laid-out children, in input order. Empty for leaves.
    pub children: Vec<PlacedTile>,
}

/// A flattened leaf entry in layout order.
///
/// This is the shape the hit tester scans; it is rebuilt whole whenever the
/// layout is recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafTile {
    /// World-space rectangle of the leaf.
    pub rect: Rect,
    /// Display name.
    pub name: String,
    /// Size metric shown in the detail overlay.
    pub weight: f64,
    /// Signed change percentage.
    pub change: f64,
}

/// A laid-out tile tree produced by a [`LayoutEngine`].
///
/// Owned by the render pipeline and hit tester for the lifetime of one layout
/// pass; rebuilt whole on any viewport-size or dataset change.
#[derive(Clone, Debug, PartialEq)]
pub struct TileTree {
    root: PlacedTile,
}

impl TileTree {
    /// Wraps a placed root tile.
    #[must_use]
    pub fn new(root: PlacedTile) -> Self {
        Self { root }
    }

    /// Returns the root tile.
    #[must_use]
    pub fn root(&self) -> &PlacedTile {
        &self.root
    }

    /// Flattens the leaves into a list in layout order.
    #[must_use]
    pub fn leaves(&self) -> Vec<LeafTile> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut out);
        out
    }
}

fn collect_leaves(tile: &PlacedTile, out: &mut Vec<LeafTile>) {
    if let Some(leaf) = &tile.leaf {
        out.push(LeafTile {
            rect: tile.rect,
            name: tile.name.clone(),
            weight: leaf.weight,
            change: leaf.change,
        });
    }
    for child in &tile.children {
        collect_leaves(child, out);
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use kurbo::Rect;

    use super::{PlacedTile, TileTree};
    use crate::LeafData;

    fn leaf_tile(name: &str, rect: Rect, weight: f64, change: f64) -> PlacedTile {
        PlacedTile {
            rect,
            name: name.to_string(),
            leaf: Some(LeafData { weight, change }),
            children: vec![],
        }
    }

    #[test]
    fn leaves_are_flattened_in_layout_order() {
        let tree = TileTree::new(PlacedTile {
            rect: Rect::new(0.0, 0.0, 20.0, 10.0),
            name: "Market".to_string(),
            leaf: None,
            children: vec![
                PlacedTile {
                    rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                    name: "Tech".to_string(),
                    leaf: None,
                    children: vec![
                        leaf_tile("A", Rect::new(0.0, 0.0, 5.0, 10.0), 3.0, 1.0),
                        leaf_tile("B", Rect::new(5.0, 0.0, 10.0, 10.0), 2.0, -1.0),
                    ],
                },
                leaf_tile("C", Rect::new(10.0, 0.0, 20.0, 10.0), 5.0, 0.0),
            ],
        });

        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[0].name, "A");
        assert_eq!(leaves[1].name, "B");
        assert_eq!(leaves[2].name, "C");
        assert_eq!(leaves[2].rect, Rect::new(10.0, 0.0, 20.0, 10.0));
    }
}
