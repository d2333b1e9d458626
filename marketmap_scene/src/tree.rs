// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input tree: named groups and weighted, colored leaves.

use alloc::string::String;
use alloc::vec::Vec;

/// Per-leaf market data.
///
/// `weight` drives the tile's area share inside its group; `change` is a
/// signed percentage that drives the tile's color and detail display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafData {
    /// Size metric for the entity. Finite and non-negative.
    pub weight: f64,
    /// Signed change percentage. Finite.
    pub change: f64,
}

/// A node in the market map input tree.
///
/// A node is either a group carrying an ordered sequence of children, or a
/// leaf carrying [`LeafData`]. The two cases are mutually exclusive by
/// construction; there is no node that is both, and a leaf never has
/// children. The tree is built once per dataset change and is immutable
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TileNode {
    name: String,
    kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq)]
enum NodeKind {
    Group(Vec<TileNode>),
    Leaf(LeafData),
}

impl TileNode {
    /// Creates a group node with the given ordered children.
    #[must_use]
    pub fn group(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Group(children),
        }
    }

    /// Creates a leaf node with the given weight and change percentage.
    #[must_use]
    pub fn leaf(name: impl Into<String>, weight: f64, change: f64) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf(LeafData { weight, change }),
        }
    }

    /// Returns the node's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node's children, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.kind {
            NodeKind::Group(children) => children,
            NodeKind::Leaf(_) => &[],
        }
    }

    /// Returns the leaf data, or `None` for groups.
    #[must_use]
    pub fn leaf_data(&self) -> Option<&LeafData> {
        match &self.kind {
            NodeKind::Group(_) => None,
            NodeKind::Leaf(data) => Some(data),
        }
    }

    /// Returns `true` for leaf nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Sum of leaf weights in this subtree.
    ///
    /// Layout engines typically rescale this (for example by a square root
    /// per leaf) before partitioning; this is the raw sum.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        match &self.kind {
            NodeKind::Leaf(data) => data.weight,
            NodeKind::Group(children) => children.iter().map(Self::total_weight).sum(),
        }
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Group(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}
