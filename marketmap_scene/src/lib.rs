// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap Scene: the tile tree data model shared by the other MarketMap crates.
//!
//! A market map is a hierarchy of named, weighted tiles. This crate provides:
//!
//! - [`TileNode`]: the immutable input tree (groups and weighted leaves).
//! - [`TileTree`] / [`PlacedTile`] / [`LeafTile`]: the laid-out output tree in
//!   world coordinates, plus a flattened leaf list for hit testing.
//! - [`LayoutEngine`]: the contract for the external tiling algorithm that
//!   turns a [`TileNode`] tree into a [`TileTree`].
//! - [`build_tree`]: shaping of flat market records (id, group, size metric,
//!   change percent) into a grouped [`TileNode`] tree.
//!
//! The tiling computation itself is deliberately not part of this workspace;
//! any squarified-treemap (or similar) implementation can sit behind
//! [`LayoutEngine`]. Layout output is recomputed only when the dataset or the
//! viewport size changes, never on pan/zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use marketmap_scene::TileNode;
//!
//! let tree = TileNode::group(
//!     "Market",
//!     vec![TileNode::group(
//!         "Technology",
//!         vec![
//!             TileNode::leaf("AAPL", 2.9e12, 1.2),
//!             TileNode::leaf("MSFT", 2.7e12, -0.4),
//!         ],
//!     )],
//! );
//! assert_eq!(tree.children().len(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dataset;
mod layout;
mod tree;

pub use dataset::{DatasetError, MarketRecord, build_tree};
pub use layout::{LayoutEngine, LeafTile, PlacedTile, TileTree};
pub use tree::{LeafData, TileNode};
