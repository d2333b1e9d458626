// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shaping of flat market records into a grouped [`TileNode`] tree.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::tree::TileNode;

/// One row of the externally loaded dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketRecord {
    /// Entity identifier, used as the tile name.
    pub id: String,
    /// Group the entity belongs to.
    pub group_id: String,
    /// Size metric (market cap or similar). Must be finite and non-negative.
    pub size_metric: f64,
    /// Signed change percentage. Must be finite.
    pub change_percent: f64,
}

/// Rejection reasons for malformed records.
///
/// Numeric validation happens here, at the dataset boundary; the rest of the
/// workspace assumes every leaf carries finite values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetError {
    /// The record's size metric is NaN or infinite.
    NonFiniteWeight {
        /// Identifier of the offending record.
        id: String,
    },
    /// The record's size metric is negative.
    NegativeWeight {
        /// Identifier of the offending record.
        id: String,
    },
    /// The record's change percentage is NaN or infinite.
    NonFiniteChange {
        /// Identifier of the offending record.
        id: String,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteWeight { id } => write!(f, "record {id:?} has a non-finite size metric"),
            Self::NegativeWeight { id } => write!(f, "record {id:?} has a negative size metric"),
            Self::NonFiniteChange { id } => {
                write!(f, "record {id:?} has a non-finite change percentage")
            }
        }
    }
}

impl core::error::Error for DatasetError {}

/// Groups records into a two-level tree: a root named `name` containing one
/// group node per distinct `group_id`, each containing its records as leaves.
///
/// Groups appear in first-occurrence order. Within a group, leaves are sorted
/// by descending weight (ties keep record order) so that layout engines place
/// the heaviest tiles first. Group names come from `group_names`; a group id
/// with no mapping entry is displayed as the raw id.
///
/// # Errors
///
/// Returns a [`DatasetError`] for the first record with a non-finite or
/// negative size metric or a non-finite change percentage.
pub fn build_tree(
    name: impl Into<String>,
    records: &[MarketRecord],
    group_names: &HashMap<String, String>,
) -> Result<TileNode, DatasetError> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<TileNode>> = HashMap::new();

    for record in records {
        if !record.size_metric.is_finite() {
            return Err(DatasetError::NonFiniteWeight {
                id: record.id.clone(),
            });
        }
        if record.size_metric < 0.0 {
            return Err(DatasetError::NegativeWeight {
                id: record.id.clone(),
            });
        }
        if !record.change_percent.is_finite() {
            return Err(DatasetError::NonFiniteChange {
                id: record.id.clone(),
            });
        }

        let leaf = TileNode::leaf(
            record.id.clone(),
            record.size_metric,
            record.change_percent,
        );
        match groups.entry(record.group_id.as_str()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(leaf),
            Entry::Vacant(entry) => {
                order.push(&record.group_id);
                entry.insert(alloc::vec![leaf]);
            }
        }
    }

    let children = order
        .iter()
        .map(|group_id| {
            let mut leaves = groups.remove(group_id).unwrap_or_default();
            // Stable sort keeps record order among equal weights.
            leaves.sort_by(|a, b| weight_of(b).partial_cmp(&weight_of(a)).unwrap_or(Ordering::Equal));
            let display = group_names
                .get(*group_id)
                .map_or_else(|| group_id.to_string(), Clone::clone);
            TileNode::group(display, leaves)
        })
        .collect();

    Ok(TileNode::group(name, children))
}

fn weight_of(node: &TileNode) -> f64 {
    node.leaf_data().map_or(0.0, |data| data.weight)
}
