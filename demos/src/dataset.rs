// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON dataset loading for the demos.

use hashbrown::HashMap;
use marketmap_scene::{DatasetError, MarketRecord, TileNode, build_tree};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StockRow {
    id: String,
    group_id: String,
    size_metric: f64,
    change_percent: f64,
}

/// The on-disk demo dataset: flat stock rows plus a group-id to display-name
/// mapping.
#[derive(Debug, Deserialize)]
pub(crate) struct MarketDataset {
    stocks: Vec<StockRow>,
    groups: HashMap<String, String>,
}

impl MarketDataset {
    /// Parses the JSON dataset format.
    pub(crate) fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Shapes the rows into the grouped tile tree.
    pub(crate) fn into_tree(self) -> Result<TileNode, DatasetError> {
        let records: Vec<MarketRecord> = self
            .stocks
            .into_iter()
            .map(|row| MarketRecord {
                id: row.id,
                group_id: row.group_id,
                size_metric: row.size_metric,
                change_percent: row.change_percent,
            })
            .collect();
        build_tree("Market", &records, &self.groups)
    }
}
