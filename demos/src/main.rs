// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless market map demo: loads a dataset, replays a short interaction
//! (wheel zoom, drag, tap), and writes the final frame as SVG.
//!
//! Usage: `market_map_svg [dataset.json] [out.svg]`. With no arguments the
//! bundled sample dataset is rendered to `market_map.svg`.

mod dataset;
mod strip_layout;
mod svg;

use std::error::Error;

use kurbo::Point;
use marketmap_controller::{DetailOverlay, MapController};
use marketmap_gesture::{InputEvent, WheelDirection};

use crate::dataset::MarketDataset;
use crate::strip_layout::StripLayout;
use crate::svg::SvgSurface;

/// Prints detail requests instead of showing a widget.
#[derive(Debug, Default)]
struct StdoutOverlay;

impl DetailOverlay for StdoutOverlay {
    fn show_detail(&mut self, name: &str, value: f64, change: f64) {
        println!("selected {name}: size {value}, change {change:+.2}%");
    }

    fn hide_detail(&mut self) {
        println!("detail dismissed");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let json = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => include_str!("../data/market.json").to_string(),
    };
    let out_path = args.next().unwrap_or_else(|| "market_map.svg".to_string());

    let tree = MarketDataset::from_json(&json)?.into_tree()?;
    let mut map = MapController::new(
        tree,
        StripLayout,
        SvgSurface::new(),
        StdoutOverlay,
        1024.0,
        768.0,
        2.0,
    );

    // A short scripted session: zoom in twice around the center, pan a bit,
    // then tap to select whatever ends up under the pointer.
    let center = Point::new(512.0, 384.0);
    map.on_event(&InputEvent::Wheel { pos: center, direction: WheelDirection::In });
    map.on_event(&InputEvent::Wheel { pos: center, direction: WheelDirection::In });
    map.on_event(&InputEvent::PointerDown { pos: center });
    map.on_event(&InputEvent::PointerMove { pos: Point::new(472.0, 384.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(472.0, 384.0) });
    map.on_event(&InputEvent::PointerDown { pos: center });
    map.on_event(&InputEvent::PointerUp { pos: center });

    std::fs::write(&out_path, map.surface().to_svg())?;
    println!(
        "wrote {out_path} at zoom {:.2} with {} tiles",
        map.viewport().zoom(),
        map.tree().root().children.len(),
    );
    Ok(())
}
