// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end interaction scenarios: events in, paint commands and overlay
//! calls out.

use kurbo::{Point, Rect, Size};
use marketmap_controller::{DetailOverlay, MapController};
use marketmap_gesture::{InputEvent, TouchList, TouchPoint, WheelDirection};
use marketmap_render::recording::{DrawCmd, RecordingSurface};
use marketmap_render::Cursor;
use marketmap_scene::{LayoutEngine, PlacedTile, TileNode, TileTree};

/// Deterministic stand-in for the external tiling algorithm: groups split
/// the extent horizontally by weight share, leaves split their group
/// vertically. Good enough to exercise the core; not a treemap.
struct StripLayout;

impl LayoutEngine for StripLayout {
    fn layout(&self, root: &TileNode, size: Size, padding: f64) -> TileTree {
        let rect = Rect::new(0.0, 0.0, size.width, size.height);
        TileTree::new(place(root, rect, padding, true))
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
    let weights: Vec<f64> = node.children().iter().map(TileNode::total_weight).collect();
    let sum: f64 = weights.iter().sum();
    let mut cursor = if horizontal { inner.x0 } else { inner.y0 };
    let extent = if horizontal { inner.width() } else { inner.height() };
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

#[derive(Debug, Default)]
struct RecordingOverlay {
    shown: Vec<(String, f64, f64)>,
    hides: usize,
}

impl DetailOverlay for RecordingOverlay {
    fn show_detail(&mut self, name: &str, value: f64, change: f64) {
        self.shown.push((name.to_string(), value, change));
    }

    fn hide_detail(&mut self) {
        self.hides += 1;
    }
}

fn market() -> TileNode {
    TileNode::group(
        "Market",
        vec![
            TileNode::group(
                "Technology",
                vec![
                    TileNode::leaf("AAPL", 3.0, 1.2),
                    TileNode::leaf("MSFT", 1.0, -0.4),
                ],
            ),
            TileNode::group("Energy", vec![TileNode::leaf("XOM", 4.0, 0.0)]),
        ],
    )
}

fn controller(padding: f64) -> MapController<StripLayout, RecordingSurface, RecordingOverlay> {
    MapController::new(
        market(),
        StripLayout,
        RecordingSurface::new(),
        RecordingOverlay::default(),
        800.0,
        600.0,
        padding,
    )
}

fn touches(pts: &[(u64, f64, f64)]) -> TouchList {
    pts.iter()
        .map(|&(id, x, y)| TouchPoint::new(id, Point::new(x, y)))
        .collect()
}

/// Commands of the most recent frame (everything after the last `Clear`).
fn last_frame(surface: &RecordingSurface) -> &[DrawCmd] {
    let start = surface
        .commands
        .iter()
        .rposition(|cmd| *cmd == DrawCmd::Clear)
        .map_or(0, |i| i + 1);
    &surface.commands[start..]
}

#[test]
fn initial_frame_paints_every_leaf() {
    let map = controller(0.0);
    let surface = map.surface();
    assert_eq!(surface.commands[0], DrawCmd::Resize(Size::new(800.0, 600.0)));
    assert_eq!(surface.commands[1], DrawCmd::Clear);

    let fills = surface.rects();
    assert_eq!(fills.len(), 3, "three leaves");
    // Groups split 800 wide by weight 4:4; Technology splits 600 tall 3:1.
    assert_eq!(fills[0].0, Rect::new(0.0, 0.0, 400.0, 450.0));
    assert_eq!(fills[1].0, Rect::new(0.0, 450.0, 400.0, 600.0));
    assert_eq!(fills[2].0, Rect::new(400.0, 0.0, 800.0, 600.0));
}

#[test]
fn tap_on_a_tile_shows_its_detail() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::PointerDown { pos: Point::new(100.0, 100.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(100.0, 100.0) });

    assert_eq!(
        map.overlay().shown,
        vec![("AAPL".to_string(), 3.0, 1.2)],
        "activate resolves through the hit tester"
    );
    assert_eq!(map.selection().map(|l| l.name.as_str()), Some("AAPL"));
}

#[test]
fn drag_never_selects() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::PointerDown { pos: Point::new(100.0, 100.0) });
    map.on_event(&InputEvent::PointerMove { pos: Point::new(150.0, 100.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(150.0, 100.0) });

    assert!(map.overlay().shown.is_empty(), "a drag is not a tap");
    assert!(map.selection().is_none());
}

#[test]
fn tap_after_zoom_hits_through_the_inverse_transform() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::Wheel {
        pos: Point::new(600.0, 300.0),
        direction: WheelDirection::In,
    });
    assert!((map.viewport().zoom() - 1.1).abs() < 1e-12, "one notch in");

    // Screen (700, 300) maps to world x = (700 + 60) / 1.1 ~ 690.9: XOM.
    map.on_event(&InputEvent::PointerDown { pos: Point::new(700.0, 300.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(700.0, 300.0) });
    assert_eq!(map.overlay().shown, vec![("XOM".to_string(), 4.0, 0.0)]);
}

#[test]
fn pinch_cancels_selection_end_to_end() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::TouchStart { touches: touches(&[(1, 100.0, 100.0)]) });
    map.on_event(&InputEvent::TouchStart {
        touches: touches(&[(1, 100.0, 100.0), (2, 200.0, 100.0)]),
    });
    map.on_event(&InputEvent::TouchEnd { touches: touches(&[(2, 200.0, 100.0)]) });
    map.on_event(&InputEvent::TouchEnd { touches: touches(&[]) });

    assert!(map.overlay().shown.is_empty(), "a pinch never activates");
}

#[test]
fn hover_drives_the_cursor_affordance() {
    // Padding leaves gaps between group strips around x = 400.
    let mut map = controller(2.0);
    map.on_event(&InputEvent::PointerMove { pos: Point::new(100.0, 100.0) });
    assert_eq!(map.surface().last_cursor(), Some(Cursor::Pointer));

    map.on_event(&InputEvent::PointerMove { pos: Point::new(400.0, 300.0) });
    assert_eq!(map.surface().last_cursor(), Some(Cursor::Default));

    assert!(map.overlay().shown.is_empty(), "hover has no selection side effect");
}

#[test]
fn resize_recomputes_the_layout() {
    let mut map = controller(0.0);
    map.on_resize(400.0, 300.0);

    let frame = last_frame(map.surface());
    let fills: Vec<_> = frame
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(fills[0], Rect::new(0.0, 0.0, 200.0, 225.0), "rects follow the new extent");
    assert_eq!(map.tree().root().rect, Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn repaint_tracks_the_transform_every_frame() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::Wheel {
        pos: Point::new(0.0, 0.0),
        direction: WheelDirection::In,
    });

    let frame = last_frame(map.surface());
    let first_fill = frame
        .iter()
        .find_map(|cmd| match cmd {
            DrawCmd::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .expect("frame paints leaves");
    // Anchored at the origin, the AAPL rect just scales by 1.1.
    assert!((first_fill.x1 - 440.0).abs() < 1e-9, "scaled width: {first_fill:?}");
    assert!((first_fill.y1 - 495.0).abs() < 1e-9, "scaled height: {first_fill:?}");
}

#[test]
fn dismissal_clears_selection_and_hides_the_overlay() {
    let mut map = controller(0.0);
    map.on_event(&InputEvent::PointerDown { pos: Point::new(100.0, 100.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(100.0, 100.0) });
    assert!(map.selection().is_some(), "tap selected a tile");

    map.dismiss_detail();
    assert!(map.selection().is_none());
    assert_eq!(map.overlay().hides, 1);
}

#[test]
fn dataset_swap_rebuilds_the_tree() {
    let mut map = controller(0.0);
    map.set_data(TileNode::group(
        "Market",
        vec![TileNode::group("Solo", vec![TileNode::leaf("ONLY", 1.0, 0.2)])],
    ));

    map.on_event(&InputEvent::PointerDown { pos: Point::new(700.0, 500.0) });
    map.on_event(&InputEvent::PointerUp { pos: Point::new(700.0, 500.0) });
    assert_eq!(map.overlay().shown, vec![("ONLY".to_string(), 1.0, 0.2)]);
}
