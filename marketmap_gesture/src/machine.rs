// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use kurbo::Point;
use marketmap_view::Viewport;

use crate::events::{InputEvent, TouchPoint, WheelDirection};

/// Movement beyond this many pixels on either axis, between consecutive
/// moves, turns a potential tap into a drag. The flag is sticky for the rest
/// of the interaction.
pub const DRAG_THRESHOLD_PX: f64 = 2.0;

/// Anchored zoom factor applied per wheel notch toward the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Anchored zoom factor applied per wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 1.0 / 1.1;

/// Which input stream owns the current drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Dragging {
        pointer: PointerId,
        last: Point,
        moved: bool,
    },
    Pinching {
        a: TouchPoint,
        b: TouchPoint,
        start_dist: f64,
        start_zoom: f64,
        anchor_world: Point,
    },
    /// A pinch lost a finger; remaining touches are ignored until all lift.
    Ending,
}

/// Coarse view of the machine's current state, for hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No interaction in progress.
    Idle,
    /// A single pointer or touch is held down.
    Dragging,
    /// Two fingers are zooming.
    Pinching,
    /// A finished pinch is waiting for the remaining touches to lift.
    Ending,
}

/// Side effect of an input event beyond viewport mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    /// The user selected this screen point (tap or non-moving click).
    Activate(Point),
    /// The pointer moved with no interaction active; callers may hit test
    /// this point to update a hover affordance. No selection side effect.
    Hover(Point),
}

/// Turns serialized host input into viewport commands and activate signals.
///
/// The machine owns only transient per-interaction state; it mutates the
/// [`Viewport`] passed to [`GestureMachine::handle`] and reports at most one
/// [`GestureEffect`] per event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureMachine {
    state: State,
}

impl Default for State {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureMachine {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Dragging { .. } => GesturePhase::Dragging,
            State::Pinching { .. } => GesturePhase::Pinching,
            State::Ending => GesturePhase::Ending,
        }
    }

    /// Feeds one event through the machine, mutating `view` as needed.
    pub fn handle(&mut self, event: &InputEvent, view: &mut Viewport) -> Option<GestureEffect> {
        match event {
            InputEvent::PointerDown { pos } => {
                if matches!(self.state, State::Idle) {
                    self.state = State::Dragging {
                        pointer: PointerId::Mouse,
                        last: *pos,
                        moved: false,
                    };
                }
                None
            }
            InputEvent::PointerMove { pos } => self.on_move(PointerId::Mouse, *pos, view),
            InputEvent::PointerUp { pos } => self.on_lift(PointerId::Mouse, *pos),
            InputEvent::Wheel { pos, direction } => {
                let factor = match direction {
                    WheelDirection::In => WHEEL_ZOOM_IN,
                    WheelDirection::Out => WHEEL_ZOOM_OUT,
                };
                view.zoom_at(*pos, factor);
                None
            }
            InputEvent::TouchStart { touches } => {
                if let [a, b, ..] = touches.as_slice() {
                    // A second touch always wins: any single-touch drag is
                    // abandoned and can no longer activate.
                    self.begin_pinch(*a, *b, view);
                } else if let (State::Idle, Some(touch)) = (&self.state, touches.first()) {
                    self.state = State::Dragging {
                        pointer: PointerId::Touch(touch.id),
                        last: touch.pos,
                        moved: false,
                    };
                }
                None
            }
            InputEvent::TouchMove { touches } => self.on_touch_move(touches, view),
            InputEvent::TouchEnd { touches } => self.on_touch_end(touches),
        }
    }

    fn begin_pinch(&mut self, a: TouchPoint, b: TouchPoint, view: &Viewport) {
        let mid = a.pos.midpoint(b.pos);
        self.state = State::Pinching {
            start_dist: (b.pos - a.pos).hypot(),
            start_zoom: view.zoom(),
            anchor_world: view.screen_to_world(mid),
            a,
            b,
        };
    }

    fn on_move(&mut self, id: PointerId, pos: Point, view: &mut Viewport) -> Option<GestureEffect> {
        match &mut self.state {
            State::Idle => Some(GestureEffect::Hover(pos)),
            State::Dragging {
                pointer,
                last,
                moved,
            } if *pointer == id => {
                let delta = pos - *last;
                if delta.x.abs() > DRAG_THRESHOLD_PX || delta.y.abs() > DRAG_THRESHOLD_PX {
                    *moved = true;
                }
                *last = pos;
                view.pan_by(delta);
                None
            }
            _ => None,
        }
    }

    fn on_lift(&mut self, id: PointerId, pos: Point) -> Option<GestureEffect> {
        match self.state {
            State::Dragging { pointer, moved, .. } if pointer == id => {
                self.state = State::Idle;
                (!moved).then_some(GestureEffect::Activate(pos))
            }
            _ => None,
        }
    }

    fn on_touch_move(&mut self, touches: &[TouchPoint], view: &mut Viewport) -> Option<GestureEffect> {
        match &mut self.state {
            State::Dragging {
                pointer: PointerId::Touch(id),
                ..
            } => {
                let id = *id;
                let touch = touches.iter().find(|t| t.id == id)?;
                self.on_move(PointerId::Touch(id), touch.pos, view)
            }
            State::Pinching {
                a,
                b,
                start_dist,
                start_zoom,
                anchor_world,
            } => {
                for touch in touches {
                    if touch.id == a.id {
                        a.pos = touch.pos;
                    } else if touch.id == b.id {
                        b.pos = touch.pos;
                    }
                }
                let dist = (b.pos - a.pos).hypot();
                let ratio = if *start_dist > 0.0 { dist / *start_dist } else { 1.0 };
                let mid = a.pos.midpoint(b.pos);
                // The anchor is held under the current midpoint, not the one
                // the pinch started at, so the map follows both fingers.
                view.zoom_to_anchor(*start_zoom * ratio, *anchor_world, mid);
                None
            }
            _ => None,
        }
    }

    fn on_touch_end(&mut self, touches: &[TouchPoint]) -> Option<GestureEffect> {
        match self.state {
            State::Dragging {
                pointer: PointerId::Touch(id),
                last,
                moved,
            } => {
                if touches.iter().any(|t| t.id == id) {
                    return None;
                }
                self.state = if touches.is_empty() {
                    State::Idle
                } else {
                    State::Ending
                };
                (!moved).then_some(GestureEffect::Activate(last))
            }
            State::Pinching { a, b, .. } => {
                let still_down = |id: u64| touches.iter().any(|t| t.id == id);
                if still_down(a.id) && still_down(b.id) {
                    return None;
                }
                // Never falls back to a drag; the interaction is over.
                self.state = if touches.is_empty() {
                    State::Idle
                } else {
                    State::Ending
                };
                None
            }
            State::Ending if touches.is_empty() => {
                self.state = State::Idle;
                None
            }
            _ => None,
        }
    }
}
