// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! MarketMap Gesture: the state machine that turns raw pointer, wheel, and
//! touch events into viewport commands and a disambiguated activate signal.
//!
//! The machine consumes host input events serialized on one thread and drives
//! a [`marketmap_view::Viewport`]:
//!
//! - Single pointer/touch movement pans.
//! - A down/up pair that never moves more than [`DRAG_THRESHOLD_PX`] on
//!   either axis between consecutive moves is a tap and yields
//!   [`GestureEffect::Activate`] at the release position.
//! - A second touch promotes the interaction to a pinch, which zooms around
//!   the world point captured under the initial finger midpoint. A pinch
//!   never resolves to an activate, even after fingers lift.
//! - Wheel input is stateless: an immediate anchored zoom by
//!   [`WHEEL_ZOOM_IN`] or [`WHEEL_ZOOM_OUT`].
//! - Pointer moves outside any interaction surface as
//!   [`GestureEffect::Hover`] so callers can drive a cursor affordance.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use marketmap_gesture::{GestureEffect, GestureMachine, InputEvent};
//! use marketmap_view::Viewport;
//!
//! let mut view = Viewport::new(800.0, 600.0);
//! let mut gestures = GestureMachine::new();
//!
//! gestures.handle(&InputEvent::PointerDown { pos: Point::new(100.0, 100.0) }, &mut view);
//! let effect = gestures.handle(&InputEvent::PointerUp { pos: Point::new(100.0, 100.0) }, &mut view);
//! assert_eq!(effect, Some(GestureEffect::Activate(Point::new(100.0, 100.0))));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod events;
mod machine;

pub use events::{InputEvent, TouchList, TouchPoint, WheelDirection};
pub use machine::{
    DRAG_THRESHOLD_PX, GestureEffect, GestureMachine, GesturePhase, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
