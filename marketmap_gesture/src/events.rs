// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by the host.

use kurbo::Point;
use smallvec::SmallVec;

/// One active touch contact: a host-assigned identity and its position in
/// screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned touch identity, stable for the contact's lifetime.
    pub id: u64,
    /// Position in screen coordinates.
    pub pos: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: u64, pos: Point) -> Self {
        Self { id, pos }
    }
}

/// The set of currently active touches carried by a touch event.
///
/// Two contacts cover the supported gestures; more spill to the heap.
pub type TouchList = SmallVec<[TouchPoint; 2]>;

/// Wheel/scroll direction. Only the sign of the host delta matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scroll toward the user: zoom in.
    In,
    /// Scroll away from the user: zoom out.
    Out,
}

/// A host input event delivered to the [`crate::GestureMachine`].
///
/// Touch events carry the full list of touches active *after* the event:
/// `TouchStart` includes the new contact, `TouchEnd` lists only the
/// remaining ones. Hosts with multiple input threads must funnel events
/// through one serialized queue; the machine assumes strictly ordered
/// delivery.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer (mouse) pressed.
    PointerDown {
        /// Screen position.
        pos: Point,
    },
    /// Primary pointer moved.
    PointerMove {
        /// Screen position.
        pos: Point,
    },
    /// Primary pointer released.
    PointerUp {
        /// Screen position.
        pos: Point,
    },
    /// Wheel/scroll input anchored at a screen position.
    Wheel {
        /// Screen position of the pointer when the wheel turned.
        pos: Point,
        /// Zoom direction derived from the delta sign.
        direction: WheelDirection,
    },
    /// A touch contact began.
    TouchStart {
        /// All currently active touches, including the new one.
        touches: TouchList,
    },
    /// One or more touch contacts moved.
    TouchMove {
        /// All currently active touches at their new positions.
        touches: TouchList,
    },
    /// A touch contact ended.
    TouchEnd {
        /// The touches still active after the lift; empty when the last
        /// finger left the surface.
        touches: TouchList,
    },
}
