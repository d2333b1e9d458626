// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reference [`Surface`] that records the command stream.
//!
//! Useful for tests and for debugging repaint behavior: every call is kept in
//! order as a [`DrawCmd`], with small accessors for the common queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::{Cursor, Surface};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// [`Surface::resize`].
    Resize(Size),
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::fill_rect`].
    FillRect {
        /// Screen-space rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::fill_text`].
    FillText {
        /// The text line.
        text: String,
        /// Center of the line in screen space.
        center: Point,
        /// Font size in screen pixels.
        size_px: f64,
        /// Text color.
        color: Color,
    },
    /// [`Surface::set_cursor`].
    SetCursor(Cursor),
}

/// Records every surface call in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    /// The recorded calls, oldest first.
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// All filled rectangles, in draw order.
    #[must_use]
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// All drawn text lines, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FillText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// The most recently requested cursor, if any was set.
    #[must_use]
    pub fn last_cursor(&self) -> Option<Cursor> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCmd::SetCursor(cursor) => Some(*cursor),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.commands.push(DrawCmd::Resize(size));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCmd::FillRect { rect, color });
    }

    fn fill_text(&mut self, text: &str, center: Point, size_px: f64, color: Color) {
        self.commands.push(DrawCmd::FillText {
            text: text.into(),
            center,
            size_px,
            color,
        });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.commands.push(DrawCmd::SetCursor(cursor));
    }
}
