// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An SVG-writing [`Surface`] backend for headless rendering.

use std::fmt::Write as _;

use kurbo::{Point, Rect, Size};
use marketmap_render::{Cursor, Surface};
use peniko::Color;

/// Replays surface calls into an SVG document.
#[derive(Clone, Debug, Default)]
pub(crate) struct SvgSurface {
    size: Size,
    body: String,
    cursor: Cursor,
}

impl SvgSurface {
    /// Creates an empty surface.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The cursor most recently requested by the controller.
    pub(crate) fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Serializes the current frame as a standalone SVG document.
    pub(crate) fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             font-family=\"sans-serif\">\n{}</svg>\n",
            self.size.width, self.size.height, self.body
        )
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

impl Surface for SvgSurface {
    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex(color),
        );
    }

    fn fill_text(&mut self, text: &str, center: Point, size_px: f64, color: Color) {
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.1}\" fill=\"{}\" \
             text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
            center.x,
            center.y,
            size_px,
            hex(color),
            escape(text),
        );
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};
    use marketmap_render::Surface;
    use peniko::Color;

    use super::SvgSurface;

    #[test]
    fn frame_round_trips_into_markup() {
        let mut svg = SvgSurface::new();
        svg.resize(Size::new(100.0, 50.0));
        svg.clear();
        svg.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::from_rgb8(255, 0, 0));
        svg.fill_text("A&B", Point::new(5.0, 5.0), 12.0, Color::from_rgb8(255, 255, 255));

        let doc = svg.to_svg();
        assert!(doc.contains("width=\"100\""), "svg size from resize");
        assert!(doc.contains("fill=\"#ff0000\""), "rect color");
        assert!(doc.contains("A&amp;B"), "text is escaped");
    }

    #[test]
    fn clear_drops_the_previous_frame() {
        let mut svg = SvgSurface::new();
        svg.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::from_rgb8(0, 0, 0));
        svg.clear();
        assert!(!svg.to_svg().contains("<rect"), "old shapes gone");
    }
}
