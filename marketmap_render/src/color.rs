// Copyright 2026 the MarketMap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The change-percentage color scale.

use peniko::Color;

const STRONG_UP: Color = Color::from_rgb8(8, 103, 54);
const UP: Color = Color::from_rgb8(34, 154, 84);
const WEAK_UP: Color = Color::from_rgb8(88, 189, 125);
const FLAT: Color = Color::from_rgb8(122, 125, 134);
const WEAK_DOWN: Color = Color::from_rgb8(222, 118, 118);
const DOWN: Color = Color::from_rgb8(205, 66, 66);
const STRONG_DOWN: Color = Color::from_rgb8(153, 25, 25);

/// Buckets a signed change percentage into the monotone seven-step scale.
///
/// Thresholds sit at plus/minus 0.05, 1.5, and 3 percent; the neutral bucket
/// includes both of its boundaries.
#[must_use]
pub fn change_color(change: f64) -> Color {
    if change > 3.0 {
        STRONG_UP
    } else if change > 1.5 {
        UP
    } else if change > 0.05 {
        WEAK_UP
    } else if change >= -0.05 {
        FLAT
    } else if change >= -1.5 {
        WEAK_DOWN
    } else if change >= -3.0 {
        DOWN
    } else {
        STRONG_DOWN
    }
}
