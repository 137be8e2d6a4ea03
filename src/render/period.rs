//! Smallest repeating block of the background
//!
//! When the background repeats with a short period, only one period needs to
//! be rendered and published; the display tiles it across the screen.

use super::{visibility, RenderState};
use crate::geometry::Rect;

/// Block size that absorbs ordered-dither patterns on non-truecolor displays
pub const DITHER_PERIOD: u32 = 128;

/// Greatest common divisor. Both arguments must be positive.
pub fn gcd(a: u32, b: u32) -> u32 {
    debug_assert!(a > 0 && b > 0);
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. Both arguments must be positive.
pub fn lcm(a: u32, b: u32) -> u64 {
    (a / gcd(a, b)) as u64 * b as u64
}

/// Size of the smallest block whose repetition reproduces the full
/// background, ignoring the emblem.
///
/// Returns `None` when nothing below the emblem is visible, or when the block
/// would be as large as the screen anyway.
pub fn tile_period(state: &RenderState) -> Option<(u32, u32)> {
    let full = Rect::sized(state.width, state.height);
    let vis = visibility::analyze(state, full, false);

    if !vis.colors && !vis.tiles {
        return None;
    }

    let mut width = 1u32;
    let mut height = 1u32;

    if vis.colors {
        if state.visual.is_dithered() {
            width = DITHER_PERIOD.min(state.width);
            height = DITHER_PERIOD.min(state.height);
        }

        if let Some(gradient) = &state.gradient {
            match gradient.axis {
                super::Axis::Vertical => height = state.height,
                super::Axis::Horizontal => width = state.width,
            }
        }
    }

    if let (true, Some(tile)) = (vis.tiles, &state.tile) {
        if tile.width > 0 && tile.height > 0 {
            width = lcm(width, tile.width).min(state.width as u64) as u32;
            height = lcm(height, tile.height).min(state.height as u64) as u32;
        }
    }

    if width == state.width && height == state.height {
        tracing::debug!("No repeating block smaller than the screen");
        return None;
    }

    tracing::debug!("Background repeats every {}x{}", width, height);
    Some((width, height))
}
