//! Solid and two-color gradient fills
//!
//! The fill is evaluated at global canvas coordinates, so a region rendered
//! on its own matches the same region of a full-screen render exactly.

use serde::{Deserialize, Serialize};

use super::canvas::Canvas;
use crate::color::Rgb16;

/// The direction colors change along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Top-to-bottom
    #[default]
    Vertical,
    /// Left-to-right
    Horizontal,
}

/// Per-channel interpolation at position `k` of an axis `extent` pixels long.
///
/// Matches the 16-bit arithmetic of `c1 + k * (c2 - c1) / (extent - 1)` with
/// truncating division, then keeps the high byte.
#[inline]
fn lerp_channel(c1: u16, c2: u16, k: i64, divisor: i64) -> u8 {
    let delta = c2 as i64 - c1 as i64;
    let value = c1 as i64 + (k * delta) / divisor;
    (value.clamp(0, 0xFFFF) >> 8) as u8
}

#[inline]
fn lerp(c1: Rgb16, c2: Rgb16, k: i64, divisor: i64) -> [u8; 3] {
    [
        lerp_channel(c1.red, c2.red, k, divisor),
        lerp_channel(c1.green, c2.green, k, divisor),
        lerp_channel(c1.blue, c2.blue, k, divisor),
    ]
}

/// Fill `canvas` as the window at `origin` of a `full_width x full_height`
/// gradient running from `c1` to `c2` along `axis`.
///
/// Passing the same color twice gives a flat fill.
pub fn fill_gradient(
    canvas: &mut Canvas,
    c1: Rgb16,
    c2: Rgb16,
    axis: Axis,
    full_width: u32,
    full_height: u32,
    origin: (i32, i32),
) {
    let (ox, oy) = (origin.0 as i64, origin.1 as i64);
    let extent = match axis {
        Axis::Vertical => full_height,
        Axis::Horizontal => full_width,
    };
    let divisor = (extent as i64 - 1).max(1);
    let width = canvas.width();

    // Columns vary (or nothing does): build one row and replicate it
    if axis == Axis::Horizontal || c1 == c2 {
        let row: Vec<u8> = (0..width as i64)
            .flat_map(|j| lerp(c1, c2, j + ox, divisor))
            .collect();
        for y in 0..canvas.height() {
            canvas.row_mut(y).copy_from_slice(&row);
        }
        return;
    }

    for y in 0..canvas.height() {
        let rgb = lerp(c1, c2, y as i64 + oy, divisor);
        for px in canvas.row_mut(y).chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }
}

/// Fill `canvas` with one flat color
pub fn fill_solid(canvas: &mut Canvas, color: Rgb16) {
    canvas.clear(color.to_rgb8());
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb16 = Rgb16::new(0, 0, 0);
    const WHITE: Rgb16 = Rgb16::new(0xFFFF, 0xFFFF, 0xFFFF);

    #[test]
    fn test_vertical_gradient_endpoints() {
        let mut canvas = Canvas::new(2, 256);
        fill_gradient(&mut canvas, BLACK, WHITE, Axis::Vertical, 2, 256, (0, 0));
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0]);
        assert_eq!(canvas.get_pixel(1, 255), [255, 255, 255]);
        // 0xFFFF * 128 / 255 = 0x8080
        assert_eq!(canvas.get_pixel(0, 128), [0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_horizontal_gradient_uses_columns() {
        let mut canvas = Canvas::new(3, 2);
        fill_gradient(&mut canvas, BLACK, WHITE, Axis::Horizontal, 3, 2, (0, 0));
        assert_eq!(canvas.get_pixel(0, 1), [0, 0, 0]);
        assert_eq!(canvas.get_pixel(1, 1), [0x7F, 0x7F, 0x7F]);
        assert_eq!(canvas.get_pixel(2, 0), [255, 255, 255]);
    }

    #[test]
    fn test_descending_gradient_truncates_toward_zero() {
        // 0xFFFF + (1 * -0xFFFF) / 2 = 0xFFFF - 0x7FFF = 0x8000
        let mut canvas = Canvas::new(1, 3);
        fill_gradient(&mut canvas, WHITE, BLACK, Axis::Vertical, 1, 3, (0, 0));
        assert_eq!(canvas.get_pixel(0, 1), [0x80, 0x80, 0x80]);
    }

    #[test]
    fn test_offset_window_matches_full_render() {
        let c1 = Rgb16::new(0x1000, 0x8000, 0xF000);
        let c2 = Rgb16::new(0xF000, 0x2000, 0x0100);
        let mut full = Canvas::new(8, 100);
        fill_gradient(&mut full, c1, c2, Axis::Vertical, 8, 100, (0, 0));

        let mut part = Canvas::new(4, 10);
        fill_gradient(&mut part, c1, c2, Axis::Vertical, 8, 100, (3, 42));
        for y in 0..10 {
            for x in 0..4 {
                assert_eq!(part.get_pixel(x, y), full.get_pixel(x + 3, y + 42));
            }
        }
    }

    #[test]
    fn test_single_pixel_extent_does_not_divide_by_zero() {
        let mut canvas = Canvas::new(1, 1);
        fill_gradient(&mut canvas, BLACK, WHITE, Axis::Vertical, 1, 1, (0, 0));
        assert_eq!(canvas.get_pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_equal_colors_fill_flat() {
        let color = Rgb16::new(0x3500, 0x6300, 0x9000);
        let mut canvas = Canvas::new(5, 5);
        fill_gradient(&mut canvas, color, color, Axis::Vertical, 5, 5, (0, 0));
        assert!(canvas.is_uniform([0x35, 0x63, 0x90]));
    }
}
