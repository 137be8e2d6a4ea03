//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use backdrop::display::Visual;
use backdrop::geometry::Rect;
use backdrop::raster::Image;
use backdrop::render::{EmblemLayer, Gradient, RenderState, TileLayer};
use backdrop::{Axis, Canvas, Rgb16};

/// The default background color, `#356390`
pub const DEFAULT_BLUE: Rgb16 = Rgb16::new(0x3500, 0x6300, 0x9000);

/// A flat background of the default color
pub fn solid_state(width: u32, height: u32) -> RenderState {
    RenderState::solid(width, height, DEFAULT_BLUE)
}

/// A two-color gradient background
pub fn gradient_state(width: u32, height: u32, c1: Rgb16, c2: Rgb16, axis: Axis) -> RenderState {
    let mut state = RenderState::solid(width, height, c1);
    state.gradient = Some(Gradient { color2: c2, axis });
    state
}

/// An RGB image whose pixels encode their coordinates
pub fn coordinate_image(width: u32, height: u32) -> Image {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 17 % 256) as u8, (y * 29 % 256) as u8, 128]);
        }
    }
    Image::from_rgb(width, height, pixels)
}

pub fn with_tile(mut state: RenderState, image: Image, alpha: u8) -> RenderState {
    state.tile = Some(TileLayer::new(image, alpha));
    state
}

pub fn with_emblem(mut state: RenderState, image: Image, bounds: Rect, emboss: bool) -> RenderState {
    state.emblem = Some(EmblemLayer {
        image,
        alpha: 255,
        bounds,
        emboss,
    });
    state
}

pub fn dithered(mut state: RenderState) -> RenderState {
    state.visual = Visual::TRUE_COLOR_16;
    state
}

/// Assert that `part` equals the window of `full` at `(x, y)`
pub fn assert_window_eq(full: &Canvas, part: &Canvas, x: u32, y: u32) {
    for j in 0..part.height() {
        for i in 0..part.width() {
            assert_eq!(
                part.get_pixel(i, j),
                full.get_pixel(x + i, y + j),
                "pixel ({}, {}) of window at ({}, {})",
                i,
                j,
                x,
                y
            );
        }
    }
}
