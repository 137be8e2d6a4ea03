//! Benchmarks for background rendering
//!
//! Run with: cargo bench rendering

use backdrop::display::Visual;
use backdrop::geometry::Rect;
use backdrop::layout::{parse_emblem_geometry, AvoidSpec, EmblemSpec};
use backdrop::raster::Image;
use backdrop::render::{EmblemLayer, Gradient, TileLayer};
use backdrop::{render_region, solve_emblem_geometry, tile_period, Axis, RenderState, Rgb16};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn gradient_state(width: u32) -> RenderState {
    let height = width * 9 / 16; // 16:9 aspect ratio
    let mut state = RenderState::solid(width, height, Rgb16::from_rgb8(0x35, 0x63, 0x90));
    state.gradient = Some(Gradient {
        color2: Rgb16::from_rgb8(0, 0, 0),
        axis: Axis::Vertical,
    });
    state
}

fn emblem_image(width: u32, height: u32) -> Image {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let inside = (x as i64 - width as i64 / 2).pow(2) + (y as i64 - height as i64 / 2).pow(2)
                < (width as i64 / 3).pow(2);
            let v = if inside { 230 } else { 40 };
            pixels.extend_from_slice(&[v, v, v, if inside { 255 } else { 0 }]);
        }
    }
    Image::from_rgba(width, height, pixels)
}

fn with_emblem(mut state: RenderState, emboss: bool) -> RenderState {
    let size = state.height / 3;
    state.emblem = Some(EmblemLayer {
        image: emblem_image(256, 256),
        alpha: 255,
        bounds: Rect::new(
            ((state.width - size) / 2) as i32,
            ((state.height - size) / 2) as i32,
            size,
            size,
        ),
        emboss,
    });
    state
}

// ============================================================================
// Full-screen renders
// ============================================================================

#[divan::bench(args = [800, 1280, 1920, 2560])]
fn gradient_full_screen(bencher: divan::Bencher, width: u32) {
    let state = gradient_state(width);
    let region = Rect::sized(state.width, state.height);
    bencher.bench(|| render_region(divan::black_box(&state), region, false));
}

#[divan::bench(args = [800, 1920])]
fn tiled_full_screen(bencher: divan::Bencher, width: u32) {
    let mut state = gradient_state(width);
    state.tile = Some(TileLayer::new(emblem_image(64, 64), 160));
    let region = Rect::sized(state.width, state.height);
    bencher.bench(|| render_region(divan::black_box(&state), region, false));
}

// ============================================================================
// Emblem layer
// ============================================================================

#[divan::bench(args = [false, true])]
fn emblem_region(bencher: divan::Bencher, emboss: bool) {
    let state = with_emblem(gradient_state(1920), emboss);
    let region = state.emblem.as_ref().map(|e| e.bounds).unwrap_or_default();
    bencher.bench(|| render_region(divan::black_box(&state), region, false));
}

// ============================================================================
// Setup-time solvers
// ============================================================================

#[divan::bench]
fn tile_period_dithered(bencher: divan::Bencher) {
    let mut state = gradient_state(1920);
    state.visual = Visual::TRUE_COLOR_16;
    state.tile = Some(TileLayer::new(emblem_image(48, 20), 128));
    bencher.bench(|| tile_period(divan::black_box(&state)));
}

#[divan::bench]
fn solve_with_avoid(bencher: divan::Bencher) {
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("800x800-0-0").unwrap(),
        avoid: AvoidSpec::parse("600x400+700+300").ok(),
        ..Default::default()
    };
    bencher.bench(|| solve_emblem_geometry(divan::black_box(&spec), (1920, 1080), (256, 256)));
}
