//! Background rendering
//!
//! A background is three fixed layers painted in order: a color field (flat
//! or gradient), an optional repeating tile, and an optional emblem that is
//! either composited or embossed into what lies below it.
//!
//! `render_region` paints any rectangle of the screen on its own, and the
//! result is identical to the same rectangle cut from a full-screen render.

pub mod canvas;
pub mod composite;
pub mod emboss;
pub mod gradient;
pub mod period;
pub mod visibility;

pub use canvas::Canvas;
pub use gradient::Axis;
pub use period::tile_period;
pub use visibility::Visibility;

use crate::color::Rgb16;
use crate::display::Visual;
use crate::geometry::Rect;
use crate::raster::Image;

/// Backdrop that alpha in an embossed emblem is resolved against
const BOSS_BACKDROP: [u8; 3] = [255, 255, 255];

/// Second color of a two-color background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub color2: Rgb16,
    pub axis: Axis,
}

/// Repeating tile image
#[derive(Debug, Clone)]
pub struct TileLayer {
    pub image: Image,
    pub alpha: u8,
    /// Size each repetition is scaled to; the image size unless previewing
    pub width: u32,
    pub height: u32,
}

impl TileLayer {
    pub fn new(image: Image, alpha: u8) -> Self {
        let (width, height) = (image.width(), image.height());
        Self {
            image,
            alpha,
            width,
            height,
        }
    }

    /// Fully covers what is below it
    pub fn is_opaque(&self) -> bool {
        !self.image.has_alpha() && self.alpha == 255
    }
}

/// Single placed emblem image
#[derive(Debug, Clone)]
pub struct EmblemLayer {
    pub image: Image,
    pub alpha: u8,
    pub bounds: Rect,
    pub emboss: bool,
}

impl EmblemLayer {
    pub fn is_opaque(&self) -> bool {
        !self.image.has_alpha() && self.alpha == 255
    }
}

/// Everything one rendering session needs. Built once during setup and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub width: u32,
    pub height: u32,
    pub color: Rgb16,
    pub gradient: Option<Gradient>,
    pub tile: Option<TileLayer>,
    pub emblem: Option<EmblemLayer>,
    pub visual: Visual,
}

impl RenderState {
    /// A flat single-color background
    pub fn solid(width: u32, height: u32, color: Rgb16) -> Self {
        Self {
            width,
            height,
            color,
            gradient: None,
            tile: None,
            emblem: None,
            visual: Visual::default(),
        }
    }

    /// The same background laid out for a `width x height` screen.
    ///
    /// Emblem bounds and tile placement size shrink or grow proportionally,
    /// truncating, which is how the preview window is produced.
    pub fn scaled_to(&self, width: u32, height: u32) -> Self {
        let old_w = self.width.max(1) as i64;
        let old_h = self.height.max(1) as i64;
        let sx = |v: i64| (v * width as i64 / old_w) as i32;
        let sy = |v: i64| (v * height as i64 / old_h) as i32;

        let mut scaled = self.clone();
        scaled.width = width;
        scaled.height = height;

        if let Some(tile) = &mut scaled.tile {
            tile.width = sx(tile.width as i64).max(0) as u32;
            tile.height = sy(tile.height as i64).max(0) as u32;
        }
        if let Some(emblem) = &mut scaled.emblem {
            let b = emblem.bounds;
            emblem.bounds = Rect::new(
                sx(b.x as i64),
                sy(b.y as i64),
                sx(b.width as i64).max(0) as u32,
                sy(b.height as i64).max(0) as u32,
            );
        }
        scaled
    }

    fn paint_colors(&self, canvas: &mut Canvas, region: Rect) {
        match self.gradient {
            Some(g) => gradient::fill_gradient(
                canvas,
                self.color,
                g.color2,
                g.axis,
                self.width,
                self.height,
                (region.x, region.y),
            ),
            None => gradient::fill_solid(canvas, self.color),
        }
    }

    fn paint_tiles(&self, canvas: &mut Canvas, region: Rect) {
        let Some(tile) = &self.tile else {
            return;
        };
        if tile.width == 0 || tile.height == 0 || tile.image.is_empty() {
            return;
        }

        let (tw, th) = (tile.width as i64, tile.height as i64);
        let x_start = region.x as i64 - (region.x as i64).rem_euclid(tw);
        let y_start = region.y as i64 - (region.y as i64).rem_euclid(th);

        let mut y = y_start;
        while y < region.bottom() {
            let mut x = x_start;
            while x < region.right() {
                composite::composite(
                    canvas,
                    (region.x, region.y),
                    &tile.image,
                    Rect::new(x as i32, y as i32, tile.width, tile.height),
                    tile.alpha,
                );
                x += tw;
            }
            y += th;
        }
    }

    fn paint_emblem(&self, canvas: &mut Canvas, region: Rect) {
        let Some(emblem) = &self.emblem else {
            return;
        };
        if emblem.bounds.is_empty() || emblem.image.is_empty() {
            return;
        }

        if !emblem.emboss {
            composite::composite(
                canvas,
                (region.x, region.y),
                &emblem.image,
                emblem.bounds,
                emblem.alpha,
            );
            return;
        }

        let (w, h) = (emblem.bounds.width, emblem.bounds.height);
        let image = &emblem.image;
        let boss = if image.width() == w && image.height() == h && !image.has_alpha() {
            Canvas::from_rgb(w, h, image.pixels().to_vec())
        } else {
            composite::flatten(image, w, h, BOSS_BACKDROP)
        };

        emboss::emboss(
            canvas,
            &boss,
            (emblem.bounds.x - region.x, emblem.bounds.y - region.y),
        );
    }
}

/// Paint `region` (screen coordinates) of the background.
///
/// With `tile_only` the emblem is left out, for a repeating background that
/// gets the emblem from a separate overlay.
pub fn render_region(state: &RenderState, region: Rect, tile_only: bool) -> Canvas {
    let vis = visibility::analyze(state, region, tile_only);
    tracing::debug!(
        "Rendering {} (colors: {}, tiles: {}, emblem: {})",
        region,
        vis.colors,
        vis.tiles,
        vis.emblem
    );

    let mut canvas = Canvas::new(region.width, region.height);

    if vis.colors {
        state.paint_colors(&mut canvas, region);
    }
    if vis.tiles {
        state.paint_tiles(&mut canvas, region);
    }
    if vis.emblem {
        state.paint_emblem(&mut canvas, region);
    }

    canvas
}
