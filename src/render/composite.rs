//! Scaled alpha compositing of source images onto a canvas
//!
//! Sources are resampled bilinearly to an arbitrary placement size. Only the
//! part of the placement that falls inside the destination is sampled.

use super::canvas::Canvas;
use crate::geometry::Rect;
use crate::raster::Image;

/// Bilinear sample at continuous source coordinates (pixel centers at +0.5).
///
/// Color channels are weighted by alpha so transparent texels do not bleed
/// their color into neighbors. Returns straight (non-premultiplied) RGB and
/// alpha, all in 0.0..=255.0.
fn sample_bilinear(src: &Image, sx: f64, sy: f64) -> [f64; 4] {
    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;

    let fx = sx.floor();
    let fy = sy.floor();
    let tx = sx - fx;
    let ty = sy - fy;

    let x0 = (fx as i64).clamp(0, max_x) as u32;
    let x1 = (fx as i64 + 1).clamp(0, max_x) as u32;
    let y0 = (fy as i64).clamp(0, max_y) as u32;
    let y1 = (fy as i64 + 1).clamp(0, max_y) as u32;

    let taps = [
        (src.rgba(x0, y0), (1.0 - tx) * (1.0 - ty)),
        (src.rgba(x1, y0), tx * (1.0 - ty)),
        (src.rgba(x0, y1), (1.0 - tx) * ty),
        (src.rgba(x1, y1), tx * ty),
    ];

    let mut acc = [0.0f64; 4];
    for (texel, weight) in taps {
        if weight == 0.0 {
            continue;
        }
        let a = texel[3] as f64 * weight;
        acc[0] += texel[0] as f64 * a;
        acc[1] += texel[1] as f64 * a;
        acc[2] += texel[2] as f64 * a;
        acc[3] += a;
    }

    if acc[3] <= 0.0 {
        return [0.0; 4];
    }
    [acc[0] / acc[3], acc[1] / acc[3], acc[2] / acc[3], acc[3]]
}

#[inline]
fn blend_channel(dst: u8, src: f64, alpha: f64) -> u8 {
    let d = dst as f64;
    (d + (src - d) * alpha).round().clamp(0.0, 255.0) as u8
}

/// Composite `src`, scaled to `placement`, onto `dest`.
///
/// `dest` is the window at `dest_origin` of the full canvas and `placement`
/// is in full-canvas coordinates. `overall_alpha` multiplies the source alpha
/// uniformly; 255 with an opaque source is a plain copy.
pub fn composite(
    dest: &mut Canvas,
    dest_origin: (i32, i32),
    src: &Image,
    placement: Rect,
    overall_alpha: u8,
) {
    if src.is_empty() || placement.is_empty() || overall_alpha == 0 {
        return;
    }

    let dest_rect = Rect::new(dest_origin.0, dest_origin.1, dest.width(), dest.height());
    let Some(clip) = placement.intersect(&dest_rect) else {
        return;
    };

    let scale_x = placement.width as f64 / src.width() as f64;
    let scale_y = placement.height as f64 / src.height() as f64;
    let overall = overall_alpha as f64 / 255.0;

    for gy in clip.y as i64..clip.bottom() {
        let sy = (gy - placement.y as i64) as f64 + 0.5;
        let sy = sy / scale_y - 0.5;
        let local_y = (gy - dest_origin.1 as i64) as u32;

        for gx in clip.x as i64..clip.right() {
            let sx = (gx - placement.x as i64) as f64 + 0.5;
            let sx = sx / scale_x - 0.5;
            let local_x = (gx - dest_origin.0 as i64) as u32;

            let [r, g, b, a] = sample_bilinear(src, sx, sy);
            let alpha = a / 255.0 * overall;
            if alpha <= 0.0 {
                continue;
            }

            let [dr, dg, db] = dest.get_pixel(local_x, local_y);
            dest.set_pixel(
                local_x,
                local_y,
                [
                    blend_channel(dr, r, alpha),
                    blend_channel(dg, g, alpha),
                    blend_channel(db, b, alpha),
                ],
            );
        }
    }
}

/// Resolve `src` to an opaque `width x height` canvas by compositing it at
/// full opacity over a flat `backdrop` color
pub fn flatten(src: &Image, width: u32, height: u32, backdrop: [u8; 3]) -> Canvas {
    let mut canvas = Canvas::filled(width, height, backdrop);
    composite(&mut canvas, (0, 0), src, Rect::sized(width, height), 255);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> Image {
        let mut pixels = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let v = if (x + y) % 2 == 0 { 200 } else { 40 };
                pixels.extend_from_slice(&[v, v / 2, 255 - v]);
            }
        }
        Image::from_rgb(w, h, pixels)
    }

    #[test]
    fn test_unscaled_opaque_composite_copies_pixels() {
        let src = checker(4, 4);
        let mut dest = Canvas::new(10, 10);
        composite(&mut dest, (0, 0), &src, Rect::new(3, 2, 4, 4), 255);
        for y in 0..4 {
            for x in 0..4 {
                let [r, g, b, _] = src.rgba(x, y);
                assert_eq!(dest.get_pixel(x + 3, y + 2), [r, g, b]);
            }
        }
        assert_eq!(dest.get_pixel(2, 2), [0, 0, 0]);
        assert_eq!(dest.get_pixel(7, 2), [0, 0, 0]);
    }

    #[test]
    fn test_composite_respects_dest_origin_and_clip() {
        let src = Image::solid(4, 4, [10, 20, 30]);
        let mut dest = Canvas::new(3, 3);
        // Placement spans canvas 8..12; dest window covers 10..13
        composite(&mut dest, (10, 10), &src, Rect::new(8, 8, 4, 4), 255);
        assert_eq!(dest.get_pixel(0, 0), [10, 20, 30]);
        assert_eq!(dest.get_pixel(1, 1), [10, 20, 30]);
        assert_eq!(dest.get_pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn test_overall_alpha_blends_halfway() {
        let src = Image::solid(2, 2, [255, 255, 255]);
        let mut dest = Canvas::filled(2, 2, [0, 0, 0]);
        composite(&mut dest, (0, 0), &src, Rect::sized(2, 2), 128);
        assert_eq!(dest.get_pixel(0, 0), [128, 128, 128]);
    }

    #[test]
    fn test_source_alpha_is_respected() {
        let src = Image::from_rgba(1, 1, vec![255, 0, 0, 0]);
        let mut dest = Canvas::filled(3, 3, [5, 6, 7]);
        composite(&mut dest, (0, 0), &src, Rect::sized(3, 3), 255);
        assert!(dest.is_uniform([5, 6, 7]));
    }

    #[test]
    fn test_upscale_of_solid_stays_solid() {
        let src = Image::solid(3, 2, [90, 80, 70]);
        let mut dest = Canvas::new(17, 9);
        composite(&mut dest, (0, 0), &src, Rect::sized(17, 9), 255);
        assert!(dest.is_uniform([90, 80, 70]));
    }

    #[test]
    fn test_flatten_over_white() {
        let src = Image::from_rgba(2, 1, vec![0, 0, 0, 255, 0, 0, 0, 0]);
        let boss = flatten(&src, 2, 1, [255, 255, 255]);
        assert_eq!(boss.get_pixel(0, 0), [0, 0, 0]);
        assert_eq!(boss.get_pixel(1, 0), [255, 255, 255]);
    }

    #[test]
    fn test_placement_outside_dest_is_noop() {
        let src = Image::solid(2, 2, [1, 1, 1]);
        let mut dest = Canvas::new(4, 4);
        composite(&mut dest, (0, 0), &src, Rect::new(-10, -10, 2, 2), 255);
        assert!(dest.is_uniform([0, 0, 0]));
    }
}
