//! Relief lighting driven by an emblem's luminance
//!
//! The flattened emblem (the "boss") acts as a height field. Its intensity
//! gradient gives a surface normal per pixel, which is lit by a fixed light
//! from the upper left and used to scale the canvas colors underneath.

use super::canvas::Canvas;

/// Length of the synthesized normal vector
pub const RMAX: i32 = 3 * 1024;
const RMAX2: i32 = RMAX * RMAX;

/// Summed-channel intensity map of the boss, scoped to one emboss call
struct GrayMap {
    width: usize,
    data: Vec<u16>,
}

impl GrayMap {
    fn from_canvas(boss: &Canvas) -> Self {
        let data = boss
            .pixels()
            .chunks_exact(3)
            .map(|p| p[0] as u16 + p[1] as u16 + p[2] as u16)
            .collect();
        Self {
            width: boss.width() as usize,
            data,
        }
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.width + x] as i32
    }
}

/// Light intensity for the boss pixel at (i, j), which must be an interior
/// pixel. The light direction is (-1, 1, 1) normalized, so a flat area
/// yields `1/sqrt(3)`.
fn shade_at(gray: &GrayMap, i: usize, j: usize) -> f64 {
    let mut dx = gray.at(i + 1, j) - gray.at(i - 1, j);
    let mut dy = gray.at(i, j - 1) - gray.at(i, j + 1);
    let dz;

    let t = dx * dx + dy * dy;
    if t > RMAX2 {
        let sqrt_t = (t as f64).sqrt();
        dz = 0;
        dx = (RMAX as f64 * dx as f64 / sqrt_t) as i32;
        dy = (RMAX as f64 * dy as f64 / sqrt_t) as i32;
    } else {
        dz = ((RMAX2 - t) as f64).sqrt() as i32;
    }

    (dz - dx + dy) as f64 / (RMAX as f64 * 3f64.sqrt())
}

/// Apply a shade to one channel. Unlit surfaces go black.
#[inline]
pub fn shade_pixel(pixel: u8, shade: f64) -> u8 {
    if shade > 0.0 {
        let tmp = (shade * pixel as f64 * 3f64.sqrt()) as i32;
        tmp.min(255) as u8
    } else {
        0
    }
}

/// Relight the canvas pixels under `boss`, placed at `offset` in canvas
/// coordinates.
///
/// The one-pixel border of the boss is left untouched, as are boss pixels
/// that land outside the canvas. Bosses smaller than 3x3 have no interior and
/// do nothing.
pub fn emboss(canvas: &mut Canvas, boss: &Canvas, offset: (i32, i32)) {
    let boss_width = boss.width() as usize;
    let boss_height = boss.height() as usize;
    if boss_width < 3 || boss_height < 3 {
        return;
    }

    let gray = GrayMap::from_canvas(boss);
    let (x_offset, y_offset) = (offset.0 as i64, offset.1 as i64);

    for j in 1..boss_height - 1 {
        let cy = j as i64 + y_offset;
        if cy < 0 || cy >= canvas.height() as i64 {
            continue;
        }

        for i in 1..boss_width - 1 {
            let cx = i as i64 + x_offset;
            if cx < 0 || cx >= canvas.width() as i64 {
                continue;
            }

            let shade = shade_at(&gray, i, j);
            let [r, g, b] = canvas.get_pixel(cx as u32, cy as u32);
            canvas.set_pixel(
                cx as u32,
                cy as u32,
                [
                    shade_pixel(r, shade),
                    shade_pixel(g, shade),
                    shade_pixel(b, shade),
                ],
            );
        }
    }
}
