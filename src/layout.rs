//! Emblem placement
//!
//! Turns size and position options into the emblem's screen rectangle, then
//! optionally shrinks it so it keeps its aspect ratio and stays clear of an
//! avoid rectangle. The solve is a single pass:
//!
//! 1. width, then height (percentage > geometry > natural image size)
//! 2. x, then y, each with a gravity (centered > geometry > top/left)
//! 3. aspect fix, shrinking the oversized axis toward its gravity anchor
//! 4. avoid negotiation, which may shrink again or drop the emblem
//!
//! Gravity decides which edge stays put when an axis shrinks.

use crate::error::{Error, Result};
use crate::geometry::{Edge, GeometrySpec, Offset, Rect};

/// Which part of the emblem stays fixed on an axis when it shrinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// Left or top edge
    Near,
    Center,
    /// Right or bottom edge
    Far,
}

impl Gravity {
    /// Position change for an axis that shrinks by `delta`
    fn shift(self, delta: i64) -> i64 {
        match self {
            Gravity::Near => 0,
            Gravity::Center => delta / 2,
            Gravity::Far => delta,
        }
    }
}

/// Parse a percentage of the screen size, `0..=100`
pub fn parse_percentage(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPercentage(s.to_string()))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(Error::InvalidPercentage(s.to_string()));
    }
    Ok(value)
}

/// Parse the emblem geometry; an explicit zero width or height is rejected
pub fn parse_emblem_geometry(s: &str) -> Result<GeometrySpec> {
    let spec = GeometrySpec::parse(s)?;
    if spec.width == Some(0) || spec.height == Some(0) {
        return Err(Error::InvalidGeometry(s.to_string()));
    }
    Ok(spec)
}

/// A rectangle the emblem must keep clear of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidSpec {
    pub width: u32,
    pub height: u32,
    /// Centered on the axis when absent
    pub x: Option<Offset>,
    pub y: Option<Offset>,
}

impl AvoidSpec {
    /// Parse `WIDTHxHEIGHT[+X+Y]`; width and height are required and positive
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidAvoid(s.to_string());
        let spec = GeometrySpec::parse(s).map_err(|_| invalid())?;
        match (spec.width, spec.height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => Ok(Self {
                width,
                height,
                x: spec.x,
                y: spec.y,
            }),
            _ => Err(invalid()),
        }
    }

    /// Screen rectangle of the avoid area
    pub fn resolve(&self, screen_width: u32, screen_height: u32) -> Rect {
        let place = |offset: Option<Offset>, extent: u32, size: u32| match offset {
            Some(offset) => offset.resolve(extent, size),
            None => ((extent as i64 - size as i64) / 2) as i32,
        };
        Rect::new(
            place(self.x, screen_width, self.width),
            place(self.y, screen_height, self.height),
            self.width,
            self.height,
        )
    }
}

/// Validated emblem size and position options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmblemSpec {
    pub geometry: GeometrySpec,
    /// Width as a percentage of the screen width
    pub scale_width: Option<f64>,
    /// Height as a percentage of the screen height
    pub scale_height: Option<f64>,
    pub center_x: bool,
    pub center_y: bool,
    pub avoid: Option<AvoidSpec>,
    pub keep_aspect: bool,
}

/// One axis of the emblem while it is being solved
#[derive(Debug, Clone, Copy)]
struct Span {
    pos: i64,
    size: i64,
    gravity: Gravity,
}

impl Span {
    fn resolve(
        screen: u32,
        natural: u32,
        percent: Option<f64>,
        explicit_size: Option<u32>,
        centered: bool,
        offset: Option<Offset>,
    ) -> Self {
        let screen = screen as i64;
        let size = if let Some(pct) = percent {
            (0.5 + screen as f64 * (pct / 100.0)) as i64
        } else if let Some(size) = explicit_size {
            size as i64
        } else {
            natural as i64
        };

        let (pos, gravity) = if centered {
            ((screen - size) / 2, Gravity::Center)
        } else {
            match offset {
                Some(Offset {
                    edge: Edge::Far,
                    value,
                }) => (screen - size + value as i64, Gravity::Far),
                Some(Offset {
                    edge: Edge::Near,
                    value,
                }) => (value as i64, Gravity::Near),
                None => (0, Gravity::Near),
            }
        };

        Self { pos, size, gravity }
    }

    /// Shrink (or grow) to `size`, keeping the gravity anchor in place
    fn set_size(&mut self, size: i64) {
        self.pos += self.gravity.shift(self.size - size);
        self.size = size;
    }

    /// Mirror on a screen of `extent` so the span moves toward the avoid
    /// rectangle from the near side
    fn mirrored(&self, extent: i64) -> i64 {
        extent - self.size - self.pos
    }
}

/// Solve the emblem rectangle for a `screen` and an emblem whose natural
/// size is `image`.
///
/// Returns `None` when the avoid rectangle leaves no room for the emblem.
pub fn solve_emblem_geometry(spec: &EmblemSpec, screen: (u32, u32), image: (u32, u32)) -> Option<Rect> {
    let (screen_width, screen_height) = screen;
    let (image_width, image_height) = (image.0 as i64, image.1 as i64);

    let mut x = Span::resolve(
        screen_width,
        image.0,
        spec.scale_width,
        spec.geometry.width,
        spec.center_x,
        spec.geometry.x,
    );
    let mut y = Span::resolve(
        screen_height,
        image.1,
        spec.scale_height,
        spec.geometry.height,
        spec.center_y,
        spec.geometry.y,
    );

    if (spec.avoid.is_some() || spec.keep_aspect) && image_width > 0 && image_height > 0 {
        let wide = x.size * image_height;
        let tall = image_width * y.size;
        if wide > tall {
            x.set_size((y.size * image_width) / image_height);
        } else if wide < tall {
            y.set_size((x.size * image_height) / image_width);
        }
    }

    if let Some(avoid) = &spec.avoid {
        if image_width > 0 && image_height > 0 {
            let area = avoid.resolve(screen_width, screen_height);
            if !negotiate_avoid(&mut x, &mut y, area, screen, (image_width, image_height)) {
                tracing::info!("No room for the emblem outside the avoid rectangle; dropping it");
                return None;
            }
        }
    }

    let bounds = Rect::new(
        x.pos as i32,
        y.pos as i32,
        x.size.max(0) as u32,
        y.size.max(0) as u32,
    );
    tracing::debug!("Emblem positioned at {}", bounds);
    Some(bounds)
}

/// Shrink the emblem until it clears `area`. Returns false when neither axis
/// has any clearance.
fn negotiate_avoid(
    x: &mut Span,
    y: &mut Span,
    area: Rect,
    screen: (u32, u32),
    image: (i64, i64),
) -> bool {
    let (screen_width, screen_height) = (screen.0 as i64, screen.1 as i64);
    let (image_width, image_height) = image;
    let mut avoid_x = area.x as i64;
    let mut avoid_y = area.y as i64;
    let avoid_w = area.width as i64;
    let avoid_h = area.height as i64;

    // Mirror each axis so the emblem always sits before the avoid rectangle
    let flip_x = x.gravity == Gravity::Far
        || (x.gravity == Gravity::Center && x.pos + x.size / 2 > avoid_x + avoid_w);
    let tmp_x = if flip_x {
        avoid_x = screen_width - avoid_w - avoid_x;
        x.mirrored(screen_width)
    } else {
        x.pos
    };

    let flip_y = y.gravity == Gravity::Far
        || (y.gravity == Gravity::Center && y.pos + y.size / 2 > avoid_y + avoid_h);
    let tmp_y = if flip_y {
        avoid_y = screen_height - avoid_h - avoid_y;
        y.mirrored(screen_height)
    } else {
        y.pos
    };

    tracing::debug!(
        "Emblem {}x{}+{}+{} against avoid {}x{}+{}+{}",
        x.size,
        y.size,
        tmp_x,
        tmp_y,
        avoid_w,
        avoid_h,
        avoid_x,
        avoid_y
    );

    if tmp_x + x.size < avoid_x
        || tmp_x >= avoid_x + avoid_w
        || tmp_y + y.size < avoid_y
        || tmp_y >= avoid_y + avoid_h
    {
        return true;
    }

    // A centered emblem shrinks from both sides, so it gains twice the room
    let x_space = match x.gravity {
        Gravity::Center => 2 * (avoid_x - (tmp_x + x.size / 2)),
        _ => avoid_x - tmp_x,
    };
    let y_space = match y.gravity {
        Gravity::Center => 2 * (avoid_y - (tmp_y + y.size / 2)),
        _ => avoid_y - tmp_y,
    };

    if x_space <= 0 && y_space <= 0 {
        return false;
    }

    tracing::debug!("x_space = {}, y_space = {}", x_space, y_space);

    let (new_width, new_height) = if x_space * image_height > y_space * image_width {
        (x_space, (image_height * x_space) / image_width)
    } else {
        ((image_width * y_space) / image_height, y_space)
    };

    x.set_size(new_width);
    y.set_size(new_height);
    true
}
