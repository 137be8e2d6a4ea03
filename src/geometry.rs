//! Integer rectangles and `WIDTHxHEIGHT+X+Y` geometry strings

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// A rectangle in canvas pixels. The origin may be negative (an emblem can
/// hang off the screen), the size never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin
    pub const fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Intersection of two rectangles, `None` when they do not overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Rect::new(
            x0 as i32,
            y0 as i32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        ))
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// Whether `other` lies entirely inside `self`
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x as i64 >= self.x as i64
            && other.right() <= self.right()
            && other.y as i64 >= self.y as i64
            && other.bottom() <= self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

/// Which screen edge a geometry offset is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// `+N`: left or top
    Near,
    /// `-N`: right or bottom
    Far,
}

/// One axis offset of a geometry string.
///
/// `value` is the signed number as written, so `-10` is `{ Far, -10 }` and a
/// far-edge position resolves to `screen - size + value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub edge: Edge,
    pub value: i32,
}

impl Offset {
    /// Resolve to a near-edge coordinate for an object of `size` on an axis
    /// of `extent` pixels
    pub fn resolve(&self, extent: u32, size: u32) -> i32 {
        match self.edge {
            Edge::Near => self.value,
            Edge::Far => (extent as i64 - size as i64 + self.value as i64) as i32,
        }
    }
}

/// Parsed `[=][W][xH][{+-}X{+-}Y]` string. Every part is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometrySpec {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<Offset>,
    pub y: Option<Offset>,
}

impl GeometrySpec {
    /// Parse an X-style geometry string such as `200x100-10+20`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidGeometry(s.to_string());
        let mut cursor = Cursor::new(s.trim());
        let mut spec = GeometrySpec::default();

        cursor.eat('=');

        if !matches!(cursor.peek(), Some('+' | '-' | 'x' | 'X') | None) {
            spec.width = Some(cursor.unsigned().ok_or_else(invalid)?);
        }

        if matches!(cursor.peek(), Some('x' | 'X')) {
            cursor.bump();
            spec.height = Some(cursor.unsigned().ok_or_else(invalid)?);
        }

        if matches!(cursor.peek(), Some('+' | '-')) {
            spec.x = Some(cursor.offset().ok_or_else(invalid)?);
            spec.y = Some(cursor.offset().ok_or_else(invalid)?);
        }

        if !cursor.is_done() || spec == GeometrySpec::default() {
            return Err(invalid());
        }

        Ok(spec)
    }
}

/// Byte cursor over an ASCII geometry string
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn is_done(&self) -> bool {
        self.rest.is_empty()
    }

    fn digits(&mut self) -> Option<i64> {
        let len = self
            .rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }
        let value = self.rest[..len].parse::<i64>().ok()?;
        self.rest = &self.rest[len..];
        Some(value)
    }

    fn unsigned(&mut self) -> Option<u32> {
        self.digits().and_then(|v| u32::try_from(v).ok())
    }

    /// `+N`, `-N`, and the signed forms `+-N` / `-+N` that X accepts
    fn offset(&mut self) -> Option<Offset> {
        let edge = match self.bump()? {
            '+' => Edge::Near,
            '-' => Edge::Far,
            _ => return None,
        };
        let negate_inner = if self.eat('-') {
            true
        } else {
            self.eat('+');
            false
        };
        let magnitude = self.digits()?;
        let signed = if negate_inner { -magnitude } else { magnitude };
        let value = match edge {
            Edge::Near => signed,
            Edge::Far => -signed,
        };
        Some(Offset {
            edge,
            value: i32::try_from(value).ok()?,
        })
    }
}
