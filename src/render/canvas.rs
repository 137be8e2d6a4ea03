//! Canvas abstraction for the output raster
//!
//! Provides bounds-checked pixel access over a packed 3-channel buffer
//! instead of raw offset arithmetic scattered through the layer passes.

/// An owned RGB8 raster with no alpha channel.
///
/// All coordinates are local to the canvas. Out-of-bounds reads return black
/// and out-of-bounds writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a black canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap tightly packed RGB bytes; short buffers are padded with black
    pub fn from_rgb(width: u32, height: u32, mut pixels: Vec<u8>) -> Self {
        pixels.resize(width as usize * height as usize * 3, 0);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Create a canvas filled with one color
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.clear(rgb);
        canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * 3
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill every pixel with a solid color
    pub fn clear(&mut self, rgb: [u8; 3]) {
        for px in self.pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.stride() + x as usize * 3)
        } else {
            None
        }
    }

    /// Get a single pixel (bounds-checked, returns black if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 3] {
        match self.index(x, y) {
            Some(i) => [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]],
            None => [0, 0, 0],
        }
    }

    /// Set a single pixel (bounds-checked)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + 3].copy_from_slice(&rgb);
        }
    }

    /// Mutable access to one row of packed RGB bytes
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.pixels[start..start + stride]
    }

    /// Whether every pixel has the given color
    pub fn is_uniform(&self, rgb: [u8; 3]) -> bool {
        self.pixels.chunks_exact(3).all(|px| px == rgb)
    }

    /// Copy into an `image` crate buffer for encoding
    pub fn to_rgb_image(&self) -> ::image::RgbImage {
        ::image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| ::image::RgbImage::new(self.width, self.height))
    }
}
