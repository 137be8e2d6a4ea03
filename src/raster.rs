//! Decoded source images and the loader that produces them
//!
//! Tile and emblem files are decoded into 8-bit RGB or RGBA rasters. The
//! rendering core only ever reads these.

use std::path::Path;

use ::image::DynamicImage;

use crate::error::{Error, Result};

/// A decoded raster with 3 (RGB) or 4 (RGBA) channels per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u8,
    stride: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap tightly packed RGB pixels
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::from_raw(width, height, 3, pixels)
    }

    /// Wrap tightly packed RGBA pixels
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::from_raw(width, height, 4, pixels)
    }

    fn from_raw(width: u32, height: u32, channels: u8, mut pixels: Vec<u8>) -> Self {
        let stride = width as usize * channels as usize;
        // Short buffers are padded with transparent black rather than trusted
        pixels.resize(stride * height as usize, 0);
        Self {
            width,
            height,
            channels,
            stride,
            pixels,
        }
    }

    /// A single-color opaque image, mostly useful in tests and benches
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self::from_rgb(width, height, pixels)
    }

    /// Convert a decoded `image` crate picture, keeping alpha only if present
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            Self::from_rgba(w, h, rgba.into_raw())
        } else {
            let rgb = img.to_rgb8();
            let (w, h) = rgb.dimensions();
            Self::from_rgb(w, h, rgb.into_raw())
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA value at (x, y); opaque images report alpha 255.
    /// Coordinates must be in bounds.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = y as usize * self.stride + x as usize * self.channels as usize;
        let p = &self.pixels[idx..idx + self.channels as usize];
        if self.has_alpha() {
            [p[0], p[1], p[2], p[3]]
        } else {
            [p[0], p[1], p[2], 255]
        }
    }
}

/// Image-loading collaborator
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<Image>;
}

/// Loads images from the filesystem through the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<Image> {
        let img = ::image::open(path).map_err(|e| Error::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let image = Image::from_dynamic(img);
        tracing::debug!(
            "Loaded {} ({}x{}, {} channels)",
            path.display(),
            image.width(),
            image.height(),
            image.channels()
        );
        Ok(image)
    }
}
