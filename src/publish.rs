//! Making rendered surfaces visible
//!
//! Window-system integration lives behind `Publisher`. The bundled
//! `PngPublisher` writes each surface to a PNG file and records placement in
//! a `manifest.json` next to them.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::color::Rgb16;
use crate::error::Result;
use crate::render::Canvas;
use crate::session::{Content, SessionPlan, Surface, SurfaceRole};

/// Buffer-publishing collaborator
pub trait Publisher {
    /// Show `canvas` with its top-left corner at `(x, y)`
    fn publish_canvas(
        &mut self,
        canvas: &Canvas,
        x: i32,
        y: i32,
        role: SurfaceRole,
        tiled: bool,
    ) -> Result<()>;

    /// Show a single color where a pixmap is not needed
    fn publish_solid(&mut self, color: Rgb16, role: SurfaceRole) -> Result<()>;

    /// Called once after the last surface
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Hand every surface of `plan` to `publisher`, in order
pub fn publish_plan(plan: &SessionPlan, publisher: &mut dyn Publisher) -> Result<()> {
    for surface in &plan.surfaces {
        publish_surface(surface, publisher)?;
    }
    publisher.finish()
}

fn publish_surface(surface: &Surface, publisher: &mut dyn Publisher) -> Result<()> {
    match &surface.content {
        Content::Pixels(canvas) => {
            publisher.publish_canvas(canvas, surface.x, surface.y, surface.role, surface.tiled)
        }
        Content::Solid(color) => publisher.publish_solid(*color, surface.role),
    }
}

/// One line of the manifest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub role: SurfaceRole,
    /// File name relative to the output directory; absent for a solid color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub tiled: bool,
    /// `#rrggbb` when the surface is a plain color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Writes surfaces as PNG files into a directory
#[derive(Debug)]
pub struct PngPublisher {
    dir: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl PngPublisher {
    /// Create the output directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            entries: Vec::new(),
        })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    fn file_name(role: SurfaceRole) -> &'static str {
        match role {
            SurfaceRole::Background => "background.png",
            SurfaceRole::Overlay => "overlay.png",
            SurfaceRole::Preview => "preview.png",
        }
    }
}

impl Publisher for PngPublisher {
    fn publish_canvas(
        &mut self,
        canvas: &Canvas,
        x: i32,
        y: i32,
        role: SurfaceRole,
        tiled: bool,
    ) -> Result<()> {
        if canvas.width() == 0 || canvas.height() == 0 {
            tracing::warn!("Skipping empty {:?} surface", role);
            return Ok(());
        }

        let name = Self::file_name(role);
        let path = self.dir.join(name);
        canvas.to_rgb_image().save(&path)?;
        tracing::info!(
            "Wrote {}x{} {:?} surface to {}",
            canvas.width(),
            canvas.height(),
            role,
            path.display()
        );

        self.entries.push(ManifestEntry {
            role,
            file: Some(name.to_string()),
            x,
            y,
            width: canvas.width(),
            height: canvas.height(),
            tiled,
            color: None,
        });
        Ok(())
    }

    fn publish_solid(&mut self, color: Rgb16, role: SurfaceRole) -> Result<()> {
        let [r, g, b] = color.to_rgb8();
        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        tracing::info!("Background set to solid {}", hex);

        self.entries.push(ManifestEntry {
            role,
            file: None,
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            tiled: true,
            color: Some(hex),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let path = self.dir.join("manifest.json");
        let json = serde_json::to_string_pretty(&self.entries).map_err(std::io::Error::from)?;
        fs::write(&path, json)?;
        tracing::debug!("Wrote manifest {}", path.display());
        Ok(())
    }
}
