//! Rendering sessions
//!
//! A session decides which surfaces to render for a run mode and in what
//! size. Each planned surface is rendered once and handed to a publisher.

use serde::{Deserialize, Serialize};

use crate::color::Rgb16;
use crate::geometry::Rect;
use crate::render::{self, Canvas, RenderState};

/// How the background is put on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Render once and install the result as the background
    #[default]
    Set,
    /// Stay resident; prefer a small repeating tile plus an emblem overlay
    Run,
    /// Preview at half the screen size
    Test,
}

/// What a published surface is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceRole {
    Background,
    /// Separate window carrying the emblem above a tiled background
    Overlay,
    Preview,
}

/// Pixels of one surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Pixels(Canvas),
    /// A single color, set without any pixmap
    Solid(Rgb16),
}

/// One finished surface, positioned in screen coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub role: SurfaceRole,
    pub x: i32,
    pub y: i32,
    /// Repeated across the screen by the display
    pub tiled: bool,
    pub content: Content,
}

impl Surface {
    fn pixels(role: SurfaceRole, region: Rect, tiled: bool, canvas: Canvas) -> Self {
        Self {
            role,
            x: region.x,
            y: region.y,
            tiled,
            content: Content::Pixels(canvas),
        }
    }

    /// Size in pixels; a solid color counts as 1x1
    pub fn size(&self) -> (u32, u32) {
        match &self.content {
            Content::Pixels(canvas) => (canvas.width(), canvas.height()),
            Content::Solid(_) => (1, 1),
        }
    }
}

/// Surfaces produced by a session, in publishing order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionPlan {
    pub surfaces: Vec<Surface>,
}

impl SessionPlan {
    pub fn background(&self) -> Option<&Surface> {
        self.surfaces
            .iter()
            .find(|s| s.role != SurfaceRole::Overlay)
    }

    pub fn overlay(&self) -> Option<&Surface> {
        self.surfaces
            .iter()
            .find(|s| s.role == SurfaceRole::Overlay)
    }
}

/// Render the surfaces `mode` needs for `state`
pub fn plan_session(state: &RenderState, mode: RunMode) -> SessionPlan {
    let surfaces = match mode {
        RunMode::Set => plan_set(state),
        RunMode::Run => plan_run(state),
        RunMode::Test => plan_test(state),
    };
    SessionPlan { surfaces }
}

fn plan_set(state: &RenderState) -> Vec<Surface> {
    // With an emblem the whole screen is one picture
    let period = match state.emblem {
        Some(_) => None,
        None => render::tile_period(state),
    };
    let (width, height) = period.unwrap_or((state.width, state.height));
    let region = Rect::sized(width, height);

    vec![Surface::pixels(
        SurfaceRole::Background,
        region,
        period.is_some(),
        render::render_region(state, region, false),
    )]
}

/// Whether a repeating block plus an overlay is smaller than the full screen
fn useful_period(state: &RenderState) -> Option<(u32, u32)> {
    let (width, height) = render::tile_period(state)?;
    let tile_pixels = width as u64 * height as u64;
    let emblem_pixels = state
        .emblem
        .as_ref()
        .map_or(0, |emblem| emblem.bounds.area());
    let all_pixels = state.width as u64 * state.height as u64;

    if tile_pixels + emblem_pixels >= all_pixels {
        return None;
    }

    let saved = all_pixels - (tile_pixels + emblem_pixels);
    tracing::info!(
        "Saved {}/{} ({:.0}%) pixels by tiling",
        saved,
        all_pixels,
        100.0 * saved as f64 / all_pixels as f64
    );
    Some((width, height))
}

fn plan_run(state: &RenderState) -> Vec<Surface> {
    let period = useful_period(state);
    let tiled = period.is_some();
    let (width, height) = period.unwrap_or((state.width, state.height));
    let mut surfaces = Vec::with_capacity(2);

    if (width, height) == (1, 1) {
        surfaces.push(Surface {
            role: SurfaceRole::Background,
            x: 0,
            y: 0,
            tiled,
            content: Content::Solid(state.color),
        });
    } else {
        let region = Rect::sized(width, height);
        surfaces.push(Surface::pixels(
            SurfaceRole::Background,
            region,
            tiled,
            render::render_region(state, region, tiled),
        ));
    }

    if let (true, Some(emblem)) = (tiled, &state.emblem) {
        if emblem.bounds.is_empty() {
            tracing::warn!("Emblem has no area at {}, no overlay", emblem.bounds);
            return surfaces;
        }
        tracing::debug!("Emblem overlay at {}", emblem.bounds);
        surfaces.push(Surface::pixels(
            SurfaceRole::Overlay,
            emblem.bounds,
            false,
            render::render_region(state, emblem.bounds, false),
        ));
    }

    surfaces
}

fn plan_test(state: &RenderState) -> Vec<Surface> {
    let preview = state.scaled_to((state.width / 2).max(1), (state.height / 2).max(1));
    let region = Rect::sized(preview.width, preview.height);
    vec![Surface::pixels(
        SurfaceRole::Preview,
        region,
        false,
        render::render_region(&preview, region, false),
    )]
}
