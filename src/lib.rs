//! Backdrop - desktop background renderer
//!
//! Composes a color field (flat or gradient), an optional repeating tile and
//! an optional emblem into a background, places the emblem around an area it
//! must avoid, and finds the smallest block that repeats to fill the screen.

pub mod cli;
pub mod color;
pub mod config;
pub mod config_paths;
pub mod display;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod publish;
pub mod raster;
pub mod render;
pub mod session;
pub mod setup;
pub mod tracing;

// Re-export commonly used types
pub use color::Rgb16;
pub use config::BackgroundConfig;
pub use error::{Error, Result};
pub use geometry::Rect;
pub use layout::{solve_emblem_geometry, EmblemSpec, Gravity};
pub use render::{render_region, tile_period, Axis, Canvas, RenderState};
pub use session::{plan_session, RunMode};
