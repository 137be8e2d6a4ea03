//! Turning user options into a render state
//!
//! Everything that can be wrong with the options is checked here, before any
//! image is loaded or pixel rendered. After `build_state` returns, the state
//! is only read.

use std::path::Path;

use crate::color::Rgb16;
use crate::config::BackgroundConfig;
use crate::display::Screen;
use crate::error::{Error, Result};
use crate::layout::{self, AvoidSpec, EmblemSpec};
use crate::raster::{Image, ImageLoader};
use crate::render::{EmblemLayer, Gradient, RenderState, TileLayer};

/// Check that an alpha value fits in 0..=255
pub fn check_alpha(layer: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidAlpha { layer, value })
}

fn check_percentage(value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(pct) if !(0.0..=100.0).contains(&pct) => {
            Err(Error::InvalidPercentage(pct.to_string()))
        }
        other => Ok(other),
    }
}

/// Validate the emblem size and position options
pub fn emblem_spec(config: &BackgroundConfig) -> Result<EmblemSpec> {
    Ok(EmblemSpec {
        geometry: config
            .geometry
            .as_deref()
            .map(layout::parse_emblem_geometry)
            .transpose()?
            .unwrap_or_default(),
        scale_width: check_percentage(config.scale_width)?,
        scale_height: check_percentage(config.scale_height)?,
        center_x: config.center_x,
        center_y: config.center_y,
        avoid: config.avoid.as_deref().map(AvoidSpec::parse).transpose()?,
        keep_aspect: config.keep_aspect,
    })
}

/// Load an optional layer image. A file that cannot be loaded is reported and
/// the layer left out.
fn load_layer(loader: &dyn ImageLoader, kind: &str, path: &Path) -> Option<Image> {
    match loader.load(path) {
        Ok(image) if image.is_empty() => {
            tracing::warn!("{} image {} is empty; ignoring it", kind, path.display());
            None
        }
        Ok(image) => {
            tracing::debug!(
                "Loaded {} image {} ({}x{})",
                kind,
                path.display(),
                image.width(),
                image.height()
            );
            Some(image)
        }
        Err(e) => {
            tracing::warn!("Cannot load {} image: {}", kind, e);
            None
        }
    }
}

/// Build the render state for `screen` from validated `config`.
///
/// Invalid alpha values, colors, geometry or percentages are fatal. Images
/// that fail to load and emblems with no room outside the avoid rectangle
/// are dropped with a log message.
pub fn build_state(
    config: &BackgroundConfig,
    screen: &dyn Screen,
    loader: &dyn ImageLoader,
) -> Result<RenderState> {
    let tile_alpha = check_alpha("tile", config.tile_alpha)?;
    let emblem_alpha = check_alpha("emblem", config.emblem_alpha)?;

    let color: Rgb16 = config.color.parse()?;
    let gradient = config
        .color2
        .as_deref()
        .map(Rgb16::parse)
        .transpose()?
        .map(|color2| Gradient {
            color2,
            axis: config.gradient,
        });

    let spec = emblem_spec(config)?;

    let (width, height) = screen.size();
    if width == 0 || height == 0 {
        return Err(Error::InvalidGeometry(format!("{}x{}", width, height)));
    }

    let tile = config
        .tile
        .as_deref()
        .and_then(|path| load_layer(loader, "tile", path))
        .map(|image| TileLayer::new(image, tile_alpha));

    let emblem = config
        .emblem
        .as_deref()
        .and_then(|path| load_layer(loader, "emblem", path))
        .and_then(|image| {
            let natural = (image.width(), image.height());
            let bounds = layout::solve_emblem_geometry(&spec, (width, height), natural)?;
            Some(EmblemLayer {
                image,
                alpha: emblem_alpha,
                bounds,
                emboss: config.emboss,
            })
        });

    Ok(RenderState {
        width,
        height,
        color,
        gradient,
        tile,
        emblem,
        visual: screen.visual(),
    })
}
