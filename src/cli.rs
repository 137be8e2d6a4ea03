//! Command-line argument parsing
//!
//! Supports:
//! - Every background option, overriding the config file
//! - Run mode, screen size and visual selection
//! - Old single-dash spellings such as `-geometry` and `-root`

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::BackgroundConfig;
use crate::display::{FixedScreen, Visual};
use crate::geometry::GeometrySpec;
use crate::layout::parse_percentage;
use crate::render::Axis;
use crate::session::RunMode;

/// Display depth the background is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VisualArg {
    /// 24-bit true color, shown exactly
    #[default]
    Truecolor24,
    /// A display that dithers, such as 16-bit true color
    Dithered,
}

impl From<VisualArg> for Visual {
    fn from(arg: VisualArg) -> Self {
        match arg {
            VisualArg::Truecolor24 => Visual::TRUE_COLOR_24,
            VisualArg::Dithered => Visual::TRUE_COLOR_16,
        }
    }
}

/// Paint a desktop background from a color field, a tile and an emblem
#[derive(Parser, Debug)]
#[command(name = "backdrop", version, about = "Paint a desktop background")]
pub struct CliArgs {
    /// Emblem image, used when --emblem is not given
    #[arg(value_name = "EMBLEM")]
    pub emblem_file: Option<PathBuf>,

    /// What to do with the rendered background
    #[arg(long, value_enum, default_value_t = RunMode::Set)]
    pub mode: RunMode,

    /// Screen size to render for
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_screen_size, default_value = "1920x1080")]
    pub screen: (u32, u32),

    /// Display visual to render for
    #[arg(long, value_enum, default_value_t = VisualArg::Truecolor24)]
    pub visual: VisualArg,

    /// Directory the rendered surfaces are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// Read options from this file instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to the console
    #[arg(long)]
    pub debug: bool,

    /// Background color
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Second background color (forms a gradient)
    #[arg(long, value_name = "COLOR")]
    pub color2: Option<String>,

    /// Use a horizontal gradient
    #[arg(long, overrides_with = "vgradient")]
    pub hgradient: bool,

    /// Use a vertical gradient (default)
    #[arg(long, overrides_with = "hgradient")]
    pub vgradient: bool,

    /// Image file to tile across the screen
    #[arg(long, value_name = "FILE")]
    pub tile: Option<PathBuf>,

    /// Alpha value for the tile image
    #[arg(long, value_name = "0-255", allow_negative_numbers = true)]
    pub tile_alpha: Option<i64>,

    /// Image file to place on top of the gradient and tile
    #[arg(long, value_name = "FILE")]
    pub emblem: Option<PathBuf>,

    /// Alpha value for the emblem image
    #[arg(long, value_name = "0-255", allow_negative_numbers = true)]
    pub emblem_alpha: Option<i64>,

    /// Emboss the emblem
    #[arg(long)]
    pub emboss: bool,

    /// Location and/or size of the emblem
    #[arg(long, value_name = "WIDTHxHEIGHT+X+Y", allow_hyphen_values = true)]
    pub geometry: Option<String>,

    /// Center the emblem horizontally
    #[arg(long)]
    pub center_x: bool,

    /// Center the emblem vertically
    #[arg(long)]
    pub center_y: bool,

    /// Scale emblem width to a percentage of the screen width
    #[arg(long, value_name = "PERCENTAGE", value_parser = parse_percentage)]
    pub scale_width: Option<f64>,

    /// Scale emblem height to a percentage of the screen height
    #[arg(long, value_name = "PERCENTAGE", value_parser = parse_percentage)]
    pub scale_height: Option<f64>,

    /// Rectangle to avoid; the emblem is shrunk to stay clear of it
    #[arg(long, value_name = "WIDTHxHEIGHT+X+Y", allow_hyphen_values = true)]
    pub avoid: Option<String>,

    /// Shrink emblem width or height to keep its aspect ratio
    #[arg(long)]
    pub keep_aspect: bool,
}

/// Parse `WIDTHxHEIGHT` with both parts positive
fn parse_screen_size(s: &str) -> Result<(u32, u32), String> {
    let spec = GeometrySpec::parse(s).map_err(|e| e.to_string())?;
    match spec {
        GeometrySpec {
            width: Some(w),
            height: Some(h),
            x: None,
            y: None,
        } if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(format!("expected WIDTHxHEIGHT, got '{}'", s)),
    }
}

/// Rewrite old single-dash option spellings into their current form
pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    for arg in args {
        let arg: OsString = arg.into();
        let replacement: &[&str] = match arg.to_str() {
            Some("-geometry") => &["--geometry"],
            Some("-root") | Some("--set") => &["--mode=set"],
            Some("--run") => &["--mode=run"],
            Some("--test") => &["--mode=test"],
            Some("-scale") => &["--scale-width=100", "--scale-height=100"],
            Some("-scale-width") => &["--scale-width=100"],
            Some("-scale-height") => &["--scale-height=100"],
            Some("-avoid") => &["--avoid"],
            Some("-center-horizontal") => &["--center-x"],
            Some("-center-vertical") => &["--center-y"],
            Some("-integer-scale") => &[],
            Some("-keep-aspect") => &["--keep-aspect"],
            _ => {
                out.push(arg);
                continue;
            }
        };
        out.extend(replacement.iter().map(OsString::from));
    }
    out
}

impl CliArgs {
    /// Parse process arguments, accepting legacy spellings
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_args(std::env::args_os()))
    }

    /// Layer the options given on the command line over `config`
    pub fn apply_to(&self, config: &mut BackgroundConfig) {
        if let Some(color) = &self.color {
            config.color = color.clone();
        }
        if let Some(color2) = &self.color2 {
            config.color2 = Some(color2.clone());
        }
        if self.hgradient {
            config.gradient = Axis::Horizontal;
        } else if self.vgradient {
            config.gradient = Axis::Vertical;
        }
        if let Some(tile) = &self.tile {
            config.tile = Some(tile.clone());
        }
        if let Some(alpha) = self.tile_alpha {
            config.tile_alpha = alpha;
        }
        if let Some(emblem) = self.emblem.as_ref().or(self.emblem_file.as_ref()) {
            config.emblem = Some(emblem.clone());
        }
        if let Some(alpha) = self.emblem_alpha {
            config.emblem_alpha = alpha;
        }
        config.emboss |= self.emboss;
        if let Some(geometry) = &self.geometry {
            config.geometry = Some(geometry.clone());
        }
        config.center_x |= self.center_x;
        config.center_y |= self.center_y;
        if self.scale_width.is_some() {
            config.scale_width = self.scale_width;
        }
        if self.scale_height.is_some() {
            config.scale_height = self.scale_height;
        }
        if let Some(avoid) = &self.avoid {
            config.avoid = Some(avoid.clone());
        }
        config.keep_aspect |= self.keep_aspect;
    }

    /// The screen-size provider described by `--screen` and `--visual`
    pub fn screen(&self) -> FixedScreen {
        FixedScreen::new(self.screen.0, self.screen.1).with_visual(self.visual.into())
    }
}
