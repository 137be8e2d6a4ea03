//! Emblem placement tests
//!
//! Covers option precedence, aspect fixing and the avoid negotiation through
//! the public solver and through setup.

use backdrop::display::FixedScreen;
use backdrop::geometry::Rect;
use backdrop::layout::{parse_emblem_geometry, AvoidSpec, EmblemSpec};
use backdrop::raster::{Image, ImageLoader};
use backdrop::{setup, solve_emblem_geometry, BackgroundConfig, Result};
use std::path::{Path, PathBuf};

const SCREEN: (u32, u32) = (1920, 1080);

fn avoid(s: &str) -> Option<AvoidSpec> {
    Some(AvoidSpec::parse(s).unwrap())
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_explicit_geometry_is_exact() {
    for geometry in ["300x200+0+0", "1x1+1919+1079", "640x480+100+50"] {
        let spec = EmblemSpec {
            geometry: parse_emblem_geometry(geometry).unwrap(),
            ..Default::default()
        };
        let rect = solve_emblem_geometry(&spec, SCREEN, (10, 10)).unwrap();
        assert_eq!(rect.to_string(), geometry);
    }
}

#[test]
fn test_center_beats_geometry_offset() {
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("200x100+5+5").unwrap(),
        center_x: true,
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (10, 10)).unwrap();
    assert_eq!(rect, Rect::new(860, 5, 200, 100));
}

#[test]
fn test_full_screen_scale() {
    let spec = EmblemSpec {
        scale_width: Some(100.0),
        scale_height: Some(100.0),
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (10, 10)).unwrap();
    assert_eq!(rect, Rect::sized(1920, 1080));
}

#[test]
fn test_scale_with_keep_aspect_centers() {
    // 16:9 screen, square emblem scaled to the full screen, kept square
    let spec = EmblemSpec {
        scale_width: Some(100.0),
        scale_height: Some(100.0),
        center_x: true,
        center_y: true,
        keep_aspect: true,
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (256, 256)).unwrap();
    assert_eq!(rect, Rect::new(420, 0, 1080, 1080));
}

// ============================================================================
// Avoidance
// ============================================================================

#[test]
fn test_centered_emblem_under_full_screen_avoid_is_dropped() {
    let spec = EmblemSpec {
        center_x: true,
        center_y: true,
        avoid: avoid("1920x1080+0+0"),
        ..Default::default()
    };
    assert_eq!(solve_emblem_geometry(&spec, SCREEN, (64, 64)), None);
}

#[test]
fn test_distant_avoid_changes_nothing() {
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("128x128+0+0").unwrap(),
        avoid: avoid("200x200-0-0"),
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (64, 64));
    assert_eq!(rect, Some(Rect::new(0, 0, 128, 128)));
}

#[test]
fn test_avoid_implies_aspect_fix() {
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("400x100+0+0").unwrap(),
        avoid: avoid("10x10-0-0"),
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (64, 64)).unwrap();
    assert_eq!(rect, Rect::new(0, 0, 100, 100));
}

#[test]
fn test_emblem_anchored_inside_panel_is_dropped() {
    // A bottom panel 40px high across the whole screen. The emblem is
    // anchored to the bottom-right corner, so shrinking cannot move it out.
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("200x200-0-0").unwrap(),
        avoid: avoid("1920x40+0-0"),
        ..Default::default()
    };
    assert_eq!(solve_emblem_geometry(&spec, SCREEN, (50, 50)), None);

    // Lifted 50px off the bottom it clears the panel untouched
    let spec = EmblemSpec {
        geometry: parse_emblem_geometry("200x200-0-50").unwrap(),
        avoid: avoid("1920x40+0-0"),
        ..Default::default()
    };
    let rect = solve_emblem_geometry(&spec, SCREEN, (50, 50));
    assert_eq!(rect, Some(Rect::new(1720, 830, 200, 200)));
}

#[test]
fn test_solved_emblem_never_overlaps_avoid() {
    let avoid_spec = AvoidSpec::parse("600x400+700+300").unwrap();
    let area = avoid_spec.resolve(SCREEN.0, SCREEN.1);

    for geometry in ["800x800+0+0", "800x800-0-0", "800x800+0-0", "800x800-0+0"] {
        let spec = EmblemSpec {
            geometry: parse_emblem_geometry(geometry).unwrap(),
            avoid: Some(avoid_spec),
            ..Default::default()
        };
        let rect = solve_emblem_geometry(&spec, SCREEN, (32, 32)).unwrap();
        let overlap = rect.intersect(&area).map_or(0, |r| r.area());
        assert_eq!(overlap, 0, "{} placed at {}", geometry, rect);
    }
}

// ============================================================================
// Through setup
// ============================================================================

struct OneImage(Image);

impl ImageLoader for OneImage {
    fn load(&self, _path: &Path) -> Result<Image> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_setup_places_scaled_emblem() {
    let config = BackgroundConfig {
        emblem: Some(PathBuf::from("logo.png")),
        scale_width: Some(50.0),
        scale_height: Some(50.0),
        center_x: true,
        center_y: true,
        keep_aspect: true,
        ..Default::default()
    };
    let state = setup::build_state(
        &config,
        &FixedScreen::new(1000, 800),
        &OneImage(Image::solid(20, 10, [9, 9, 9])),
    )
    .unwrap();
    let emblem = state.emblem.unwrap();
    // 500x400 box, 2:1 image -> 500x250, centered
    assert_eq!(emblem.bounds, Rect::new(250, 275, 500, 250));
}
