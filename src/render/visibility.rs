//! Which layers can show through a given region
//!
//! Lets the renderer skip passes whose output would be fully covered.

use super::RenderState;
use crate::geometry::Rect;

/// Layers that contribute pixels to a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub colors: bool,
    pub tiles: bool,
    pub emblem: bool,
}

/// Work out which layers are visible inside `region` (canvas coordinates).
///
/// `tile_only` suppresses the emblem, for a repeating background that has
/// the emblem drawn in a separate overlay.
pub fn analyze(state: &RenderState, region: Rect, tile_only: bool) -> Visibility {
    // A tile placed at zero size paints nothing
    let tile = state
        .tile
        .as_ref()
        .filter(|tile| tile.width > 0 && tile.height > 0 && !tile.image.is_empty());

    let mut vis = Visibility {
        colors: !tile.is_some_and(|tile| tile.is_opaque()),
        tiles: tile.is_some(),
        emblem: !tile_only && state.emblem.is_some(),
    };

    if let (true, Some(emblem)) = (vis.emblem, &state.emblem) {
        // Embossing relights what lies underneath, so those layers stay live
        if emblem.is_opaque() && !emblem.emboss && emblem.bounds.contains_rect(&region) {
            vis.colors = false;
            vis.tiles = false;
        }

        if !emblem.bounds.intersects(&region) {
            vis.emblem = false;
        }
    }

    vis
}
