//! What the renderer needs to know about the target display
//!
//! The screen size and visual come from a caller-supplied `Screen` rather
//! than from any cached global lookup.

use serde::{Deserialize, Serialize};

/// Pixel model of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualClass {
    TrueColor,
    DirectColor,
    PseudoColor,
    StaticColor,
    GrayScale,
    StaticGray,
}

/// Display visual: class plus bit depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual {
    pub class: VisualClass,
    pub depth: u8,
}

impl Visual {
    /// 24-bit true color, the common case
    pub const TRUE_COLOR_24: Visual = Visual {
        class: VisualClass::TrueColor,
        depth: 24,
    };

    /// 16-bit true color, which gets dithered
    pub const TRUE_COLOR_16: Visual = Visual {
        class: VisualClass::TrueColor,
        depth: 16,
    };

    /// Whether rendered pixels get dithered on the way to this display.
    /// Only 24-bit true/direct color shows them exactly.
    pub fn is_dithered(&self) -> bool {
        !(matches!(self.class, VisualClass::TrueColor | VisualClass::DirectColor)
            && self.depth == 24)
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self::TRUE_COLOR_24
    }
}

/// Screen-size provider collaborator
pub trait Screen {
    fn size(&self) -> (u32, u32);

    fn visual(&self) -> Visual {
        Visual::default()
    }
}

/// A screen with a fixed, caller-chosen size and visual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedScreen {
    pub width: u32,
    pub height: u32,
    pub visual: Visual,
}

impl FixedScreen {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            visual: Visual::default(),
        }
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }
}

impl Screen for FixedScreen {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn visual(&self) -> Visual {
        self.visual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dithered_visuals() {
        assert!(!Visual::TRUE_COLOR_24.is_dithered());
        assert!(!Visual {
            class: VisualClass::DirectColor,
            depth: 24
        }
        .is_dithered());
        assert!(Visual::TRUE_COLOR_16.is_dithered());
        assert!(Visual {
            class: VisualClass::PseudoColor,
            depth: 24
        }
        .is_dithered());
    }

    #[test]
    fn test_fixed_screen() {
        let screen = FixedScreen::new(800, 600).with_visual(Visual::TRUE_COLOR_16);
        assert_eq!(screen.size(), (800, 600));
        assert!(screen.visual().is_dithered());
    }
}
