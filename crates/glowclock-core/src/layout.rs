//! Size selection for the clock face.

use glowclock_proto::config::ClockSize;

/// Width of the design box the face is laid out in.
const DESIGN_WIDTH: f32 = 380.0;
/// Height of the design box.
const DESIGN_HEIGHT: f32 = 100.0;
/// Glyph size inside the design box.
const DESIGN_GLYPH: f32 = 110.0;
/// Gap between the colon and each digit pair.
const DESIGN_COLON_GAP: f32 = 15.0;
/// Vertical lift of the colon.
const DESIGN_COLON_LIFT: f32 = 8.0;

/// How wide the clock face is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthBehavior {
    /// A fraction of the viewport width.
    Viewport(f32),
    /// Whatever width the parent offers.
    FillParent,
}

impl WidthBehavior {
    /// Resolves the behavior against the space available.
    pub fn resolve(self, available_width: f32) -> f32 {
        match self {
            WidthBehavior::Viewport(fraction) => available_width * fraction,
            WidthBehavior::FillParent => available_width,
        }
    }
}

/// Maps a size to its width behavior; `fill_parent` overrides the size.
pub fn width_behavior(size: ClockSize, fill_parent: bool) -> WidthBehavior {
    if fill_parent {
        return WidthBehavior::FillParent;
    }

    match size {
        ClockSize::Small => WidthBehavior::Viewport(0.35),
        ClockSize::Medium => WidthBehavior::Viewport(0.60),
        ClockSize::Fullscreen => WidthBehavior::Viewport(0.88),
    }
}

/// Pixel measurements of a face drawn at a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub width:      f32,
    pub height:     f32,
    pub glyph_size: f32,
    pub colon_gap:  f32,
    pub colon_lift: f32,
}

impl FaceMetrics {
    /// Scales the design box to `width`, shrinking it when `max_height`
    /// would otherwise be exceeded.
    pub fn fit(width: f32, max_height: f32) -> Self {
        let width = width.max(0.0);
        let height_limited = max_height.max(0.0) * DESIGN_WIDTH / DESIGN_HEIGHT;
        let width = width.min(height_limited);
        let scale = width / DESIGN_WIDTH;

        Self {
            width,
            height: DESIGN_HEIGHT * scale,
            glyph_size: DESIGN_GLYPH * scale,
            colon_gap: DESIGN_COLON_GAP * scale,
            colon_lift: DESIGN_COLON_LIFT * scale,
        }
    }
}
