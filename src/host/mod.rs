//! Narrow contracts to the runtime that hosts the puzzle blocks.
//!
//! The core never touches a renderer directly. Whoever embeds it implements these traits over
//! its own drawing surface, display layer and puzzle bookkeeping.

pub(crate) mod memory;

use crate::PixelBuffer;

pub use memory::{MemoryPaintSurface, Sprite};

/// The live, user-mutable paint layer.
pub trait PaintSurface {
    /// Snapshot of the current paint layer, owned by the caller.
    fn current_paint_buffer(&self) -> PixelBuffer;

    /// Reset the paint layer to its empty state.
    fn clear_paint_buffer(&mut self);
}

/// Display layer showing the watermark behind the paint layer.
pub trait WatermarkDisplay {
    /// Replace the displayed watermark image.
    fn upload_watermark(&mut self, template: &PixelBuffer);

    fn set_watermark_visible(&mut self, visible: bool);

    fn request_redraw(&mut self);
}

/// Puzzle/session bookkeeping owned by the host.
pub trait PuzzleController {
    /// Interval between animation steps, in milliseconds.
    fn step_interval_millis(&self) -> f64;

    /// Attempts made so far, when the host tracks them.
    fn attempt_count(&self) -> Option<u32> {
        None
    }

    /// Whether this controller accepts [`PuzzleController::mark_resolved`].
    fn supports_resolve(&self) -> bool {
        false
    }

    fn mark_resolved(&mut self) {}
}

/// Opaque tag attached to a sprite; stored verbatim and never interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SpriteTracker(pub String);

impl SpriteTracker {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpriteTracker {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SpriteTracker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A drawable entity that can carry a [`SpriteTracker`].
pub trait TrackerTarget {
    fn set_sprite_tracker(&mut self, tag: SpriteTracker);

    fn sprite_tracker(&self) -> Option<&SpriteTracker>;
}
