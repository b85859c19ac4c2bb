use crate::host::{PaintSurface, SpriteTracker, TrackerTarget};
use crate::{PixelBuffer, TracemarkResult};

/// Paint surface backed by an owned [`PixelBuffer`].
#[derive(Clone, Debug)]
pub struct MemoryPaintSurface {
    buffer: PixelBuffer,
}

impl MemoryPaintSurface {
    pub fn new(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }

    /// Empty surface of the given size.
    pub fn blank(width: u32, height: u32) -> TracemarkResult<Self> {
        Ok(Self::new(PixelBuffer::new(width, height)?))
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Swap in new paint content, e.g. a user's next attempt.
    pub fn replace(&mut self, buffer: PixelBuffer) -> PixelBuffer {
        std::mem::replace(&mut self.buffer, buffer)
    }

    /// Resize the surface; the content is dropped.
    pub fn resize(&mut self, width: u32, height: u32) -> TracemarkResult<()> {
        self.buffer = PixelBuffer::new(width, height)?;
        Ok(())
    }
}

impl PaintSurface for MemoryPaintSurface {
    fn current_paint_buffer(&self) -> PixelBuffer {
        self.buffer.clone()
    }

    fn clear_paint_buffer(&mut self) {
        self.buffer.clear();
    }
}

/// Minimal drawable that records its tracker tag.
#[derive(Clone, Debug, Default)]
pub struct Sprite {
    pub name: String,
    tracker: Option<SpriteTracker>,
}

impl Sprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracker: None,
        }
    }
}

impl TrackerTarget for Sprite {
    fn set_sprite_tracker(&mut self, tag: SpriteTracker) {
        self.tracker = Some(tag);
    }

    fn sprite_tracker(&self) -> Option<&SpriteTracker> {
        self.tracker.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
