use crate::foundation::error::{TracemarkError, TracemarkResult};

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Width and height of a pixel buffer, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Build a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by this size.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Length of an RGBA8 buffer of this size, or a validation error on overflow.
    pub fn rgba_len(self) -> TracemarkResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| TracemarkError::validation("rgba buffer size overflow"))
    }

    /// Whether `(x, y)` lies inside this size.
    pub fn contains(self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

/// One channel of a straight-alpha RGBA8 pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    R = 0,
    /// Green.
    G = 1,
    /// Blue.
    B = 2,
    /// Alpha.
    A = 3,
}

impl Channel {
    /// Byte offset of this channel within a pixel.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Byte offset of `channel` for pixel `(x, y)` in a row-major RGBA8 buffer of the given width.
///
/// Both the watermark builder and the match evaluator address pixels through this helper.
/// No bounds check happens here; see [`crate::PixelBuffer::channel`] for checked access.
pub fn pixel_offset(x: u32, y: u32, width: u32, channel: Channel) -> usize {
    (x as usize + y as usize * width as usize) * BYTES_PER_PIXEL + channel.index()
}
