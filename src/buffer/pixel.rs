use crate::foundation::core::{BYTES_PER_PIXEL, Channel, Size, pixel_offset};
use crate::foundation::error::{TracemarkError, TracemarkResult};

/// Owned, row-major, straight-alpha RGBA8 pixel buffer.
///
/// `pixels.len() == width * height * 4` holds for every value of this type; the constructors
/// are the only way in and they reject anything else. The empty state is all bytes zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> TracemarkResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Wrap existing RGBA8 bytes. Fails unless `pixels.len() == width * height * 4`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> TracemarkResult<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(TracemarkError::validation(format!(
                "pixel buffer expects {len} bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Allocate a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> TracemarkResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: rgba.repeat(len / BYTES_PER_PIXEL),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Read one channel of pixel `(x, y)`.
    pub fn channel(&self, x: u32, y: u32, channel: Channel) -> TracemarkResult<u8> {
        let idx = self.checked_offset(x, y, channel)?;
        Ok(self.pixels[idx])
    }

    /// Write one channel of pixel `(x, y)`.
    pub fn set_channel(
        &mut self,
        x: u32,
        y: u32,
        channel: Channel,
        value: u8,
    ) -> TracemarkResult<()> {
        let idx = self.checked_offset(x, y, channel)?;
        self.pixels[idx] = value;
        Ok(())
    }

    pub fn rgba(&self, x: u32, y: u32) -> TracemarkResult<[u8; 4]> {
        let idx = self.checked_offset(x, y, Channel::R)?;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Ok(out)
    }

    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> TracemarkResult<()> {
        let idx = self.checked_offset(x, y, Channel::R)?;
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&rgba);
        Ok(())
    }

    /// Alpha bytes in pixel order.
    pub fn alphas(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| px[Channel::A.index()])
    }

    /// Number of pixels with nonzero alpha.
    pub fn painted_count(&self) -> usize {
        self.alphas().filter(|&a| a > 0).count()
    }

    /// Reset every channel of every pixel to zero.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn is_cleared(&self) -> bool {
        self.pixels.iter().all(|&b| b == 0)
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn checked_offset(&self, x: u32, y: u32, channel: Channel) -> TracemarkResult<usize> {
        if !self.size().contains(x, y) {
            return Err(TracemarkError::validation(format!(
                "pixel ({x}, {y}) is outside {}x{} buffer",
                self.width, self.height
            )));
        }
        Ok(pixel_offset(x, y, self.width, channel))
    }
}

fn checked_len(width: u32, height: u32) -> TracemarkResult<usize> {
    if width == 0 || height == 0 {
        return Err(TracemarkError::validation(format!(
            "pixel buffer dimensions must be >= 1, got {width}x{height}"
        )));
    }
    Size::new(width, height).rgba_len()
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel.rs"]
mod tests;
