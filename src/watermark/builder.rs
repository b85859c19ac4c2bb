use crate::buffer::pixel::PixelBuffer;
use crate::foundation::core::{Channel, pixel_offset};
use crate::host::PaintSurface;

/// Fraction of the distance from white kept by the watermark fade (60% toward white).
pub const WATERMARK_FADE: f64 = 0.4;

/// Luma weights applied to R, G, B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// A captured watermark: the faded-luminance rendition of a paint layer.
///
/// Only [`build_watermark`] and [`capture_from_surface`] produce one, so holding a
/// `WatermarkTemplate` always means a capture actually happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatermarkTemplate {
    buffer: PixelBuffer,
}

impl WatermarkTemplate {
    pub fn as_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }
}

/// Result of a capture attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capture {
    /// A template was built and the paint surface cleared.
    Captured(WatermarkTemplate),
    /// No paint surface exists; nothing was read or cleared.
    NoPaintSurface,
}

impl Capture {
    pub fn template(&self) -> Option<&WatermarkTemplate> {
        match self {
            Self::Captured(t) => Some(t),
            Self::NoPaintSurface => None,
        }
    }

    pub fn into_template(self) -> Option<WatermarkTemplate> {
        match self {
            Self::Captured(t) => Some(t),
            Self::NoPaintSurface => None,
        }
    }
}

/// Weighted luminance of an RGB triple, in `[0, 255]`.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_WEIGHTS[0] * f64::from(r)
        + LUMA_WEIGHTS[1] * f64::from(g)
        + LUMA_WEIGHTS[2] * f64::from(b)
}

/// Watermark gray for one pixel: luminance blended 60% toward white.
///
/// Stored the way a clamped canvas byte array stores floats: round half to even, then clamp.
pub fn watermark_gray(r: u8, g: u8, b: u8) -> u8 {
    let gray = 255.0 - (255.0 - luminance(r, g, b)) * WATERMARK_FADE;
    gray.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Build a template from `source` and clear `source`.
///
/// The template keeps every alpha byte and replaces R, G, B with [`watermark_gray`]. `source`
/// is only cleared once the template is complete.
#[tracing::instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn build_watermark(source: &mut PixelBuffer) -> WatermarkTemplate {
    let mut buffer = source.clone();
    let (w, h) = (buffer.width(), buffer.height());
    let px = buffer.pixels_mut();
    for y in 0..h {
        for x in 0..w {
            let idx = pixel_offset(x, y, w, Channel::R);
            let gray = watermark_gray(px[idx], px[idx + 1], px[idx + 2]);
            px[idx..idx + 3].fill(gray);
        }
    }
    source.clear();

    tracing::debug!(painted = buffer.painted_count(), "built watermark template");
    WatermarkTemplate { buffer }
}

/// Read the live paint layer, build a template from it, then clear the surface.
///
/// With no surface this is a no-op that reports [`Capture::NoPaintSurface`].
pub fn capture_from_surface<S: PaintSurface + ?Sized>(surface: Option<&mut S>) -> Capture {
    let Some(surface) = surface else {
        tracing::debug!("no paint surface; capture skipped");
        return Capture::NoPaintSurface;
    };

    let mut snapshot = surface.current_paint_buffer();
    let template = build_watermark(&mut snapshot);
    surface.clear_paint_buffer();
    Capture::Captured(template)
}

#[cfg(test)]
#[path = "../../tests/unit/watermark/builder.rs"]
mod tests;
