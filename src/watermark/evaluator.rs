use crate::buffer::pixel::PixelBuffer;
use crate::foundation::core::{Channel, pixel_offset};
use crate::foundation::error::{TracemarkError, TracemarkResult};
use crate::watermark::builder::WatermarkTemplate;

/// Outcome of a full-buffer comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ComparisonResult {
    /// `true` iff `mismatches == 0`.
    pub matched: bool,
    /// Number of pixels whose alpha presence disagrees.
    pub mismatches: u64,
}

/// Alpha-presence agreement: equal bytes agree, and so do any two nonzero bytes.
///
/// Only "painted" against "not painted" counts as disagreement; exact opacity is ignored.
pub fn alpha_agrees(a1: u8, a2: u8) -> bool {
    a1 == a2 || (a1 > 0 && a2 > 0)
}

/// Count every disagreeing pixel between `template` and `current`.
#[tracing::instrument(skip_all, fields(width = current.width(), height = current.height()))]
pub fn compare(
    template: &WatermarkTemplate,
    current: &PixelBuffer,
) -> TracemarkResult<ComparisonResult> {
    let template = template.as_buffer();
    ensure_same_size(template, current)?;

    let mismatches = alpha_mismatches(template, current).count() as u64;

    let result = ComparisonResult {
        matched: mismatches == 0,
        mismatches,
    };
    tracing::debug!(result.matched, result.mismatches, "compared paint to watermark");
    Ok(result)
}

/// Whether `current` matches the captured watermark.
///
/// No template means no match, and `current` is not inspected. Differing dimensions are a
/// hard [`TracemarkError::DimensionMismatch`]. Stops at the first disagreeing pixel.
pub fn matches(
    template: Option<&WatermarkTemplate>,
    current: &PixelBuffer,
) -> TracemarkResult<bool> {
    let Some(template) = template else {
        tracing::debug!("no watermark captured; reporting no match");
        return Ok(false);
    };
    let template = template.as_buffer();
    ensure_same_size(template, current)?;

    match alpha_mismatches(template, current).next() {
        Some((x, y)) => {
            tracing::trace!(x, y, "alpha mismatch");
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Coordinates of every pixel whose alpha presence disagrees, in row-major order.
///
/// Both buffers must already share a size.
fn alpha_mismatches<'a>(
    template: &'a PixelBuffer,
    current: &'a PixelBuffer,
) -> impl Iterator<Item = (u32, u32)> + 'a {
    let (t, c) = (template.as_bytes(), current.as_bytes());
    let width = current.width();
    (0..current.height())
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
        .filter(move |&(x, y)| {
            let idx = pixel_offset(x, y, width, Channel::A);
            !alpha_agrees(t[idx], c[idx])
        })
}

fn ensure_same_size(template: &PixelBuffer, current: &PixelBuffer) -> TracemarkResult<()> {
    if template.size() != current.size() {
        return Err(TracemarkError::dimension_mismatch(
            template.size(),
            current.size(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/watermark/evaluator.rs"]
mod tests;
