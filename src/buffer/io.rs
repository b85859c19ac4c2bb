use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::{PixelBuffer, TracemarkResult};

/// Decode encoded PNG bytes into a straight-alpha RGBA8 buffer.
pub fn decode_png(bytes: &[u8]) -> TracemarkResult<PixelBuffer> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decode png from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_raw(width, height, rgba.into_raw())
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buf: &PixelBuffer) -> TracemarkResult<Vec<u8>> {
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        buf.as_bytes(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(out)
}

/// Read a PNG file from disk.
pub fn load_png(path: impl AsRef<Path>) -> TracemarkResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read png '{}'", path.display()))?;
    decode_png(&bytes)
}

/// Write a buffer to disk as PNG, creating parent directories as needed.
pub fn save_png(buf: &PixelBuffer, path: impl AsRef<Path>) -> TracemarkResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        buf.as_bytes(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/io.rs"]
mod tests;
