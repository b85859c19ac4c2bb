//! tracemark captures a drawing as a watermark and checks later drawings against it.
//!
//! It is the core of a tracing puzzle: the learner's paint layer is snapshotted into a faded
//! reference image, then every new attempt is compared to that reference by alpha presence.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: `PixelBuffer -> WatermarkTemplate` ([`build_watermark`]). RGB becomes a
//!    luminance gray blended 60% toward white, alpha is kept, the source is cleared.
//! 2. **Hold**: the template lives in a single-slot [`WatermarkSlot`]; a new capture replaces
//!    it wholesale.
//! 3. **Compare**: `(WatermarkTemplate, PixelBuffer) -> bool` ([`matches`]). Two pixels agree
//!    when their alphas are equal or both nonzero. Color is ignored.
//!
//! [`PuzzleSession`] wires these steps to the host runtime through the traits in [`host`].
//!
//! The key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Owned buffers**: builder and evaluator exchange values, never live surface references.
//! - **Loud resizes**: comparing buffers of different sizes is a
//!   [`TracemarkError::DimensionMismatch`], not a silent guess.
#![forbid(unsafe_code)]

mod buffer;
mod foundation;
mod session;
mod watermark;

/// Contracts to the host runtime plus in-memory adapters.
pub mod host;

pub use buffer::io::{decode_png, encode_png, load_png, save_png};
pub use buffer::pixel::PixelBuffer;
pub use foundation::core::{BYTES_PER_PIXEL, Channel, Size, pixel_offset};
pub use foundation::error::{TracemarkError, TracemarkResult};
pub use session::opcode::{BlockValue, Opcode};
pub use session::opts::SessionOpts;
pub use session::puzzle::{CaptureOutcome, PuzzleSession};
pub use watermark::builder::{
    Capture, LUMA_WEIGHTS, WATERMARK_FADE, WatermarkTemplate, build_watermark,
    capture_from_surface, luminance, watermark_gray,
};
pub use watermark::evaluator::{ComparisonResult, alpha_agrees, compare, matches};
pub use watermark::slot::WatermarkSlot;
