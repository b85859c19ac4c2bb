use crate::buffer::pixel::PixelBuffer;
use crate::foundation::core::Size;
use crate::foundation::error::{TracemarkError, TracemarkResult};
use crate::host::{PaintSurface, PuzzleController, SpriteTracker, TrackerTarget, WatermarkDisplay};
use crate::session::opcode::{BlockValue, Opcode};
use crate::session::opts::SessionOpts;
use crate::watermark::builder::{Capture, WatermarkTemplate, capture_from_surface};
use crate::watermark::evaluator::{ComparisonResult, compare, matches};
use crate::watermark::slot::WatermarkSlot;

/// What `convert_paint_to_watermark` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum CaptureOutcome {
    /// A new template replaced whatever was captured before.
    Captured {
        /// Template dimensions.
        size: Size,
        /// Pixels with nonzero alpha in the template.
        painted: usize,
    },
    /// No paint surface attached; nothing happened.
    NoPaintSurface,
}

/// Block host for the puzzle opcodes.
///
/// Owns the single watermark slot and whichever host collaborators are attached. Every
/// collaborator is optional; a missing one turns the dependent operation into a no-op.
#[derive(Default)]
pub struct PuzzleSession {
    opts: SessionOpts,
    slot: WatermarkSlot,
    paint: Option<Box<dyn PaintSurface>>,
    display: Option<Box<dyn WatermarkDisplay>>,
    controller: Option<Box<dyn PuzzleController>>,
}

impl std::fmt::Debug for PuzzleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleSession")
            .field("opts", &self.opts)
            .field("captured", &self.slot.is_captured())
            .field("paint", &self.paint.is_some())
            .field("display", &self.display.is_some())
            .field("controller", &self.controller.is_some())
            .finish()
    }
}

impl PuzzleSession {
    pub fn new(opts: SessionOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    pub fn with_paint_surface(mut self, surface: impl PaintSurface + 'static) -> Self {
        self.paint = Some(Box::new(surface));
        self
    }

    pub fn with_display(mut self, display: impl WatermarkDisplay + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    pub fn with_controller(mut self, controller: impl PuzzleController + 'static) -> Self {
        self.controller = Some(Box::new(controller));
        self
    }

    /// Attach or detach the paint surface.
    pub fn set_paint_surface(&mut self, surface: Option<Box<dyn PaintSurface>>) {
        self.paint = surface;
    }

    pub fn paint_surface_mut(&mut self) -> Option<&mut (dyn PaintSurface + 'static)> {
        self.paint.as_deref_mut()
    }

    pub fn opts(&self) -> SessionOpts {
        self.opts
    }

    /// The most recently captured watermark, if any.
    pub fn template(&self) -> Option<&WatermarkTemplate> {
        self.slot.current()
    }

    /// Snapshot the paint layer into a new watermark and clear the paint layer.
    ///
    /// The new template is uploaded to the display (if any) and then installed, replacing
    /// the previous one.
    #[tracing::instrument(skip(self))]
    pub fn convert_paint_to_watermark(&mut self) -> CaptureOutcome {
        let capture = capture_from_surface(self.paint.as_deref_mut());
        let Capture::Captured(template) = capture else {
            return CaptureOutcome::NoPaintSurface;
        };

        let outcome = CaptureOutcome::Captured {
            size: template.as_buffer().size(),
            painted: template.as_buffer().painted_count(),
        };
        if let Some(display) = self.display.as_deref_mut() {
            display.upload_watermark(template.as_buffer());
        }
        if self.slot.install(template).is_some() {
            tracing::debug!("replaced previous watermark");
        }
        if self.opts.show_on_capture {
            self.show_watermark();
        }
        outcome
    }

    /// Returns whether the request reached a display.
    pub fn show_watermark(&mut self) -> bool {
        self.set_watermark_visible(true)
    }

    /// Returns whether the request reached a display.
    pub fn hide_watermark(&mut self) -> bool {
        self.set_watermark_visible(false)
    }

    fn set_watermark_visible(&mut self, visible: bool) -> bool {
        if self.paint.is_none() {
            return false;
        }
        let Some(display) = self.display.as_deref_mut() else {
            return false;
        };
        display.set_watermark_visible(visible);
        display.request_redraw();
        true
    }

    /// Whether the current paint layer matches the captured watermark.
    ///
    /// `false` when there is no paint surface or nothing has been captured. A surface that
    /// changed size since the capture is a [`TracemarkError::DimensionMismatch`]. With
    /// `auto_resolve` set, a match also marks the puzzle resolved.
    #[tracing::instrument(skip(self))]
    pub fn is_paint_same_as_watermark(&mut self) -> TracemarkResult<bool> {
        let Some(template) = self.slot.current() else {
            tracing::debug!("no watermark captured; paint surface not read");
            return Ok(false);
        };
        let Some(current) = self.current_paint() else {
            return Ok(false);
        };
        let matched = matches(Some(template), &current)?;
        if matched && self.opts.auto_resolve {
            self.set_resolved();
        }
        Ok(matched)
    }

    /// Full comparison with mismatch count; `None` when either side is missing.
    pub fn compare_paint_to_watermark(&self) -> TracemarkResult<Option<ComparisonResult>> {
        let Some(template) = self.slot.current() else {
            return Ok(None);
        };
        let Some(current) = self.current_paint() else {
            return Ok(None);
        };
        compare(template, &current).map(Some)
    }

    /// Attempts reported by the controller; 0 when untracked.
    pub fn attempt_count(&self) -> u32 {
        self.controller
            .as_deref()
            .and_then(|c| c.attempt_count())
            .unwrap_or(0)
    }

    /// Step interval in seconds, or `None` without a controller.
    pub fn step_interval_secs(&self) -> Option<f64> {
        self.controller
            .as_deref()
            .map(|c| c.step_interval_millis() / 1000.0)
    }

    /// Tell the controller the puzzle is solved. Returns whether anything was notified.
    pub fn set_resolved(&mut self) -> bool {
        match self.controller.as_deref_mut() {
            Some(c) if c.supports_resolve() => {
                c.mark_resolved();
                tracing::debug!("puzzle marked resolved");
                true
            }
            _ => false,
        }
    }

    /// Attach an opaque tracker tag to `target`, verbatim.
    pub fn set_sprite_tracker(
        &self,
        target: &mut dyn TrackerTarget,
        tag: impl Into<SpriteTracker>,
    ) {
        target.set_sprite_tracker(tag.into());
    }

    /// Run an argument-free opcode and report its block value.
    pub fn dispatch(&mut self, op: Opcode) -> TracemarkResult<BlockValue> {
        let value = match op {
            Opcode::ConvertPaintToWatermark => {
                self.convert_paint_to_watermark();
                BlockValue::None
            }
            Opcode::ShowWatermark => {
                self.show_watermark();
                BlockValue::None
            }
            Opcode::HideWatermark => {
                self.hide_watermark();
                BlockValue::None
            }
            Opcode::IsPaintSameAsWatermark => BlockValue::Bool(self.is_paint_same_as_watermark()?),
            Opcode::AttemptCount => BlockValue::Number(f64::from(self.attempt_count())),
            Opcode::StepInterval => self
                .step_interval_secs()
                .map_or(BlockValue::None, BlockValue::Number),
            Opcode::SetResolved => {
                self.set_resolved();
                BlockValue::None
            }
            Opcode::SetSpriteTracker => {
                return Err(TracemarkError::validation(format!(
                    "{op} needs a target and a TRACKER argument; call set_sprite_tracker"
                )));
            }
        };
        Ok(value)
    }

    fn current_paint(&self) -> Option<PixelBuffer> {
        self.paint.as_deref().map(|p| p.current_paint_buffer())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/puzzle.rs"]
mod tests;
