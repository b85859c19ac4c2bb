use crate::watermark::builder::WatermarkTemplate;

/// Owned single-slot cell holding the most recent watermark.
///
/// There is at most one live template. [`WatermarkSlot::install`] moves a fully built template
/// in and hands back the one it replaced, so readers never see a partial rebuild.
#[derive(Debug, Default)]
pub struct WatermarkSlot {
    current: Option<WatermarkTemplate>,
}

impl WatermarkSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held template, returning the previous one.
    pub fn install(&mut self, template: WatermarkTemplate) -> Option<WatermarkTemplate> {
        self.current.replace(template)
    }

    pub fn current(&self) -> Option<&WatermarkTemplate> {
        self.current.as_ref()
    }

    pub fn take(&mut self) -> Option<WatermarkTemplate> {
        self.current.take()
    }

    pub fn is_captured(&self) -> bool {
        self.current.is_some()
    }
}
