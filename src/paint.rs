use crate::foundation::core::{PaintFrame, PanelId};

/// Opaque sink receiving computed geometry for visual application.
///
/// Called once per visible, fresh panel per render pass. How the numbers are
/// applied on screen (a transform write, a position update) is entirely the
/// sink's concern.
pub trait PaintSink {
    /// Apply one panel's geometry.
    fn paint(&mut self, panel: PanelId, frame: PaintFrame);
}
