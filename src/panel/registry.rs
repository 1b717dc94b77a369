use crate::{
    foundation::core::{ImageSize, PaintFrame, PanelId, Size, Vec2},
    layout::solver::cover_fit,
    measure::ViewMeasure,
    paint::PaintSink,
    panel::model::{Panel, PanelGeometry, PanelSource},
};

/// Validity of the cached cover-fit geometry for the current viewport size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Freshness {
    /// No panels registered; refresh and render are no-ops.
    #[default]
    Empty,
    /// Geometry must be recomputed before the next render pass.
    Stale,
    /// Cached layout is valid for the current viewport.
    Fresh,
}

/// Owns the registered panels and their cached cover-fit geometry.
///
/// Panels are kept in registration order (which fixes paint call order, not
/// correctness) and are never removed individually; the engine rebuilds the
/// registry wholesale on reload.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    freshness: Freshness,
}

impl PanelRegistry {
    /// Build an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel whose image reported its natural size.
    ///
    /// Returns `None` and leaves the registry untouched when the size is
    /// degenerate (zero or non-finite dimension); the panel simply never
    /// becomes renderable. A successful add marks the cache stale.
    pub fn add_panel(
        &mut self,
        id: PanelId,
        source: PanelSource,
        speed: f64,
        natural: ImageSize,
    ) -> Option<PanelId> {
        let Some(aspect_ratio) = natural.aspect_ratio() else {
            tracing::debug!(
                panel = id.0,
                width = natural.width,
                height = natural.height,
                "excluding panel with degenerate image dimensions"
            );
            return None;
        };

        self.panels.push(Panel::new(id, source, speed, aspect_ratio));
        self.freshness = Freshness::Stale;
        Some(id)
    }

    /// Drop every panel (wholesale reload).
    pub fn clear(&mut self) {
        self.panels.clear();
        self.freshness = Freshness::Empty;
    }

    /// Registered panels in registration order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Whether a panel with this id is registered.
    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.iter().any(|p| p.id == id)
    }

    /// Number of registered panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the registry holds no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Current cache validity.
    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Mark cached geometry stale (viewport resized or panel added).
    pub fn invalidate(&mut self) {
        if !self.panels.is_empty() {
            self.freshness = Freshness::Stale;
        }
    }

    /// Recompute cover-fit geometry for every panel and emit the base
    /// placement to the paint sink.
    ///
    /// Panels whose container cannot currently be measured lose their cached
    /// geometry and are skipped, without affecting the rest of the pass. The
    /// cache is fresh once the pass completes.
    #[tracing::instrument(skip(self, measure, sink))]
    pub fn refresh(&mut self, window_height: f64, measure: &dyn ViewMeasure, sink: &mut dyn PaintSink) {
        tracing::debug!(panels = self.panels.len(), "refreshing geometry");

        for panel in &mut self.panels {
            let Some(holder) = measure.holder_box(&panel.source) else {
                tracing::debug!(panel = panel.id.0, "holder not measurable, skipping");
                panel.geometry = None;
                continue;
            };

            let layout = cover_fit(window_height, holder, panel.speed, panel.aspect_ratio);
            panel.geometry = Some(PanelGeometry { holder, layout });

            sink.paint(
                panel.id,
                PaintFrame {
                    size: Size::new(layout.image_width, layout.image_height),
                    offset: Vec2::new(layout.offset_x, layout.offset_base_y),
                },
            );
        }

        self.freshness = if self.panels.is_empty() {
            Freshness::Empty
        } else {
            Freshness::Fresh
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/registry.rs"]
mod tests;
