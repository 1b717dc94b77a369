use crate::{
    engine::scheduler::FrameScheduler,
    foundation::core::{ImageSize, PaintFrame, PanelId, Size, Vec2, Viewport},
    foundation::error::ScrollaxResult,
    layout::solver::parallax_offset_y,
    measure::ViewMeasure,
    paint::PaintSink,
    panel::model::{PanelConfig, PanelSource},
    panel::registry::{Freshness, PanelRegistry},
};

/// Render-scheduling state of one engine instance.
///
/// `Idle -> PendingFrame` on a render request, back to `Idle` only after the
/// scheduled render finishes executing. There is no terminal state; the
/// engine lives for the duration of the page/view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ScheduleState {
    /// No render pending; the next request schedules a frame tick.
    #[default]
    Idle,
    /// A render is already scheduled for the next frame tick; further
    /// requests are no-ops until it runs.
    PendingFrame,
}

/// A discovered source whose image has not yet reported natural dimensions.
#[derive(Clone, Debug)]
struct PendingPanel {
    id: PanelId,
    source: PanelSource,
    speed: f64,
}

/// Scroll-synchronized parallax render loop.
///
/// Consumes scroll/resize/image-load events from the host, owns the viewport
/// state and the panel registry, and emits per-panel geometry to the
/// injected [`PaintSink`] at most once per frame tick. Single-threaded and
/// cooperative: all mutation happens synchronously inside these entry points
/// or the host-delivered frame callback.
#[derive(Debug)]
pub struct ParallaxEngine {
    config: PanelConfig,
    viewport: Viewport,
    registry: PanelRegistry,
    pending: Vec<PendingPanel>,
    schedule: ScheduleState,
    next_panel: u32,
}

impl ParallaxEngine {
    /// Build an engine with validated configuration and the initial scroll
    /// position / window height of the tracked element.
    pub fn new(config: PanelConfig, viewport: Viewport) -> ScrollaxResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            viewport,
            registry: PanelRegistry::new(),
            pending: Vec::new(),
            schedule: ScheduleState::Idle,
            next_panel: 0,
        })
    }

    /// Engine configuration (the `target` selector is resolved by the
    /// external discovery collaborator).
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Current viewport state.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current render-scheduling state.
    pub fn schedule_state(&self) -> ScheduleState {
        self.schedule
    }

    /// Registered panels and their cached geometry.
    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Rebuild the panel registry wholesale from a fresh discovery pass.
    ///
    /// Each source's image is probed once through
    /// [`ViewMeasure::image_size`]; sources with known dimensions register
    /// immediately (degenerate ones are silently excluded), the rest are
    /// parked until [`Self::image_ready`] delivers their dimensions. Panels
    /// from the previous pass are dropped, registered and pending alike.
    #[tracing::instrument(skip_all, fields(sources = sources.len()))]
    pub fn reload(
        &mut self,
        sources: Vec<PanelSource>,
        measure: &dyn ViewMeasure,
        scheduler: &mut dyn FrameScheduler,
    ) {
        self.registry.clear();
        self.pending.clear();

        let mut added = false;
        for source in sources {
            let id = self.alloc_panel_id();
            match measure.image_size(&source.image_src) {
                Some(natural) => {
                    added |= self
                        .registry
                        .add_panel(id, source, self.config.speed, natural)
                        .is_some();
                }
                None => {
                    tracing::debug!(panel = id.0, src = %source.image_src, "image pending load");
                    self.pending.push(PendingPanel {
                        id,
                        source,
                        speed: self.config.speed,
                    });
                }
            }
        }

        if added {
            self.request_render(scheduler);
        }
    }

    /// Deliver natural image dimensions for a panel parked during reload.
    ///
    /// Moves the panel into the registry and requests a render. A second
    /// delivery for an already-registered panel is ignored (aspect ratio is
    /// immutable), as is an id from a discarded discovery pass.
    pub fn image_ready(
        &mut self,
        panel: PanelId,
        natural_width: f64,
        natural_height: f64,
        scheduler: &mut dyn FrameScheduler,
    ) {
        if self.registry.contains(panel) {
            tracing::debug!(panel = panel.0, "duplicate image_ready ignored");
            return;
        }
        let Some(idx) = self.pending.iter().position(|p| p.id == panel) else {
            tracing::debug!(panel = panel.0, "image_ready for unknown panel ignored");
            return;
        };

        let pending = self.pending.swap_remove(idx);
        let natural = ImageSize {
            width: natural_width,
            height: natural_height,
        };
        if self
            .registry
            .add_panel(pending.id, pending.source, pending.speed, natural)
            .is_some()
        {
            self.request_render(scheduler);
        }
    }

    /// Record a new scroll position and request a render.
    pub fn on_scroll(&mut self, scroll_top: f64, scheduler: &mut dyn FrameScheduler) {
        if !scroll_top.is_finite() {
            tracing::debug!(scroll_top, "ignoring non-finite scroll position");
            return;
        }
        self.viewport.scroll_top = scroll_top;
        self.request_render(scheduler);
    }

    /// Record a new window height, invalidate cached geometry (a resized
    /// viewport changes every panel's cover fit) and request a render.
    pub fn on_resize(&mut self, window_height: f64, scheduler: &mut dyn FrameScheduler) {
        if !window_height.is_finite() || window_height <= 0.0 {
            tracing::debug!(window_height, "ignoring degenerate window height");
            return;
        }
        self.viewport.window_height = window_height;
        self.registry.invalidate();
        self.request_render(scheduler);
    }

    /// Ask for one render on the next frame tick.
    ///
    /// Idempotent while a render is pending: bursts of scroll/resize events
    /// collapse into a single recomputation per frame, so CPU cost is
    /// bounded independent of event frequency.
    pub fn request_render(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.schedule == ScheduleState::Idle {
            self.schedule = ScheduleState::PendingFrame;
            scheduler.schedule();
        }
    }

    /// Host-delivered frame tick: runs the pending render and returns the
    /// engine to idle. A tick with no render pending is a no-op.
    pub fn on_frame(&mut self, measure: &dyn ViewMeasure, sink: &mut dyn PaintSink) {
        if self.schedule != ScheduleState::PendingFrame {
            tracing::trace!("spurious frame tick");
            return;
        }
        self.render(measure, sink);
        self.schedule = ScheduleState::Idle;
    }

    /// Recompute and emit geometry for every panel intersecting the viewport.
    ///
    /// Refreshes the geometry cache first when it is stale. Panels outside
    /// the visible intersection get no paint call; their last painted
    /// position is stale but offscreen.
    #[tracing::instrument(skip_all)]
    pub fn render(&mut self, measure: &dyn ViewMeasure, sink: &mut dyn PaintSink) {
        if self.registry.freshness() == Freshness::Stale {
            self.registry
                .refresh(self.viewport.window_height, measure, sink);
        }

        for panel in self.registry.panels() {
            let Some(geometry) = panel.geometry else {
                continue;
            };
            if !geometry.holder.intersects(self.viewport) {
                continue;
            }

            let offset_y = parallax_offset_y(
                self.viewport.scroll_top,
                geometry.holder.offset_top,
                panel.speed,
                geometry.layout.offset_base_y,
            );
            sink.paint(
                panel.id,
                PaintFrame {
                    size: Size::new(geometry.layout.image_width, geometry.layout.image_height),
                    offset: Vec2::new(geometry.layout.offset_x, offset_y),
                },
            );
        }
    }

    fn alloc_panel_id(&mut self) -> PanelId {
        let id = PanelId(self.next_panel);
        self.next_panel += 1;
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scroll.rs"]
mod tests;
