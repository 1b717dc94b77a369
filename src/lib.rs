//! Scrollax is a scroll-synchronized parallax layout engine.
//!
//! It computes, for a set of scrollable "parallax" image panels, how each
//! background image should be sized and vertically offset as the viewport
//! scrolls, moving backgrounds more slowly than the foreground scroll
//! position to produce an illusion of depth.
//!
//! # Pipeline overview
//!
//! 1. **Discover** (host-side): matched container/image pairs arrive as
//!    [`PanelSource`]s via [`ParallaxEngine::reload`]
//! 2. **Refresh**: stale geometry is recomputed per panel — cover-fit image
//!    size plus centering offsets ([`cover_fit`])
//! 3. **Render**: the current scroll position becomes a per-panel vertical
//!    offset ([`parallax_offset_y`]), emitted to the injected [`PaintSink`]
//! 4. **Schedule**: bursts of scroll/resize events coalesce into at most one
//!    render per frame tick via the injected [`FrameScheduler`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: layout math is pure and bit-reproducible
//!   for a given input (pixel rounding is half-away-from-zero everywhere).
//! - **No environment access in the core**: document measurement, frame
//!   scheduling and visual application are injected capabilities
//!   ([`ViewMeasure`], [`FrameScheduler`], [`PaintSink`]).
//! - **Silent degradation**: a panel whose image never yields usable natural
//!   dimensions is excluded on its own; it never halts the engine.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod engine;
mod foundation;
mod layout;
mod measure;
mod paint;
mod panel;

pub use engine::scheduler::FrameScheduler;
pub use engine::scroll::{ParallaxEngine, ScheduleState};
pub use foundation::core::{HolderBox, ImageSize, PaintFrame, PanelId, Size, Vec2, Viewport};
pub use foundation::error::{ScrollaxError, ScrollaxResult};
pub use layout::solver::{PanelLayout, cover_fit, image_height_min, parallax_offset_y};
pub use measure::ViewMeasure;
pub use paint::PaintSink;
pub use panel::model::{Panel, PanelConfig, PanelGeometry, PanelSource};
pub use panel::registry::{Freshness, PanelRegistry};
