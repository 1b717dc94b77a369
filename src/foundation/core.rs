use crate::foundation::error::{ScrollaxError, ScrollaxResult};

pub use kurbo::{Size, Vec2};

/// Stable identifier of a tracked panel within one engine instance.
///
/// Ids are handed out during discovery (`reload`) and stay valid until the
/// next wholesale reload rebuilds the registry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PanelId(pub u32);

/// Scroll state of the tracked scrolling element.
///
/// Owned exclusively by the render loop; mutated on every scroll/resize
/// event. Values are `f64` pixels since host measurements may be fractional.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Current scroll offset of the tracked element, in pixels.
    pub scroll_top: f64,
    /// Visible height of the tracked element, in pixels.
    pub window_height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite values and a non-positive
    /// window height.
    pub fn new(scroll_top: f64, window_height: f64) -> ScrollaxResult<Self> {
        if !scroll_top.is_finite() || scroll_top < 0.0 {
            return Err(ScrollaxError::validation(
                "Viewport scroll_top must be finite and >= 0",
            ));
        }
        if !window_height.is_finite() || window_height <= 0.0 {
            return Err(ScrollaxError::validation(
                "Viewport window_height must be finite and > 0",
            ));
        }
        Ok(Self {
            scroll_top,
            window_height,
        })
    }

    /// Document offset of the top edge of the visible area.
    pub fn screen_top(self) -> f64 {
        self.scroll_top
    }

    /// Document offset of the bottom edge of the visible area.
    pub fn screen_bottom(self) -> f64 {
        self.scroll_top + self.window_height
    }
}

/// Measured box of a panel's container within the scrollable document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HolderBox {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
    /// Container top edge offset within the scrollable document.
    pub offset_top: f64,
}

impl HolderBox {
    /// Container bottom edge offset within the scrollable document.
    pub fn bottom(self) -> f64 {
        self.offset_top + self.height
    }

    /// Whether any part of the container lies inside the visible area.
    pub fn intersects(self, view: Viewport) -> bool {
        self.bottom() > view.screen_top() && self.offset_top < view.screen_bottom()
    }
}

/// Natural pixel dimensions of a source image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Natural width in pixels.
    pub width: f64,
    /// Natural height in pixels.
    pub height: f64,
}

impl ImageSize {
    /// `width / height`, or `None` when either dimension is zero, negative,
    /// or non-finite. A `None` here excludes the panel from all layout
    /// passes so NaN/Infinity never reach the solver.
    pub fn aspect_ratio(self) -> Option<f64> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(self.width / self.height)
    }
}

/// Geometry handed to the paint sink for one panel.
///
/// The sink applies it visually (transform/position writes); the engine only
/// computes the numbers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaintFrame {
    /// Fitted image dimensions.
    pub size: Size,
    /// Image translation relative to the container origin.
    pub offset: Vec2,
}
