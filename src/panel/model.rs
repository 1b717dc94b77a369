use crate::{
    foundation::core::{HolderBox, PanelId},
    foundation::error::{ScrollaxError, ScrollaxResult},
    layout::solver::PanelLayout,
};

/// Engine configuration, mergeable from declarative host options.
///
/// Deserializes with per-field defaults so hosts can forward sparse
/// attribute-style option maps (e.g. `{"speed": 0.5}`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelConfig {
    /// Parallax strength/direction factor in `(-inf, 1]`.
    ///
    /// `0` locks the image to scroll (no parallax), values near `1` barely
    /// move it, negative values move it against the scroll direction.
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Selector-equivalent identifying which containers to track. Resolved
    /// by the external discovery collaborator, opaque to the engine.
    #[serde(default)]
    pub target: String,
}

fn default_speed() -> f64 {
    0.2
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            target: String::new(),
        }
    }
}

impl PanelConfig {
    /// Parse a JSON option map, applying defaults for absent fields.
    pub fn from_json(json: &str) -> ScrollaxResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ScrollaxError::serde(format!("invalid panel config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject speeds the parallax math cannot honor.
    pub fn validate(&self) -> ScrollaxResult<()> {
        if !self.speed.is_finite() {
            return Err(ScrollaxError::validation("speed must be finite"));
        }
        if self.speed > 1.0 {
            return Err(ScrollaxError::validation("speed must be <= 1"));
        }
        Ok(())
    }
}

/// One discovered container/image pair, produced by the external discovery
/// collaborator during a reload pass.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PanelSource {
    /// Opaque key the measurement collaborator resolves to the live
    /// container element.
    pub holder: String,
    /// Source location of the background image.
    pub image_src: String,
}

/// Holder measurement and derived cover-fit layout from the last refresh.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelGeometry {
    /// Container box measured during the refresh.
    pub holder: HolderBox,
    /// Cover-fit layout derived from that measurement.
    pub layout: PanelLayout,
}

/// One registered panel.
///
/// A panel only enters the registry once its image's natural dimensions are
/// known, so `aspect_ratio` is always positive and finite. `speed` and
/// `aspect_ratio` are immutable after registration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    /// Identifier assigned at discovery.
    pub id: PanelId,
    /// Discovered container/image pair backing this panel.
    pub source: PanelSource,
    /// Parallax speed factor, fixed at registration.
    pub speed: f64,
    /// Natural `width / height` of the source image, fixed at registration.
    pub aspect_ratio: f64,
    /// `None` until the first successful refresh measurement, and again
    /// whenever the container cannot currently be measured; such panels are
    /// skipped by the render pass.
    pub geometry: Option<PanelGeometry>,
}

impl Panel {
    pub(crate) fn new(id: PanelId, source: PanelSource, speed: f64, aspect_ratio: f64) -> Self {
        Self {
            id,
            source,
            speed,
            aspect_ratio,
            geometry: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/model.rs"]
mod tests;
