use crate::foundation::core::HolderBox;

/// Cover-fit layout computed for one panel at one viewport height.
///
/// All fields are whole pixel values stored as `f64`; rounding uses
/// [`f64::round`] (half away from zero) so identical inputs reproduce
/// bit-identical geometry across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelLayout {
    /// Fitted image width.
    pub image_width: f64,
    /// Fitted image height.
    pub image_height: f64,
    /// Horizontal centering translation of the image within its container.
    pub offset_x: f64,
    /// Base vertical translation; the render pass adds the scroll-dependent
    /// parallax displacement on top of this.
    pub offset_base_y: f64,
}

/// Minimum image height needed so that, at maximum parallax travel, the
/// image never under-covers the container vertically.
///
/// At `speed == 0` the image is locked to scroll and must span the full
/// window; at `speed == 1` it never moves and the container height suffices.
pub fn image_height_min(window_height: f64, holder_height: f64, speed: f64) -> f64 {
    (window_height - (window_height - holder_height) * speed).round()
}

/// Aspect-ratio-preserving cover fit of an image over its container.
///
/// The image must cover the container's width and the minimum height from
/// [`image_height_min`] in both dimensions, overflowing (never letterboxing)
/// the constrained axis, with the overflow centered.
///
/// The caller guarantees `aspect_ratio > 0` and finite; degenerate sources
/// are filtered out before a panel ever reaches the solver.
pub fn cover_fit(
    window_height: f64,
    holder: HolderBox,
    speed: f64,
    aspect_ratio: f64,
) -> PanelLayout {
    let min_height = image_height_min(window_height, holder.height, speed);

    if min_height * aspect_ratio >= holder.width {
        // Height-constrained: the minimum height already spans the width.
        let image_width = (min_height * aspect_ratio).round();
        PanelLayout {
            image_width,
            image_height: min_height,
            offset_x: ((holder.width - image_width) / 2.0).round(),
            offset_base_y: 0.0,
        }
    } else {
        // Width-constrained: grow to the container width, center vertically
        // inside the minimum-height band.
        let image_height = (holder.width / aspect_ratio).round();
        PanelLayout {
            image_width: holder.width,
            image_height,
            offset_x: 0.0,
            offset_base_y: ((min_height - image_height) / 2.0).round(),
        }
    }
}

/// Scroll-dependent vertical translation for one panel.
///
/// `base` is how far the viewport has scrolled past the container top; the
/// speed factor scales it down (`speed == 0` tracks scroll 1:1, `speed == 1`
/// pins the image to `offset_base_y`, negative speeds move against scroll).
pub fn parallax_offset_y(
    scroll_top: f64,
    holder_offset_top: f64,
    speed: f64,
    offset_base_y: f64,
) -> f64 {
    let base = scroll_top - holder_offset_top;
    (base - base * speed).round() + offset_base_y
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
