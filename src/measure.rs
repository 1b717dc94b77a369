use crate::{
    foundation::core::{HolderBox, ImageSize},
    panel::model::PanelSource,
};

/// Environment-measurement capability injected by the host.
///
/// The engine never touches a document tree directly; everything it needs
/// from the live page comes through this trait, which keeps unit tests fully
/// deterministic (feed synthetic boxes and sizes).
pub trait ViewMeasure {
    /// Live box of a panel's container, or `None` while it cannot be
    /// measured (detached, hidden, not yet laid out).
    fn holder_box(&self, source: &PanelSource) -> Option<HolderBox>;

    /// Natural dimensions of an image, or `None` while they are unknown.
    ///
    /// This is the single "image already loaded" probe used during reload;
    /// hosts that must construct a fresh image object to read cached
    /// dimensions do so behind this call. Sources that stay `None` are
    /// parked until [`crate::ParallaxEngine::image_ready`] delivers their
    /// dimensions.
    fn image_size(&self, src: &str) -> Option<ImageSize>;
}
