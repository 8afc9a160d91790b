//! The seam between the layer manager and the mapping engine that draws.

use crate::layers::{base::LayerWrapper, overlay::OverlayHandle};

/// A rendering surface that layers and overlays are attached to.
///
/// The manager calls these synchronously; what "attach" means (GPU upload,
/// DOM insertion, nothing at all) is up to the implementation.
pub trait Surface {
    /// Attaches the layer's renderable, stacked by [`LayerWrapper::z_index`].
    fn add_renderable(&mut self, layer: &LayerWrapper);

    fn remove_renderable(&mut self, layer: &LayerWrapper);

    fn add_overlay(&mut self, overlay: &OverlayHandle);

    fn remove_overlay(&mut self, overlay: &OverlayHandle);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn add_renderable(&mut self, layer: &LayerWrapper) {
        (**self).add_renderable(layer);
    }

    fn remove_renderable(&mut self, layer: &LayerWrapper) {
        (**self).remove_renderable(layer);
    }

    fn add_overlay(&mut self, overlay: &OverlayHandle) {
        (**self).add_overlay(overlay);
    }

    fn remove_overlay(&mut self, overlay: &OverlayHandle) {
        (**self).remove_overlay(overlay);
    }
}
