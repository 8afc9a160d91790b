use crate::{
    layers::{
        base::{LayerId, LayerWrapper},
        overlay::OverlayHandle,
    },
    rendering::surface::Surface,
};

/// One call received by a [`HeadlessSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    AddRenderable(LayerId),
    RemoveRenderable(LayerId),
    AddOverlay(OverlayHandle),
    RemoveOverlay(OverlayHandle),
}

/// Surface that draws nothing and records what is attached to it.
///
/// Useful for servers, tests and tooling that manage layers without a window.
#[derive(Debug, Default, Clone)]
pub struct HeadlessSurface {
    layers: Vec<(LayerId, i64)>,
    overlays: Vec<OverlayHandle>,
    calls: Vec<SurfaceCall>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached layer ids sorted bottom to top by z-index.
    pub fn stacking_order(&self) -> Vec<LayerId> {
        let mut layers = self.layers.clone();
        layers.sort_by_key(|(_, z_index)| *z_index);
        layers.into_iter().map(|(id, _)| id).collect()
    }

    pub fn z_index_of(&self, id: LayerId) -> Option<i64> {
        self.layers
            .iter()
            .find(|(layer_id, _)| *layer_id == id)
            .map(|(_, z_index)| *z_index)
    }

    pub fn has_layer(&self, id: LayerId) -> bool {
        self.z_index_of(id).is_some()
    }

    pub fn overlays(&self) -> &[OverlayHandle] {
        &self.overlays
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Surface for HeadlessSurface {
    fn add_renderable(&mut self, layer: &LayerWrapper) {
        self.calls.push(SurfaceCall::AddRenderable(layer.id()));
        self.layers.push((layer.id(), layer.z_index()));
    }

    fn remove_renderable(&mut self, layer: &LayerWrapper) {
        self.calls.push(SurfaceCall::RemoveRenderable(layer.id()));
        self.layers.retain(|(id, _)| *id != layer.id());
    }

    fn add_overlay(&mut self, overlay: &OverlayHandle) {
        self.calls.push(SurfaceCall::AddOverlay(overlay.clone()));
        self.overlays.push(overlay.clone());
    }

    fn remove_overlay(&mut self, overlay: &OverlayHandle) {
        self.calls.push(SurfaceCall::RemoveOverlay(overlay.clone()));
        if let Some(index) = self.overlays.iter().position(|o| o == overlay) {
            self.overlays.remove(index);
        }
    }
}
