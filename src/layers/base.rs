use serde::{Deserialize, Serialize};

use crate::layers::vector::FeatureSource;

/// Identifier assigned to every layer by the manager, unique for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

/// Which top-level collection a layer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    /// Background layers (tiles, imagery)
    Map,
    /// Vector layers holding drawn features
    Feature,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Map => write!(f, "map"),
            LayerKind::Feature => write!(f, "feature"),
        }
    }
}

/// The drawable half of a layer, handed to the rendering surface.
///
/// Implementations only carry what the manager needs to reason about:
/// visibility and, for vector layers, the feature collection.
pub trait Renderable: std::fmt::Debug {
    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Feature collection backing this renderable, if it has one
    fn source(&self) -> Option<&FeatureSource> {
        None
    }

    fn source_mut(&mut self) -> Option<&mut FeatureSource> {
        None
    }

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

/// A managed layer: a renderable paired with its id, name and stacking order.
///
/// `id`, `kind` and `z_index` are fixed when the manager creates the wrapper.
#[derive(Debug)]
pub struct LayerWrapper {
    id: LayerId,
    name: String,
    kind: LayerKind,
    z_index: i64,
    renderable: Box<dyn Renderable>,
}

impl LayerWrapper {
    /// `name` is expected to be validated already.
    pub(crate) fn new(
        id: LayerId,
        name: String,
        kind: LayerKind,
        z_index: i64,
        renderable: Box<dyn Renderable>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            z_index,
            renderable,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Takes a name already run through `LayerManagerConfig::validate_name`.
    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    pub fn is_visible(&self) -> bool {
        self.renderable.is_visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.renderable.set_visible(visible);
    }

    pub fn renderable(&self) -> &dyn Renderable {
        self.renderable.as_ref()
    }

    pub fn renderable_mut(&mut self) -> &mut dyn Renderable {
        self.renderable.as_mut()
    }

    pub fn source(&self) -> Option<&FeatureSource> {
        self.renderable.source()
    }

    pub fn source_mut(&mut self) -> Option<&mut FeatureSource> {
        self.renderable.source_mut()
    }

    /// Downcasts the renderable to a concrete layer type.
    pub fn downcast_ref<T: Renderable + 'static>(&self) -> Option<&T> {
        self.renderable.as_any().downcast_ref::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::LayerManagerConfig,
        layers::{tile::TileLayer, vector::VectorLayer},
    };

    fn wrapper(name: &str) -> LayerWrapper {
        LayerWrapper::new(
            LayerId(3),
            name.to_string(),
            LayerKind::Feature,
            10_003,
            Box::new(VectorLayer::new(true)),
        )
    }

    #[test]
    fn test_wrapper_accessors() {
        let mut layer = wrapper("Trails");

        assert_eq!(layer.id(), LayerId(3));
        assert_eq!(layer.name(), "Trails");
        assert_eq!(layer.kind(), LayerKind::Feature);
        assert_eq!(layer.z_index(), 10_003);
        assert!(layer.is_visible());
        assert!(layer.source().is_some());

        layer.set_visible(false);
        assert!(!layer.is_visible());
        assert!(!layer.renderable().is_visible());
    }

    #[test]
    fn test_set_name_keeps_validated_name() {
        let config = LayerManagerConfig::default();
        let mut layer = wrapper("Trails");

        layer.set_name(config.validate_name("  Rivers "));
        assert_eq!(layer.name(), "Rivers");

        layer.set_name(config.validate_name("\t"));
        assert_eq!(layer.name(), "New layer");
    }

    #[test]
    fn test_downcast() {
        let layer = LayerWrapper::new(
            LayerId(0),
            "OSM".to_string(),
            LayerKind::Map,
            1,
            Box::new(TileLayer::openstreetmap()),
        );

        assert!(layer.downcast_ref::<TileLayer>().is_some());
        assert!(layer.downcast_ref::<VectorLayer>().is_none());
        assert!(layer.source().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(LayerId(7).to_string(), "layer-7");
        assert_eq!(LayerKind::Map.to_string(), "map");
        assert_eq!(LayerKind::Feature.to_string(), "feature");
    }
}
