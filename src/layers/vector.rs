use geo_types::Geometry;
use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{FEATURE_PROPERTY_NAMESPACE, FEATURE_PROPERTY_TOOLTIP},
    impl_renderable_boilerplate,
    layers::{base::Renderable, overlay::OverlayHandle},
};

/// Identifier of a drawn feature, chosen by whoever draws it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub String);

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A drawn item: optional geometry plus free-form JSON properties.
///
/// Toolbar metadata (such as an attached tooltip overlay) is stored under the
/// `toolbar` property.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub geometry: Option<Geometry<f64>>,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    pub fn new(id: impl Into<FeatureId>) -> Self {
        Self {
            id: id.into(),
            geometry: None,
            properties: serde_json::Map::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: impl Into<Geometry<f64>>) -> Self {
        self.geometry = Some(geometry.into());
        self
    }

    pub fn with_property(mut self, key: &str, value: serde_json::Value) -> Self {
        self.set_property(key, value);
        self
    }

    /// Records `overlay` as this feature's tooltip.
    pub fn with_tooltip(mut self, overlay: OverlayHandle) -> Self {
        let namespace = self
            .properties
            .entry(FEATURE_PROPERTY_NAMESPACE.to_string())
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if !namespace.is_object() {
            *namespace = serde_json::Value::Object(serde_json::Map::new());
        }
        if let serde_json::Value::Object(namespace) = namespace {
            namespace.insert(
                FEATURE_PROPERTY_TOOLTIP.to_string(),
                serde_json::Value::String(overlay.0),
            );
        }
        self
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: &str, value: serde_json::Value) {
        self.properties.insert(key.to_string(), value);
    }
}

/// Ordered, mutable collection of features backing a vector layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSource {
    features: Vec<Feature>,
}

impl FeatureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a feature, replacing (in place) any feature with the same id.
    pub fn add_feature(&mut self, feature: Feature) -> Option<Feature> {
        match self.features.iter_mut().find(|f| f.id == feature.id) {
            Some(existing) => Some(std::mem::replace(existing, feature)),
            None => {
                self.features.push(feature);
                None
            }
        }
    }

    pub fn remove_feature(&mut self, id: &FeatureId) -> Option<Feature> {
        let index = self.features.iter().position(|f| &f.id == id)?;
        Some(self.features.remove(index))
    }

    pub fn get(&self, id: &FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FeatureId) -> bool {
        self.get(id).is_some()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn clear(&mut self) {
        self.features.clear();
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Vector layer that owns the features drawn into it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorLayer {
    source: FeatureSource,
    visible: bool,
}

impl VectorLayer {
    pub fn new(visible: bool) -> Self {
        Self {
            source: FeatureSource::new(),
            visible,
        }
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        for feature in features {
            self.source.add_feature(feature);
        }
        self
    }
}

impl Renderable for VectorLayer {
    impl_renderable_boilerplate!(visible);

    fn source(&self) -> Option<&FeatureSource> {
        Some(&self.source)
    }

    fn source_mut(&mut self) -> Option<&mut FeatureSource> {
        Some(&mut self.source)
    }
}
