//! Detaching UI overlays (tooltips and the like) that belong to features.
//!
//! Overlays are attached to the surface on their own, independent of the
//! feature's layer, so removing a layer does not take them along. The manager
//! runs [`detach_feature_overlays`] before a feature layer leaves the surface,
//! and [`attach_feature_overlays`] when a layer moves to a new surface.

use serde::{Deserialize, Serialize};

use crate::{
    core::constants::{FEATURE_PROPERTY_NAMESPACE, FEATURE_PROPERTY_TOOLTIP},
    layers::vector::{Feature, FeatureSource},
    rendering::surface::Surface,
};

/// Handle of an overlay attached to the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayHandle(pub String);

impl From<&str> for OverlayHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OverlayHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Reads overlay metadata off a feature.
pub trait OverlayReader {
    fn has_overlay(&self, feature: &Feature) -> bool {
        self.overlay_handle(feature).is_some()
    }

    fn overlay_handle(&self, feature: &Feature) -> Option<OverlayHandle>;
}

/// Reads the tooltip recorded under `toolbar.tooltip`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TooltipReader;

impl OverlayReader for TooltipReader {
    fn overlay_handle(&self, feature: &Feature) -> Option<OverlayHandle> {
        feature
            .property(FEATURE_PROPERTY_NAMESPACE)?
            .get(FEATURE_PROPERTY_TOOLTIP)?
            .as_str()
            .map(OverlayHandle::from)
    }
}

impl<F> OverlayReader for F
where
    F: Fn(&Feature) -> Option<OverlayHandle>,
{
    fn overlay_handle(&self, feature: &Feature) -> Option<OverlayHandle> {
        self(feature)
    }
}

/// Detaches the overlay of a single feature, if it carries one.
pub fn detach_overlay<S>(feature: &Feature, reader: &dyn OverlayReader, surface: &mut S) -> bool
where
    S: Surface + ?Sized,
{
    match reader.overlay_handle(feature) {
        Some(handle) => {
            log::debug!("detaching overlay {:?} of feature {}", handle.0, feature.id);
            surface.remove_overlay(&handle);
            true
        }
        None => false,
    }
}

/// Detaches every feature overlay in `source`. Returns the number detached.
pub fn detach_feature_overlays<S>(
    source: &FeatureSource,
    reader: &dyn OverlayReader,
    surface: &mut S,
) -> usize
where
    S: Surface + ?Sized,
{
    source
        .features()
        .iter()
        .filter(|feature| detach_overlay(feature, reader, surface))
        .count()
}

/// Attaches every feature overlay in `source`. Returns the number attached.
pub fn attach_feature_overlays<S>(
    source: &FeatureSource,
    reader: &dyn OverlayReader,
    surface: &mut S,
) -> usize
where
    S: Surface + ?Sized,
{
    let mut attached = 0;
    for handle in source
        .features()
        .iter()
        .filter_map(|feature| reader.overlay_handle(feature))
    {
        surface.add_overlay(&handle);
        attached += 1;
    }
    attached
}
