use crate::{
    core::config::LayerButtons,
    layers::{base::LayerWrapper, vector::Feature},
};

/// Discriminant of a [`LayerEvent`], used to subscribe to one kind only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MapLayerAdded,
    MapLayerRemoved,
    FeatureLayerAdded,
    FeatureLayerRemoved,
    FeatureEdited,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::MapLayerAdded => "map-layer-added",
            EventKind::MapLayerRemoved => "map-layer-removed",
            EventKind::FeatureLayerAdded => "feature-layer-added",
            EventKind::FeatureLayerRemoved => "feature-layer-removed",
            EventKind::FeatureEdited => "feature-edited",
        };
        f.write_str(name)
    }
}

/// Payload of the `*LayerAdded` events
#[derive(Debug, Clone, Copy)]
pub struct LayerAdded<'a> {
    pub layer: &'a LayerWrapper,
    pub silent: bool,
    /// Controls the UI should not offer for this layer
    pub buttons: LayerButtons,
}

/// Payload of the `*LayerRemoved` events
#[derive(Debug, Clone, Copy)]
pub struct LayerRemoved<'a> {
    pub layer: &'a LayerWrapper,
    pub silent: bool,
}

/// Payload of [`LayerEvent::FeatureEdited`]
#[derive(Debug, Clone, Copy)]
pub struct FeatureEdited<'a> {
    /// Layer now holding the edited feature
    pub layer: &'a LayerWrapper,
    /// `None` when no layer held the replaced feature
    pub before: Option<&'a Feature>,
    pub after: &'a Feature,
    pub silent: bool,
}

/// Lifecycle notifications published by the layer manager.
///
/// Payloads borrow from the manager and are only valid during delivery.
#[derive(Debug, Clone, Copy)]
pub enum LayerEvent<'a> {
    MapLayerAdded(LayerAdded<'a>),
    MapLayerRemoved(LayerRemoved<'a>),
    FeatureLayerAdded(LayerAdded<'a>),
    FeatureLayerRemoved(LayerRemoved<'a>),
    FeatureEdited(FeatureEdited<'a>),
}

impl<'a> LayerEvent<'a> {
    pub fn kind(&self) -> EventKind {
        match self {
            LayerEvent::MapLayerAdded(_) => EventKind::MapLayerAdded,
            LayerEvent::MapLayerRemoved(_) => EventKind::MapLayerRemoved,
            LayerEvent::FeatureLayerAdded(_) => EventKind::FeatureLayerAdded,
            LayerEvent::FeatureLayerRemoved(_) => EventKind::FeatureLayerRemoved,
            LayerEvent::FeatureEdited(_) => EventKind::FeatureEdited,
        }
    }

    pub fn layer(&self) -> &'a LayerWrapper {
        match self {
            LayerEvent::MapLayerAdded(e) | LayerEvent::FeatureLayerAdded(e) => e.layer,
            LayerEvent::MapLayerRemoved(e) | LayerEvent::FeatureLayerRemoved(e) => e.layer,
            LayerEvent::FeatureEdited(e) => e.layer,
        }
    }

    pub fn is_silent(&self) -> bool {
        match self {
            LayerEvent::MapLayerAdded(e) | LayerEvent::FeatureLayerAdded(e) => e.silent,
            LayerEvent::MapLayerRemoved(e) | LayerEvent::FeatureLayerRemoved(e) => e.silent,
            LayerEvent::FeatureEdited(e) => e.silent,
        }
    }

    /// Button flags, only carried by add events
    pub fn buttons(&self) -> Option<LayerButtons> {
        match self {
            LayerEvent::MapLayerAdded(e) | LayerEvent::FeatureLayerAdded(e) => Some(e.buttons),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{
        base::{LayerId, LayerKind},
        vector::VectorLayer,
    };

    #[test]
    fn test_event_accessors() {
        let layer = LayerWrapper::new(
            LayerId(0),
            "Markers".to_string(),
            LayerKind::Feature,
            10_000,
            Box::new(VectorLayer::new(true)),
        );

        let added = LayerEvent::FeatureLayerAdded(LayerAdded {
            layer: &layer,
            silent: true,
            buttons: LayerButtons {
                disable_delete: true,
                ..Default::default()
            },
        });
        assert_eq!(added.kind(), EventKind::FeatureLayerAdded);
        assert_eq!(added.layer().name(), "Markers");
        assert!(added.is_silent());
        assert_eq!(added.buttons().map(|b| b.disable_delete), Some(true));

        let removed = LayerEvent::FeatureLayerRemoved(LayerRemoved {
            layer: &layer,
            silent: false,
        });
        assert_eq!(removed.kind(), EventKind::FeatureLayerRemoved);
        assert!(!removed.is_silent());
        assert!(removed.buttons().is_none());
    }

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::MapLayerAdded.to_string(), "map-layer-added");
        assert_eq!(EventKind::FeatureEdited.to_string(), "feature-edited");
    }
}
