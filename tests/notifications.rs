mod common;

use common::{attached_manager, init_logging, record_events, Seen};
use mapdeck::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_add_and_remove_publish_events() {
    let mut manager = attached_manager();
    let seen = record_events(&mut manager);

    let buttons = LayerButtons {
        disable_delete: true,
        ..Default::default()
    };
    let map = manager.add_map_layer(
        "OSM",
        TileLayer::openstreetmap(),
        LayerOptions::default().with_buttons(buttons),
    );
    let feature = manager
        .add_feature_layer("Notes", LayerOptions::default().silent())
        .id();
    manager.remove_layer(map, true);
    manager.remove_layer(feature, false);

    assert_eq!(
        *seen.borrow(),
        vec![
            Seen {
                kind: EventKind::MapLayerAdded,
                layer: map,
                name: "OSM".to_string(),
                silent: false,
                buttons: Some(buttons),
            },
            Seen {
                kind: EventKind::FeatureLayerAdded,
                layer: feature,
                name: "Notes".to_string(),
                silent: true,
                buttons: Some(LayerButtons::default()),
            },
            Seen {
                kind: EventKind::MapLayerRemoved,
                layer: map,
                name: "OSM".to_string(),
                silent: true,
                buttons: None,
            },
            Seen {
                kind: EventKind::FeatureLayerRemoved,
                layer: feature,
                name: "Notes".to_string(),
                silent: false,
                buttons: None,
            },
        ]
    );
}

#[test]
fn test_queued_layers_notify_on_replay() {
    init_logging();
    let mut manager: LayerManager<HeadlessSurface> = LayerManager::default();
    let seen = common::record_events(&mut manager);

    manager.add_map_layer("Base", TileLayer::openstreetmap(), LayerOptions::default().silent());
    manager.add_feature_layer("Markers", LayerOptions::default());
    assert!(seen.borrow().is_empty());

    manager.set_surface(HeadlessSurface::new());

    let kinds: Vec<_> = seen.borrow().iter().map(|s| (s.kind, s.silent)).collect();
    assert_eq!(
        kinds,
        vec![
            (EventKind::MapLayerAdded, true),
            (EventKind::FeatureLayerAdded, false),
        ]
    );
}

#[test]
fn test_unknown_removal_publishes_nothing() {
    let mut manager = attached_manager();
    let seen = record_events(&mut manager);

    assert!(manager.remove_layer(LayerId(12), false).is_none());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_failing_listener_does_not_corrupt_registry() {
    let mut manager = attached_manager();
    manager
        .events_mut()
        .on(EventKind::MapLayerAdded, |_| Err(MapError::Listener("boom".to_string())));
    manager
        .events_mut()
        .on(EventKind::MapLayerRemoved, |_| panic!("listener panicked"));
    let seen = record_events(&mut manager);

    let id = manager.add_map_layer("OSM", TileLayer::openstreetmap(), LayerOptions::default());
    assert_eq!(manager.map_layer_count(), 1);

    assert!(manager.remove_map_layer(id, false).is_some());
    assert!(manager.is_map_layers_empty());
    assert!(manager.surface().is_some_and(|s| !s.has_layer(id)));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_feature_edited_event() {
    let mut manager = attached_manager();
    let layer = manager.add_feature_layer("Markers", LayerOptions::default());
    if let Some(source) = layer.source_mut() {
        source.add_feature(Feature::new("before").with_tooltip(OverlayHandle::from("tip")));
    }

    let edits = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = edits.clone();
    manager.events_mut().on(EventKind::FeatureEdited, move |event| {
        if let LayerEvent::FeatureEdited(edit) = event {
            sink.borrow_mut().push((
                edit.before.map(|feature| feature.id.to_string()),
                edit.after.id.to_string(),
                edit.layer.name().to_string(),
            ));
        }
        Ok(())
    });

    let target = manager.replace_feature(
        &FeatureId::from("before"),
        Feature::new("after"),
        DEFAULT_MARKER_LAYER_NAME,
    );

    assert!(target.is_ok());
    assert_eq!(
        *edits.borrow(),
        vec![(Some("before".to_string()), "after".to_string(), "Markers".to_string())]
    );
}

#[test]
fn test_feature_edited_without_previous_feature() {
    let mut manager = attached_manager();
    let seen = record_events(&mut manager);
    let befores = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = befores.clone();
    manager.events_mut().on(EventKind::FeatureEdited, move |event| {
        if let LayerEvent::FeatureEdited(edit) = event {
            sink.borrow_mut().push(edit.before.is_some());
        }
        Ok(())
    });

    let target = manager.replace_feature(
        &FeatureId::from("missing"),
        Feature::new("fresh"),
        DEFAULT_MARKER_LAYER_NAME,
    );

    assert_eq!(target.ok(), manager.active_feature_layer_id());
    assert_eq!(*befores.borrow(), vec![false]);
    let kinds: Vec<_> = seen.borrow().iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![EventKind::FeatureLayerAdded, EventKind::FeatureEdited]);
}

#[test]
fn test_unsubscribed_listener_stops_receiving() {
    let mut manager = attached_manager();
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = count.clone();
    let id = manager.events_mut().on_any(move |_| {
        counter.set(counter.get() + 1);
        Ok(())
    });

    manager.add_feature_layer("A", LayerOptions::default());
    assert!(manager.events_mut().off(id));
    manager.add_feature_layer("B", LayerOptions::default());

    assert_eq!(count.get(), 1);
}
