//! Headless walkthrough of the layer lifecycle
//!
//! Run with `RUST_LOG=debug cargo run --example headless` to see the manager's logging.

use mapdeck::prelude::*;

/// Surface that prints every call it receives
#[derive(Default)]
struct PrintingSurface;

impl Surface for PrintingSurface {
    fn add_renderable(&mut self, layer: &LayerWrapper) {
        println!("  + {} '{}' at z {}", layer.kind(), layer.name(), layer.z_index());
    }

    fn remove_renderable(&mut self, layer: &LayerWrapper) {
        println!("  - {} '{}'", layer.kind(), layer.name());
    }

    fn add_overlay(&mut self, overlay: &OverlayHandle) {
        println!("  + overlay {}", overlay.0);
    }

    fn remove_overlay(&mut self, overlay: &OverlayHandle) {
        println!("  - overlay {}", overlay.0);
    }
}

fn main() -> Result<()> {
    mapdeck::init_logger();

    let config = LayerManagerConfig::from_json_str(r#"{ "default_layer_name": "Untitled" }"#)?;
    let mut manager: LayerManager<PrintingSurface> = LayerManager::new(config);

    manager.events_mut().on_any(|event| {
        if !event.is_silent() {
            println!("  event {}: '{}'", event.kind(), event.layer().name());
        }
        Ok(())
    });

    println!("Adding layers before the map is ready");
    manager.add_map_layer("OpenStreetMap", TileLayer::openstreetmap(), LayerOptions::default());
    manager.add_map_layer(
        "Topo",
        TileLayer::new("https://tile.opentopomap.org/{z}/{x}/{y}.png"),
        LayerOptions::default().silent(),
    );
    println!("  {} map layers pending", manager.pending_count(LayerKind::Map));

    println!("Attaching surface");
    manager.set_surface(PrintingSurface);
    manager.set_only_top_map_layer_visible();

    println!("Drawing a marker");
    let markers = manager.active_feature_layer(DEFAULT_MARKER_LAYER_NAME);
    let markers_id = markers.id();
    if let Some(source) = markers.source_mut() {
        source.add_feature(
            Feature::new("marker-1")
                .with_geometry(geo_types::Point::new(18.0686, 59.3293))
                .with_tooltip(OverlayHandle::from("tooltip-1")),
        );
    }

    println!("Adding an unnamed layer");
    manager.add_feature_layer("   ", LayerOptions::default());

    println!("Removing the marker layer");
    manager.remove_feature_layer(markers_id, false);

    for layer in manager.feature_layers() {
        println!("Remaining feature layer '{}' (z {})", layer.name(), layer.z_index());
    }
    println!(
        "Active feature layer: {:?}",
        manager.active_feature_layer_id()
    );

    Ok(())
}
