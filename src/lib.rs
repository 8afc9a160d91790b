//! # mapdeck
//!
//! Layer registry and lifecycle management for map authoring toolbars.
//!
//! A [`LayerManager`] owns every background ("map") layer and every feature
//! layer, assigns ids and z-indexes, queues layers added before the rendering
//! surface exists, keeps an active feature layer for drawing tools, and
//! detaches feature overlays when their layer goes away. Lifecycle changes are
//! published as typed [`LayerEvent`]s.

pub mod core;
pub mod events;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::config::{LayerButtons, LayerManagerConfig, LayerOptions};

pub use events::{EventKind, EventManager, LayerEvent, ListenerId};

pub use layers::{
    base::{LayerId, LayerKind, LayerWrapper, Renderable},
    manager::LayerManager,
    overlay::{OverlayHandle, OverlayReader, TooltipReader},
    tile::TileLayer,
    vector::{Feature, FeatureId, FeatureSource, VectorLayer},
};

pub use rendering::{headless::HeadlessSurface, surface::Surface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Listener error: {0}")]
    Listener(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logger() {
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .try_init();
}
