pub mod active;
pub mod base;
pub mod ids;
pub mod macros;
pub mod manager;
pub mod overlay;
pub mod queue;
pub mod tile;
pub mod vector;

pub use base::{LayerId, LayerKind, LayerWrapper, Renderable};
pub use manager::LayerManager;
pub use overlay::{OverlayHandle, OverlayReader, TooltipReader};
pub use tile::TileLayer;
pub use vector::{Feature, FeatureId, FeatureSource, VectorLayer};
