pub mod manager;
pub mod types;

pub use manager::{EventManager, ListenerId};
pub use types::{EventKind, FeatureEdited, LayerAdded, LayerEvent, LayerRemoved};
