//! Prelude module for common mapdeck types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapdeck::prelude::*;`

pub use crate::core::{
    config::{LayerButtons, LayerManagerConfig, LayerOptions},
    constants::{DEFAULT_LAYER_NAME, DEFAULT_MARKER_LAYER_NAME},
};

pub use crate::layers::{
    base::{LayerId, LayerKind, LayerWrapper, Renderable},
    manager::LayerManager,
    overlay::{OverlayHandle, OverlayReader, TooltipReader},
    tile::TileLayer,
    vector::{Feature, FeatureId, FeatureSource, VectorLayer},
};

pub use crate::events::{
    EventKind, EventManager, FeatureEdited, LayerAdded, LayerEvent, LayerRemoved, ListenerId,
};

pub use crate::rendering::{
    headless::{HeadlessSurface, SurfaceCall},
    surface::Surface,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
pub use std::collections::VecDeque;
