//! Engine-wide defaults for layer naming and stacking.
//! Keeping them in a single place makes it easier to tweak the z-order conventions.

/// Name given to a layer whose requested name is blank.
pub const DEFAULT_LAYER_NAME: &str = "New layer";

/// Fallback name used by marker tooling when no feature layer exists yet.
pub const DEFAULT_MARKER_LAYER_NAME: &str = "Markers";

/// Lowest z-index a map (background) layer can receive.
pub const ZINDEX_BASE_MAP_LAYER: i64 = 1;

/// Lowest z-index a feature layer can receive.
///
/// Far above any realistic number of map layers so feature layers always
/// stack on top of basemaps.
pub const ZINDEX_BASE_FEATURE_LAYER: i64 = 10_000;

/// Property under which toolbar metadata is stored on a feature.
pub const FEATURE_PROPERTY_NAMESPACE: &str = "toolbar";

/// Key, inside [`FEATURE_PROPERTY_NAMESPACE`], holding a feature's tooltip overlay.
pub const FEATURE_PROPERTY_TOOLTIP: &str = "tooltip";
