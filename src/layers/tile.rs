use serde::{Deserialize, Serialize};

use crate::{impl_renderable_boilerplate, layers::base::Renderable};

/// A raster basemap fetched from a `{z}/{x}/{y}` URL template.
///
/// Tile fetching and drawing belong to the rendering surface; this type only
/// describes the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: Option<String>,
    pub max_zoom: u8,
    visible: bool,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: None,
            max_zoom: 19,
            visible: true,
        }
    }

    pub fn openstreetmap() -> Self {
        Self::new("https://tile.openstreetmap.org/{z}/{x}/{y}.png")
            .with_attribution("© OpenStreetMap contributors")
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = Some(attribution.into());
        self
    }

    pub fn with_max_zoom(mut self, max_zoom: u8) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Expands the URL template for one tile.
    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> String {
        self.url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Renderable for TileLayer {
    impl_renderable_boilerplate!(visible);
}
