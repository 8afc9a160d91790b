pub mod config;
pub mod constants;

pub use config::{LayerButtons, LayerManagerConfig, LayerOptions};
