pub mod headless;
pub mod surface;

pub use headless::{HeadlessSurface, SurfaceCall};
pub use surface::Surface;
