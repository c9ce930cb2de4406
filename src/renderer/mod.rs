//! WebGPU rendering module
//!
//! The scene is rebuilt from a `FrameView` every frame as a flat-colored
//! triangle list; the pipeline only maps it to NDC and draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
