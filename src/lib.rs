//! A growing 11x11 grid of spinning cubes, rendered with wgpu.
//!
//! The demo starts with an empty grid and spawns one cube per elapsed
//! second until all 121 cells are filled. Every cube owns its own vertex
//! and index buffer copied from a shared template; only the per-object
//! transform differs between them.

pub mod app;
pub mod camera;
pub mod errors;
pub mod grid;
pub mod render;
pub mod shapes;

pub use app::App;
pub use camera::{EyeFov, FrameView, HmdState};
pub use errors::{CubeGridError, Result};
pub use render::Renderer;
pub use render::settings::{BufferKind, RendererSettings};
pub use shapes::{CUBE, PosColorVertex, QUAD, ShapeTemplate};
