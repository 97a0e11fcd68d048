// ABOUTME: Rendering for the tile workspace.
// ABOUTME: Walks the layout tree into a scene and paints it with wgpu.

mod gpu;
mod quad_pipeline;
pub mod renderer;
pub mod scene;

pub use renderer::{RenderError, Renderer};
pub use scene::{Pane, Rect, Scene, Separator};
