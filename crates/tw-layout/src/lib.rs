// ABOUTME: Recursive binary-split tile layout for the workspace.
// ABOUTME: Tree model, preset catalog, path-addressed resize reducer, session persistence.

mod error;
mod node;
mod presets;
mod reducer;
mod session;

pub use error::LayoutError;
pub use node::{clamp_ratio, Axis, LayoutNode, Step, MIN_PROPORTION};
pub use presets::{preset, PRESET_COUNT};
pub use reducer::{reduce, Action};
pub use session::{SessionError, WorkspaceSession};
