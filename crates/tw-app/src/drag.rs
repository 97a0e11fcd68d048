// ABOUTME: Separator drag state for interactive resizing.
// ABOUTME: An RAII session that maps pointer moves onto resize actions.

use std::sync::Arc;

use winit::window::{CursorIcon, Window};

use tw_layout::{clamp_ratio, Action, Axis, Step};

/// Pixel bounding box of the split a drag is scoped to. Proportions are
/// measured against this box, never the window, so nested splits resize
/// independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SplitBox {
    pub fn new(px: (f32, f32, f32, f32)) -> Self {
        Self {
            x: px.0,
            y: px.1,
            width: px.2,
            height: px.3,
        }
    }
}

/// Pointer position as a clamped fraction of the split box along the split
/// axis. `None` when the box cannot be measured; that move is simply
/// ignored for the tick.
pub fn drag_ratio(axis: Axis, bounds: SplitBox, x: f32, y: f32) -> Option<f32> {
    let raw = match axis {
        Axis::Horizontal => {
            if bounds.height <= 0.0 {
                return None;
            }
            (y - bounds.y) / bounds.height
        }
        Axis::Vertical => {
            if bounds.width <= 0.0 {
                return None;
            }
            (x - bounds.x) / bounds.width
        }
    };
    Some(clamp_ratio(raw))
}

/// A drag in progress on one separator. Creating the session switches the
/// cursor to the axis resize arrow; dropping it restores the default, so
/// release happens on pointer-up and on teardown mid-drag alike.
pub struct DragSession {
    window: Arc<Window>,
    axis: Axis,
    path: Vec<Step>,
    bounds: SplitBox,
}

impl DragSession {
    pub fn begin(window: Arc<Window>, axis: Axis, path: Vec<Step>, bounds: SplitBox) -> Self {
        let cursor = match axis {
            Axis::Horizontal => CursorIcon::NsResize,
            Axis::Vertical => CursorIcon::EwResize,
        };
        window.set_cursor(cursor);
        tracing::debug!("Drag started on separator at {:?}", path);
        Self {
            window,
            axis,
            path,
            bounds,
        }
    }

    pub fn path(&self) -> &[Step] {
        &self.path
    }

    /// Translate a pointer move into a resize action for this separator.
    pub fn pointer_moved(&self, x: f32, y: f32) -> Option<Action> {
        let ratio = drag_ratio(self.axis, self.bounds, x, y)?;
        Some(Action::Resize {
            path: self.path.clone(),
            ratio,
        })
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.window.set_cursor(CursorIcon::Default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_layout::MIN_PROPORTION;

    fn bounds() -> SplitBox {
        // right half of an 800x600 window
        SplitBox {
            x: 400.0,
            y: 0.0,
            width: 400.0,
            height: 600.0,
        }
    }

    #[test]
    fn horizontal_drag_measures_against_box_height() {
        let ratio = drag_ratio(Axis::Horizontal, bounds(), 500.0, 300.0).unwrap();
        assert_eq!(ratio, 0.5);

        let ratio = drag_ratio(Axis::Horizontal, bounds(), 500.0, 420.0).unwrap();
        assert_eq!(ratio, 0.7);
    }

    #[test]
    fn vertical_drag_measures_against_box_width() {
        let ratio = drag_ratio(Axis::Vertical, bounds(), 600.0, 100.0).unwrap();
        assert_eq!(ratio, 0.5);

        let ratio = drag_ratio(Axis::Vertical, bounds(), 520.0, 100.0).unwrap();
        assert_eq!(ratio, 0.3);
    }

    #[test]
    fn drag_past_the_edge_clamps() {
        // pointer well above the box
        let ratio = drag_ratio(Axis::Horizontal, bounds(), 500.0, 30.0).unwrap();
        assert_eq!(ratio, MIN_PROPORTION);

        // pointer outside the window entirely
        let ratio = drag_ratio(Axis::Vertical, bounds(), 2000.0, 100.0).unwrap();
        assert_eq!(ratio, 1.0 - MIN_PROPORTION);
    }

    #[test]
    fn degenerate_box_ignores_the_move() {
        let flat = SplitBox {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 0.0,
        };
        assert_eq!(drag_ratio(Axis::Horizontal, flat, 100.0, 100.0), None);

        let thin = SplitBox {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 300.0,
        };
        assert_eq!(drag_ratio(Axis::Vertical, thin, 100.0, 100.0), None);
    }
}
