// ABOUTME: Recursive walk of the layout tree into drawable regions.
// ABOUTME: Pure geometry; pixel conversion and hit-testing live on the results.

use tw_core::ContentId;
use tw_layout::{Axis, LayoutNode, Step};

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Cut this rect in two along `axis`, giving `ratio` of the space to
    /// the first piece.
    fn split(&self, axis: Axis, ratio: f32) -> (Rect, Rect) {
        match axis {
            Axis::Horizontal => (
                Rect {
                    x: self.x,
                    y: self.y,
                    width: self.width,
                    height: self.height * ratio,
                },
                Rect {
                    x: self.x,
                    y: self.y + self.height * ratio,
                    width: self.width,
                    height: self.height * (1.0 - ratio),
                },
            ),
            Axis::Vertical => (
                Rect {
                    x: self.x,
                    y: self.y,
                    width: self.width * ratio,
                    height: self.height,
                },
                Rect {
                    x: self.x + self.width * ratio,
                    y: self.y,
                    width: self.width * (1.0 - ratio),
                    height: self.height,
                },
            ),
        }
    }

    /// Convert to pixel coordinates as (x, y, width, height).
    pub fn to_px(&self, win_width: f32, win_height: f32) -> (f32, f32, f32, f32) {
        (
            self.x * win_width,
            self.y * win_height,
            self.width * win_width,
            self.height * win_height,
        )
    }
}

/// A leaf region hosting one content entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub rect: Rect,
    pub content: ContentId,
    pub path: Vec<Step>,
}

/// The draggable boundary of one split, addressed by the path to that split.
#[derive(Debug, Clone, PartialEq)]
pub struct Separator {
    pub axis: Axis,
    pub path: Vec<Step>,
    /// Bounding box of the split this separator belongs to. Drag proportions
    /// are measured against this box, not the window.
    pub split_rect: Rect,
    /// Normalized position of the boundary line inside the window
    /// (a y coordinate for Horizontal splits, an x coordinate for Vertical).
    pub position: f32,
}

impl Separator {
    /// The separator bar as a pixel rect centered on the boundary.
    pub fn bar_px(&self, win_width: f32, win_height: f32, thickness_px: f32) -> (f32, f32, f32, f32) {
        let (sx, sy, sw, sh) = self.split_rect.to_px(win_width, win_height);
        match self.axis {
            Axis::Horizontal => {
                let y = self.position * win_height - thickness_px / 2.0;
                (sx, y, sw, thickness_px)
            }
            Axis::Vertical => {
                let x = self.position * win_width - thickness_px / 2.0;
                (x, sy, thickness_px, sh)
            }
        }
    }

    /// The containing split's box in pixels, for the drag controller.
    pub fn split_box_px(&self, win_width: f32, win_height: f32) -> (f32, f32, f32, f32) {
        self.split_rect.to_px(win_width, win_height)
    }
}

/// Everything one frame needs: leaf panes and separator bars, each tagged
/// with the tree path that addresses it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    pub panes: Vec<Pane>,
    pub separators: Vec<Separator>,
}

impl Scene {
    /// Walk the tree and collect panes and separators.
    pub fn build(root: &LayoutNode) -> Self {
        let mut scene = Scene::default();
        let mut path = Vec::new();
        collect(root, Rect::full(), &mut path, &mut scene);
        scene
    }

    /// Find the separator under a pixel position, if any. `band_px` is the
    /// half-height (or half-width) of the grabbable band around the bar.
    pub fn separator_at(
        &self,
        x: f32,
        y: f32,
        win_width: f32,
        win_height: f32,
        band_px: f32,
    ) -> Option<&Separator> {
        self.separators.iter().find(|sep| {
            let (sx, sy, sw, sh) = sep.split_rect.to_px(win_width, win_height);
            match sep.axis {
                Axis::Horizontal => {
                    let line = sep.position * win_height;
                    x >= sx && x <= sx + sw && (y - line).abs() <= band_px
                }
                Axis::Vertical => {
                    let line = sep.position * win_width;
                    y >= sy && y <= sy + sh && (x - line).abs() <= band_px
                }
            }
        })
    }
}

fn collect(node: &LayoutNode, rect: Rect, path: &mut Vec<Step>, scene: &mut Scene) {
    match node {
        LayoutNode::Leaf { content } => {
            scene.panes.push(Pane {
                rect,
                content: *content,
                path: path.clone(),
            });
        }
        LayoutNode::Split {
            axis,
            ratio,
            first,
            second,
        } => {
            let (first_rect, second_rect) = rect.split(*axis, *ratio);
            let position = match axis {
                Axis::Horizontal => rect.y + rect.height * ratio,
                Axis::Vertical => rect.x + rect.width * ratio,
            };
            scene.separators.push(Separator {
                axis: *axis,
                path: path.clone(),
                split_rect: rect,
                position,
            });

            path.push(Step::First);
            collect(first, first_rect, path, scene);
            path.pop();

            path.push(Step::Second);
            collect(second, second_rect, path, scene);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tw_layout::preset;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn single_leaf_fills_the_window() {
        let scene = Scene::build(&preset(6).unwrap());
        assert_eq!(scene.separators.len(), 0);
        assert_eq!(scene.panes.len(), 1);
        assert_eq!(scene.panes[0].rect, Rect::full());
        assert!(scene.panes[0].path.is_empty());
    }

    #[test]
    fn top_bottom_split_stacks_panes() {
        // preset 4: Split(Horizontal, Leaf(0), Leaf(1))
        let scene = Scene::build(&preset(4).unwrap());
        assert_eq!(scene.panes.len(), 2);
        assert_eq!(scene.separators.len(), 1);

        let top = &scene.panes[0];
        let bottom = &scene.panes[1];
        assert!(close(top.rect.height, 0.5));
        assert!(close(bottom.rect.y, 0.5));
        assert_eq!(top.path, vec![Step::First]);
        assert_eq!(bottom.path, vec![Step::Second]);

        let sep = &scene.separators[0];
        assert_eq!(sep.axis, Axis::Horizontal);
        assert!(sep.path.is_empty());
        assert!(close(sep.position, 0.5));
    }

    #[test]
    fn nested_split_geometry_composes() {
        // preset 0: Leaf(0) left, Split(Horizontal, Leaf(1), Leaf(2)) right,
        // with the nested split resized to 0.75
        let tree = preset(0)
            .unwrap()
            .with_ratio(&[Step::Second], 0.75)
            .unwrap();
        let scene = Scene::build(&tree);

        assert_eq!(scene.panes.len(), 3);
        assert_eq!(scene.separators.len(), 2);

        // nested separator lives in the right half and sits at 3/4 height
        let nested = &scene.separators[1];
        assert_eq!(nested.path, vec![Step::Second]);
        assert!(close(nested.split_rect.x, 0.5));
        assert!(close(nested.split_rect.width, 0.5));
        assert!(close(nested.position, 0.75));

        // bottom-right pane gets the remaining quarter
        let pane = &scene.panes[2];
        assert_eq!(pane.path, vec![Step::Second, Step::Second]);
        assert!(close(pane.rect.y, 0.75));
        assert!(close(pane.rect.height, 0.25));
    }

    #[test]
    fn separator_hit_testing_respects_the_band() {
        let scene = Scene::build(&preset(5).unwrap());

        // left/right split at 0.5 in an 800x600 window: boundary at x=400
        let hit = scene.separator_at(402.0, 300.0, 800.0, 600.0, 6.0);
        assert!(hit.is_some());
        assert_eq!(hit.unwrap().axis, Axis::Vertical);

        assert!(scene.separator_at(420.0, 300.0, 800.0, 600.0, 6.0).is_none());
    }

    #[test]
    fn nested_separator_only_spans_its_own_split() {
        // preset 0: nested horizontal separator spans only the right half
        let scene = Scene::build(&preset(0).unwrap());
        let nested = scene
            .separators
            .iter()
            .find(|s| s.axis == Axis::Horizontal)
            .unwrap();

        // boundary at y=300 in 800x600; x inside the left pane misses
        assert!(scene.separator_at(200.0, 300.0, 800.0, 600.0, 6.0).is_none());
        // x inside the right half hits
        let hit = scene.separator_at(600.0, 300.0, 800.0, 600.0, 6.0).unwrap();
        assert_eq!(hit.path, nested.path);
    }

    #[test]
    fn separator_bar_is_centered_on_the_boundary() {
        let scene = Scene::build(&preset(4).unwrap());
        let (x, y, w, h) = scene.separators[0].bar_px(800.0, 600.0, 4.0);
        assert!(close(x, 0.0));
        assert!(close(w, 800.0));
        assert!(close(y, 298.0));
        assert!(close(h, 4.0));
    }
}
