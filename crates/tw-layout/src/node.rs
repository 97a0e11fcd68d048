// ABOUTME: Binary tree structure for workspace tile layout.
// ABOUTME: Splits carry an axis and a ratio; leaves reference external content.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tw_core::ContentId;

use crate::LayoutError;

/// Smallest fraction of its parent a tile may occupy.
pub const MIN_PROPORTION: f32 = 0.25;

/// Clamp a proposed ratio into `[MIN_PROPORTION, 1 - MIN_PROPORTION]`.
pub fn clamp_ratio(ratio: f32) -> f32 {
    ratio.clamp(MIN_PROPORTION, 1.0 - MIN_PROPORTION)
}

/// Split orientation. `Horizontal` stacks first-above-second;
/// `Vertical` places first-left-of-second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One step of a path from the root to a split node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    First,
    Second,
}

/// A node in the layout tree. Children sit behind `Rc` so that resize can
/// rebuild only the spine from the root to the patched split and share
/// every off-path subtree with the previous tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutNode {
    Split {
        axis: Axis,
        ratio: f32,
        first: Rc<LayoutNode>,
        second: Rc<LayoutNode>,
    },
    Leaf {
        content: ContentId,
    },
}

impl LayoutNode {
    pub fn leaf(content: u32) -> Self {
        Self::Leaf {
            content: ContentId(content),
        }
    }

    pub fn split(axis: Axis, ratio: f32, first: LayoutNode, second: LayoutNode) -> Self {
        Self::Split {
            axis,
            ratio,
            first: Rc::new(first),
            second: Rc::new(second),
        }
    }

    /// Resolve a path. The final node must be a split; walking into a leaf
    /// before the path is exhausted is an `InvalidPath`.
    pub fn split_at(&self, path: &[Step]) -> Result<&LayoutNode, LayoutError> {
        let mut node = self;
        for (depth, step) in path.iter().enumerate() {
            match node {
                LayoutNode::Split { first, second, .. } => {
                    node = match step {
                        Step::First => first,
                        Step::Second => second,
                    };
                }
                LayoutNode::Leaf { .. } => return Err(LayoutError::InvalidPath { depth }),
            }
        }
        match node {
            LayoutNode::Split { .. } => Ok(node),
            LayoutNode::Leaf { .. } => Err(LayoutError::InvalidPath { depth: path.len() }),
        }
    }

    /// Return a tree identical to this one except the ratio of the split
    /// addressed by `path`, clamped to the legal range. Only nodes along the
    /// path are rebuilt; siblings are shared with the input tree.
    pub fn with_ratio(&self, path: &[Step], ratio: f32) -> Result<LayoutNode, LayoutError> {
        patch_ratio(self, path, clamp_ratio(ratio), 0)
    }
}

fn patch_ratio(
    node: &LayoutNode,
    path: &[Step],
    ratio: f32,
    depth: usize,
) -> Result<LayoutNode, LayoutError> {
    let LayoutNode::Split {
        axis,
        ratio: current,
        first,
        second,
    } = node
    else {
        return Err(LayoutError::InvalidPath { depth });
    };

    match path.split_first() {
        None => Ok(LayoutNode::Split {
            axis: *axis,
            ratio,
            first: Rc::clone(first),
            second: Rc::clone(second),
        }),
        Some((Step::First, rest)) => Ok(LayoutNode::Split {
            axis: *axis,
            ratio: *current,
            first: Rc::new(patch_ratio(first, rest, ratio, depth + 1)?),
            second: Rc::clone(second),
        }),
        Some((Step::Second, rest)) => Ok(LayoutNode::Split {
            axis: *axis,
            ratio: *current,
            first: Rc::clone(first),
            second: Rc::new(patch_ratio(second, rest, ratio, depth + 1)?),
        }),
    }
}
