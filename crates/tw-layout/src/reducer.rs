// ABOUTME: Pure state-transition function for the layout tree.
// ABOUTME: Preset selection replaces the tree; resize patches one ratio.

use serde::{Deserialize, Serialize};

use crate::{preset, LayoutError, LayoutNode, Step};

/// Everything that can happen to the layout tree. `Nop` is the identity
/// action: callers that synthesize actions from untyped input map anything
/// unrecognized onto it instead of erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    SelectPreset(usize),
    Resize { path: Vec<Step>, ratio: f32 },
    Nop,
}

/// Apply one action to the tree, producing the next tree. Errors leave the
/// caller's tree exactly as it was; there is no partial mutation.
pub fn reduce(tree: &LayoutNode, action: &Action) -> Result<LayoutNode, LayoutError> {
    match action {
        Action::SelectPreset(index) => preset(*index),
        Action::Resize { path, ratio } => tree.with_ratio(path, *ratio),
        Action::Nop => Ok(tree.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, MIN_PROPORTION};

    #[test]
    fn select_preset_replaces_the_whole_tree() {
        let tree = preset(6).unwrap();
        let next = reduce(&tree, &Action::SelectPreset(4)).unwrap();
        assert_eq!(
            next,
            LayoutNode::split(Axis::Horizontal, 0.5, LayoutNode::leaf(0), LayoutNode::leaf(1))
        );
    }

    #[test]
    fn select_preset_out_of_range_leaves_tree_unchanged() {
        let tree = preset(0).unwrap();
        let err = reduce(&tree, &Action::SelectPreset(99));
        assert!(matches!(err, Err(LayoutError::InvalidPresetIndex { index: 99, .. })));
        assert_eq!(tree, preset(0).unwrap());
    }

    #[test]
    fn resize_clamps_the_proposed_ratio() {
        let tree = preset(4).unwrap();
        let next = reduce(
            &tree,
            &Action::Resize {
                path: vec![],
                ratio: 0.1,
            },
        )
        .unwrap();
        let LayoutNode::Split { ratio, .. } = &next else {
            unreachable!();
        };
        assert_eq!(*ratio, MIN_PROPORTION);
    }

    #[test]
    fn resize_is_idempotent() {
        let tree = preset(0).unwrap();
        let action = Action::Resize {
            path: vec![Step::Second],
            ratio: 0.6,
        };
        let once = reduce(&tree, &action).unwrap();
        let twice = reduce(&once, &action).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn resize_through_a_leaf_is_an_invalid_path() {
        let tree = preset(4).unwrap();
        let err = reduce(
            &tree,
            &Action::Resize {
                path: vec![Step::First, Step::First],
                ratio: 0.5,
            },
        );
        assert_eq!(err, Err(LayoutError::InvalidPath { depth: 1 }));
    }

    #[test]
    fn nested_resize_leaves_the_root_alone() {
        // preset 0: Split(Vertical, Leaf(0), Split(Horizontal, Leaf(1), Leaf(2)))
        let tree = preset(0).unwrap();
        let next = reduce(
            &tree,
            &Action::Resize {
                path: vec![Step::Second],
                ratio: 0.7,
            },
        )
        .unwrap();

        let LayoutNode::Split { axis, ratio, first, second } = &next else {
            unreachable!();
        };
        assert_eq!(*axis, Axis::Vertical);
        assert_eq!(*ratio, 0.5);
        assert_eq!(first.as_ref(), &LayoutNode::leaf(0));

        let LayoutNode::Split { ratio: nested, first: nf, second: ns, .. } = second.as_ref() else {
            panic!("nested split expected");
        };
        assert_eq!(*nested, 0.7);
        assert_eq!(nf.as_ref(), &LayoutNode::leaf(1));
        assert_eq!(ns.as_ref(), &LayoutNode::leaf(2));
    }

    #[test]
    fn nested_resize_past_the_bound_clamps() {
        let tree = preset(0).unwrap();
        let next = reduce(
            &tree,
            &Action::Resize {
                path: vec![Step::Second],
                ratio: 0.8,
            },
        )
        .unwrap();
        let LayoutNode::Split { second, .. } = &next else {
            unreachable!();
        };
        let LayoutNode::Split { ratio: nested, .. } = second.as_ref() else {
            panic!("nested split expected");
        };
        assert_eq!(*nested, 1.0 - MIN_PROPORTION);
    }

    #[test]
    fn nop_returns_an_identical_tree() {
        let tree = preset(2).unwrap();
        let next = reduce(&tree, &Action::Nop).unwrap();
        assert_eq!(next, tree);
    }
}
