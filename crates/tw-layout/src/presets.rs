// ABOUTME: The catalog of starter layouts selectable by ordinal.
// ABOUTME: Every selection builds a fresh tree with all ratios at 0.5.

use crate::{Axis, LayoutError, LayoutNode};

/// Number of entries in the preset catalog.
pub const PRESET_COUNT: usize = 7;

fn half(axis: Axis, first: LayoutNode, second: LayoutNode) -> LayoutNode {
    LayoutNode::split(axis, 0.5, first, second)
}

/// Build a fresh copy of catalog entry `index`. The returned tree owns its
/// own nodes, so later resizes never write back into the catalog.
pub fn preset(index: usize) -> Result<LayoutNode, LayoutError> {
    let tree = match index {
        // one tile to the left, two stacked on the right
        0 => half(
            Axis::Vertical,
            LayoutNode::leaf(0),
            half(Axis::Horizontal, LayoutNode::leaf(1), LayoutNode::leaf(2)),
        ),
        // two stacked on the left, one to the right
        1 => half(
            Axis::Vertical,
            half(Axis::Horizontal, LayoutNode::leaf(0), LayoutNode::leaf(1)),
            LayoutNode::leaf(2),
        ),
        // one tile on top, two side by side below
        2 => half(
            Axis::Horizontal,
            LayoutNode::leaf(0),
            half(Axis::Vertical, LayoutNode::leaf(1), LayoutNode::leaf(2)),
        ),
        // two side by side on top, one below
        3 => half(
            Axis::Horizontal,
            half(Axis::Vertical, LayoutNode::leaf(0), LayoutNode::leaf(1)),
            LayoutNode::leaf(2),
        ),
        // top / bottom
        4 => half(Axis::Horizontal, LayoutNode::leaf(0), LayoutNode::leaf(1)),
        // left / right
        5 => half(Axis::Vertical, LayoutNode::leaf(0), LayoutNode::leaf(1)),
        // single tile
        6 => LayoutNode::leaf(0),
        _ => {
            return Err(LayoutError::InvalidPresetIndex {
                index,
                len: PRESET_COUNT,
            })
        }
    };
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_ratios_half(node: &LayoutNode) {
        if let LayoutNode::Split {
            ratio,
            first,
            second,
            ..
        } = node
        {
            assert_eq!(*ratio, 0.5);
            assert_all_ratios_half(first);
            assert_all_ratios_half(second);
        }
    }

    fn leaf_count(node: &LayoutNode) -> usize {
        match node {
            LayoutNode::Leaf { .. } => 1,
            LayoutNode::Split { first, second, .. } => leaf_count(first) + leaf_count(second),
        }
    }

    #[test]
    fn every_preset_starts_balanced() {
        for index in 0..PRESET_COUNT {
            let tree = preset(index).unwrap();
            assert_all_ratios_half(&tree);
        }
    }

    #[test]
    fn preset_shapes_match_the_catalog() {
        for (index, leaves) in [(0, 3), (1, 3), (2, 3), (3, 3), (4, 2), (5, 2), (6, 1)] {
            assert_eq!(leaf_count(&preset(index).unwrap()), leaves, "preset {index}");
        }

        // catalog entry 4 is the plain top/bottom split
        let top_bottom = preset(4).unwrap();
        assert_eq!(
            top_bottom,
            LayoutNode::split(Axis::Horizontal, 0.5, LayoutNode::leaf(0), LayoutNode::leaf(1))
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(
            preset(PRESET_COUNT),
            Err(LayoutError::InvalidPresetIndex {
                index: PRESET_COUNT,
                len: PRESET_COUNT,
            })
        );
        assert_eq!(
            preset(usize::MAX),
            Err(LayoutError::InvalidPresetIndex {
                index: usize::MAX,
                len: PRESET_COUNT,
            })
        );
    }

    #[test]
    fn selections_never_alias_each_other() {
        let mut a = preset(5).unwrap();
        let b = preset(5).unwrap();
        a = a.with_ratio(&[], 0.3).unwrap();
        assert_ne!(a, b);
        assert_eq!(b, preset(5).unwrap());
    }
}
