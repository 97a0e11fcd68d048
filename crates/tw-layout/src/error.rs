// ABOUTME: Error taxonomy for layout mutations.
// ABOUTME: Both variants leave the input tree untouched.

/// Failures surfaced by the preset catalog and the reducer.
///
/// `InvalidPath` means the rendered separator addressing and the tree shape
/// disagree, which is a programming error rather than user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("preset index {index} out of range (catalog has {len} entries)")]
    InvalidPresetIndex { index: usize, len: usize },

    #[error("resize path does not address a split node (failed at depth {depth})")]
    InvalidPath { depth: usize },
}
