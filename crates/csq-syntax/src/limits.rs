//! Centralized limits for tree construction and traversal.

/// Maximum number of nested nodes in a tree.
///
/// `TreeBuilder` rejects deeper input with `TreeBuildError::TooDeep`, so a
/// token has at most this many ancestors and every walk bounded by it
/// reaches the root. Real-world C# files nest a few hundred levels.
pub const MAX_TREE_DEPTH: u32 = 4_096;

/// Maximum source length (in bytes) a tree may cover.
///
/// Offsets are stored as `u32`, and `NodeIndex(u32::MAX)` is reserved as the
/// sentinel, so both text length and element count must stay below it.
pub const MAX_TREE_LEN: usize = (u32::MAX - 1) as usize;

/// Initial capacity of the builder's open-node stack before it spills to
/// the heap.
pub const BUILDER_STACK_INLINE: usize = 32;
