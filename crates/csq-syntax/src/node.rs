//! Arena node representation.
//!
//! Every element of the tree, node or token, is a `Node` header stored in a
//! flat vector and addressed by `NodeIndex`. Token text lives in a separate
//! pool referenced through `data_index`, the same split between a small
//! header and typed side pools that keeps traversal cache friendly.
//!
//! Parent links are stored in `ExtendedNodeInfo` as plain indices. They exist
//! for ancestor lookup only; the arena owns every element.

use crate::kind::SyntaxKind;
use bitflags::bitflags;
use serde::Serialize;

/// Handle to an element (node or token) in a `SyntaxTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub fn into_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

/// Ordered children of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

bitflags! {
    /// Recovery and trivia markers on tokens.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u16 {
        /// Zero-width token synthesized by error recovery.
        const MISSING = 1 << 0;
        /// Token the parser skipped over (lives in `SkippedTokensTrivia`).
        const SKIPPED = 1 << 1;
        /// Token inside a preprocessor directive.
        const IN_DIRECTIVE = 1 << 2;
        /// Token inside a documentation comment.
        const IN_DOCUMENTATION = 1 << 3;
    }
}

impl Serialize for NodeFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.bits())
    }
}

/// Fixed-size header for every element in the arena.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
    /// Full start, including leading trivia.
    pub pos: u32,
    /// Full end, including trailing trivia.
    pub end: u32,
    /// Index into the token pool (`Node::NO_DATA` for nodes).
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: NodeFlags::empty(),
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data_and_flags(
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data_index: u32,
        flags: NodeFlags,
    ) -> Node {
        Node {
            kind,
            flags,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        self.kind.is_token()
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.flags.contains(NodeFlags::MISSING)
    }

    #[inline]
    pub fn full_width(&self) -> u32 {
        self.end - self.pos
    }
}

/// Text of a token, split into its trivia and the token proper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TokenData {
    pub leading_trivia: String,
    pub text: String,
    pub trailing_trivia: String,
}

impl TokenData {
    #[inline]
    pub fn width(&self) -> u32 {
        self.text.len() as u32
    }
}

/// Navigation data kept beside the header.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
    /// Position of this element in its parent's child list.
    pub child_index: u32,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
            child_index: 0,
        }
    }
}
