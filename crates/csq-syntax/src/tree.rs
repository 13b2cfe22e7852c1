//! Immutable arena-backed syntax tree and its access methods.

use crate::kind::SyntaxKind;
use crate::node::{ExtendedNodeInfo, Node, NodeFlags, NodeIndex, NodeList, TokenData};
use crate::span::TextSpan;
use serde::Serialize;
use std::fmt::Write as _;

/// A parsed C# file.
///
/// Produced once by `TreeBuilder::finish` and never mutated afterwards, so a
/// tree can be shared across threads and queried concurrently.
#[derive(Debug, Default, Serialize)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) extended_info: Vec<ExtendedNodeInfo>,
    pub(crate) children: Vec<NodeList>,
    pub(crate) tokens: Vec<TokenData>,
    pub(crate) text: String,
    pub(crate) root: NodeIndex,
}

impl SyntaxTree {
    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Full source text the tree was built from.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of elements (nodes and tokens).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Kind of an element; `SyntaxKind::None` for the sentinel.
    #[inline]
    pub fn kind(&self, index: NodeIndex) -> SyntaxKind {
        self.get(index).map_or(SyntaxKind::None, |n| n.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == kind
    }

    #[inline]
    pub fn flags(&self, index: NodeIndex) -> NodeFlags {
        self.get(index).map_or(NodeFlags::empty(), |n| n.flags)
    }

    /// Parent of an element, `NodeIndex::NONE` at the root.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    pub fn child_index(&self, index: NodeIndex) -> Option<usize> {
        let info = self.get_extended(index)?;
        if info.parent.is_none() {
            return None;
        }
        Some(info.child_index as usize)
    }

    /// Ordered children; empty for tokens.
    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        if index.is_none() {
            return &[];
        }
        self.children
            .get(index.0 as usize)
            .map_or(&[][..], |list| &list.nodes[..])
    }

    /// Children that are nodes (tokens filtered out).
    pub fn child_nodes(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children(index)
            .iter()
            .copied()
            .filter(move |&child| !self.is_token(child))
    }

    /// Children that are tokens.
    pub fn child_tokens(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children(index)
            .iter()
            .copied()
            .filter(move |&child| self.is_token(child))
    }

    /// First direct child of the given kind.
    pub fn child_of_kind(&self, index: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        self.children(index)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    /// Last direct child of the given kind.
    pub fn last_child_of_kind(&self, index: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        self.children(index)
            .iter()
            .rev()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    #[inline]
    pub fn is_token(&self, index: NodeIndex) -> bool {
        self.get(index).is_some_and(|n| n.is_token())
    }

    #[inline]
    pub fn is_missing(&self, index: NodeIndex) -> bool {
        self.flags(index).contains(NodeFlags::MISSING)
    }

    #[inline]
    pub fn is_skipped(&self, index: NodeIndex) -> bool {
        self.flags(index).contains(NodeFlags::SKIPPED)
    }

    #[inline]
    pub fn is_in_directive(&self, index: NodeIndex) -> bool {
        self.flags(index).contains(NodeFlags::IN_DIRECTIVE)
    }

    #[inline]
    pub fn token_data(&self, index: NodeIndex) -> Option<&TokenData> {
        let node = self.get(index)?;
        if !node.has_data() {
            return None;
        }
        self.tokens.get(node.data_index as usize)
    }

    /// Text of a token without trivia; empty for nodes and missing tokens.
    #[inline]
    pub fn token_text(&self, index: NodeIndex) -> &str {
        self.token_data(index).map_or("", |data| data.text.as_str())
    }

    #[inline]
    pub fn leading_trivia(&self, index: NodeIndex) -> &str {
        self.token_data(index)
            .map_or("", |data| data.leading_trivia.as_str())
    }

    #[inline]
    pub fn trailing_trivia(&self, index: NodeIndex) -> &str {
        self.token_data(index)
            .map_or("", |data| data.trailing_trivia.as_str())
    }

    /// Token width without trivia. Zero for missing tokens and the end of
    /// file marker.
    #[inline]
    pub fn width(&self, index: NodeIndex) -> u32 {
        if self.is_token(index) {
            self.span(index).len()
        } else {
            0
        }
    }

    /// Span including all trivia.
    #[inline]
    pub fn full_span(&self, index: NodeIndex) -> TextSpan {
        self.get(index)
            .map_or(TextSpan::default(), |n| TextSpan::new(n.pos, n.end))
    }

    /// Span without the leading trivia of the first token and the trailing
    /// trivia of the last token.
    pub fn span(&self, index: NodeIndex) -> TextSpan {
        let Some(node) = self.get(index) else {
            return TextSpan::default();
        };
        if node.is_token() {
            let (leading, width) = self
                .token_data(index)
                .map_or((0, 0), |d| (d.leading_trivia.len() as u32, d.width()));
            let start = node.pos + leading;
            return TextSpan::new(start, start + width);
        }

        let first = self.first_descendant_token(index);
        let last = self.last_descendant_token(index);
        match (first, last) {
            (Some(first), Some(last)) => {
                let start = self.span(first).start;
                let end = self.span(last).end;
                TextSpan::new(start, end.max(start))
            }
            _ => TextSpan::new(node.pos, node.pos),
        }
    }

    /// Source text covered by a span.
    pub fn slice(&self, span: TextSpan) -> &str {
        self.text
            .get(span.start as usize..span.end as usize)
            .unwrap_or("")
    }

    /// First token anywhere under `index`, including trivia and missing
    /// tokens. Filtered traversal belongs to the navigator.
    fn first_descendant_token(&self, index: NodeIndex) -> Option<NodeIndex> {
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            if self.is_token(current) {
                return Some(current);
            }
            stack.extend(self.children(current).iter().rev());
        }
        None
    }

    fn last_descendant_token(&self, index: NodeIndex) -> Option<NodeIndex> {
        let mut stack = vec![index];
        while let Some(current) = stack.pop() {
            if self.is_token(current) {
                return Some(current);
            }
            stack.extend(self.children(current).iter());
        }
        None
    }

    /// Indented rendering of the tree for logs and test failures.
    ///
    /// ```text
    /// CompilationUnit@0..5
    ///   GlobalStatement@0..5
    ///     ...
    ///       SemicolonToken@4..5 ";"
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = Vec::new();
        if self.root.is_some() {
            stack.push((self.root, 0usize));
        }
        while let Some((index, depth)) = stack.pop() {
            let Some(node) = self.get(index) else {
                continue;
            };
            let span = self.full_span(index);
            let _ = write!(out, "{:indent$}{:?}@{}..{}", "", node.kind, span.start, span.end, indent = depth * 2);
            if node.is_token() {
                let _ = write!(out, " {:?}", self.token_text(index));
                if node.is_missing() {
                    out.push_str(" (missing)");
                }
            }
            out.push('\n');
            stack.extend(self.children(index).iter().rev().map(|&child| (child, depth + 1)));
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
