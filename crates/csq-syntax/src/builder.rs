//! Event-driven tree construction.
//!
//! A parser adapter (or a test) drives the builder with `start_node` /
//! `token` / `missing` / `trivia` / `finish_node` events in source order. The
//! builder lays out offsets, wires parent links as children are attached, and
//! checks the structural invariants once at `finish`.

use crate::kind::SyntaxKind;
use crate::limits::{BUILDER_STACK_INLINE, MAX_TREE_DEPTH, MAX_TREE_LEN};
use crate::node::{ExtendedNodeInfo, Node, NodeFlags, NodeIndex, NodeList, TokenData};
use crate::tree::SyntaxTree;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeBuildError {
    #[error("finish_node called with no open node")]
    UnmatchedFinish,
    #[error("{open} node(s) still open at finish")]
    UnfinishedNodes { open: usize },
    #[error("tree has no root node")]
    EmptyTree,
    #[error("second root {second:?} started after root {first:?} was finished")]
    MultipleRoots {
        first: SyntaxKind,
        second: SyntaxKind,
    },
    #[error("token {kind:?} added outside of any node")]
    TokenOutsideNode { kind: SyntaxKind },
    #[error("{kind:?} is a token kind and cannot start a node")]
    NodeKindIsToken { kind: SyntaxKind },
    #[error("{kind:?} is a node kind and cannot be added as a token")]
    TokenKindIsNode { kind: SyntaxKind },
    #[error("source length {len} exceeds the supported maximum")]
    TooLarge { len: usize },
    #[error("{kind:?} would nest deeper than {limit} nodes")]
    TooDeep { kind: SyntaxKind, limit: u32 },
}

/// Builds a `SyntaxTree` from parse events.
///
/// Whitespace and comments passed to `trivia` become leading trivia of the
/// next real token; trivia left over at `finish` becomes trailing trivia of
/// the last real token. Missing tokens never carry trivia.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: SyntaxTree,
    open: SmallVec<[NodeIndex; BUILDER_STACK_INLINE]>,
    /// Trivia flags of each open node, inherited from the nodes around it.
    open_flags: SmallVec<[NodeFlags; BUILDER_STACK_INLINE]>,
    pending_trivia: String,
    last_real_token: NodeIndex,
    error: Option<TreeBuildError>,
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder {
            tree: SyntaxTree {
                root: NodeIndex::NONE,
                ..SyntaxTree::default()
            },
            open: SmallVec::new(),
            open_flags: SmallVec::new(),
            pending_trivia: String::new(),
            last_real_token: NodeIndex::NONE,
            error: None,
        }
    }

    /// Text offset the next element would start at, counting queued trivia.
    pub fn offset(&self) -> u32 {
        (self.tree.text.len() + self.pending_trivia.len()) as u32
    }

    pub fn start_node(&mut self, kind: SyntaxKind) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if kind.is_token() || kind == SyntaxKind::None {
            return self.fail(TreeBuildError::NodeKindIsToken { kind });
        }
        if self.open.is_empty() && self.tree.root.is_some() {
            let first = self.tree.kind(self.tree.root);
            return self.fail(TreeBuildError::MultipleRoots {
                first,
                second: kind,
            });
        }
        if self.open.len() >= MAX_TREE_DEPTH as usize {
            return self.fail(TreeBuildError::TooDeep {
                kind,
                limit: MAX_TREE_DEPTH,
            });
        }

        // Node offsets are fixed up at finish_node; a node starts where its
        // first element's leading trivia starts.
        let pos = self.tree.text.len() as u32;
        let index = self.push(Node::new(kind, pos, pos));
        if self.open.is_empty() {
            self.tree.root = index;
        }
        let flags = self.enclosing_trivia_flags() | trivia_flags_of(kind);
        self.open.push(index);
        self.open_flags.push(flags);
        self
    }

    pub fn finish_node(&mut self) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        let Some(index) = self.open.pop() else {
            return self.fail(TreeBuildError::UnmatchedFinish);
        };
        self.open_flags.pop();
        let end = self.tree.text.len() as u32;
        if let Some(node) = self.tree.nodes.get_mut(index.0 as usize) {
            node.end = end;
        }
        self
    }

    /// Adds a real token, attaching any queued trivia as leading trivia.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) -> &mut Self {
        let leading = std::mem::take(&mut self.pending_trivia);
        self.add_token(kind, leading, text, NodeFlags::empty())
    }

    /// Adds a zero-width token synthesized by error recovery.
    pub fn missing(&mut self, kind: SyntaxKind) -> &mut Self {
        self.add_token(kind, String::new(), "", NodeFlags::MISSING)
    }

    /// Queues whitespace or comment text for the next real token.
    pub fn trivia(&mut self, text: &str) -> &mut Self {
        self.pending_trivia.push_str(text);
        self
    }

    /// Convenience wrapper: `start_node`, run `f`, `finish_node`.
    pub fn node(&mut self, kind: SyntaxKind, f: impl FnOnce(&mut TreeBuilder)) -> &mut Self {
        self.start_node(kind);
        f(self);
        self.finish_node()
    }

    pub fn finish(mut self) -> Result<SyntaxTree, TreeBuildError> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        if !self.open.is_empty() {
            return Err(TreeBuildError::UnfinishedNodes {
                open: self.open.len(),
            });
        }
        if self.tree.root.is_none() {
            return Err(TreeBuildError::EmptyTree);
        }

        if !self.pending_trivia.is_empty() {
            let trailing = std::mem::take(&mut self.pending_trivia);
            self.attach_trailing_trivia(&trailing);
        }
        if self.tree.text.len() > MAX_TREE_LEN {
            return Err(TreeBuildError::TooLarge {
                len: self.tree.text.len(),
            });
        }

        Ok(self.tree)
    }

    fn add_token(
        &mut self,
        kind: SyntaxKind,
        leading: String,
        text: &str,
        mut flags: NodeFlags,
    ) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        if !kind.is_token() {
            return self.fail(TreeBuildError::TokenKindIsNode { kind });
        }
        let Some(&parent) = self.open.last() else {
            return self.fail(TreeBuildError::TokenOutsideNode { kind });
        };

        flags |= self.enclosing_trivia_flags();

        let pos = self.tree.text.len() as u32;
        self.tree.text.push_str(&leading);
        self.tree.text.push_str(text);
        let end = self.tree.text.len() as u32;

        let data_index = self.tree.tokens.len() as u32;
        self.tree.tokens.push(TokenData {
            leading_trivia: leading,
            text: text.to_string(),
            trailing_trivia: String::new(),
        });

        let index = self.push(Node::with_data_and_flags(kind, pos, end, data_index, flags));
        self.tree.children.push(NodeList::new());
        debug_assert_eq!(self.tree.children.len(), self.tree.nodes.len());
        self.attach(parent, index);

        if !flags.contains(NodeFlags::MISSING) {
            self.last_real_token = index;
        }
        self
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.tree.nodes.len() as u32);
        self.tree.nodes.push(node);
        self.tree.extended_info.push(ExtendedNodeInfo::default());
        if !node.is_token() {
            self.tree.children.push(NodeList::new());
            if let Some(&parent) = self.open.last() {
                self.attach(parent, index);
            }
        }
        index
    }

    fn attach(&mut self, parent: NodeIndex, child: NodeIndex) {
        let Some(list) = self.tree.children.get_mut(parent.0 as usize) else {
            return;
        };
        let child_index = list.nodes.len() as u32;
        list.nodes.push(child);
        if let Some(info) = self.tree.extended_info.get_mut(child.0 as usize) {
            info.parent = parent;
            info.child_index = child_index;
        }
    }

    /// Flags of every structured trivia node currently open.
    #[inline]
    fn enclosing_trivia_flags(&self) -> NodeFlags {
        self.open_flags.last().copied().unwrap_or(NodeFlags::empty())
    }

    /// Appends trailing trivia to the last real token and stretches the full
    /// span of that token and all of its ancestors over it.
    fn attach_trailing_trivia(&mut self, trivia: &str) {
        let token = self.last_real_token;
        self.tree.text.push_str(trivia);
        let end = self.tree.text.len() as u32;

        if token.is_none() {
            // Nothing to hang it on; the root still has to cover the text.
            if let Some(root) = self.tree.nodes.get_mut(self.tree.root.0 as usize) {
                root.end = end;
            }
            return;
        }

        if let Some(data) = self
            .tree
            .get(token)
            .map(|n| n.data_index as usize)
            .and_then(|i| self.tree.tokens.get_mut(i))
        {
            data.trailing_trivia.push_str(trivia);
        }

        let mut current = token;
        while current.is_some() {
            if let Some(node) = self.tree.nodes.get_mut(current.0 as usize) {
                node.end = end;
            }
            current = self.tree.parent(current);
        }
    }

    fn fail(&mut self, error: TreeBuildError) -> &mut Self {
        if self.error.is_none() {
            self.error = Some(error);
        }
        self
    }
}

fn trivia_flags_of(kind: SyntaxKind) -> NodeFlags {
    if kind == SyntaxKind::SkippedTokensTrivia {
        NodeFlags::SKIPPED
    } else if kind.is_directive() {
        NodeFlags::IN_DIRECTIVE
    } else if kind.is_documentation_comment() {
        NodeFlags::IN_DOCUMENTATION
    } else {
        NodeFlags::empty()
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
