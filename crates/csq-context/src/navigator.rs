//! Tree navigation helpers.
//!
//! Stateless walks over an immutable `SyntaxTree`: ancestor search,
//! previous/next token, first/last token of a node, and caret-to-token
//! resolution. Nothing here caches; every call re-walks from its input.
//!
//! Directive, documentation-comment and skipped-token trivia are stored in
//! line as nodes. Token walks only step *into* such a node when the
//! `TokenFilter` asks for that category; a walk that starts inside trivia
//! sees its siblings normally.

use csq_syntax::limits::MAX_TREE_DEPTH;
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Which recovery and trivia tokens a token walk may return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenFilter {
    /// Missing tokens and other zero-width tokens (such as end of file).
    pub include_zero_width: bool,
    /// Tokens inside `SkippedTokensTrivia`.
    pub include_skipped: bool,
    /// Tokens inside preprocessor directives.
    pub include_directives: bool,
    /// Tokens inside documentation comments.
    pub include_documentation_comments: bool,
}

impl TokenFilter {
    pub const DEFAULT: TokenFilter = TokenFilter {
        include_zero_width: false,
        include_skipped: false,
        include_directives: false,
        include_documentation_comments: false,
    };

    /// Every token, trivia and recovery tokens included.
    pub const EVERYTHING: TokenFilter = TokenFilter {
        include_zero_width: true,
        include_skipped: true,
        include_directives: true,
        include_documentation_comments: true,
    };

    pub const fn with_zero_width(mut self) -> Self {
        self.include_zero_width = true;
        self
    }

    pub const fn with_skipped(mut self) -> Self {
        self.include_skipped = true;
        self
    }

    pub const fn with_directives(mut self) -> Self {
        self.include_directives = true;
        self
    }

    pub const fn with_documentation_comments(mut self) -> Self {
        self.include_documentation_comments = true;
        self
    }

    pub const fn without_zero_width(mut self) -> Self {
        self.include_zero_width = false;
        self
    }

    /// Whether a walk may descend into a child node of this kind.
    #[inline]
    fn may_enter(&self, kind: SyntaxKind) -> bool {
        if kind == SyntaxKind::SkippedTokensTrivia {
            self.include_skipped
        } else if kind.is_directive() {
            self.include_directives
        } else if kind.is_documentation_comment() {
            self.include_documentation_comments
        } else {
            true
        }
    }

    #[inline]
    fn accepts_token(&self, tree: &SyntaxTree, token: NodeIndex) -> bool {
        self.include_zero_width || tree.width(token) > 0
    }
}

// =============================================================================
// Ancestors
// =============================================================================

/// Iterator over the ancestors of an element, innermost first.
#[derive(Clone)]
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: NodeIndex,
    steps: u32,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.next.into_option()?;
        if self.steps > MAX_TREE_DEPTH {
            tracing::warn!(
                steps = self.steps,
                kind = ?self.tree.kind(current),
                "ancestor walk exceeded depth limit"
            );
            self.next = NodeIndex::NONE;
            return None;
        }
        self.steps += 1;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Ancestors of `index`, starting at its parent and ending at the root.
pub fn ancestors(tree: &SyntaxTree, index: NodeIndex) -> Ancestors<'_> {
    Ancestors {
        tree,
        next: tree.parent(index),
        steps: 0,
    }
}

/// `index` itself followed by its ancestors.
pub fn ancestors_and_self(tree: &SyntaxTree, index: NodeIndex) -> Ancestors<'_> {
    Ancestors {
        tree,
        next: index,
        steps: 0,
    }
}

/// Nearest ancestor whose kind satisfies `pred`.
pub fn get_ancestor(
    tree: &SyntaxTree,
    index: NodeIndex,
    pred: impl Fn(SyntaxKind) -> bool,
) -> Option<NodeIndex> {
    ancestors(tree, index).find(|&ancestor| pred(tree.kind(ancestor)))
}

/// Nearest ancestor of exactly `kind`.
pub fn get_ancestor_of_kind(
    tree: &SyntaxTree,
    index: NodeIndex,
    kind: SyntaxKind,
) -> Option<NodeIndex> {
    get_ancestor(tree, index, |k| k == kind)
}

#[inline]
pub fn parent_kind(tree: &SyntaxTree, index: NodeIndex) -> SyntaxKind {
    tree.kind(tree.parent(index))
}

#[inline]
pub fn is_parent_kind(tree: &SyntaxTree, index: NodeIndex, kind: SyntaxKind) -> bool {
    parent_kind(tree, index) == kind
}

#[inline]
pub fn is_parent_kind_any(tree: &SyntaxTree, index: NodeIndex, kinds: &[SyntaxKind]) -> bool {
    kinds.contains(&parent_kind(tree, index))
}

#[inline]
pub fn grandparent(tree: &SyntaxTree, index: NodeIndex) -> NodeIndex {
    tree.parent(tree.parent(index))
}

// =============================================================================
// First / last token
// =============================================================================

/// First token of `node` accepted by `filter`.
pub fn first_token(tree: &SyntaxTree, node: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if tree.is_token(current) {
            if filter.accepts_token(tree, current) {
                return Some(current);
            }
            continue;
        }
        stack.extend(
            tree.children(current)
                .iter()
                .rev()
                .filter(|&&child| may_descend(tree, child, filter)),
        );
    }
    None
}

/// Last token of `node` accepted by `filter`.
pub fn last_token(tree: &SyntaxTree, node: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if tree.is_token(current) {
            if filter.accepts_token(tree, current) {
                return Some(current);
            }
            continue;
        }
        stack.extend(
            tree.children(current)
                .iter()
                .filter(|&&child| may_descend(tree, child, filter)),
        );
    }
    None
}

/// Tokens are always visited; structured trivia nodes only when `filter`
/// allows their category.
#[inline]
fn may_descend(tree: &SyntaxTree, child: NodeIndex, filter: TokenFilter) -> bool {
    tree.is_token(child) || filter.may_enter(tree.kind(child))
}

fn first_token_in_child(tree: &SyntaxTree, child: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    if !may_descend(tree, child, filter) {
        return None;
    }
    first_token(tree, child, filter)
}

fn last_token_in_child(tree: &SyntaxTree, child: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    if !may_descend(tree, child, filter) {
        return None;
    }
    last_token(tree, child, filter)
}

/// Whether `token` is the last token of `node`, zero-width tokens included.
#[inline]
pub fn is_last_token_including_zero_width(
    tree: &SyntaxTree,
    node: NodeIndex,
    token: NodeIndex,
) -> bool {
    last_token(tree, node, TokenFilter::DEFAULT.with_zero_width()) == Some(token)
}

// =============================================================================
// Previous / next token
// =============================================================================

/// Token immediately before `token` in source order.
pub fn previous_token(tree: &SyntaxTree, token: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    let mut current = token;
    for _ in 0..=MAX_TREE_DEPTH {
        let parent = tree.parent(current);
        if parent.is_none() {
            return None;
        }
        let slot = tree.child_index(current)?;
        let siblings = tree.children(parent);
        if let Some(found) = siblings[..slot]
            .iter()
            .rev()
            .find_map(|&sibling| last_token_in_child(tree, sibling, filter))
        {
            return Some(found);
        }
        current = parent;
    }
    tracing::warn!("previous_token walk exceeded depth limit");
    None
}

/// Token immediately after `token` in source order.
pub fn next_token(tree: &SyntaxTree, token: NodeIndex, filter: TokenFilter) -> Option<NodeIndex> {
    let mut current = token;
    for _ in 0..=MAX_TREE_DEPTH {
        let parent = tree.parent(current);
        if parent.is_none() {
            return None;
        }
        let slot = tree.child_index(current)?;
        let siblings = tree.children(parent);
        if let Some(found) = siblings[slot + 1..]
            .iter()
            .find_map(|&sibling| first_token_in_child(tree, sibling, filter))
        {
            return Some(found);
        }
        current = parent;
    }
    tracing::warn!("next_token walk exceeded depth limit");
    None
}

/// Moves left past every token whose kind is in `kinds`.
///
/// Terminates because each step strictly moves left; returns `None` when
/// the start of the file is reached while still skipping.
pub fn skip_preceding_tokens(
    tree: &SyntaxTree,
    token: NodeIndex,
    kinds: &[SyntaxKind],
    filter: TokenFilter,
) -> Option<NodeIndex> {
    let mut current = token;
    while kinds.contains(&tree.kind(current)) {
        current = previous_token(tree, current, filter)?;
    }
    Some(current)
}

// =============================================================================
// Caret resolution
// =============================================================================

/// Token whose full span (trivia included) contains `position`.
///
/// A position at or past the end of the text resolves to the last token.
/// When the position falls inside trivia the filter does not allow entering,
/// the token after that trivia is returned, mirroring how such trivia is
/// attached to the following token's leading trivia.
pub fn find_token(tree: &SyntaxTree, position: u32, filter: TokenFilter) -> Option<NodeIndex> {
    let root = tree.root();
    if root.is_none() {
        return None;
    }
    let all = filter.with_zero_width();
    if position >= tree.full_span(root).end {
        return last_token(tree, root, all);
    }

    let mut current = root;
    for _ in 0..=MAX_TREE_DEPTH {
        if tree.is_token(current) {
            return Some(current);
        }
        let Some(&child) = tree
            .children(current)
            .iter()
            .find(|&&child| tree.full_span(child).contains(position))
        else {
            // Only zero-width children at this offset.
            return first_token(tree, current, all);
        };
        if !tree.is_token(child) && !filter.may_enter(tree.kind(child)) {
            return last_token(tree, child, TokenFilter::EVERYTHING)
                .and_then(|inner| next_token(tree, inner, all))
                .or_else(|| last_token(tree, root, all));
        }
        current = child;
    }
    tracing::warn!(position, "find_token descent exceeded depth limit");
    None
}

/// Token to the left of the caret.
///
/// Starts from the token containing `position` and moves left while the caret
/// sits at or before that token's first character, skipping zero-width
/// tokens on the way.
pub fn find_token_on_left_of_position(
    tree: &SyntaxTree,
    position: u32,
    filter: TokenFilter,
) -> Option<NodeIndex> {
    let mut token = find_token(tree, position, filter)?;
    let root_start = tree.full_span(tree.root()).start;
    let step = filter.without_zero_width();
    while position <= tree.span(token).start && root_start < tree.span(token).start {
        match previous_token(tree, token, step) {
            Some(previous) => token = previous,
            None => break,
        }
    }
    Some(token)
}

/// When the caret touches an identifier or keyword (the user is typing that
/// word), the token before it; otherwise `token` unchanged.
pub fn previous_token_if_touching_word(
    tree: &SyntaxTree,
    token: NodeIndex,
    position: u32,
) -> Option<NodeIndex> {
    if tree.span(token).intersects_with_position(position) && tree.kind(token).is_word() {
        previous_token(tree, token, TokenFilter::DEFAULT.with_skipped())
    } else {
        Some(token)
    }
}

#[cfg(test)]
#[path = "tests/navigator_tests.rs"]
mod tests;
