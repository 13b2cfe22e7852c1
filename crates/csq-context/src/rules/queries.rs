//! Last-token-of-node checks and query expression contexts.

use crate::navigator::{TokenFilter, get_ancestor, last_token, previous_token};
use crate::shape::first_child_node;
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Whether `token` is the last token, zero-width tokens included, of the
/// nearest ancestor whose kind satisfies `pred`.
pub fn is_last_token_of_node(
    tree: &SyntaxTree,
    token: NodeIndex,
    pred: impl Fn(SyntaxKind) -> bool,
) -> bool {
    get_ancestor(tree, token, pred).is_some_and(|node| {
        last_token(tree, node, TokenFilter::DEFAULT.with_zero_width()) == Some(token)
    })
}

/// `is_last_token_of_node` for one exact kind.
pub fn is_last_token_of_kind(tree: &SyntaxTree, token: NodeIndex, kind: SyntaxKind) -> bool {
    is_last_token_of_node(tree, token, |k| k == kind)
}

/// End of a query clause (`from x in xs |`, `where a |`), or the identifier
/// of a continuation (`into g |`): positions where the next clause may start.
pub fn is_last_token_of_query_clause(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if is_last_token_of_node(tree, token, SyntaxKind::is_query_clause) {
        return true;
    }
    tree.kind(token) == SyntaxKind::IdentifierToken
        && previous_token(tree, token, TokenFilter::DEFAULT.with_skipped())
            .is_some_and(|previous| tree.kind(previous) == SyntaxKind::IntoKeyword)
}

/// After an ordering key, where `ascending`/`descending` may follow:
/// `orderby a |`, `orderby a, b.c |`, `orderby f(x) |`.
pub fn is_order_by_direction_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if !matches!(
        tree.kind(token),
        SyntaxKind::IdentifierToken | SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken
    ) {
        return false;
    }
    let Some(ordering) = get_ancestor(tree, token, SyntaxKind::is_ordering) else {
        return false;
    };
    first_child_node(tree, ordering)
        .and_then(|key| last_token(tree, key, TokenFilter::DEFAULT.with_skipped()))
        == Some(token)
}

#[cfg(test)]
#[path = "../tests/queries_tests.rs"]
mod tests;
