use crate::navigator::get_ancestor;
use crate::shape::operator_token;
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Where a preprocessor condition continues inside `#if`/`#elif`:
/// `#if |`, `#if A || |`, `#if A && |`, `#if ( |`, `#if ! |`.
pub fn is_pre_processor_expression_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if get_ancestor(tree, token, SyntaxKind::is_conditional_directive).is_none() {
        return false;
    }

    let parent = tree.parent(token);
    let parent_kind = tree.kind(parent);
    match tree.kind(token) {
        SyntaxKind::IfKeyword | SyntaxKind::ElifKeyword => true,
        SyntaxKind::OpenParenToken if parent_kind == SyntaxKind::ParenthesizedExpression => true,
        _ if parent_kind.is_prefix_unary_expression() || parent_kind.is_binary_expression() => {
            operator_token(tree, parent) == Some(token)
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/directives_tests.rs"]
mod tests;
