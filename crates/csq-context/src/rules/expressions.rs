//! Expression-level contexts: casts, argument lists, user-defined operator
//! declarations and cref parameter lists.

use crate::navigator::{TokenFilter, is_parent_kind_any, parent_kind, previous_token};
use crate::rules::queries::is_last_token_of_node;
use crate::shape::{
    arguments_with_separators, first_child_node, is_parameterized_call, name_colon,
};
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// Closing paren of a cast, or of a parenthesized expression whose content
/// is shaped like a type.
///
/// Purely syntactic: `(a) b` and `(A)(B)` both count as casts even when `a`
/// names a variable.
pub fn is_after_possible_cast(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if tree.kind(token) != SyntaxKind::CloseParenToken {
        return false;
    }
    let parent = tree.parent(token);
    match tree.kind(parent) {
        SyntaxKind::CastExpression => true,
        SyntaxKind::ParenthesizedExpression => {
            first_child_node(tree, parent).is_some_and(|inner| tree.kind(inner).is_type())
        }
        _ => false,
    }
}

/// Start of an argument that binds to a method or constructor parameter.
///
/// ```text
/// Foo( |        new Foo( |        : base( |
/// Foo(a, |      new Foo(a, |      : this(a, |
/// Foo(bar: |    new Foo(bar: |    : base(bar: |
/// ```
pub fn is_constructor_or_method_parameter_argument_context(
    tree: &SyntaxTree,
    token: NodeIndex,
) -> bool {
    let parent = tree.parent(token);
    match tree.kind(token) {
        SyntaxKind::ColonToken => {
            if !tree.is_kind(parent, SyntaxKind::NameColon) {
                return false;
            }
            let argument = tree.parent(parent);
            let list = tree.parent(argument);
            tree.is_kind(argument, SyntaxKind::Argument)
                && tree.is_kind(list, SyntaxKind::ArgumentList)
                && is_parameterized_call(parent_kind(tree, list))
        }
        SyntaxKind::OpenParenToken | SyntaxKind::CommaToken => {
            tree.is_kind(parent, SyntaxKind::ArgumentList)
                && is_parameterized_call(parent_kind(tree, parent))
        }
        _ => false,
    }
}

/// Whether the argument after the comma `token` must use `name:` syntax,
/// which is the case once an earlier argument of the same list was named.
pub fn is_mandatory_named_parameter_position(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if tree.kind(token) != SyntaxKind::CommaToken {
        return false;
    }
    let list = tree.parent(token);
    if !tree.kind(list).is_argument_list() {
        return false;
    }
    for item in arguments_with_separators(tree, list) {
        if item == token {
            return false;
        }
        if tree.kind(item) == SyntaxKind::Argument && name_colon(tree, item).is_some() {
            return true;
        }
    }
    false
}

/// `operator` keyword of a unary or binary operator declaration, right after
/// its return type: `public static T operator |`.
pub fn is_unary_operator_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    if tree.kind(token) != SyntaxKind::OperatorKeyword {
        return false;
    }
    previous_token(tree, token, TokenFilter::DEFAULT.with_skipped())
        .is_some_and(|previous| is_last_token_of_node(tree, previous, SyntaxKind::is_type))
}

/// Where `ref`/`out` may follow inside a cref parameter list:
/// `<see cref="M(|"/>` and `<see cref="M(int, |"/>`.
pub fn is_xml_cref_parameter_modifier_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    matches!(
        tree.kind(token),
        SyntaxKind::CommaToken | SyntaxKind::OpenParenToken
    ) && is_parent_kind_any(
        tree,
        token,
        &[
            SyntaxKind::CrefParameterList,
            SyntaxKind::CrefBracketedParameterList,
        ],
    )
}

#[cfg(test)]
#[path = "../tests/expressions_tests.rs"]
mod tests;
