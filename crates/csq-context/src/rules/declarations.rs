//! Declaration contexts: accessor lists and type parameter variance.

use crate::accessor::{AccessorKind, AccessorOwner, is_existing_accessor_suppressed};
use crate::navigator::{
    TokenFilter, get_ancestor_of_kind, grandparent, is_parent_kind, parent_kind,
    skip_preceding_tokens,
};
use crate::shape::is_generic_interface_or_delegate_type_parameter_list;
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

const ACCESS_MODIFIERS: &[SyntaxKind] = &[
    SyntaxKind::InternalKeyword,
    SyntaxKind::PublicKeyword,
    SyntaxKind::ProtectedKeyword,
    SyntaxKind::PrivateKeyword,
];

/// Whether an accessor may be declared after `token` inside an accessor
/// list of an `owner` declaration.
///
/// ```text
/// int Foo { |
/// int Foo { private |
/// int Foo { set { } |
/// int Foo { set; |
/// int Foo { [Bar]|
/// ```
///
/// With a target `kind`, an accessor of that kind already declared in the
/// list rules the position out, unless `position` is on that accessor's
/// keyword.
pub fn is_accessor_declaration_context(
    tree: &SyntaxTree,
    token: NodeIndex,
    position: u32,
    owner: AccessorOwner,
    kind: Option<AccessorKind>,
) -> bool {
    if !follows_accessor_boundary(tree, token) {
        return false;
    }
    let Some(list) = get_ancestor_of_kind(tree, token, SyntaxKind::AccessorList) else {
        return false;
    };
    if let Some(kind) = kind
        && is_existing_accessor_suppressed(tree, list, kind, position)
    {
        return false;
    }
    get_ancestor_of_kind(tree, token, owner.declaration_kind()).is_some()
}

/// Shape part of the accessor rule, after stepping left over access
/// modifiers already typed for the new accessor.
fn follows_accessor_boundary(tree: &SyntaxTree, token: NodeIndex) -> bool {
    let filter = TokenFilter::DEFAULT.with_skipped();
    let Some(token) = skip_preceding_tokens(tree, token, ACCESS_MODIFIERS, filter) else {
        return false;
    };
    let parent = tree.parent(token);
    match tree.kind(token) {
        SyntaxKind::OpenBraceToken => tree.is_kind(parent, SyntaxKind::AccessorList),
        SyntaxKind::CloseBraceToken => {
            tree.is_kind(parent, SyntaxKind::Block)
                && parent_kind(tree, parent).is_accessor_declaration()
        }
        SyntaxKind::SemicolonToken => tree.kind(parent).is_accessor_declaration(),
        SyntaxKind::CloseBracketToken => {
            tree.is_kind(parent, SyntaxKind::AttributeList)
                && parent_kind(tree, parent).is_accessor_declaration()
        }
        _ => false,
    }
}

/// Where `in`/`out` may be written on a type parameter:
/// `interface I<|`, `delegate void D<A, |`, `interface I<[Attr]|`.
///
/// Variance is only legal on interface and delegate type parameters.
pub fn is_type_parameter_variance_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    let parent = tree.parent(token);
    match tree.kind(token) {
        SyntaxKind::LessThanToken | SyntaxKind::CommaToken => {
            is_generic_interface_or_delegate_type_parameter_list(tree, parent)
        }
        SyntaxKind::CloseBracketToken => {
            tree.is_kind(parent, SyntaxKind::AttributeList)
                && is_parent_kind(tree, parent, SyntaxKind::TypeParameter)
                && is_generic_interface_or_delegate_type_parameter_list(
                    tree,
                    grandparent(tree, parent),
                )
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/declarations_tests.rs"]
mod tests;
