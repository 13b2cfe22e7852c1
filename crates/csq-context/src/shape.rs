//! Shape-matching helpers shared by the context rules.
//!
//! These read typed "slots" (operator token, inner expression, modifiers)
//! out of the untyped child lists by position and kind.

use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// First child node that is not structured trivia. For `( expr )`, `expr`;
/// for an ordering, its key expression. Skipped tokens the parser parked in
/// front of the slot are not the slot.
#[inline]
pub fn first_child_node(tree: &SyntaxTree, node: NodeIndex) -> Option<NodeIndex> {
    tree.child_nodes(node)
        .find(|&child| !tree.kind(child).is_structured_trivia())
}

/// Operator token of a unary or binary expression: its only direct token
/// child (operands are nodes).
#[inline]
pub fn operator_token(tree: &SyntaxTree, expression: NodeIndex) -> Option<NodeIndex> {
    tree.child_tokens(expression).next()
}

/// Modifier keywords written directly on a declaration.
pub fn modifiers(tree: &SyntaxTree, declaration: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    tree.child_tokens(declaration)
        .filter(move |&token| tree.kind(token).is_modifier_keyword())
}

#[inline]
pub fn has_modifier(tree: &SyntaxTree, declaration: NodeIndex, kind: SyntaxKind) -> bool {
    modifiers(tree, declaration).any(|token| tree.kind(token) == kind)
}

/// Token is `kind`, or an identifier spelled like `kind` (contextual
/// keywords such as `yield` are lexed as identifiers outside their
/// grammatical position).
pub fn is_kind_or_has_matching_text(tree: &SyntaxTree, token: NodeIndex, kind: SyntaxKind) -> bool {
    if tree.kind(token) == kind {
        return true;
    }
    kind.text()
        .is_some_and(|text| tree.token_text(token) == text)
}

/// Keyword of an accessor declaration (`get`, `set`, `add`, `remove`, or an
/// identifier for unknown accessors): the first direct token that is not a
/// modifier. Attribute lists are nodes and never match.
pub fn accessor_keyword(tree: &SyntaxTree, accessor: NodeIndex) -> Option<NodeIndex> {
    tree.child_tokens(accessor)
        .find(|&token| !tree.kind(token).is_modifier_keyword())
}

/// Whether `node` is the type parameter list of an interface or delegate
/// declaration, the only places variance annotations are legal.
pub fn is_generic_interface_or_delegate_type_parameter_list(
    tree: &SyntaxTree,
    node: NodeIndex,
) -> bool {
    if tree.kind(node) != SyntaxKind::TypeParameterList {
        return false;
    }
    let declaration = tree.parent(node);
    match tree.kind(declaration) {
        SyntaxKind::InterfaceDeclaration | SyntaxKind::DelegateDeclaration => {
            tree.child_of_kind(declaration, SyntaxKind::TypeParameterList) == Some(node)
        }
        _ => false,
    }
}

/// Argument nodes of an argument list and the comma tokens between them, in
/// source order (the enclosing parentheses or brackets are dropped).
pub fn arguments_with_separators(
    tree: &SyntaxTree,
    list: NodeIndex,
) -> impl Iterator<Item = NodeIndex> + '_ {
    tree.children(list).iter().copied().filter(move |&child| {
        matches!(
            tree.kind(child),
            SyntaxKind::Argument | SyntaxKind::CommaToken
        )
    })
}

/// `name:` clause of an argument, if it uses named-argument syntax.
#[inline]
pub fn name_colon(tree: &SyntaxTree, argument: NodeIndex) -> Option<NodeIndex> {
    tree.child_of_kind(argument, SyntaxKind::NameColon)
}

/// Whether the node owns an argument list whose arguments bind to a
/// method or constructor's parameters.
#[inline]
pub fn is_parameterized_call(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::InvocationExpression
            | SyntaxKind::ObjectCreationExpression
            | SyntaxKind::BaseConstructorInitializer
            | SyntaxKind::ThisConstructorInitializer
    )
}
