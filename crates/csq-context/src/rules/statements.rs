//! Statement-level contexts: where a statement, a global statement or a
//! switch label may start, plus `unsafe`, `yield` and using directives.

use crate::navigator::{
    TokenFilter, ancestors, get_ancestor, get_ancestor_of_kind, is_last_token_including_zero_width,
    is_parent_kind, is_parent_kind_any, last_token, parent_kind,
};
use crate::shape::{has_modifier, is_kind_or_has_matching_text};
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree};

/// `using` or `extern`, the keywords that open a directive at the top of a
/// file or namespace.
pub fn is_using_or_extern_keyword(tree: &SyntaxTree, token: NodeIndex) -> bool {
    matches!(
        tree.kind(token),
        SyntaxKind::UsingKeyword | SyntaxKind::ExternKeyword
    )
}

/// The `using` keyword of a using directive (not of a using statement).
pub fn is_using_keyword_in_using_directive(tree: &SyntaxTree, token: NodeIndex) -> bool {
    directive_keyword_is(tree, token, SyntaxKind::UsingKeyword)
}

/// The `static` keyword of `using static X;`.
pub fn is_static_keyword_in_using_directive(tree: &SyntaxTree, token: NodeIndex) -> bool {
    directive_keyword_is(tree, token, SyntaxKind::StaticKeyword)
}

fn directive_keyword_is(tree: &SyntaxTree, token: NodeIndex, keyword: SyntaxKind) -> bool {
    if tree.kind(token) != keyword {
        return false;
    }
    get_ancestor_of_kind(tree, token, SyntaxKind::UsingDirective)
        .is_some_and(|directive| tree.child_of_kind(directive, keyword) == Some(token))
}

/// Whether a statement may start right after `token`.
///
/// ```text
/// {                 |     block open brace
/// ...;              |     end of a statement
/// if (x) { }        |     block closing a statement body
/// case 0:           |     label colons
/// do                |
/// while (x)         |     header close parens
/// else              |
/// ```
///
/// `do { } |` and `try { } |` are excluded: the grammar requires `while`
/// or `catch`/`finally` there.
pub fn is_beginning_of_statement_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    let parent = tree.parent(token);
    match tree.kind(token) {
        SyntaxKind::OpenBraceToken => tree.is_kind(parent, SyntaxKind::Block),
        SyntaxKind::SemicolonToken => {
            let Some(statement) = get_ancestor(tree, token, SyntaxKind::is_statement) else {
                return false;
            };
            !is_parent_kind(tree, statement, SyntaxKind::GlobalStatement)
                && is_last_token_including_zero_width(tree, statement, token)
        }
        SyntaxKind::CloseBraceToken => match tree.kind(parent) {
            SyntaxKind::Block => {
                let owner = parent_kind(tree, parent);
                if owner.is_statement() {
                    !matches!(owner, SyntaxKind::TryStatement | SyntaxKind::DoStatement)
                } else {
                    matches!(
                        owner,
                        SyntaxKind::ElseClause
                            | SyntaxKind::FinallyClause
                            | SyntaxKind::CatchClause
                            | SyntaxKind::SwitchSection
                    )
                }
            }
            SyntaxKind::SwitchStatement => true,
            _ => false,
        },
        SyntaxKind::ColonToken => is_parent_kind_any(
            tree,
            token,
            &[
                SyntaxKind::CaseSwitchLabel,
                SyntaxKind::DefaultSwitchLabel,
                SyntaxKind::LabeledStatement,
            ],
        ),
        SyntaxKind::DoKeyword => tree.is_kind(parent, SyntaxKind::DoStatement),
        SyntaxKind::CloseParenToken => is_parent_kind_any(
            tree,
            token,
            &[
                SyntaxKind::ForStatement,
                SyntaxKind::ForEachStatement,
                SyntaxKind::WhileStatement,
                SyntaxKind::IfStatement,
                SyntaxKind::LockStatement,
                SyntaxKind::UsingStatement,
            ],
        ),
        SyntaxKind::ElseKeyword => true,
        _ => false,
    }
}

/// Whether a top-level statement may start right after `token`: after a
/// top-level member or global statement, after the last using or extern
/// alias directive, or after the last assembly attribute list.
pub fn is_beginning_of_global_statement_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    match tree.kind(token) {
        SyntaxKind::CloseBraceToken => ends_top_level_member(tree, token),
        SyntaxKind::SemicolonToken => {
            if get_ancestor_of_kind(tree, token, SyntaxKind::GlobalStatement)
                .is_some_and(|statement| is_last_token_including_zero_width(tree, statement, token))
            {
                return true;
            }
            if ends_top_level_member(tree, token) {
                return true;
            }
            ends_last_compilation_unit_child(tree, token, SyntaxKind::UsingDirective)
                || ends_last_compilation_unit_child(tree, token, SyntaxKind::ExternAliasDirective)
        }
        SyntaxKind::CloseBracketToken => {
            ends_last_compilation_unit_child(tree, token, SyntaxKind::AttributeList)
        }
        _ => false,
    }
}

fn ends_top_level_member(tree: &SyntaxTree, token: NodeIndex) -> bool {
    get_ancestor(tree, token, SyntaxKind::is_member_declaration).is_some_and(|member| {
        is_last_token_including_zero_width(tree, member, token)
            && is_parent_kind(tree, member, SyntaxKind::CompilationUnit)
    })
}

/// `token` is the last token of the compilation unit's last direct child of
/// `kind`.
fn ends_last_compilation_unit_child(tree: &SyntaxTree, token: NodeIndex, kind: SyntaxKind) -> bool {
    get_ancestor_of_kind(tree, token, SyntaxKind::CompilationUnit)
        .and_then(|unit| tree.last_child_of_kind(unit, kind))
        .is_some_and(|last| is_last_token_including_zero_width(tree, last, token))
}

/// Whether a `case`/`default` label may start after `token`.
pub fn is_switch_label_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    match tree.kind(token) {
        SyntaxKind::OpenBraceToken => is_parent_kind(tree, token, SyntaxKind::SwitchStatement),
        SyntaxKind::ColonToken => is_parent_kind_any(
            tree,
            token,
            &[SyntaxKind::CaseSwitchLabel, SyntaxKind::DefaultSwitchLabel],
        ),
        SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken => {
            let Some(section) = get_ancestor_of_kind(tree, token, SyntaxKind::SwitchSection) else {
                return false;
            };
            let filter = TokenFilter::DEFAULT.with_skipped();
            tree.child_nodes(section)
                .filter(|&child| tree.kind(child).is_statement())
                .any(|statement| last_token(tree, statement, filter) == Some(token))
        }
        _ => false,
    }
}

/// Inside an `unsafe { }` block or a member declared `unsafe`.
pub fn is_unsafe_context(tree: &SyntaxTree, token: NodeIndex) -> bool {
    ancestors(tree, token).any(|ancestor| {
        let kind = tree.kind(ancestor);
        kind == SyntaxKind::UnsafeStatement
            || (kind.is_member_declaration()
                && has_modifier(tree, ancestor, SyntaxKind::UnsafeKeyword))
    })
}

/// `yield |` and `yield r|`. Outside an iterator `yield` lexes as an
/// identifier, so its text is checked as well.
pub fn is_after_yield_keyword(tree: &SyntaxTree, token: NodeIndex) -> bool {
    is_kind_or_has_matching_text(tree, token, SyntaxKind::YieldKeyword)
}

#[cfg(test)]
#[path = "../tests/statements_tests.rs"]
mod tests;
