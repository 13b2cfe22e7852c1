//! Hand-built parse shapes of small C# snippets, as the C# parser lays
//! them out (recovery tokens included), and lookup helpers for tests.

use crate::navigator::{TokenFilter, first_token, next_token};
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree, TreeBuilder};

// =============================================================================
// Builders
// =============================================================================

/// `<items><eof>` as a compilation unit.
pub(crate) fn unit(items: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.node(SyntaxKind::CompilationUnit, |b| {
        items(b);
        b.token(SyntaxKind::EndOfFileToken, "");
    });
    b.finish().expect("fixture tree should be well formed")
}

/// `class C {<members> }`
pub(crate) fn in_class(members: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    unit(|b| {
        b.node(SyntaxKind::ClassDeclaration, |b| {
            b.token(SyntaxKind::ClassKeyword, "class");
            sp(b);
            b.token(SyntaxKind::IdentifierToken, "C");
            sp(b);
            b.token(SyntaxKind::OpenBraceToken, "{");
            members(b);
            sp(b);
            b.token(SyntaxKind::CloseBraceToken, "}");
        });
    })
}

/// `class C { void M() {<statements> } }`
pub(crate) fn in_method(statements: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    in_class(|b| {
        sp(b);
        b.node(SyntaxKind::MethodDeclaration, |b| {
            predefined(b, SyntaxKind::VoidKeyword);
            sp(b);
            b.token(SyntaxKind::IdentifierToken, "M");
            b.node(SyntaxKind::ParameterList, |b| {
                b.token(SyntaxKind::OpenParenToken, "(");
                b.token(SyntaxKind::CloseParenToken, ")");
            });
            sp(b);
            block(b, statements);
        });
    })
}

/// `{<statements> }`
pub(crate) fn block(b: &mut TreeBuilder, statements: impl FnOnce(&mut TreeBuilder)) {
    b.node(SyntaxKind::Block, |b| {
        b.token(SyntaxKind::OpenBraceToken, "{");
        statements(b);
        sp(b);
        b.token(SyntaxKind::CloseBraceToken, "}");
    });
}

pub(crate) fn sp(b: &mut TreeBuilder) {
    b.trivia(" ");
}

/// Punctuation or keyword with its fixed text.
pub(crate) fn tok(b: &mut TreeBuilder, kind: SyntaxKind) {
    b.token(kind, kind.text().unwrap_or_default());
}

pub(crate) fn name(b: &mut TreeBuilder, text: &str) {
    b.node(SyntaxKind::IdentifierName, |b| {
        b.token(SyntaxKind::IdentifierToken, text);
    });
}

/// Identifier the parser expected but did not find.
pub(crate) fn missing_name(b: &mut TreeBuilder) {
    b.node(SyntaxKind::IdentifierName, |b| {
        b.missing(SyntaxKind::IdentifierToken);
    });
}

pub(crate) fn number(b: &mut TreeBuilder, text: &str) {
    b.node(SyntaxKind::NumericLiteralExpression, |b| {
        b.token(SyntaxKind::NumericLiteralToken, text);
    });
}

pub(crate) fn predefined(b: &mut TreeBuilder, keyword: SyntaxKind) {
    b.node(SyntaxKind::PredefinedType, |b| tok(b, keyword));
}

/// ` x();`
pub(crate) fn call_statement(b: &mut TreeBuilder, callee: &str) {
    sp(b);
    b.node(SyntaxKind::ExpressionStatement, |b| {
        b.node(SyntaxKind::InvocationExpression, |b| {
            name(b, callee);
            b.node(SyntaxKind::ArgumentList, |b| {
                tok(b, SyntaxKind::OpenParenToken);
                tok(b, SyntaxKind::CloseParenToken);
            });
        });
        tok(b, SyntaxKind::SemicolonToken);
    });
}

// =============================================================================
// Snippets
// =============================================================================

/// `class C { void M() { try { } catch { } x(); } }`
pub(crate) fn try_catch() -> SyntaxTree {
    in_method(|b| {
        sp(b);
        b.node(SyntaxKind::TryStatement, |b| {
            tok(b, SyntaxKind::TryKeyword);
            sp(b);
            block(b, |_| {});
            sp(b);
            b.node(SyntaxKind::CatchClause, |b| {
                tok(b, SyntaxKind::CatchKeyword);
                sp(b);
                block(b, |_| {});
            });
        });
        call_statement(b, "x");
    })
}

/// `class C { void M() { f(a, b: 1, ); } }` with the parser's missing
/// argument before `)`.
pub(crate) fn call_with_named_argument() -> SyntaxTree {
    call_with_arguments(|b| {
        b.node(SyntaxKind::Argument, |b| name(b, "a"));
        tok(b, SyntaxKind::CommaToken);
        sp(b);
        b.node(SyntaxKind::Argument, |b| {
            b.node(SyntaxKind::NameColon, |b| {
                name(b, "b");
                tok(b, SyntaxKind::ColonToken);
            });
            sp(b);
            number(b, "1");
        });
        tok(b, SyntaxKind::CommaToken);
        sp(b);
        b.node(SyntaxKind::Argument, missing_name);
    })
}

/// `class C { void M() { f(a, ); } }`
pub(crate) fn call_with_positional_argument() -> SyntaxTree {
    call_with_arguments(|b| {
        b.node(SyntaxKind::Argument, |b| name(b, "a"));
        tok(b, SyntaxKind::CommaToken);
        sp(b);
        b.node(SyntaxKind::Argument, missing_name);
    })
}

fn call_with_arguments(arguments: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    in_method(|b| {
        sp(b);
        b.node(SyntaxKind::ExpressionStatement, |b| {
            b.node(SyntaxKind::InvocationExpression, |b| {
                name(b, "f");
                b.node(SyntaxKind::ArgumentList, |b| {
                    tok(b, SyntaxKind::OpenParenToken);
                    arguments(b);
                    tok(b, SyntaxKind::CloseParenToken);
                });
            });
            tok(b, SyntaxKind::SemicolonToken);
        });
    })
}

/// `#if A || ` at the end of the file.
pub(crate) fn if_directive_or() -> SyntaxTree {
    unit(|b| {
        b.node(SyntaxKind::IfDirectiveTrivia, |b| {
            tok(b, SyntaxKind::HashToken);
            tok(b, SyntaxKind::IfKeyword);
            sp(b);
            b.node(SyntaxKind::LogicalOrExpression, |b| {
                name(b, "A");
                sp(b);
                tok(b, SyntaxKind::BarBarToken);
                missing_name(b);
            });
            b.missing(SyntaxKind::EndOfDirectiveToken);
        });
        sp(b);
    })
}

/// `#if A || A || ... || A` with `operators` left-nested `||` expressions,
/// built without recursion so any depth the builder accepts can be tested.
pub(crate) fn long_if_directive_or(operators: usize) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.start_node(SyntaxKind::CompilationUnit);
    b.start_node(SyntaxKind::IfDirectiveTrivia);
    tok(&mut b, SyntaxKind::HashToken);
    tok(&mut b, SyntaxKind::IfKeyword);
    sp(&mut b);
    for _ in 0..operators {
        b.start_node(SyntaxKind::LogicalOrExpression);
    }
    name(&mut b, "A");
    for _ in 0..operators {
        sp(&mut b);
        tok(&mut b, SyntaxKind::BarBarToken);
        sp(&mut b);
        name(&mut b, "A");
        b.finish_node();
    }
    b.missing(SyntaxKind::EndOfDirectiveToken);
    b.finish_node();
    b.token(SyntaxKind::EndOfFileToken, "");
    b.finish_node();
    b.finish().expect("fixture tree should be well formed")
}

/// `class C { int Foo { get; } }`
pub(crate) fn property_with_getter() -> SyntaxTree {
    in_class(|b| {
        sp(b);
        b.node(SyntaxKind::PropertyDeclaration, |b| {
            predefined(b, SyntaxKind::IntKeyword);
            sp(b);
            b.token(SyntaxKind::IdentifierToken, "Foo");
            sp(b);
            b.node(SyntaxKind::AccessorList, |b| {
                tok(b, SyntaxKind::OpenBraceToken);
                sp(b);
                b.node(SyntaxKind::GetAccessorDeclaration, |b| {
                    tok(b, SyntaxKind::GetKeyword);
                    tok(b, SyntaxKind::SemicolonToken);
                });
                sp(b);
                tok(b, SyntaxKind::CloseBraceToken);
            });
        });
    })
}

/// `class C { void M() { switch (x) { case 1: } }` with the switch's
/// closing brace missing.
pub(crate) fn switch_open_case() -> SyntaxTree {
    in_method(|b| {
        sp(b);
        b.node(SyntaxKind::SwitchStatement, |b| {
            tok(b, SyntaxKind::SwitchKeyword);
            sp(b);
            tok(b, SyntaxKind::OpenParenToken);
            name(b, "x");
            tok(b, SyntaxKind::CloseParenToken);
            sp(b);
            tok(b, SyntaxKind::OpenBraceToken);
            sp(b);
            b.node(SyntaxKind::SwitchSection, |b| {
                b.node(SyntaxKind::CaseSwitchLabel, |b| {
                    tok(b, SyntaxKind::CaseKeyword);
                    sp(b);
                    number(b, "1");
                    tok(b, SyntaxKind::ColonToken);
                });
            });
            b.missing(SyntaxKind::CloseBraceToken);
        });
    })
}

// =============================================================================
// Lookup
// =============================================================================

/// Every token in source order, trivia and missing tokens included.
pub(crate) fn all_tokens(tree: &SyntaxTree) -> Vec<NodeIndex> {
    let mut tokens = Vec::new();
    let mut next = first_token(tree, tree.root(), TokenFilter::EVERYTHING);
    while let Some(token) = next {
        tokens.push(token);
        next = next_token(tree, token, TokenFilter::EVERYTHING);
    }
    tokens
}

/// The `n`th (zero-based) token of `kind` in source order.
pub(crate) fn nth(tree: &SyntaxTree, kind: SyntaxKind, n: usize) -> NodeIndex {
    all_tokens(tree)
        .into_iter()
        .filter(|&token| tree.kind(token) == kind)
        .nth(n)
        .unwrap_or_else(|| panic!("no {kind:?} #{n} in\n{}", tree.dump()))
}

pub(crate) fn first(tree: &SyntaxTree, kind: SyntaxKind) -> NodeIndex {
    nth(tree, kind, 0)
}

pub(crate) fn last(tree: &SyntaxTree, kind: SyntaxKind) -> NodeIndex {
    all_tokens(tree)
        .into_iter()
        .rev()
        .find(|&token| tree.kind(token) == kind)
        .unwrap_or_else(|| panic!("no {kind:?} in\n{}", tree.dump()))
}

/// First token whose text is `text`.
pub(crate) fn token_with_text(tree: &SyntaxTree, text: &str) -> NodeIndex {
    all_tokens(tree)
        .into_iter()
        .find(|&token| tree.token_text(token) == text)
        .unwrap_or_else(|| panic!("no token {text:?} in\n{}", tree.dump()))
}

/// Offset of the first occurrence of `needle` in the source.
pub(crate) fn offset_of(tree: &SyntaxTree, needle: &str) -> u32 {
    tree.text()
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in {:?}", tree.text())) as u32
}
