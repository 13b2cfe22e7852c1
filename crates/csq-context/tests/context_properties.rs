//! End-to-end context checks through the public API.
//!
//! Each test builds the parse shape of a small C# snippet, places the caret
//! where a user would be typing, and asks `ContextQuery`.

use csq_context::navigator::{TokenFilter, first_token, next_token};
use csq_context::{AccessorKind, AccessorOwner, ContextQuery, SyntaxContexts};
use csq_syntax::{NodeIndex, SyntaxKind, SyntaxTree, TreeBuilder};
use rayon::prelude::*;

fn tok(b: &mut TreeBuilder, kind: SyntaxKind) {
    b.token(kind, kind.text().unwrap_or_default());
}

fn name(b: &mut TreeBuilder, text: &str) {
    b.node(SyntaxKind::IdentifierName, |b| {
        b.token(SyntaxKind::IdentifierToken, text);
    });
}

fn empty_block(b: &mut TreeBuilder) {
    b.node(SyntaxKind::Block, |b| {
        tok(b, SyntaxKind::OpenBraceToken);
        b.trivia(" ");
        tok(b, SyntaxKind::CloseBraceToken);
    });
}

fn build(items: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    let mut b = TreeBuilder::new();
    b.node(SyntaxKind::CompilationUnit, |b| {
        items(b);
        b.token(SyntaxKind::EndOfFileToken, "");
    });
    b.finish().expect("well-formed tree")
}

/// `class C { void M() {<body> } }`
fn method(body: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    build(|b| {
        b.node(SyntaxKind::ClassDeclaration, |b| {
            tok(b, SyntaxKind::ClassKeyword);
            b.trivia(" ");
            b.token(SyntaxKind::IdentifierToken, "C");
            b.trivia(" ");
            tok(b, SyntaxKind::OpenBraceToken);
            b.trivia(" ");
            b.node(SyntaxKind::MethodDeclaration, |b| {
                b.node(SyntaxKind::PredefinedType, |b| tok(b, SyntaxKind::VoidKeyword));
                b.trivia(" ");
                b.token(SyntaxKind::IdentifierToken, "M");
                b.node(SyntaxKind::ParameterList, |b| {
                    tok(b, SyntaxKind::OpenParenToken);
                    tok(b, SyntaxKind::CloseParenToken);
                });
                b.trivia(" ");
                b.node(SyntaxKind::Block, |b| {
                    tok(b, SyntaxKind::OpenBraceToken);
                    body(b);
                    b.trivia(" ");
                    tok(b, SyntaxKind::CloseBraceToken);
                });
            });
            b.trivia(" ");
            tok(b, SyntaxKind::CloseBraceToken);
        });
    })
}

fn tokens_of_kind(tree: &SyntaxTree, kind: SyntaxKind) -> Vec<NodeIndex> {
    let mut found = Vec::new();
    let mut next = first_token(tree, tree.root(), TokenFilter::EVERYTHING);
    while let Some(token) = next {
        if tree.kind(token) == kind {
            found.push(token);
        }
        next = next_token(tree, token, TokenFilter::EVERYTHING);
    }
    found
}

/// Caret right after the `n`th token of `kind`.
fn query_after(tree: &SyntaxTree, kind: SyntaxKind, n: usize) -> ContextQuery<'_> {
    let token = tokens_of_kind(tree, kind)[n];
    let query = ContextQuery::new(tree, tree.span(token).end);
    assert_eq!(query.target_token(), Some(token));
    query
}

/// `try { } catch { }`
fn try_catch() -> SyntaxTree {
    method(|b| {
        b.trivia(" ");
        b.node(SyntaxKind::TryStatement, |b| {
            tok(b, SyntaxKind::TryKeyword);
            b.trivia(" ");
            empty_block(b);
            b.trivia(" ");
            b.node(SyntaxKind::CatchClause, |b| {
                tok(b, SyntaxKind::CatchKeyword);
                b.trivia(" ");
                empty_block(b);
            });
        });
    })
}

/// `f(<arguments>, )` with the parser's missing trailing argument.
fn call(arguments: impl FnOnce(&mut TreeBuilder)) -> SyntaxTree {
    method(|b| {
        b.trivia(" ");
        b.node(SyntaxKind::ExpressionStatement, |b| {
            b.node(SyntaxKind::InvocationExpression, |b| {
                name(b, "f");
                b.node(SyntaxKind::ArgumentList, |b| {
                    tok(b, SyntaxKind::OpenParenToken);
                    arguments(b);
                    tok(b, SyntaxKind::CommaToken);
                    b.trivia(" ");
                    b.node(SyntaxKind::Argument, |b| {
                        b.node(SyntaxKind::IdentifierName, |b| {
                            b.missing(SyntaxKind::IdentifierToken);
                        });
                    });
                    tok(b, SyntaxKind::CloseParenToken);
                });
            });
            tok(b, SyntaxKind::SemicolonToken);
        });
    })
}

#[test]
fn try_block_close_is_never_a_statement_start() {
    let tree = try_catch();
    let try_close = query_after(&tree, SyntaxKind::CloseBraceToken, 0);
    assert!(!try_close.is_beginning_of_statement_context());

    let catch_close = query_after(&tree, SyntaxKind::CloseBraceToken, 1);
    assert!(catch_close.is_beginning_of_statement_context());
}

#[test]
fn named_argument_forces_named_arguments_after_it() {
    // f(a, b: 1, |)
    let tree = call(|b| {
        b.node(SyntaxKind::Argument, |b| name(b, "a"));
        tok(b, SyntaxKind::CommaToken);
        b.trivia(" ");
        b.node(SyntaxKind::Argument, |b| {
            b.node(SyntaxKind::NameColon, |b| {
                name(b, "b");
                tok(b, SyntaxKind::ColonToken);
            });
            b.trivia(" ");
            b.node(SyntaxKind::NumericLiteralExpression, |b| {
                b.token(SyntaxKind::NumericLiteralToken, "1");
            });
        });
    });
    assert!(query_after(&tree, SyntaxKind::CommaToken, 1).is_mandatory_named_parameter_position());
    // Before the named argument nothing is forced yet.
    assert!(!query_after(&tree, SyntaxKind::CommaToken, 0).is_mandatory_named_parameter_position());

    // f(a, |)
    let tree = call(|b| {
        b.node(SyntaxKind::Argument, |b| name(b, "a"));
    });
    let query = query_after(&tree, SyntaxKind::CommaToken, 0);
    assert!(!query.is_mandatory_named_parameter_position());
    assert!(query.is_constructor_or_method_parameter_argument_context());
}

#[test]
fn preprocessor_condition_after_operator() {
    // #if A || |
    let tree = build(|b| {
        b.node(SyntaxKind::IfDirectiveTrivia, |b| {
            tok(b, SyntaxKind::HashToken);
            tok(b, SyntaxKind::IfKeyword);
            b.trivia(" ");
            b.node(SyntaxKind::LogicalOrExpression, |b| {
                name(b, "A");
                b.trivia(" ");
                tok(b, SyntaxKind::BarBarToken);
                b.node(SyntaxKind::IdentifierName, |b| {
                    b.missing(SyntaxKind::IdentifierToken);
                });
            });
            b.missing(SyntaxKind::EndOfDirectiveToken);
        });
        b.trivia(" ");
    });
    let query = ContextQuery::new(&tree, tree.text().len() as u32);
    assert!(query.is_pre_processor_expression_context());
    assert!(query.classify().contains(SyntaxContexts::PRE_PROCESSOR_EXPRESSION));
}

#[test]
fn declared_accessor_is_not_offered_again() {
    // class C { int Foo { get; |} }
    let tree = build(|b| {
        b.node(SyntaxKind::ClassDeclaration, |b| {
            tok(b, SyntaxKind::ClassKeyword);
            b.trivia(" ");
            b.token(SyntaxKind::IdentifierToken, "C");
            b.trivia(" ");
            tok(b, SyntaxKind::OpenBraceToken);
            b.trivia(" ");
            b.node(SyntaxKind::PropertyDeclaration, |b| {
                b.node(SyntaxKind::PredefinedType, |b| tok(b, SyntaxKind::IntKeyword));
                b.trivia(" ");
                b.token(SyntaxKind::IdentifierToken, "Foo");
                b.trivia(" ");
                b.node(SyntaxKind::AccessorList, |b| {
                    tok(b, SyntaxKind::OpenBraceToken);
                    b.trivia(" ");
                    b.node(SyntaxKind::GetAccessorDeclaration, |b| {
                        tok(b, SyntaxKind::GetKeyword);
                        tok(b, SyntaxKind::SemicolonToken);
                    });
                    b.trivia(" ");
                    tok(b, SyntaxKind::CloseBraceToken);
                });
            });
            b.trivia(" ");
            tok(b, SyntaxKind::CloseBraceToken);
        });
    });
    let query = query_after(&tree, SyntaxKind::SemicolonToken, 0);
    assert!(!query.is_accessor_declaration_context(AccessorOwner::Property, Some(AccessorKind::Get)));
    assert!(query.is_accessor_declaration_context(AccessorOwner::Property, Some(AccessorKind::Set)));
}

#[test]
fn switch_label_after_case_colon() {
    // switch (x) { case 1: |
    let tree = method(|b| {
        b.trivia(" ");
        b.node(SyntaxKind::SwitchStatement, |b| {
            tok(b, SyntaxKind::SwitchKeyword);
            b.trivia(" ");
            tok(b, SyntaxKind::OpenParenToken);
            name(b, "x");
            tok(b, SyntaxKind::CloseParenToken);
            b.trivia(" ");
            tok(b, SyntaxKind::OpenBraceToken);
            b.trivia(" ");
            b.node(SyntaxKind::SwitchSection, |b| {
                b.node(SyntaxKind::CaseSwitchLabel, |b| {
                    tok(b, SyntaxKind::CaseKeyword);
                    b.trivia(" ");
                    b.node(SyntaxKind::NumericLiteralExpression, |b| {
                        b.token(SyntaxKind::NumericLiteralToken, "1");
                    });
                    tok(b, SyntaxKind::ColonToken);
                });
            });
            b.missing(SyntaxKind::CloseBraceToken);
        });
    });
    assert!(query_after(&tree, SyntaxKind::ColonToken, 0).is_switch_label_context());
}

#[test]
fn classification_is_idempotent_and_structural() {
    let first = try_catch();
    let second = try_catch();
    for position in 0..=first.text().len() as u32 {
        let query = ContextQuery::new(&first, position);
        let once = query.classify();
        assert_eq!(once, query.classify());
        assert_eq!(once, ContextQuery::new(&first, position).classify());
        assert_eq!(once, ContextQuery::new(&second, position).classify());
    }
}

#[test]
fn queries_run_concurrently_over_one_tree() {
    let tree = try_catch();
    let positions: Vec<u32> = (0..=tree.text().len() as u32).collect();

    let sequential: Vec<SyntaxContexts> = positions
        .iter()
        .map(|&position| ContextQuery::new(&tree, position).classify())
        .collect();
    let parallel: Vec<SyntaxContexts> = positions
        .par_iter()
        .map(|&position| ContextQuery::new(&tree, position).classify())
        .collect();

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().any(|contexts| contexts.contains(SyntaxContexts::STATEMENT_START)));
}
